//! Error type shared by the library and the binary.

use std::path::PathBuf;

/// Everything that can go wrong while resolving subnets or saving a report.
#[derive(Debug, thiserror::Error)]
pub enum SubnetError {
    #[error("invalid IPv4 address in '{input}'")]
    InvalidAddress { input: String },

    #[error("invalid prefix length in '{input}': {reason}")]
    InvalidPrefix { input: String, reason: &'static str },

    #[error("invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: &'static str },

    #[error("invalid config value {key}='{value}'")]
    InvalidConfig { key: &'static str, value: String },

    #[error("failed to save report to {}: {source}", path.display())]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SubnetError {
    /// Process exit code used by the binary for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            SubnetError::PersistenceFailure { .. } => 4,
            _ => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = SubnetError::InvalidAddress {
            input: "999.1.1.1".to_string(),
        };
        assert_eq!(e.to_string(), "invalid IPv4 address in '999.1.1.1'");

        let e = SubnetError::InvalidPrefix {
            input: "10.0.0.0/33".to_string(),
            reason: "must be 0-32",
        };
        assert_eq!(
            e.to_string(),
            "invalid prefix length in '10.0.0.0/33': must be 0-32"
        );
    }

    #[test]
    fn test_exit_codes() {
        let e = SubnetError::PersistenceFailure {
            path: PathBuf::from("/nope/out.csv"),
            source: std::io::Error::other("denied"),
        };
        assert_eq!(e.exit_code(), 4);
        assert!(e.to_string().contains("/nope/out.csv"));

        let e = SubnetError::InvalidInput {
            input: "10.0.0.0".to_string(),
            reason: "missing '/'",
        };
        assert_eq!(e.exit_code(), 3);
    }
}
