use clap::Parser;
use colored::Colorize;
use ipv4_subnet_tree::cli::Args;
use ipv4_subnet_tree::config::Config;
use ipv4_subnet_tree::output::about;
use ipv4_subnet_tree::{subnet_and_save, SubnetError};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::process::ExitCode;

fn init_logging() {
    if log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
        return;
    }
    // No log4rs.yml in the working directory: warnings and errors to stderr.
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    if let Ok(config) = config {
        log4rs::init_config(config).ok();
    }
}

fn run(args: &Args) -> Result<(), SubnetError> {
    let config = Config::from_env()?;
    let output = args.output_or(&config.default_output);

    let resolution = subnet_and_save(&args.networks(), &output, &config)?;
    log::info!(
        "# End main() {} network(s), {} subnets",
        resolution.len(),
        resolution.record_count()
    );
    println!("Save to file {}", output.display().to_string().green());
    Ok(())
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging();
    log::info!("#Start main()");

    println!("{}", about());

    // Usage problems are reported before any configuration is read.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e {
                SubnetError::PersistenceFailure { path, .. } => {
                    println!("{} to save to file {}", "FAILED".on_red(), path.display());
                }
                _ => println!("{} {}", "ERROR".on_red(), e),
            }
            log::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
