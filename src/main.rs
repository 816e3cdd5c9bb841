//! filecrypt entry point.
//!
//! Loads optional configuration, initialises logging, asks for the password
//! once and hands the derived key to the interactive session.

mod cli_parser;

use std::process::ExitCode;

use cli_parser::Invocation;
use filecrypt::cli::prompt::prompt_password;
use filecrypt::cli::Session;
use filecrypt::{telemetry, Config};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    match cli_parser::parse_args(&args) {
        Ok(Invocation::Help) => {
            cli_parser::print_usage();
            ExitCode::SUCCESS
        }
        Ok(Invocation::Version) => {
            println!("filecrypt {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Ok(Invocation::Interactive { config }) => run_interactive(config),
        Err(e) => {
            eprintln!("{}", e);
            cli_parser::print_usage();
            ExitCode::FAILURE
        }
    }
}

fn run_interactive(config_path: Option<std::path::PathBuf>) -> ExitCode {
    let config = match config_path {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    if let Err(e) = telemetry::init(&config.log_level, config.log_format) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let deriver = match config.kdf.build_deriver() {
        Ok(deriver) => deriver,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let password = match prompt_password("Enter your password: ") {
        Ok(password) => password,
        Err(e) => {
            eprintln!("Failed to read password: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let key = deriver.derive(&password);
    drop(password);
    tracing::info!(kdf = deriver.name(), "key derived");

    let codec = config.file_codec();
    let stdin = std::io::stdin();
    let mut session = Session::new(stdin.lock(), std::io::stdout(), &key, &codec);
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Terminal error: {}", e);
            ExitCode::FAILURE
        }
    }
}
