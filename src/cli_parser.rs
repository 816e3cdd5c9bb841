//! CLI argument parsing and help text for filecrypt.

use std::path::PathBuf;

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Run the interactive loop, optionally with a config file.
    Interactive { config: Option<PathBuf> },
    Help,
    Version,
}

/// Parse `args` (including the program name at index 0).
pub fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut config = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "help" | "--help" | "-h" => return Ok(Invocation::Help),
            "version" | "--version" | "-V" => return Ok(Invocation::Version),
            "--config" => {
                if i + 1 < args.len() {
                    config = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    return Err("Missing value for --config".to_string());
                }
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(Invocation::Interactive { config })
}

/// Print general usage information.
pub fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        "filecrypt - password-based file encryption v{}

USAGE:
    filecrypt [--config FILE]
    filecrypt help | version

Prompts once for a password (not echoed), then repeatedly for:
    e   encrypt a file      foo.txt     -> foo.txt.enc
    d   decrypt a file      foo.txt.enc -> foo.txt
    q   quit

OPTIONS:
    --config FILE  Load settings from a TOML file
    -h, --help     Show this help message
    -V, --version  Show version information

CONFIG FILE:
    suffix        = \".enc\"     # appended on encrypt, stripped by length on decrypt
    atomic_writes = false      # write via temp file + rename
    log_level     = \"warn\"
    log_format    = \"text\"     # or \"json\"

    [kdf]
    scheme     = \"legacy\"      # or \"pbkdf2\" (files are not interchangeable)
    salt       = \"<hex>\"       # >= 16 bytes, pbkdf2 only
    iterations = 600000

ENVIRONMENT:
    RUST_LOG       Log filter, overrides log_level (logs go to stderr)

EXIT CODES:
    0  Session ended normally
    1  Startup failure (bad arguments, config, or terminal)
",
        version
    );
}
