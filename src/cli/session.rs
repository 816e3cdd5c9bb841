//! Menu loop: encrypt, decrypt or quit against one derived key.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::prompt::read_line;
use crate::crypto::codec::FileCodec;
use crate::crypto::key::Key;
use crate::error::CryptError;

pub const CHOICE_PROMPT: &str = "Enter 'e' to encrypt, 'd' to decrypt, or 'q' to quit: ";
pub const ENCRYPT_PATH_PROMPT: &str = "Enter the path of the file to encrypt: ";
pub const DECRYPT_PATH_PROMPT: &str = "Enter the path of the file to decrypt: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// One menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Encrypt,
    Decrypt,
    Quit,
}

impl Command {
    /// Parse a menu choice. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "e" => Some(Command::Encrypt),
            "d" => Some(Command::Decrypt),
            "q" => Some(Command::Quit),
            _ => None,
        }
    }

    fn path_prompt(&self) -> Option<&'static str> {
        match self {
            Command::Encrypt => Some(ENCRYPT_PATH_PROMPT),
            Command::Decrypt => Some(DECRYPT_PATH_PROMPT),
            Command::Quit => None,
        }
    }
}

/// Result of a dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Encrypted(PathBuf),
    Decrypted(PathBuf),
    Quit,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Encrypted(p) => write!(f, "File encrypted and saved as {}", p.display()),
            Outcome::Decrypted(p) => write!(f, "File decrypted and saved as {}", p.display()),
            Outcome::Quit => write!(f, "Goodbye."),
        }
    }
}

/// Run one command against `path` with `key`.
pub fn dispatch(command: Command, path: &str, key: &Key, codec: &FileCodec) -> Result<Outcome, CryptError> {
    match command {
        Command::Encrypt => codec.encrypt_file(path, key).map(Outcome::Encrypted),
        Command::Decrypt => codec.decrypt_file(path, key).map(Outcome::Decrypted),
        Command::Quit => Ok(Outcome::Quit),
    }
}

/// Interactive loop holding the key for the lifetime of the process.
pub struct Session<'a, R, W> {
    input: R,
    output: W,
    key: &'a Key,
    codec: &'a FileCodec,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, output: W, key: &'a Key, codec: &'a FileCodec) -> Self {
        Self { input, output, key, codec }
    }

    /// Loop until the user quits or input ends.
    ///
    /// Operation errors are printed and the loop continues; only failures to
    /// talk to the terminal itself are returned.
    pub fn run(&mut self) -> std::io::Result<()> {
        loop {
            let choice = match read_line(&mut self.input, &mut self.output, CHOICE_PROMPT)? {
                Some(choice) => choice,
                None => break,
            };

            let command = match Command::parse(&choice) {
                Some(command) => command,
                None => {
                    writeln!(self.output, "{}", INVALID_CHOICE)?;
                    continue;
                }
            };

            let prompt = match command.path_prompt() {
                Some(prompt) => prompt,
                None => {
                    writeln!(self.output, "{}", Outcome::Quit)?;
                    break;
                }
            };

            let path = match read_line(&mut self.input, &mut self.output, prompt)? {
                Some(path) => path,
                None => break,
            };

            match dispatch(command, &path, self.key, self.codec) {
                Ok(outcome) => writeln!(self.output, "{}", outcome)?,
                Err(e) => {
                    tracing::debug!(error = %e, ?command, "operation failed");
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
        }

        tracing::debug!("session ended");
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
