//! Terminal prompts.

use std::io::{BufRead, Write};

use zeroize::Zeroizing;

/// Prompt for the password with echo suppressed.
pub fn prompt_password(message: &str) -> std::io::Result<Zeroizing<String>> {
    rpassword::prompt_password(message).map(Zeroizing::new)
}

/// Print `message`, then read one line. Returns `None` on end of input.
///
/// Only the trailing line terminator is removed; other whitespace is kept
/// since it may be part of a file name.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
