//! Interactive collection of missing run inputs

use std::io::{BufRead, Write};

/// Print `label`, read one line, return it trimmed. EOF yields an empty string.
pub fn ask<R: BufRead, W: Write>(
    label: &str,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<String> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Use `given` if present, otherwise ask on stdin unless prompting is disabled
pub fn value_or_ask(
    given: Option<&str>,
    label: &str,
    interactive: bool,
) -> std::io::Result<String> {
    match given {
        Some(value) => Ok(value.trim().to_string()),
        None if interactive => {
            let stdin = std::io::stdin();
            let mut stderr = std::io::stderr();
            ask(label, &mut stdin.lock(), &mut stderr)
        }
        None => Ok(String::new()),
    }
}
