use std::io::{Write, stdin, stdout};

/// Writes `prompt` to stdout without a trailing newline and reads one line
/// from stdin.
///
/// The prompt has to be visible before the user types, hence the explicit
/// flush. The returned line keeps its trailing newline; the domain parsers
/// trim it.
pub fn read_line(prompt: &str) -> std::io::Result<String> {
    let mut out = stdout().lock();
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    stdin().read_line(&mut line)?;
    Ok(line)
}
