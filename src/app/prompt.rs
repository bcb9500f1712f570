//! Interactive domain prompt.

use std::io::{self, BufRead, Write};

/// Prompt shown before reading the domain.
pub const DOMAIN_PROMPT: &str = "Enter a domain name: ";

/// Prompts on `out` and reads one domain from `input`.
///
/// Surrounding whitespace is removed. Returns `None` on end of input or an
/// empty answer; the domain is otherwise passed through unvalidated.
pub fn read_domain<R: BufRead, W: Write>(mut input: R, out: &mut W) -> io::Result<Option<String>> {
    write!(out, "{DOMAIN_PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let domain = line.trim();
    if domain.is_empty() {
        Ok(None)
    } else {
        Ok(Some(domain.to_string()))
    }
}
