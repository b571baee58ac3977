use std::io::{self, Write};

use crate::error::CliError;

/// Parses `<count> <e0> <e1> ...` separated by any whitespace.
///
/// Tokens past the declared count are ignored.
pub fn parse_input(text: &str) -> Result<Vec<i32>, CliError> {
    let mut tokens = text.split_whitespace();

    let size = tokens
        .next()
        .and_then(|token| token.parse::<usize>().ok())
        .filter(|&size| size > 0)
        .ok_or(CliError::InvalidArraySize)?;

    let mut data = Vec::with_capacity(size);
    for index in 0..size {
        let value = tokens
            .next()
            .and_then(parse_int)
            .ok_or(CliError::InvalidElement { index })?;
        data.push(value);
    }
    Ok(data)
}

/// Signed integer with an optional `0x` (hex) or leading `0` (octal) prefix.
/// Values outside the `i32` range are rejected.
pub fn parse_int(token: &str) -> Option<i32> {
    let (negative, rest) = match token.as_bytes().first()? {
        b'-' => (true, &token[1..]),
        b'+' => (false, &token[1..]),
        _ => (false, token),
    };

    let (radix, digits) = if let Some(hex) = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
    {
        (16, hex)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (8, &rest[1..])
    } else {
        (10, rest)
    };

    // from_str_radix would accept a second sign.
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    i32::try_from(if negative { -magnitude } else { magnitude }).ok()
}

/// Writes every element followed by a single space, then a newline.
pub fn write_output<W: Write>(mut out: W, data: &[i32]) -> io::Result<()> {
    for value in data {
        write!(out, "{value} ")?;
    }
    writeln!(out)?;
    out.flush()
}
