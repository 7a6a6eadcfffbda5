use std::io::{self, BufRead, Write};

/// Prints `text` and reads one line, without the trailing newline.
/// Invalid UTF-8 is replaced rather than rejected. End of input is reported
/// as `UnexpectedEof`.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<String> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(String::from_utf8_lossy(&line).trim().to_string())
}

/// Asks until the answer parses as an integer. An empty answer returns
/// `default` when one is given.
pub fn prompt_int<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
    default: Option<i64>,
) -> io::Result<i64> {
    loop {
        let answer = prompt_line(input, out, text)?;
        if answer.is_empty() {
            if let Some(default) = default {
                return Ok(default);
            }
        }
        match answer.parse::<i64>() {
            Ok(n) => return Ok(n),
            Err(_) => writeln!(out, "Please enter a valid integer.")?,
        }
    }
}
