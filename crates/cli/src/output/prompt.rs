use std::io::{BufRead, ErrorKind, Write};

use termbind_core::error::Result;

/// Asks `text` until the answer is one of `options`.
///
/// Without options any non-empty answer is accepted. Answers are compared
/// lowercased unless `case_sensitive` is set, and the lowercased form is what
/// gets returned.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if input ends before an
/// acceptable answer is given.
pub fn prompt(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    text: &str,
    options: Option<&[&str]>,
    case_sensitive: bool,
) -> Result<String> {
    loop {
        write!(writer, "{text}")?;
        writer.flush()?;

        let mut input = String::new();
        if reader.read_line(&mut input)? == 0 {
            return Err(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "input ended before an answer was given",
            )
            .into());
        }

        let mut answer = input.trim_end().to_string();
        if !case_sensitive {
            answer = answer.to_lowercase();
        }

        let accepted = match options {
            Some(options) => options.iter().any(|option| {
                if case_sensitive {
                    *option == answer
                } else {
                    option.to_lowercase() == answer
                }
            }),
            None => !answer.is_empty(),
        };

        if accepted {
            return Ok(answer);
        }
    }
}
