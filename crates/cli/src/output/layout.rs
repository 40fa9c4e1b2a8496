//! Plain-text layout: word wrapping, headers and alert boxes.
//!
//! Widths are counted in characters, and ANSI escapes are not accounted for,
//! so colorize after laying out.

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Splits an overlong word into chunks of at most `width` characters.
fn split_word(word: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

/// Word wraps `text` to lines of at most `width` characters.
///
/// Existing line breaks are kept. Words longer than `width` are broken. A
/// width of zero disables wrapping.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.lines().map(ToString::to_string).collect();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let pieces = if char_len(word) > width {
                split_word(word, width)
            } else {
                vec![word.to_string()]
            };

            for piece in pieces {
                if line.is_empty() {
                    line = piece;
                } else if char_len(&line) + 1 + char_len(&piece) <= width {
                    line.push(' ');
                    line.push_str(&piece);
                } else {
                    lines.push(std::mem::replace(&mut line, piece));
                }
            }
        }
        lines.push(line);
    }
    lines
}

/// Indents each wrapped line of `text`, keeping the total within `width`.
#[must_use]
pub fn write_lines(text: &str, width: usize, indent: &str) -> String {
    let available = width.saturating_sub(char_len(indent));
    wrap(text, if width == 0 { 0 } else { available.max(1) })
        .into_iter()
        .map(|line| format!("{indent}{line}\n"))
        .collect()
}

/// A title followed by an underline of `underline` characters.
#[must_use]
pub fn header(text: &str, underline: char, width: usize) -> String {
    let lines = wrap(text, width);
    let longest = lines.iter().map(|l| char_len(l)).max().unwrap_or(0);
    let mut out: String = lines.into_iter().map(|line| line + "\n").collect();
    out.push_str(&underline.to_string().repeat(longest));
    out.push('\n');
    out
}

/// `text` in a box `width` characters wide, with `padding` spaces inside the
/// borders.
#[must_use]
pub fn alert(text: &str, width: usize, padding: usize) -> String {
    let inner = width.saturating_sub(2 + 2 * padding).max(1);
    let span = inner + 2 * padding;
    let pad = " ".repeat(padding);

    let mut out = format!("┌{}┐\n", "─".repeat(span));
    for line in wrap(text, inner) {
        let fill = " ".repeat(inner - char_len(&line));
        out.push_str(&format!("│{pad}{line}{fill}{pad}│\n"));
    }
    out.push_str(&format!("└{}┘\n", "─".repeat(span)));
    out
}
