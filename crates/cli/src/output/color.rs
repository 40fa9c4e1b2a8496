use crossterm::style::{Attribute, Color, ContentStyle};
use termbind_core::error::{Error, Result};

/// Resolves a color name such as `red` or `darkblue`.
///
/// # Errors
///
/// Returns [`Error::UnknownColorName`] for names crossterm has no color for.
pub fn parse_color_name(name: &str) -> Result<Color> {
    Ok(match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "darkgrey" => Color::DarkGrey,
        "red" => Color::Red,
        "darkred" => Color::DarkRed,
        "green" => Color::Green,
        "darkgreen" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "darkyellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "darkblue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "darkmagenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "darkcyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" => Color::Grey,
        "reset" | "normal" => Color::Reset,
        _ => return Err(Error::UnknownColorName(name.to_string())),
    })
}

fn styled(text: &str, style: ContentStyle, raw: bool) -> String {
    if raw {
        return text.to_string();
    }
    style.apply(text).to_string()
}

/// Wraps `text` in ANSI color escapes followed by a reset.
///
/// With `raw` set, or no colors given, the text is returned untouched.
#[must_use]
pub fn colorize(text: &str, fg: Option<Color>, bg: Option<Color>, raw: bool) -> String {
    if fg.is_none() && bg.is_none() {
        return text.to_string();
    }
    let mut style = ContentStyle::new();
    style.foreground_color = fg;
    style.background_color = bg;
    styled(text, style, raw)
}

#[must_use]
pub fn bold(text: &str, raw: bool) -> String {
    let mut style = ContentStyle::new();
    style.attributes.set(Attribute::Bold);
    styled(text, style, raw)
}
