use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use termbind_core::error::Result;

/// Clears the terminal and moves the cursor to the top left corner.
///
/// # Errors
///
/// Returns an error if writing or flushing fails.
pub fn clear(writer: &mut impl Write) -> Result<()> {
    queue!(writer, Clear(ClearType::All), MoveTo(0, 0))?;
    writer.flush()?;
    Ok(())
}
