use std::io::Write;

use termbind_core::error::Result;

/// Buffered console output, written in one go by [`Response::send`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    body: Option<String>,
}

impl Response {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }

    pub fn set_body(&mut self, body: impl Into<String>) -> &mut Self {
        self.body = Some(body.into());
        self
    }

    pub fn append(&mut self, text: &str) -> &mut Self {
        self.body.get_or_insert_with(String::new).push_str(text);
        self
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn reset(&mut self) -> &mut Self {
        self.body = None;
        self
    }

    /// Writes the body to `writer` and clears it.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or flushing fails.
    pub fn send(&mut self, writer: &mut impl Write) -> Result<()> {
        if let Some(body) = self.body.take() {
            writer.write_all(body.as_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }
}
