//! Terminal presentation helpers.

pub mod color;
pub mod layout;
pub mod prompt;
pub mod response;
pub mod screen;
