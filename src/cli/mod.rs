//! Interactive command-line surface.

pub mod prompt;
pub mod session;

pub use session::{dispatch, Command, Outcome, Session};
