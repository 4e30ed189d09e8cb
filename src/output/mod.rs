//! Output formatting for the command-line front end.

pub mod reporter;

pub use reporter::{Reporter, use_color};
