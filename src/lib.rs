pub mod cs;

pub use cs::{ecc, error};
pub use cs::error::{Error, Result};
