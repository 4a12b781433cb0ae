//! Gutendex API model types.

mod api_error;
mod book;

pub use api_error::*;
pub use book::*;
