//! HTTP request handlers for the mock server.

pub mod books;

pub use books::*;
