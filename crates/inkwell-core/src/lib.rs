//! Shared pieces for the Inkwell handler crates

mod error;

pub use error::{ErrorBody, HttpError};
