//! Faultline HTTP - the REST boundary of the error taxonomy
//!
//! Turns taxonomy errors into REST-API-shaped responses:
//!
//! - [`HttpError`]: error kind carrying an HTTP status, link metadata, a
//!   source pointer, and a single cause
//! - [`ApiError`]: the wire-format error object sent to clients
//! - [`HttpCode`] and [`reason_phrase`]: status table with canonical
//!   reason phrases
//! - [`helpers`]: shortcut constructors, one per commonly raised status

pub mod codes;
pub mod error;
pub mod helpers;

pub use codes::{reason_phrase, HttpCode};
pub use error::{ApiError, ApiSource, HttpError};
