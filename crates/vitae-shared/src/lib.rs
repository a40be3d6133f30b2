//! # Vitae Shared
//!
//! Wire types shared by the server and its clients: request payloads and the
//! error body.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
