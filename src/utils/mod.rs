//! Various utility modules.

pub mod base64;
