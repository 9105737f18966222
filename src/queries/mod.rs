//! Query modules for the launchpad SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes async methods
//! returning typed `Result<T>` payloads.

pub mod tokens;

pub use tokens::{TokenListParams, TokenQuery};
