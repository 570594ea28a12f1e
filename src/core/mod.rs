//! Core components of the `bingo-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The signed transport [`BingClient`] and its builder.
//! - The primary [`BingError`] type.
//! - Query building and serde helpers shared by the API groups.

/// The signed transport (`BingClient`), builder, and configuration.
pub mod client;
/// The primary error type (`BingError`) for the crate.
pub mod error;
pub(crate) mod net;
pub(crate) mod params;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

// convenient re-exports so most code can just `use crate::core::BingClient`
pub use client::{BingClient, BingClientBuilder};
pub use error::{BingError, ErrorKind};
