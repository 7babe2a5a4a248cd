//! Shared protocol crate for the seance terminal client.
//!
//! This crate contains:
//! - The JSON wire envelope and the two message kind registries
//! - Typed payloads for authority pushes and terminal commands
//! - The display descriptor consumed by the renderer

mod envelope;
mod error;
pub mod display;
pub mod messages;

pub use envelope::{ClientKind, Envelope, ServerKind};
pub use error::ProtocolError;
pub use messages::{ClientCommand, Role, ServerMessage};
