//! Terminal client for seance.
//!
//! This crate keeps one device in lockstep with the game authority
//! and turns the pushed display descriptor into pixels: a connection
//! state machine over a pluggable transport, a dispatcher routing
//! typed pushes into state slices, countdown and notification
//! bookkeeping, and a 256x64 monochrome renderer emulating the
//! physical terminal's OLED.

pub mod anim; // Frame loop ownership for pulsing styles
pub mod clock; // Countdown derivation from absolute deadlines
pub mod config; // seance.toml plus local prefs
pub mod connection; // Link state machine over a pluggable transport
pub mod dispatch; // Routing of authority pushes into the store
pub mod notify; // Transient notifications with per-entry TTL
pub mod render; // Monochrome surface, fonts, glyphs, icons
pub mod runtime; // Single-task composition of all of the above
pub mod store; // Client-side state slices

pub use runtime::{ClientHandle, ClientView};
