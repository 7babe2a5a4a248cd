//! Typed payloads for both wire directions.
//!
//! This module contains both authority->client and client->authority
//! message types. Everything decodes from and encodes to [`Envelope`]
//! payload objects.
//!
//! [`Envelope`]: crate::Envelope

mod client;
mod server;

pub use client::*;
pub use server::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a connected device is to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A player terminal (buttons, dial, one OLED).
    #[default]
    Player,
    /// The host console.
    Host,
    /// The shared slide display.
    Display,
    /// Read-only observer with injection rights.
    Operator,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Player => "player",
            Role::Host => "host",
            Role::Display => "display",
            Role::Operator => "operator",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "player" => Role::Player,
            "host" => Role::Host,
            "display" => Role::Display,
            "operator" => Role::Operator,
            _ => return Err(format!("unknown role: {s}")),
        })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
