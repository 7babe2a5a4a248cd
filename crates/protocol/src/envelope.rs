//! The JSON wire envelope and the two message kind registries.
//!
//! Every frame in either direction is a single JSON object with a
//! `kind` tag and a `payload` object. The kind sets are disjoint:
//! one for authority pushes, one for terminal commands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ProtocolError;

/// A single wire unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub kind: String,
    #[serde(default = "empty_payload")]
    pub payload: serde_json::Value,
}

fn empty_payload() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Envelope {
    /// Parse one text frame.
    pub fn from_json(text: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize into a text frame.
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Message kinds the authority pushes to connected clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerKind {
    Welcome,
    Error,
    GameState,
    PlayerState,
    PlayerList,
    SlideQueue,
    Slide,
    EventPrompt,
    EventResult,
    EventTimer,
    PhaseChange,
}

impl ServerKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ServerKind::Welcome => "welcome",
            ServerKind::Error => "error",
            ServerKind::GameState => "gameState",
            ServerKind::PlayerState => "playerState",
            ServerKind::PlayerList => "playerList",
            ServerKind::SlideQueue => "slideQueue",
            ServerKind::Slide => "slide",
            ServerKind::EventPrompt => "eventPrompt",
            ServerKind::EventResult => "eventResult",
            ServerKind::EventTimer => "eventTimer",
            ServerKind::PhaseChange => "phaseChange",
        }
    }
}

impl FromStr for ServerKind {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "welcome" => ServerKind::Welcome,
            "error" => ServerKind::Error,
            "gameState" => ServerKind::GameState,
            "playerState" => ServerKind::PlayerState,
            "playerList" => ServerKind::PlayerList,
            "slideQueue" => ServerKind::SlideQueue,
            "slide" => ServerKind::Slide,
            "eventPrompt" => ServerKind::EventPrompt,
            "eventResult" => ServerKind::EventResult,
            "eventTimer" => ServerKind::EventTimer,
            "phaseChange" => ServerKind::PhaseChange,
            _ => return Err(ProtocolError::UnknownKind(s.to_string())),
        })
    }
}

impl fmt::Display for ServerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message kinds a terminal sends to the authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientKind {
    Join,
    Rejoin,
    SelectUp,
    SelectDown,
    Confirm,
    Abstain,
    UseItem,
    IdleScrollUp,
    IdleScrollDown,
    AdvanceSlide,
    Heartbeat,
}

impl ClientKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ClientKind::Join => "join",
            ClientKind::Rejoin => "rejoin",
            ClientKind::SelectUp => "selectUp",
            ClientKind::SelectDown => "selectDown",
            ClientKind::Confirm => "confirm",
            ClientKind::Abstain => "abstain",
            ClientKind::UseItem => "useItem",
            ClientKind::IdleScrollUp => "idleScrollUp",
            ClientKind::IdleScrollDown => "idleScrollDown",
            ClientKind::AdvanceSlide => "advanceSlide",
            ClientKind::Heartbeat => "heartbeat",
        }
    }
}

impl FromStr for ClientKind {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "join" => ClientKind::Join,
            "rejoin" => ClientKind::Rejoin,
            "selectUp" => ClientKind::SelectUp,
            "selectDown" => ClientKind::SelectDown,
            "confirm" => ClientKind::Confirm,
            "abstain" => ClientKind::Abstain,
            "useItem" => ClientKind::UseItem,
            "idleScrollUp" => ClientKind::IdleScrollUp,
            "idleScrollDown" => ClientKind::IdleScrollDown,
            "advanceSlide" => ClientKind::AdvanceSlide,
            "heartbeat" => ClientKind::Heartbeat,
            _ => return Err(ProtocolError::UnknownKind(s.to_string())),
        })
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
