//! Authority -> client message decoding.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::display::DisplayDescriptor;
use crate::{Envelope, ProtocolError, ServerKind};

/// A fully decoded authority push.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
    Welcome(Welcome),
    Error(ErrorPayload),
    GameState(GameStateBlob),
    PlayerState(ClientState),
    PlayerList(Vec<RosterEntry>),
    SlideQueue(SlideQueuePayload),
    Slide(Slide),
    EventPrompt(EventPrompt),
    EventResult(EventResult),
    EventTimer(EventTimerPayload),
    PhaseChange(PhaseChange),
}

impl ServerMessage {
    /// Decode an envelope into a typed message.
    ///
    /// An unrecognized kind or a payload that does not fit the kind's
    /// shape is an error; callers log and drop those frames.
    pub fn decode(envelope: &Envelope) -> Result<Self, ProtocolError> {
        let kind: ServerKind = envelope.kind.parse()?;
        Ok(match kind {
            ServerKind::Welcome => ServerMessage::Welcome(payload(kind, envelope)?),
            ServerKind::Error => ServerMessage::Error(payload(kind, envelope)?),
            ServerKind::GameState => ServerMessage::GameState(payload(kind, envelope)?),
            ServerKind::PlayerState => ServerMessage::PlayerState(payload(kind, envelope)?),
            ServerKind::PlayerList => {
                let roster: RosterPayload = payload(kind, envelope)?;
                ServerMessage::PlayerList(roster.players)
            }
            ServerKind::SlideQueue => ServerMessage::SlideQueue(payload(kind, envelope)?),
            ServerKind::Slide => ServerMessage::Slide(payload(kind, envelope)?),
            ServerKind::EventPrompt => ServerMessage::EventPrompt(payload(kind, envelope)?),
            ServerKind::EventResult => ServerMessage::EventResult(payload(kind, envelope)?),
            ServerKind::EventTimer => ServerMessage::EventTimer(payload(kind, envelope)?),
            ServerKind::PhaseChange => ServerMessage::PhaseChange(payload(kind, envelope)?),
        })
    }

    pub fn kind(&self) -> ServerKind {
        match self {
            ServerMessage::Welcome(_) => ServerKind::Welcome,
            ServerMessage::Error(_) => ServerKind::Error,
            ServerMessage::GameState(_) => ServerKind::GameState,
            ServerMessage::PlayerState(_) => ServerKind::PlayerState,
            ServerMessage::PlayerList(_) => ServerKind::PlayerList,
            ServerMessage::SlideQueue(_) => ServerKind::SlideQueue,
            ServerMessage::Slide(_) => ServerKind::Slide,
            ServerMessage::EventPrompt(_) => ServerKind::EventPrompt,
            ServerMessage::EventResult(_) => ServerKind::EventResult,
            ServerMessage::EventTimer(_) => ServerKind::EventTimer,
            ServerMessage::PhaseChange(_) => ServerKind::PhaseChange,
        }
    }
}

fn payload<T: DeserializeOwned>(kind: ServerKind, envelope: &Envelope) -> Result<T, ProtocolError> {
    serde_json::from_value(envelope.payload.clone()).map_err(|reason| ProtocolError::BadPayload {
        kind: kind.as_str(),
        reason,
    })
}

/// Join/rejoin acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Welcome {
    pub client_id: String,
    /// True when the authority restored an earlier session.
    pub resumed: bool,
}

/// Authority-side rejection or failure notice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorPayload {
    pub message: String,
}

/// One roster row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub connected: bool,
    pub alive: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RosterPayload {
    players: Vec<RosterEntry>,
}

/// Versioned snapshot of the shared game state.
///
/// The client reads a handful of fields and keeps the rest opaque in
/// `extra`, so authority-side additions survive older clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameStateBlob {
    pub revision: u64,
    pub phase: String,
    pub day: u32,
    pub players: Vec<RosterEntry>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An item a player is holding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemRef {
    pub id: String,
    pub name: String,
}

/// Per-client state slice for the receiving device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientState {
    /// Ready-to-render screen content, when the authority sent one.
    pub display: Option<DisplayDescriptor>,
    /// Outstanding obligation ids. `None` means the push carried no
    /// pending information, which is different from an empty list.
    pub pending: Option<Vec<String>>,
    pub items: Vec<ItemRef>,
    pub alive: bool,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            display: None,
            pending: None,
            items: Vec::new(),
            alive: true,
        }
    }
}

/// One slide on the shared display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    pub kind: String,
    pub heading: String,
    pub body: String,
    pub duration_ms: Option<u64>,
}

/// Replacement slide queue plus cursor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlideQueuePayload {
    pub queue: Vec<Slide>,
    pub current_index: usize,
}

/// One selectable answer in a prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptOption {
    pub id: String,
    pub label: String,
}

/// A decision the receiving player must make.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventPrompt {
    pub event_id: String,
    pub title: String,
    pub options: Vec<PromptOption>,
}

/// Resolution of a previously prompted event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventResult {
    pub event_id: String,
    pub outcome: String,
    pub message: String,
}

/// Countdown record for one running event.
///
/// A missing `duration_ms` deletes the record instead of creating it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventTimerPayload {
    pub event_id: String,
    /// Absolute deadline, milliseconds since the Unix epoch.
    pub ends_at: u64,
    pub duration_ms: Option<u64>,
}

/// Phase transition notice. Informational only, the phase value of
/// record arrives in the next `gameState`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseChange {
    pub phase: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(kind: &str, payload: serde_json::Value) -> Result<ServerMessage, ProtocolError> {
        ServerMessage::decode(&Envelope {
            kind: kind.to_string(),
            payload,
        })
    }

    #[test]
    fn test_decode_welcome() {
        let msg = decode(
            "welcome",
            serde_json::json!({ "clientId": "p3", "resumed": true }),
        )
        .unwrap();
        match msg {
            ServerMessage::Welcome(w) => {
                assert_eq!(w.client_id, "p3");
                assert!(w.resumed);
            }
            other => panic!("wrong message: {other:?}"),
        }
    }

    #[test]
    fn test_decode_player_state_with_display() {
        let msg = decode(
            "playerState",
            serde_json::json!({
                "display": {
                    "line1": { "left": "DAY 2", "right": ":wolf:" },
                    "line2": { "text": "PLAYER 3", "style": "locked" }
                },
                "pending": ["vote-17"],
                "items": [ { "id": "medkit", "name": "Medkit" } ],
                "alive": true
            }),
        )
        .unwrap();
        match msg {
            ServerMessage::PlayerState(state) => {
                let display = state.display.unwrap();
                assert_eq!(display.line1.left, "DAY 2");
                assert_eq!(state.pending.as_deref(), Some(&["vote-17".to_string()][..]));
                assert_eq!(state.items.len(), 1);
            }
            other => panic!("wrong message: {other:?}"),
        }
    }

    #[test]
    fn test_player_state_without_pending_stays_none() {
        let msg = decode("playerState", serde_json::json!({ "alive": false })).unwrap();
        match msg {
            ServerMessage::PlayerState(state) => {
                assert!(state.pending.is_none());
                assert!(state.display.is_none());
                assert!(!state.alive);
            }
            other => panic!("wrong message: {other:?}"),
        }
    }

    #[test]
    fn test_decode_player_list() {
        let msg = decode(
            "playerList",
            serde_json::json!({
                "players": [
                    { "id": "p1", "name": "Ada", "connected": true, "alive": true },
                    { "id": "p2", "name": "Brin", "connected": false, "alive": true }
                ]
            }),
        )
        .unwrap();
        match msg {
            ServerMessage::PlayerList(players) => {
                assert_eq!(players.len(), 2);
                assert_eq!(players[1].name, "Brin");
                assert!(!players[1].connected);
            }
            other => panic!("wrong message: {other:?}"),
        }
    }

    #[test]
    fn test_game_state_keeps_unknown_fields() {
        let msg = decode(
            "gameState",
            serde_json::json!({
                "revision": 41,
                "phase": "night",
                "day": 2,
                "players": [],
                "moonPhase": "waxing"
            }),
        )
        .unwrap();
        match msg {
            ServerMessage::GameState(blob) => {
                assert_eq!(blob.revision, 41);
                assert_eq!(blob.extra["moonPhase"], "waxing");
            }
            other => panic!("wrong message: {other:?}"),
        }
    }

    #[test]
    fn test_event_timer_without_duration() {
        let msg = decode(
            "eventTimer",
            serde_json::json!({ "eventId": "vote-17", "endsAt": 1_000_000u64 }),
        )
        .unwrap();
        match msg {
            ServerMessage::EventTimer(t) => {
                assert_eq!(t.event_id, "vote-17");
                assert!(t.duration_ms.is_none());
            }
            other => panic!("wrong message: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_kind_fails() {
        let err = decode("leaderboard", serde_json::json!({})).unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownKind(_)));
    }

    #[test]
    fn test_bad_payload_names_the_kind() {
        let err = decode("eventTimer", serde_json::json!({ "endsAt": "soon" })).unwrap_err();
        match err {
            ProtocolError::BadPayload { kind, .. } => assert_eq!(kind, "eventTimer"),
            other => panic!("wrong error: {other:?}"),
        }
    }
}
