//! Client -> authority command encoding.

use serde_json::json;

use crate::{ClientKind, Envelope};

use super::Role;

/// A command a terminal sends to the authority.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientCommand {
    /// First join of this session.
    Join { player_id: String, role: Role },
    /// Re-attach after a dropped connection.
    Rejoin { player_id: String, role: Role },
    /// Dial up while an event is active.
    SelectUp,
    /// Dial down while an event is active.
    SelectDown,
    /// YES button: lock in the current selection.
    Confirm,
    /// NO button: abstain from the current event.
    Abstain,
    /// Spend a held item.
    UseItem { item_id: String },
    /// Dial up while idle (browse the icon column).
    IdleScrollUp,
    /// Dial down while idle.
    IdleScrollDown,
    /// Shared display requests the next slide.
    AdvanceSlide,
    /// Liveness ping.
    Heartbeat,
}

impl ClientCommand {
    pub fn kind(&self) -> ClientKind {
        match self {
            ClientCommand::Join { .. } => ClientKind::Join,
            ClientCommand::Rejoin { .. } => ClientKind::Rejoin,
            ClientCommand::SelectUp => ClientKind::SelectUp,
            ClientCommand::SelectDown => ClientKind::SelectDown,
            ClientCommand::Confirm => ClientKind::Confirm,
            ClientCommand::Abstain => ClientKind::Abstain,
            ClientCommand::UseItem { .. } => ClientKind::UseItem,
            ClientCommand::IdleScrollUp => ClientKind::IdleScrollUp,
            ClientCommand::IdleScrollDown => ClientKind::IdleScrollDown,
            ClientCommand::AdvanceSlide => ClientKind::AdvanceSlide,
            ClientCommand::Heartbeat => ClientKind::Heartbeat,
        }
    }

    /// Build the wire envelope. Bare commands still carry an empty
    /// payload object.
    pub fn to_envelope(&self) -> Envelope {
        let payload = match self {
            ClientCommand::Join { player_id, role } | ClientCommand::Rejoin { player_id, role } => {
                json!({
                    "playerId": player_id,
                    "role": role,
                    "source": "terminal",
                })
            }
            ClientCommand::UseItem { item_id } => json!({ "itemId": item_id }),
            _ => json!({}),
        };
        Envelope {
            kind: self.kind().as_str().to_string(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_carries_identity() {
        let env = ClientCommand::Join {
            player_id: "3".to_string(),
            role: Role::Player,
        }
        .to_envelope();
        assert_eq!(env.kind, "join");
        assert_eq!(env.payload["playerId"], "3");
        assert_eq!(env.payload["role"], "player");
        assert_eq!(env.payload["source"], "terminal");
    }

    #[test]
    fn test_bare_command_has_empty_payload_object() {
        let env = ClientCommand::Confirm.to_envelope();
        assert_eq!(env.kind, "confirm");
        assert!(env.payload.is_object());
        assert_eq!(env.payload.as_object().unwrap().len(), 0);
    }

    #[test]
    fn test_use_item_names_the_item() {
        let env = ClientCommand::UseItem {
            item_id: "medkit".to_string(),
        }
        .to_envelope();
        assert_eq!(env.kind, "useItem");
        assert_eq!(env.payload["itemId"], "medkit");
    }

    #[test]
    fn test_wire_frame_shape() {
        let text = ClientCommand::IdleScrollUp.to_envelope().to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["kind"], "idleScrollUp");
        assert!(parsed["payload"].is_object());
    }
}
