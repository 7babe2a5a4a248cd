//! Routing of authority pushes into the store.
//!
//! One decoded message touches exactly one store slice; enqueueing a
//! notification is the only other side effect. Anything transport or
//! time related stays out of here, which keeps every rule testable
//! with plain values.

use protocol::ServerMessage;
use tracing::debug;

use crate::notify::NotificationQueue;
use crate::store::{EventTimerRecord, Store};

pub fn apply(store: &mut Store, notifications: &NotificationQueue, message: ServerMessage) {
    match message {
        ServerMessage::Welcome(welcome) => {
            debug!(client_id = %welcome.client_id, resumed = welcome.resumed, "Joined");
            store.joined = true;
            store.client_id = Some(welcome.client_id);
        }
        ServerMessage::Error(error) => {
            notifications.error(error.message);
        }
        ServerMessage::GameState(game) => {
            store.game = Some(game);
        }
        ServerMessage::PlayerState(state) => {
            // A push that carries the pending list is authoritative
            // about open obligations. One without it says nothing, so
            // the prompt survives.
            if let (Some(prompt), Some(pending)) = (&store.prompt, &state.pending) {
                if !pending.contains(&prompt.event_id) {
                    debug!(event_id = %prompt.event_id, "Prompt no longer pending, clearing");
                    store.prompt = None;
                }
            }
            store.client = Some(state);
        }
        ServerMessage::PlayerList(roster) => {
            store.roster = roster;
        }
        ServerMessage::SlideQueue(payload) => {
            store.slides.current = payload.queue.get(payload.current_index).cloned();
            store.slides.queue = payload.queue;
            store.slides.current_index = payload.current_index;
        }
        ServerMessage::Slide(slide) => {
            store.slides.current = Some(slide);
        }
        ServerMessage::EventPrompt(prompt) => {
            store.last_result = None;
            store.prompt = Some(prompt);
        }
        ServerMessage::EventResult(result) => {
            let note = if result.message.is_empty() {
                result.outcome.clone()
            } else {
                result.message.clone()
            };
            notifications.info(note);
            store.prompt = None;
            store.last_result = Some(result);
        }
        ServerMessage::EventTimer(timer) => match timer.duration_ms {
            Some(duration_ms) => {
                store.timers.insert(
                    timer.event_id,
                    EventTimerRecord {
                        ends_at: timer.ends_at,
                        duration_ms,
                    },
                );
            }
            None => {
                store.timers.remove(&timer.event_id);
            }
        },
        ServerMessage::PhaseChange(change) => {
            let note = if change.message.is_empty() {
                format!("Phase: {}", change.phase)
            } else {
                change.message
            };
            notifications.info(note);
        }
    }
}
