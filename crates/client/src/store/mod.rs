//! Client-side state slices.
//!
//! Everything the authority has pushed and the client still cares
//! about lives here, one slice per message kind. The store itself has
//! no update logic, [`crate::dispatch`] owns the write rules.

use std::collections::BTreeMap;

use protocol::display::DisplayDescriptor;
use protocol::messages::{
    ClientState, EventPrompt, EventResult, GameStateBlob, RosterEntry, Slide,
};

/// One running event timer, keyed by event id in [`Store::timers`].
///
/// Records only exist with a duration; a timer push without one is a
/// deletion, so `duration_ms` needs no `Option` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTimerRecord {
    /// Absolute deadline, milliseconds since the Unix epoch.
    pub ends_at: u64,
    pub duration_ms: u64,
}

/// Slide deck state for display-role clients.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideBoard {
    pub queue: Vec<Slide>,
    pub current_index: usize,
    pub current: Option<Slide>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    /// `None` until the first `gameState` push arrives.
    pub game: Option<GameStateBlob>,
    pub roster: Vec<RosterEntry>,
    /// `None` until the first `playerState` push arrives.
    pub client: Option<ClientState>,
    pub prompt: Option<EventPrompt>,
    pub last_result: Option<EventResult>,
    pub slides: SlideBoard,
    /// BTreeMap so iteration order is the id tie-break for equal
    /// deadlines.
    pub timers: BTreeMap<String, EventTimerRecord>,
    pub joined: bool,
    pub client_id: Option<String>,
}

impl Store {
    /// Screen content to render, when the authority has sent any.
    pub fn display(&self) -> Option<&DisplayDescriptor> {
        self.client.as_ref().and_then(|c| c.display.as_ref())
    }
}
