//! Connection state machine.
//!
//! Owns the link lifecycle: dialing, the live link, and after any
//! loss exactly one reconnect armed for a fixed delay later. Sending
//! is fire and forget; while the link is not open outbound commands
//! are dropped with a warning rather than queued.

mod transport;

pub use transport::{Transport, TransportError, TransportLink, WsTransport};

#[cfg(test)]
pub(crate) use transport::script;

use std::time::Duration;

use protocol::{ClientCommand, Envelope, ProtocolError, ServerMessage};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, warn};

/// Fixed delay between a lost link and the next dial.
pub const RECONNECT_DELAY: Duration = Duration::from_millis(2000);

/// Externally visible link state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkState {
    #[default]
    Disconnected,
    Connecting,
    Open,
    Closing,
}

enum Phase<L> {
    Idle,
    Backoff { until: Instant },
    Dialing,
    Live { link: L },
    Closing,
}

/// What the runtime sees coming out of the machine.
pub enum LinkEvent {
    Opened,
    Message(ServerMessage),
    Closed,
}

pub struct Connection<T: Transport> {
    transport: T,
    url: String,
    phase: Phase<T::Link>,
}

impl<T: Transport> Connection<T> {
    pub fn new(transport: T, url: String) -> Self {
        Self {
            transport,
            url,
            phase: Phase::Idle,
        }
    }

    pub fn state(&self) -> LinkState {
        match self.phase {
            Phase::Idle => LinkState::Disconnected,
            Phase::Backoff { .. } | Phase::Dialing => LinkState::Connecting,
            Phase::Live { .. } => LinkState::Open,
            Phase::Closing => LinkState::Closing,
        }
    }

    /// Starts dialing. Does nothing while a dial, a live link or an
    /// armed reconnect already exists, so callers may invoke it
    /// freely.
    pub fn open(&mut self) {
        if matches!(self.phase, Phase::Idle) {
            self.phase = Phase::Dialing;
        }
    }

    /// Encodes and writes one command. Dropped with a warning when the
    /// link is not open; a failed write is also only logged since the
    /// next read will surface the dead link.
    pub async fn send(&mut self, command: &ClientCommand) {
        let Phase::Live { link } = &mut self.phase else {
            warn!(kind = command.kind().as_str(), "Dropping command, link is not open");
            return;
        };
        match command.to_envelope().to_json() {
            Ok(text) => {
                if let Err(e) = link.send(text).await {
                    warn!(error = %e, "Send failed, awaiting link teardown");
                }
            }
            Err(e) => warn!(error = %e, "Dropping unencodable command"),
        }
    }

    /// Drives the machine until something reportable happens. Pends
    /// forever while idle, so this is safe to park in a select loop.
    pub async fn next_event(&mut self) -> LinkEvent {
        loop {
            match &mut self.phase {
                Phase::Idle | Phase::Closing => std::future::pending::<()>().await,
                Phase::Backoff { until } => {
                    sleep_until(*until).await;
                    self.phase = Phase::Dialing;
                }
                Phase::Dialing => match self.transport.connect(&self.url).await {
                    Ok(link) => {
                        self.phase = Phase::Live { link };
                        return LinkEvent::Opened;
                    }
                    Err(e) => {
                        warn!(error = %e, "Connect failed, retrying in {:?}", RECONNECT_DELAY);
                        self.phase = Phase::Backoff {
                            until: Instant::now() + RECONNECT_DELAY,
                        };
                    }
                },
                Phase::Live { link } => match link.recv().await {
                    Some(Ok(text)) => {
                        if let Some(message) = decode_frame(&text) {
                            return LinkEvent::Message(message);
                        }
                    }
                    Some(Err(e)) => {
                        warn!(error = %e, "Link lost, retrying in {:?}", RECONNECT_DELAY);
                        self.phase = Phase::Backoff {
                            until: Instant::now() + RECONNECT_DELAY,
                        };
                        return LinkEvent::Closed;
                    }
                    None => {
                        debug!("Server closed the link, retrying in {:?}", RECONNECT_DELAY);
                        self.phase = Phase::Backoff {
                            until: Instant::now() + RECONNECT_DELAY,
                        };
                        return LinkEvent::Closed;
                    }
                },
            }
        }
    }

    /// Closes a live link, disarms any pending reconnect and parks the
    /// machine until `open` is called again.
    pub async fn teardown(&mut self) {
        let phase = std::mem::replace(&mut self.phase, Phase::Closing);
        if let Phase::Live { mut link } = phase {
            link.close().await;
        }
        self.phase = Phase::Idle;
    }
}

/// One wire frame to at most one typed message. Unknown kinds are
/// expected from newer servers and only logged at debug level.
fn decode_frame(text: &str) -> Option<ServerMessage> {
    let envelope = match Envelope::from_json(text) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!(error = %e, "Dropping malformed frame");
            return None;
        }
    };
    match ServerMessage::decode(&envelope) {
        Ok(message) => Some(message),
        Err(ProtocolError::UnknownKind(kind)) => {
            debug!(kind, "Ignoring unknown message kind");
            None
        }
        Err(e) => {
            warn!(error = %e, "Dropping message with bad payload");
            None
        }
    }
}
