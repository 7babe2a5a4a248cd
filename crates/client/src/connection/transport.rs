//! Transport seam between the connection state machine and the wire.
//!
//! The state machine only ever sees text frames. The production
//! transport speaks WebSocket through `tokio-tungstenite`; tests swap
//! in a scripted transport so timing can run on the paused clock.

use std::future::Future;

use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::debug;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Connect failed: {0}")]
    Connect(String),
    #[error("Link error: {0}")]
    Link(String),
}

/// Something that can dial the game authority.
pub trait Transport: Send + 'static {
    type Link: TransportLink;

    fn connect(
        &mut self,
        url: &str,
    ) -> impl Future<Output = Result<Self::Link, TransportError>> + Send;
}

/// One established connection.
///
/// `recv` returning `None` means the peer closed the link in an
/// orderly fashion; an `Err` means it died underneath us. Either way
/// the link is finished and the caller should drop it.
pub trait TransportLink: Send + 'static {
    fn send(&mut self, text: String) -> impl Future<Output = Result<(), TransportError>> + Send;

    fn recv(&mut self) -> impl Future<Output = Option<Result<String, TransportError>>> + Send;

    fn close(&mut self) -> impl Future<Output = ()> + Send;
}

/// WebSocket transport used outside of tests.
pub struct WsTransport;

impl Transport for WsTransport {
    type Link = WsLink;

    async fn connect(&mut self, url: &str) -> Result<WsLink, TransportError> {
        let (ws, _response) = connect_async(url)
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;
        Ok(WsLink { ws })
    }
}

pub struct WsLink {
    ws: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl TransportLink for WsLink {
    async fn send(&mut self, text: String) -> Result<(), TransportError> {
        self.ws
            .send(Message::Text(text.into()))
            .await
            .map_err(|e| TransportError::Link(e.to_string()))
    }

    async fn recv(&mut self) -> Option<Result<String, TransportError>> {
        loop {
            match self.ws.next().await {
                Some(Ok(Message::Text(text))) => return Some(Ok(text.as_str().to_owned())),
                Some(Ok(Message::Close(_))) => return None,
                Some(Ok(Message::Binary(payload))) => {
                    debug!(bytes = payload.len(), "Ignoring binary frame");
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Some(Err(TransportError::Link(e.to_string()))),
                None => return None,
            }
        }
    }

    async fn close(&mut self) {
        let _ = self.ws.close(None).await;
    }
}

#[cfg(test)]
pub(crate) mod script {
    //! Scripted transport for connection tests.

    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::{Transport, TransportError, TransportLink};

    pub enum Frame {
        Text(String),
        Error(&'static str),
        Close,
    }

    pub enum Attempt {
        Refuse(&'static str),
        Accept(Vec<Frame>),
    }

    /// Plays back a fixed sequence of connection attempts. Once the
    /// script is exhausted, further dials and reads park forever so a
    /// paused-clock test can observe that nothing else happens.
    pub struct ScriptTransport {
        attempts: VecDeque<Attempt>,
        sent: Arc<Mutex<Vec<String>>>,
        dials: Arc<AtomicUsize>,
    }

    impl ScriptTransport {
        pub fn new(attempts: Vec<Attempt>) -> Self {
            Self {
                attempts: attempts.into(),
                sent: Arc::new(Mutex::new(Vec::new())),
                dials: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn sent(&self) -> Arc<Mutex<Vec<String>>> {
            Arc::clone(&self.sent)
        }

        pub fn dials(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.dials)
        }
    }

    impl Transport for ScriptTransport {
        type Link = ScriptLink;

        async fn connect(&mut self, _url: &str) -> Result<ScriptLink, TransportError> {
            self.dials.fetch_add(1, Ordering::SeqCst);
            match self.attempts.pop_front() {
                Some(Attempt::Refuse(reason)) => Err(TransportError::Connect(reason.to_owned())),
                Some(Attempt::Accept(frames)) => Ok(ScriptLink {
                    frames: frames.into(),
                    sent: Arc::clone(&self.sent),
                }),
                None => std::future::pending().await,
            }
        }
    }

    pub struct ScriptLink {
        frames: VecDeque<Frame>,
        sent: Arc<Mutex<Vec<String>>>,
    }

    impl TransportLink for ScriptLink {
        async fn send(&mut self, text: String) -> Result<(), TransportError> {
            self.sent.lock().unwrap().push(text);
            Ok(())
        }

        async fn recv(&mut self) -> Option<Result<String, TransportError>> {
            match self.frames.pop_front() {
                Some(Frame::Text(text)) => Some(Ok(text)),
                Some(Frame::Error(reason)) => Some(Err(TransportError::Link(reason.to_owned()))),
                Some(Frame::Close) => None,
                None => std::future::pending().await,
            }
        }

        async fn close(&mut self) {}
    }
}
