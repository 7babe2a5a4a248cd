//! Client runtime task.
//!
//! One spawned task owns the connection together with the store and
//! the clocks, publishing an immutable [`ClientView`] through a watch
//! channel whenever anything a frontend draws has changed. Frontends
//! stay passive: they watch and render.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use protocol::{ClientCommand, Role};

use crate::clock::{CLOCK_POLL, Countdown, EventClock, epoch_ms_now};
use crate::config::Config;
use crate::connection::{Connection, LinkEvent, LinkState, Transport, WsTransport};
use crate::dispatch;
use crate::notify::{Notification, NotificationQueue};
use crate::store::Store;

/// Interval between liveness pings while the link is open.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(5000);

/// Commands buffered between a frontend and the runtime task.
const COMMAND_BUFFER: usize = 32;

/// Everything a frontend needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientView {
    pub link: LinkState,
    pub store: Store,
    pub notifications: Vec<Notification>,
    pub countdown: Option<Countdown>,
}

/// Handle to a spawned runtime. [`ClientHandle::shutdown`] closes the
/// link and joins the task.
pub struct ClientHandle {
    commands: mpsc::Sender<ClientCommand>,
    view: watch::Receiver<ClientView>,
    task: JoinHandle<()>,
}

impl ClientHandle {
    /// Queue a command for the authority. Fire and forget: when the
    /// queue is full the command is dropped with a warning.
    pub fn send(&self, command: ClientCommand) {
        if let Err(e) = self.commands.try_send(command) {
            warn!(error = %e, "Dropping command, runtime queue unavailable");
        }
    }

    /// A fresh receiver for view updates.
    pub fn watch(&self) -> watch::Receiver<ClientView> {
        self.view.clone()
    }

    /// The most recently published view.
    pub fn current(&self) -> ClientView {
        self.view.borrow().clone()
    }

    /// Close the link and wait for the runtime task to finish.
    pub async fn shutdown(self) {
        drop(self.commands);
        let _ = self.task.await;
    }
}

/// Spawn the runtime against the configured endpoint. Must be called
/// from within a tokio runtime.
pub fn spawn(config: &Config) -> ClientHandle {
    let conn = Connection::new(WsTransport, config.endpoint.url());
    spawn_with(conn, config.session.player_id.clone(), config.session.role)
}

fn spawn_with<T: Transport>(conn: Connection<T>, player_id: String, role: Role) -> ClientHandle {
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let (view_tx, view_rx) = watch::channel(ClientView::default());
    let task = tokio::spawn(run(conn, player_id, role, command_rx, view_tx));
    ClientHandle {
        commands: command_tx,
        view: view_rx,
        task,
    }
}

async fn run<T: Transport>(
    mut conn: Connection<T>,
    player_id: String,
    role: Role,
    mut commands: mpsc::Receiver<ClientCommand>,
    view: watch::Sender<ClientView>,
) {
    let notifications = NotificationQueue::new();
    let mut store = Store::default();
    let mut clock = EventClock::new();
    let mut opened_before = false;

    let mut poll = tokio::time::interval(CLOCK_POLL);
    poll.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut heartbeat = tokio::time::interval(HEARTBEAT_INTERVAL);
    heartbeat.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut countdown: Option<Countdown> = None;
    let mut shown: Vec<Notification> = Vec::new();

    conn.open();

    loop {
        let mut dirty = false;
        tokio::select! {
            // Link lifecycle and inbound traffic.
            event = conn.next_event() => {
                match event {
                    LinkEvent::Opened => {
                        let hello = if opened_before {
                            ClientCommand::Rejoin { player_id: player_id.clone(), role }
                        } else {
                            ClientCommand::Join { player_id: player_id.clone(), role }
                        };
                        opened_before = true;
                        conn.send(&hello).await;
                        dirty = true;
                    }
                    LinkEvent::Message(message) => {
                        dispatch::apply(&mut store, &notifications, message);
                        dirty = true;
                    }
                    LinkEvent::Closed => {
                        store.joined = false;
                        dirty = true;
                    }
                }
            }
            // Frontend commands. A closed channel means the handle is
            // gone and the runtime should wind down.
            command = commands.recv() => {
                match command {
                    Some(command) => conn.send(&command).await,
                    None => {
                        info!("Handle dropped, closing link");
                        conn.teardown().await;
                        break;
                    }
                }
            }
            _ = poll.tick() => {}
            _ = heartbeat.tick() => {
                if conn.state() == LinkState::Open {
                    conn.send(&ClientCommand::Heartbeat).await;
                }
            }
        }

        // Countdown and notification expiry move on their own, so
        // every pass re-derives both and publishes on any change.
        let next = clock.tick(&store.timers, epoch_ms_now());
        let entries = notifications.snapshot();
        if dirty || next != countdown || entries != shown {
            countdown = next;
            shown = entries;
            view.send_replace(ClientView {
                link: conn.state(),
                store: store.clone(),
                notifications: shown.clone(),
                countdown: countdown.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tokio::time::sleep;

    use crate::connection::script::{Attempt, Frame, ScriptTransport};

    use super::*;

    fn frame(kind: &str, payload: serde_json::Value) -> Frame {
        Frame::Text(serde_json::json!({ "kind": kind, "payload": payload }).to_string())
    }

    fn spawn_script(attempts: Vec<Attempt>) -> (ClientHandle, Arc<Mutex<Vec<String>>>) {
        let transport = ScriptTransport::new(attempts);
        let sent = transport.sent();
        let conn = Connection::new(transport, "ws://scripted".to_string());
        (spawn_with(conn, "7".to_string(), Role::Player), sent)
    }

    fn sent_kinds(sent: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
        sent.lock()
            .unwrap()
            .iter()
            .map(|text| {
                let value: serde_json::Value = serde_json::from_str(text).unwrap();
                value["kind"].as_str().unwrap().to_string()
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_join_flows_once_the_link_opens() {
        let (handle, sent) = spawn_script(vec![Attempt::Accept(vec![])]);
        sleep(Duration::from_millis(5)).await;
        assert_eq!(sent_kinds(&sent), vec!["join"]);
        assert_eq!(handle.current().link, LinkState::Open);
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejoin_after_the_link_drops() {
        let (handle, sent) = spawn_script(vec![
            Attempt::Accept(vec![Frame::Close]),
            Attempt::Accept(vec![]),
        ]);
        sleep(Duration::from_millis(2100)).await;
        let kinds = sent_kinds(&sent);
        assert_eq!(kinds.first().map(String::as_str), Some("join"));
        assert!(kinds.contains(&"rejoin".to_string()), "kinds: {kinds:?}");
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_carries_store_and_notifications() {
        let (handle, _sent) = spawn_script(vec![Attempt::Accept(vec![
            frame(
                "welcome",
                serde_json::json!({ "clientId": "7", "resumed": false }),
            ),
            frame(
                "phaseChange",
                serde_json::json!({ "phase": "night", "message": "Night falls" }),
            ),
        ])]);
        sleep(Duration::from_millis(5)).await;
        let view = handle.current();
        assert!(view.store.joined);
        assert_eq!(view.store.client_id.as_deref(), Some("7"));
        assert_eq!(view.notifications.len(), 1);
        assert_eq!(view.notifications[0].message, "Night falls");
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_tracks_the_event_timer() {
        let ends_at = epoch_ms_now() + 30_000;
        let (handle, _sent) = spawn_script(vec![Attempt::Accept(vec![frame(
            "eventTimer",
            serde_json::json!({ "eventId": "vote", "endsAt": ends_at, "durationMs": 30_000 }),
        )])]);
        sleep(Duration::from_millis(60)).await;
        let countdown = handle.current().countdown.expect("countdown should be live");
        assert_eq!(countdown.event_id, "vote");
        assert!(
            (29..=30).contains(&countdown.seconds_ceil),
            "seconds: {}",
            countdown.seconds_ceil
        );
        assert!(countdown.fraction > 0.95);
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_commands_flow_through_to_the_link() {
        let (handle, sent) = spawn_script(vec![Attempt::Accept(vec![])]);
        sleep(Duration::from_millis(5)).await;
        handle.send(ClientCommand::Confirm);
        sleep(Duration::from_millis(5)).await;
        assert_eq!(sent_kinds(&sent), vec!["join", "confirm"]);
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_heartbeats_flow_while_open() {
        let (handle, sent) = spawn_script(vec![Attempt::Accept(vec![])]);
        sleep(Duration::from_millis(10_100)).await;
        let beats = sent_kinds(&sent)
            .iter()
            .filter(|kind| *kind == "heartbeat")
            .count();
        assert!(beats >= 2, "beats: {beats}");
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_the_runtime() {
        let (handle, _sent) = spawn_script(vec![Attempt::Accept(vec![])]);
        sleep(Duration::from_millis(5)).await;
        handle.shutdown().await;
    }
}
