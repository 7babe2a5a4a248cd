//! End-to-end exercise of the runtime over a real WebSocket.
//!
//! A scripted in-process listener stands in for the authority: it
//! checks the join, then pushes state and waits for the button press.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::time::timeout;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

use client::config::{Config, DisplayConfig, EndpointConfig, SessionConfig};
use client::render::Renderer;
use client::runtime;
use protocol::{ClientCommand, Role};

const WAIT: Duration = Duration::from_secs(5);

fn config_for(port: u16) -> Config {
    Config {
        endpoint: EndpointConfig {
            host: "127.0.0.1".to_string(),
            port,
            secure: false,
            path: "/".to_string(),
        },
        session: SessionConfig {
            role: Role::Player,
            player_id: "9".to_string(),
        },
        display: DisplayConfig::default(),
    }
}

fn envelope(kind: &str, payload: serde_json::Value) -> Message {
    Message::Text(
        serde_json::json!({ "kind": kind, "payload": payload })
            .to_string()
            .into(),
    )
}

#[tokio::test]
async fn test_join_state_and_commands_over_a_live_socket() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(stream).await.unwrap();

        let hello = ws.next().await.unwrap().unwrap();
        let hello: serde_json::Value = serde_json::from_str(hello.to_text().unwrap()).unwrap();
        assert_eq!(hello["kind"], "join");
        assert_eq!(hello["payload"]["playerId"], "9");
        assert_eq!(hello["payload"]["role"], "player");

        ws.send(envelope(
            "welcome",
            serde_json::json!({ "clientId": "9", "resumed": false }),
        ))
        .await
        .unwrap();
        ws.send(envelope(
            "playerState",
            serde_json::json!({
                "display": {
                    "line1": { "left": "DAY 1", "right": "9" },
                    "line2": { "text": "VOTE", "style": "normal" },
                },
                "alive": true,
            }),
        ))
        .await
        .unwrap();

        // Heartbeats may interleave; the press is the next command.
        loop {
            let frame = ws.next().await.unwrap().unwrap();
            if let Message::Text(text) = frame {
                let value: serde_json::Value = serde_json::from_str(text.as_str()).unwrap();
                if value["kind"] == "heartbeat" {
                    continue;
                }
                assert_eq!(value["kind"], "confirm");
                break;
            }
        }
        let _ = ws.close(None).await;
    });

    let handle = runtime::spawn(&config_for(port));
    let mut view = handle.watch();

    let snapshot = timeout(WAIT, async {
        loop {
            let snapshot = view.borrow_and_update().clone();
            if snapshot.store.joined && snapshot.store.display().is_some() {
                return snapshot;
            }
            view.changed().await.unwrap();
        }
    })
    .await
    .expect("view never carried the pushed state");

    let descriptor = snapshot.store.display().unwrap();
    assert_eq!(descriptor.line2.text, "VOTE");
    assert_eq!(descriptor.line1.left, "DAY 1");

    // The pushed descriptor goes straight through the renderer.
    let mut renderer = Renderer::new(1);
    renderer.render(Some(descriptor), 0);
    let lit = (0..256).any(|x| (0..64).any(|y| renderer.surface().pixel_on(x, y)));
    assert!(lit);

    handle.send(ClientCommand::Confirm);
    timeout(WAIT, server)
        .await
        .expect("server task timed out")
        .unwrap();
    handle.shutdown().await;
}
