//! Seance probe, a line-mode operator console.
//!
//! Joins the session as an operator and mirrors what the runtime sees
//! to the log, with stdin one-liners mapped onto wire commands. Meant
//! for poking at an authority from a plain shell, not for play.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use client::config::Config;
use client::runtime;
use protocol::{ClientCommand, Role};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Seance Probe v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load()?;
    config.session.role = Role::Operator;
    info!("Endpoint: {}", config.endpoint.url());

    let handle = runtime::spawn(&config);
    let mut view = handle.watch();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut last_link = None;
    let mut last_line2 = String::new();
    let mut last_note = 0u64;
    let mut last_seconds = None;

    loop {
        tokio::select! {
            changed = view.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = view.borrow_and_update().clone();

                if last_link != Some(snapshot.link) {
                    last_link = Some(snapshot.link);
                    info!("Link: {:?}", snapshot.link);
                }
                if let Some(screen) = snapshot.store.display() {
                    if screen.line2.text != last_line2 {
                        last_line2 = screen.line2.text.clone();
                        info!(
                            "Screen: {:?} | {:?} ({:?})",
                            screen.line1.left, screen.line2.text, screen.line2.style
                        );
                    }
                }
                for note in &snapshot.notifications {
                    if note.id > last_note {
                        last_note = note.id;
                        info!("Notice [{:?}]: {}", note.kind, note.message);
                    }
                }
                let seconds = snapshot.countdown.as_ref().map(|c| c.seconds_ceil);
                if seconds != last_seconds {
                    last_seconds = seconds;
                    if let Some(countdown) = &snapshot.countdown {
                        info!("Countdown: {} {}s", countdown.event_id, countdown.seconds_ceil);
                    }
                }
            }
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        let input = line.trim();
                        if input.is_empty() {
                            continue;
                        }
                        if input == "quit" || input == "exit" {
                            break;
                        }
                        match parse_command(input) {
                            Some(command) => handle.send(command),
                            None => warn!("Unknown command: {input}"),
                        }
                    }
                    None => break,
                }
            }
        }
    }

    handle.shutdown().await;
    Ok(())
}

fn parse_command(input: &str) -> Option<ClientCommand> {
    let mut parts = input.split_whitespace();
    let command = match parts.next()? {
        "confirm" | "yes" => ClientCommand::Confirm,
        "abstain" | "no" => ClientCommand::Abstain,
        "up" => ClientCommand::SelectUp,
        "down" => ClientCommand::SelectDown,
        "scrollup" => ClientCommand::IdleScrollUp,
        "scrolldown" => ClientCommand::IdleScrollDown,
        "advance" => ClientCommand::AdvanceSlide,
        "use" => ClientCommand::UseItem {
            item_id: parts.next()?.to_string(),
        },
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_parse_with_arguments() {
        assert_eq!(parse_command("confirm"), Some(ClientCommand::Confirm));
        assert_eq!(
            parse_command("use medkit"),
            Some(ClientCommand::UseItem {
                item_id: "medkit".to_string()
            })
        );
        assert_eq!(parse_command("use"), None);
        assert_eq!(parse_command("dance"), None);
    }
}
