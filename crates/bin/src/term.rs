//! Seance terminal, drawn into a real terminal.
//!
//! Emulates the handheld in a shell: the panel comes out as half
//! block characters, the dial and buttons live on the keyboard. The
//! same binary serves players and the shared display, depending on
//! the configured role.

use std::io::{Stdout, Write, stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, event, execute, queue};
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::info;
use tracing_subscriber::EnvFilter;

use client::anim::AnimationScheduler;
use client::config::{Config, Prefs};
use client::connection::LinkState;
use client::render::{self, Renderer, Surface, needs_animation};
use client::runtime::{self, ClientHandle, ClientView};
use protocol::display::{DisplayDescriptor, GameLed, LedState};
use protocol::{ClientCommand, Role};

/// Panel rows in the terminal, two pixels per character cell.
const PANEL_ROWS: u16 = (render::HEIGHT / 2) as u16;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Stdout belongs to the panel, so logs go to a file.
    let log = std::fs::File::create("seance-term.log").context("Failed to create log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log))
        .with_ansi(false)
        .init();

    info!("Seance Terminal v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    info!("Endpoint: {}", config.endpoint.url());
    info!(
        "Role: {} (player {})",
        config.session.role, config.session.player_id
    );

    let role = config.session.role;
    let handle = runtime::spawn(&config);

    terminal::enable_raw_mode().context("Failed to enter raw mode")?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, cursor::Hide)?;

    let result = run(&handle, role, &mut out).await;

    execute!(out, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    handle.shutdown().await;
    result
}

async fn run(handle: &ClientHandle, role: Role, out: &mut Stdout) -> anyhow::Result<()> {
    let mut prefs = Prefs::load();
    let mut renderer = Renderer::new(1);
    let mut anim = AnimationScheduler::new();
    let mut view_rx = handle.watch();

    let (key_tx, mut keys) = mpsc::channel(16);
    spawn_key_reader(key_tx);

    // Pulse frames come back to this loop so one task owns the screen.
    let (frame_tx, mut frames) = mpsc::channel::<u64>(4);

    let mut view = view_rx.borrow_and_update().clone();
    let mut elapsed = 0u64;
    let mut advance_at: Option<Instant> = None;
    let mut last_slide: Option<String> = None;

    draw(out, &mut renderer, &view, role, &prefs, elapsed)?;

    loop {
        tokio::select! {
            changed = view_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                view = view_rx.borrow_and_update().clone();

                let wants = screen_of(&view).is_some_and(needs_animation);
                if wants && !anim.is_running() {
                    let tx = frame_tx.clone();
                    anim.start(move |ms| {
                        let _ = tx.try_send(ms);
                    });
                } else if !wants && anim.is_running() {
                    anim.cancel();
                    elapsed = 0;
                }

                advance_at = next_advance(&view, role, &prefs, &mut last_slide, advance_at);
                draw(out, &mut renderer, &view, role, &prefs, elapsed)?;
            }
            Some(ms) = frames.recv() => {
                elapsed = ms;
                draw(out, &mut renderer, &view, role, &prefs, elapsed)?;
            }
            Some(key) = keys.recv() => {
                match action_for(key, &view, role) {
                    Action::Quit => break,
                    Action::Command(command) => handle.send(command),
                    Action::ToggleAutoAdvance => {
                        prefs.auto_advance = !prefs.auto_advance;
                        prefs.save();
                        if !prefs.auto_advance {
                            advance_at = None;
                        }
                        draw(out, &mut renderer, &view, role, &prefs, elapsed)?;
                    }
                    Action::None => {}
                }
            }
            _ = wait_for(advance_at), if advance_at.is_some() => {
                handle.send(ClientCommand::AdvanceSlide);
                advance_at = None;
            }
        }
    }

    Ok(())
}

fn spawn_key_reader(tx: mpsc::Sender<KeyEvent>) {
    std::thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    if tx.blocking_send(key).is_err() {
                        return;
                    }
                }
                Ok(_) => {}
                Err(_) => return,
            }
        }
    });
}

/// What the panel should show. The hardware falls back to its
/// connecting screen whenever the socket is down, stale state or not.
fn screen_of(view: &ClientView) -> Option<&DisplayDescriptor> {
    if view.link == LinkState::Open {
        view.store.display()
    } else {
        None
    }
}

/// Arm or keep the shared display's slide timer. Only the display
/// role advances slides, and only while auto advance is on.
fn next_advance(
    view: &ClientView,
    role: Role,
    prefs: &Prefs,
    last_slide: &mut Option<String>,
    current: Option<Instant>,
) -> Option<Instant> {
    if role != Role::Display || !prefs.auto_advance {
        return None;
    }
    let slide = view.store.slides.current.as_ref()?;
    if last_slide.as_deref() == Some(slide.id.as_str()) {
        return current;
    }
    *last_slide = Some(slide.id.clone());
    let duration = slide.duration_ms?;
    if duration == 0 {
        return None;
    }
    Some(Instant::now() + Duration::from_millis(duration))
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}

#[derive(Debug, PartialEq)]
enum Action {
    None,
    Quit,
    Command(ClientCommand),
    ToggleAutoAdvance,
}

fn action_for(key: KeyEvent, view: &ClientView, role: Role) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('a') if role == Role::Display => Action::ToggleAutoAdvance,
        KeyCode::Char(' ') if role == Role::Display => {
            Action::Command(ClientCommand::AdvanceSlide)
        }
        KeyCode::Up | KeyCode::Char('k') => dial(view, true),
        KeyCode::Down | KeyCode::Char('j') => dial(view, false),
        KeyCode::Enter | KeyCode::Char('y') => yes_button(view),
        KeyCode::Char('i') => item_key(view),
        KeyCode::Char('n') => match screen_of(view) {
            Some(_) => Action::Command(ClientCommand::Abstain),
            None => Action::None,
        },
        _ => Action::None,
    }
}

/// True while the authority is asking this terminal for input.
fn has_active_event(d: &DisplayDescriptor) -> bool {
    d.leds.yes == LedState::Bright
        || matches!(
            d.status_led,
            GameLed::Voting | GameLed::Locked | GameLed::Abstained
        )
}

/// Idle means the dial browses the icon column instead of an event.
fn is_idle(d: &DisplayDescriptor) -> bool {
    !has_active_event(d)
        && !matches!(
            d.status_led,
            GameLed::Lobby | GameLed::Dead | GameLed::GameOver
        )
}

fn dial(view: &ClientView, up: bool) -> Action {
    let Some(d) = screen_of(view) else {
        return Action::None;
    };
    let command = match (is_idle(d), up) {
        (true, true) => ClientCommand::IdleScrollUp,
        (true, false) => ClientCommand::IdleScrollDown,
        (false, true) => ClientCommand::SelectUp,
        (false, false) => ClientCommand::SelectDown,
    };
    Action::Command(command)
}

fn yes_button(view: &ClientView) -> Action {
    let Some(d) = screen_of(view) else {
        return Action::None;
    };
    // A dim YES over a held item slot spends the item.
    if is_idle(d) && d.leds.yes == LedState::Dim {
        if let Some(command) = highlighted_item(d) {
            return Action::Command(command);
        }
    }
    Action::Command(ClientCommand::Confirm)
}

/// Shortcut that spends the highlighted item without waiting for a
/// dim YES cue. The authority still validates the use.
fn item_key(view: &ClientView) -> Action {
    match screen_of(view) {
        Some(d) if is_idle(d) => highlighted_item(d).map_or(Action::None, Action::Command),
        _ => Action::None,
    }
}

fn highlighted_item(d: &DisplayDescriptor) -> Option<ClientCommand> {
    let slot = d.idle_scroll_index as usize;
    if (1..=2).contains(&slot) && d.icons[slot].is_occupied() {
        Some(ClientCommand::UseItem {
            item_id: d.icons[slot].id.clone(),
        })
    } else {
        None
    }
}

fn draw(
    out: &mut Stdout,
    renderer: &mut Renderer,
    view: &ClientView,
    role: Role,
    prefs: &Prefs,
    elapsed: u64,
) -> anyhow::Result<()> {
    renderer.render(screen_of(view), elapsed);
    draw_panel(out, renderer.surface())?;
    draw_status(out, view, role, prefs)?;
    out.flush()?;
    Ok(())
}

fn draw_panel(out: &mut Stdout, surface: &Surface) -> anyhow::Result<()> {
    let mut colors = None;
    for row in 0..PANEL_ROWS {
        queue!(out, cursor::MoveTo(0, row))?;
        for x in 0..render::WIDTH {
            let pair = (
                amber(surface.level_at(x, row as i32 * 2)),
                amber(surface.level_at(x, row as i32 * 2 + 1)),
            );
            if colors != Some(pair) {
                queue!(out, SetForegroundColor(pair.0), SetBackgroundColor(pair.1))?;
                colors = Some(pair);
            }
            queue!(out, Print('▀'))?;
        }
    }
    queue!(out, ResetColor)?;
    Ok(())
}

fn amber(level: f64) -> Color {
    Color::Rgb {
        r: (255.0 * level) as u8,
        g: (176.0 * level) as u8,
        b: 0,
    }
}

fn draw_status(
    out: &mut Stdout,
    view: &ClientView,
    role: Role,
    prefs: &Prefs,
) -> anyhow::Result<()> {
    let mut line = format!(" link {:?}", view.link);
    if let Some(d) = view.store.display() {
        line.push_str(&format!(
            "  status {:?}  yes {}  no {}",
            d.status_led,
            led_glyph(d.leds.yes),
            led_glyph(d.leds.no)
        ));
    }
    if role == Role::Display {
        line.push_str(if prefs.auto_advance {
            "  auto-advance on"
        } else {
            "  auto-advance off"
        });
    }

    let mut detail = String::from(" ");
    if let Some(countdown) = &view.countdown {
        detail.push_str(&format!("{}s  ", countdown.seconds_ceil));
    }
    if let Some(note) = view.notifications.last() {
        detail.push_str(&note.message);
    }

    queue!(
        out,
        cursor::MoveTo(0, PANEL_ROWS),
        Clear(ClearType::CurrentLine),
        Print(&line),
        cursor::MoveTo(0, PANEL_ROWS + 1),
        Clear(ClearType::CurrentLine),
        Print(&detail),
    )?;
    Ok(())
}

fn led_glyph(state: LedState) -> char {
    match state {
        LedState::Off => '·',
        LedState::Dim => '○',
        LedState::Bright => '●',
        LedState::Pulse => '◉',
    }
}
