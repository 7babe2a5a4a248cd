//! Display descriptor pushed by the authority.
//!
//! The descriptor is the complete, already-formatted content of one
//! terminal screen: three text lines, two button LED levels, a game
//! status LED hint and the three-slot icon column. Clients render it
//! verbatim and never edit it.

use serde::{Deserialize, Deserializer, Serialize};

/// Visual style for the main content line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    #[default]
    Normal,
    Locked,
    Abstained,
    Waiting,
}

impl DisplayStyle {
    /// Unknown or missing styles fall back to normal.
    pub fn parse(s: &str) -> Self {
        match s {
            "locked" => DisplayStyle::Locked,
            "abstained" => DisplayStyle::Abstained,
            "waiting" => DisplayStyle::Waiting,
            _ => DisplayStyle::Normal,
        }
    }
}

impl<'de> Deserialize<'de> for DisplayStyle {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = Option::<String>::deserialize(d)?;
        Ok(DisplayStyle::parse(s.as_deref().unwrap_or("")))
    }
}

/// Brightness level of one button LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LedState {
    #[default]
    Off,
    Dim,
    Bright,
    Pulse,
}

impl LedState {
    pub fn parse(s: &str) -> Self {
        match s {
            "dim" => LedState::Dim,
            "bright" => LedState::Bright,
            "pulse" => LedState::Pulse,
            _ => LedState::Off,
        }
    }
}

impl<'de> Deserialize<'de> for LedState {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = Option::<String>::deserialize(d)?;
        Ok(LedState::parse(s.as_deref().unwrap_or("")))
    }
}

/// Game phase hint for the status LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameLed {
    /// No game state yet, front-ends show connection status instead.
    #[default]
    None,
    Lobby,
    Day,
    Night,
    Voting,
    Locked,
    Abstained,
    Dead,
    GameOver,
}

impl GameLed {
    pub fn parse(s: &str) -> Self {
        match s {
            "lobby" => GameLed::Lobby,
            "day" => GameLed::Day,
            "night" => GameLed::Night,
            "voting" => GameLed::Voting,
            "locked" => GameLed::Locked,
            "abstained" => GameLed::Abstained,
            "dead" => GameLed::Dead,
            "gameOver" => GameLed::GameOver,
            _ => GameLed::None,
        }
    }
}

impl<'de> Deserialize<'de> for GameLed {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = Option::<String>::deserialize(d)?;
        Ok(GameLed::parse(s.as_deref().unwrap_or("")))
    }
}

/// Fill state of one icon slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconState {
    Active,
    Inactive,
    #[default]
    Empty,
}

impl IconState {
    pub fn parse(s: &str) -> Self {
        match s {
            "active" => IconState::Active,
            "inactive" => IconState::Inactive,
            _ => IconState::Empty,
        }
    }
}

impl<'de> Deserialize<'de> for IconState {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = Option::<String>::deserialize(d)?;
        Ok(IconState::parse(s.as_deref().unwrap_or("")))
    }
}

/// One slot in the icon column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSlot {
    pub id: String,
    pub state: IconState,
}

impl Default for IconSlot {
    fn default() -> Self {
        Self {
            id: "empty".to_string(),
            state: IconState::Empty,
        }
    }
}

impl IconSlot {
    /// True when the slot holds a drawable icon.
    pub fn is_occupied(&self) -> bool {
        self.id != "empty"
    }
}

/// Context line: left and right aligned fragments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Line1 {
    pub left: String,
    pub right: String,
}

/// Main content line, large font.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Line2 {
    pub text: String,
    pub style: DisplayStyle,
}

/// Tip line: centered `text`, or a left/center/right split when the
/// side fragments are populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Line3 {
    pub text: String,
    pub left: String,
    pub center: String,
    pub right: String,
}

impl Line3 {
    /// True when the split layout applies instead of centered `text`.
    pub fn is_split(&self) -> bool {
        !self.left.is_empty() || !self.right.is_empty()
    }
}

/// Button LED levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonLeds {
    pub yes: LedState,
    pub no: LedState,
}

/// The complete content of one terminal screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayDescriptor {
    pub line1: Line1,
    pub line2: Line2,
    pub line3: Line3,
    pub leds: ButtonLeds,
    pub status_led: GameLed,
    #[serde(deserialize_with = "icon_slots")]
    pub icons: [IconSlot; 3],
    pub idle_scroll_index: u8,
}

/// Tolerant slot list parse: short lists leave trailing slots empty,
/// extra entries are ignored.
fn icon_slots<'de, D: Deserializer<'de>>(d: D) -> Result<[IconSlot; 3], D::Error> {
    let list = Vec::<IconSlot>::deserialize(d)?;
    let mut slots: [IconSlot; 3] = Default::default();
    for (slot, icon) in slots.iter_mut().zip(list) {
        *slot = icon;
    }
    Ok(slots)
}

impl DisplayDescriptor {
    /// Three centered status lines, normal style.
    pub fn message(line1: &str, line2: &str, line3: &str) -> Self {
        Self {
            line1: Line1 {
                left: line1.to_string(),
                right: String::new(),
            },
            line2: Line2 {
                text: line2.to_string(),
                style: DisplayStyle::Normal,
            },
            line3: Line3 {
                text: line3.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// The boot screen shown before the first authority push.
    pub fn connecting() -> Self {
        Self::message("CONNECTING", "...", "Please wait")
    }

    /// Number of occupied icon slots.
    pub fn visible_icons(&self) -> usize {
        self.icons.iter().filter(|s| s.is_occupied()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parse_falls_back_to_normal() {
        assert_eq!(DisplayStyle::parse("locked"), DisplayStyle::Locked);
        assert_eq!(DisplayStyle::parse("waiting"), DisplayStyle::Waiting);
        assert_eq!(DisplayStyle::parse("glitter"), DisplayStyle::Normal);
        assert_eq!(DisplayStyle::parse(""), DisplayStyle::Normal);
    }

    #[test]
    fn test_descriptor_parses_partial_json() {
        let json = r#"{
            "line1": { "left": "DAY 1", "right": ":wolf:" },
            "line2": { "text": "VOTE NOW", "style": "waiting" },
            "line3": { "text": "Dial to choose" }
        }"#;
        let d: DisplayDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(d.line1.left, "DAY 1");
        assert_eq!(d.line1.right, ":wolf:");
        assert_eq!(d.line2.style, DisplayStyle::Waiting);
        assert_eq!(d.leds.yes, LedState::Off);
        assert_eq!(d.status_led, GameLed::None);
        assert_eq!(d.visible_icons(), 0);
        assert_eq!(d.idle_scroll_index, 0);
    }

    #[test]
    fn test_descriptor_tolerates_null_and_unknown_enums() {
        let json = r#"{
            "line2": { "text": "X", "style": null },
            "leds": { "yes": "blinding", "no": "dim" },
            "statusLed": "intermission"
        }"#;
        let d: DisplayDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(d.line2.style, DisplayStyle::Normal);
        assert_eq!(d.leds.yes, LedState::Off);
        assert_eq!(d.leds.no, LedState::Dim);
        assert_eq!(d.status_led, GameLed::None);
    }

    #[test]
    fn test_short_icon_list_pads_with_empty() {
        let json = r#"{ "icons": [ { "id": "wolf", "state": "active" } ] }"#;
        let d: DisplayDescriptor = serde_json::from_str(json).unwrap();
        assert!(d.icons[0].is_occupied());
        assert_eq!(d.icons[1].id, "empty");
        assert_eq!(d.icons[2].id, "empty");
        assert_eq!(d.visible_icons(), 1);
    }

    #[test]
    fn test_connecting_screen_defaults() {
        let d = DisplayDescriptor::connecting();
        assert_eq!(d.line1.left, "CONNECTING");
        assert_eq!(d.line2.text, "...");
        assert_eq!(d.line3.text, "Please wait");
        assert_eq!(d.line2.style, DisplayStyle::Normal);
    }

    #[test]
    fn test_line3_split_detection() {
        let mut line3 = Line3::default();
        assert!(!line3.is_split());
        line3.left = "YES:Vote".to_string();
        assert!(line3.is_split());
    }
}
