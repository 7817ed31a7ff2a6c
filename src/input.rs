//! Classification of raw keys and keypad buttons into events.
//!
//! The calculator core only understands [`Event`]. This module maps the two
//! input sources of a keypad UI onto it: keyboard keys and on-screen
//! buttons. Unmapped keys are ignored (`None`), never errors.

use crate::core::{Operator, Token};
use crate::machine::Event;

/// A key press, as reported by a keyboard.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
    /// Any key without a calculator meaning (arrows, function keys, ...).
    Other,
}

impl Key {
    /// Parse a key name.
    ///
    /// Accepts single characters and the names `enter`, `return`,
    /// `backspace`, `bs`, `escape` and `esc` in any case. Anything else is
    /// [`Key::Other`].
    pub fn parse(name: &str) -> Self {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::Char(c);
        }
        match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Self::Enter,
            "backspace" | "bs" => Self::Backspace,
            "escape" | "esc" => Self::Escape,
            _ => Self::Other,
        }
    }

    /// Map the key to a calculator event.
    ///
    /// | key                  | event    |
    /// |----------------------|----------|
    /// | `0`-`9`, `.`         | digit    |
    /// | `+ - * / %`          | operator |
    /// | `Enter`, `=`         | equals   |
    /// | `Backspace`          | delete   |
    /// | `Escape`             | clear    |
    pub fn event(&self) -> Option<Event> {
        match *self {
            Self::Char('=') | Self::Enter => Some(Event::Equals),
            Self::Backspace => Some(Event::Delete),
            Self::Escape => Some(Event::Clear),
            Self::Char(c) => Token::new(c)
                .map(Event::Digit)
                .or_else(|| Operator::from_key(c).map(Event::Operator)),
            Self::Other => None,
        }
    }
}

/// Split a line of typed input into keys.
///
/// Whitespace-separated words that name a key (`enter`, `esc`, ...) become
/// that key; every other word contributes one key per character. So
/// `"12+3 enter"` and `"12+3="` produce the same events.
pub fn keys_from_line(line: &str) -> Vec<Key> {
    line.split_whitespace()
        .flat_map(|word| match Key::parse(word) {
            Key::Other => word.chars().map(Key::Char).collect::<Vec<_>>(),
            key => vec![key],
        })
        .collect()
}

/// Events for a line of typed input, dropping unmapped keys.
pub fn events_from_line(line: &str) -> Vec<Event> {
    keys_from_line(line)
        .iter()
        .filter_map(Key::event)
        .collect()
}

/// An on-screen keypad control.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Button {
    Number(Token),
    Operator(Operator),
    Clear,
    Delete,
    Equals,
}

impl Button {
    /// Identify a button by its control id or value.
    ///
    /// The `clear`, `delete` and `equals` ids name the command buttons;
    /// number and operator buttons are identified by the value they carry.
    pub fn from_control(id: &str) -> Option<Self> {
        match id {
            "clear" => return Some(Self::Clear),
            "delete" => return Some(Self::Delete),
            "equals" => return Some(Self::Equals),
            _ => {}
        }
        let mut chars = id.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Token::new(c)
            .map(Self::Number)
            .or_else(|| Operator::from_key(c).map(Self::Operator))
    }
}

impl From<Button> for Event {
    fn from(button: Button) -> Self {
        match button {
            Button::Number(token) => Event::Digit(token),
            Button::Operator(operator) => Event::Operator(operator),
            Button::Clear => Event::Clear,
            Button::Delete => Event::Delete,
            Button::Equals => Event::Equals,
        }
    }
}
