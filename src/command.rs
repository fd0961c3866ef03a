//! The [`CommandType`] vocabulary and the parsed [`Command`] value.

use serde::Serialize;
use std::fmt;

/// How the text after a command keyword is split into options and arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseMode {
    /// The remainder is opaque argument text, optionally preceded by an
    /// `@option` tag.
    Generic,
    /// The first token must be a recognized option name; the rest is the value.
    KeyValue,
}

/// A script directive keyword.
///
/// Variants are declared in match priority order. When one keyword is a
/// prefix of another, the more specific one must come first or it can never
/// match; [`CommandType::ALL`] preserves this order and is what the default
/// [`Vocabulary`](crate::Vocabulary) is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Backspace,
    Down,
    Enter,
    Left,
    Right,
    Set,
    Sleep,
    Space,
    Type,
    Up,
}

impl CommandType {
    /// Every command type, in match priority order.
    pub const ALL: [CommandType; 10] = [
        CommandType::Backspace,
        CommandType::Down,
        CommandType::Enter,
        CommandType::Left,
        CommandType::Right,
        CommandType::Set,
        CommandType::Sleep,
        CommandType::Space,
        CommandType::Type,
        CommandType::Up,
    ];

    /// The canonical script keyword, used for matching and re-serialization.
    pub const fn keyword(self) -> &'static str {
        match self {
            CommandType::Backspace => "backspace",
            CommandType::Down => "down",
            CommandType::Enter => "enter",
            CommandType::Left => "left",
            CommandType::Right => "right",
            CommandType::Set => "set",
            CommandType::Sleep => "sleep",
            CommandType::Space => "space",
            CommandType::Type => "type",
            CommandType::Up => "up",
        }
    }

    /// How the text after this keyword is split into options and arguments.
    pub const fn mode(self) -> ParseMode {
        match self {
            CommandType::Set => ParseMode::KeyValue,
            _ => ParseMode::Generic,
        }
    }

    /// Whether a generic command is rejected when nothing follows its keyword.
    ///
    /// Only [`CommandType::Type`] needs text to do anything.
    pub const fn requires_arguments(self) -> bool {
        matches!(self, CommandType::Type)
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.keyword())
    }
}

/// One parsed script line, ready for a runner.
///
/// For [`CommandType::Set`] the `options` field always holds a recognized
/// option name. For every other type it is empty unless the line carried an
/// `@option` tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Command {
    #[serde(rename = "type")]
    pub kind: CommandType,
    pub options: String,
    pub arguments: String,
}

impl Command {
    pub fn new(kind: CommandType, options: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            kind,
            options: options.into(),
            arguments: arguments.into(),
        }
    }
}

/// Renders the command as a script line using the canonical keyword.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.keyword())?;
        match self.kind.mode() {
            ParseMode::KeyValue => write!(f, " {} {}", self.options, self.arguments),
            ParseMode::Generic if !self.options.is_empty() => {
                write!(f, " @{} {}", self.options, self.arguments)
            }
            ParseMode::Generic if !self.arguments.is_empty() => write!(f, " {}", self.arguments),
            ParseMode::Generic => Ok(()),
        }
    }
}
