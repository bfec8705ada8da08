//! Command integer packing and command-stream (de)serialization.
//!
//! A feature's geometry is a flat list of wire integers. Each command
//! integer packs a 3-bit command id with a 29-bit repeat count, and is
//! followed by `count` zigzag-encoded `(dx, dy)` parameter pairs for MoveTo
//! and LineTo, or by nothing for ClosePath:
//!
//! ```text
//! [ count << 3 | id ] [ dx ] [ dy ] [ dx ] [ dy ] ...
//! ```

use std::fmt;

use crate::error::Error;
use crate::geometry::Point;

mod decoder;
mod encoder;

pub use decoder::decode_stream;
pub use encoder::encode_stream;

/// Mask for extracting the command id from a command integer (bits 0-2).
#[rustfmt::skip]
const COMMAND_ID_MASK: u32        = 0b0000_0111;

/// Number of bits the repeat count is shifted by.
const COMMAND_COUNT_SHIFT: u32 = 3;

/// Largest repeat count that fits in a command integer (29 bits).
pub const MAX_COMMAND_COUNT: u32 = u32::MAX >> COMMAND_COUNT_SHIFT;

/// The kind of a drawing command, carrying its wire id as discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandKind {
    /// Starts a new point, line or ring.
    MoveTo = 1,
    /// Extends the current line or ring.
    LineTo = 2,
    /// Closes the current ring.
    ClosePath = 7,
}

impl CommandKind {
    /// Returns the 3-bit wire id of the command.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Number of parameter words that follow the command integer for each
    /// repetition.
    pub fn parameter_words(self) -> u64 {
        match self {
            CommandKind::MoveTo | CommandKind::LineTo => 2,
            CommandKind::ClosePath => 0,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandKind::MoveTo => "MoveTo",
            CommandKind::LineTo => "LineTo",
            CommandKind::ClosePath => "ClosePath",
        };
        f.write_str(name)
    }
}

/// One decoded drawing command.
///
/// MoveTo and LineTo carry the delta to apply to the cursor, not an
/// absolute position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor by the delta and start a new item there.
    MoveTo(Point),
    /// Move the cursor by the delta and append the new position.
    LineTo(Point),
    /// Close the current ring.
    ClosePath,
}

impl Command {
    /// Returns the kind of the command.
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::MoveTo(_) => CommandKind::MoveTo,
            Command::LineTo(_) => CommandKind::LineTo,
            Command::ClosePath => CommandKind::ClosePath,
        }
    }

    /// Returns the cursor delta, if the command carries one.
    pub fn delta(&self) -> Option<Point> {
        match self {
            Command::MoveTo(delta) | Command::LineTo(delta) => Some(*delta),
            Command::ClosePath => None,
        }
    }
}

/// Packs and unpacks command integers.
pub struct CommandInteger;

impl CommandInteger {
    /// Packs a command id and repeat count into one wire integer
    /// (`count << 3 | id`).
    ///
    /// `count` must not exceed [`MAX_COMMAND_COUNT`]; higher bits are shifted
    /// out.
    pub fn pack(kind: CommandKind, count: u32) -> u32 {
        debug_assert!(count <= MAX_COMMAND_COUNT);
        (count << COMMAND_COUNT_SHIFT) | kind.id() as u32
    }

    /// Unpacks a command integer into its kind and repeat count.
    ///
    /// ## Errors
    /// * `Error::InvalidCommandId` - If the id is not 1, 2 or 7
    /// * `Error::InvalidClosePathCount` - If a ClosePath has a count other
    ///   than 1
    pub fn parse(raw: u32) -> Result<(CommandKind, u32), Error> {
        Self::parse_at(raw, 0)
    }

    /// Same as [`CommandInteger::parse`], reporting `word` as the position
    /// of the command integer in errors.
    pub(crate) fn parse_at(raw: u32, word: usize) -> Result<(CommandKind, u32), Error> {
        let id = (raw & COMMAND_ID_MASK) as u8;
        let count = raw >> COMMAND_COUNT_SHIFT;

        let kind = match id {
            1 => CommandKind::MoveTo,
            2 => CommandKind::LineTo,
            7 => CommandKind::ClosePath,
            _ => return Err(Error::InvalidCommandId { raw, id, word }),
        };

        if kind == CommandKind::ClosePath && count != 1 {
            return Err(Error::InvalidClosePathCount { count, word });
        }

        Ok((kind, count))
    }
}

/// Trait for types that can be encoded to wire integers.
pub trait Encodable {
    /// Encodes the implementing type into a sequence of wire integers.
    fn encode(&self) -> Result<Vec<u32>, Error>;
}

/// Trait for types that can be decoded from wire integers.
pub trait Decodable: Sized {
    /// Decodes an instance from a sequence of wire integers.
    fn decode(words: &[u32]) -> Result<Self, Error>;
}

/// An ordered sequence of decoded command records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commands(Vec<Command>);

impl Commands {
    /// Creates a new `Commands` instance from an iterator of commands.
    pub fn new_from<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = Command>,
    {
        Self(commands.into_iter().collect())
    }

    /// Returns the commands as a slice.
    pub fn as_slice(&self) -> &[Command] {
        &self.0
    }

    /// Returns the number of commands.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no commands.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Commands {
    type Item = Command;
    type IntoIter = std::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Decodable for Commands {
    /// Decodes with the default point limit.
    fn decode(words: &[u32]) -> Result<Self, Error> {
        decode_stream(words, crate::config::DEFAULT_MAX_POINTS).map(Self)
    }
}

impl Encodable for Commands {
    fn encode(&self) -> Result<Vec<u32>, Error> {
        encode_stream(&self.0)
    }
}
