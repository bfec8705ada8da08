//! Top-level error type for the tilegeom library

use crate::codec::CommandKind;
use crate::geometry::GeomType;

/// Errors returned by every decode and encode entry point.
///
/// The first error encountered aborts the whole feature. Positions are
/// indices into the wire-integer slice (`word`) for stream-level errors and
/// indices into the command-record sequence (`command`) for assembly errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The command integer carried an id other than MoveTo (1), LineTo (2)
    /// or ClosePath (7).
    #[error("invalid command id {id} in command integer {raw:#x} at word {word}")]
    InvalidCommandId {
        /// The raw command integer.
        raw: u32,
        /// The extracted command id (`raw & 0b111`).
        id: u8,
        /// Index of the command integer in the wire stream.
        word: usize,
    },

    /// A ClosePath command integer declared a count other than 1.
    #[error("ClosePath command at word {word} must have a count of 1, got {count}")]
    InvalidClosePathCount {
        /// The declared repeat count.
        count: u32,
        /// Index of the command integer in the wire stream.
        word: usize,
    },

    /// A MoveTo/LineTo command declared more parameters than remain in the
    /// stream, or the remaining parameter words do not form whole pairs.
    #[error("{kind} command at word {word} declares {declared} parameter words, but only {available} remain")]
    UnevenParameterList {
        /// The command kind whose parameters are missing.
        kind: CommandKind,
        /// Number of parameter words the command declared (`count * 2`).
        declared: u64,
        /// Number of words remaining after the command integer.
        available: usize,
        /// Index of the command integer in the wire stream.
        word: usize,
    },

    /// A command that the geometry grammar does not allow at this point.
    #[error("unexpected {found} command at position {command} in {geom_type} geometry")]
    UnexpectedCommand {
        /// The geometry grammar being applied.
        geom_type: GeomType,
        /// The offending command.
        found: CommandKind,
        /// Index of the offending command record.
        command: usize,
    },

    /// A LineTo or ClosePath appeared before any MoveTo started a line or
    /// ring.
    #[error("{found} command at position {command} has no preceding MoveTo")]
    MissingMoveTo {
        /// The offending command.
        found: CommandKind,
        /// Index of the offending command record.
        command: usize,
    },

    /// A line string ended with fewer than two points.
    #[error("line string starting at position {command} has {points} point(s), at least 2 are required")]
    DegenerateLineString {
        /// Number of points in the line string.
        points: usize,
        /// Index of the MoveTo record (or of the line string on encode).
        command: usize,
    },

    /// A ring has fewer than three vertices or encloses zero area.
    #[error("ring starting at position {command} is degenerate ({vertices} vertices)")]
    DegenerateRing {
        /// Number of vertices in the ring.
        vertices: usize,
        /// Index of the MoveTo record (or of the ring on encode).
        command: usize,
    },

    /// A hole-winding ring appeared before any outer ring.
    #[error("hole ring starting at position {command} precedes any outer ring")]
    OrphanHole {
        /// Index of the MoveTo record starting the hole.
        command: usize,
    },

    /// A delta cannot be represented in a 32-bit zigzag parameter.
    #[error("delta {delta} is outside the 32-bit zigzag parameter range")]
    DeltaOutOfRange {
        /// The offending delta.
        delta: i64,
    },

    /// The stream ended inside a ring that was never closed.
    #[error("ring starting at position {command} is not terminated by ClosePath")]
    UnclosedRing {
        /// Index of the MoveTo record starting the ring.
        command: usize,
    },

    /// The stream declares more parameter pairs than the configured limit.
    #[error("point limit exceeded: limit={limit}, declared={declared}")]
    TooManyPoints {
        /// The configured maximum.
        limit: u32,
        /// Number of points declared so far.
        declared: u64,
    },

    /// The raw geometry-type tag is not one of the known values.
    #[error("unknown geometry type tag {0}")]
    UnknownGeometryType(u32),

    /// The geometry type has no command grammar (`Unknown`).
    #[error("geometry type {0} cannot be decoded or encoded")]
    UnsupportedGeometryType(GeomType),
}
