//! Command-stream decoding.
//!
//! Turns a feature's wire integers into command records without touching
//! the cursor; resolving deltas into positions is the assembler's job.

use crate::error::Error;
use crate::geometry::Point;
use crate::zigzag;

use super::{Command, CommandInteger, CommandKind};

/// Decodes a feature's wire integers into command records.
///
/// Each command integer is followed by `count` parameter pairs for MoveTo
/// and LineTo (one record per pair) and by nothing for ClosePath. Decoding
/// stops when the words are exhausted. An empty slice decodes to no
/// commands.
///
/// ## Parameters
/// * `words` - The feature's geometry integers
/// * `max_points` - Upper bound on the total number of parameter pairs,
///   checked before anything is allocated for them
///
/// ## Errors
/// * `Error::InvalidCommandId` / `Error::InvalidClosePathCount` - Bad
///   command integer
/// * `Error::UnevenParameterList` - A command declares more parameter words
///   than remain
/// * `Error::TooManyPoints` - The declared pairs exceed `max_points`
pub fn decode_stream(words: &[u32], max_points: u32) -> Result<Vec<Command>, Error> {
    let mut commands = Vec::new();
    let mut declared_points: u64 = 0;
    let mut position = 0;

    while position < words.len() {
        let (kind, count) = CommandInteger::parse_at(words[position], position)?;
        let params_start = position + 1;

        if kind == CommandKind::ClosePath {
            commands.push(Command::ClosePath);
            position = params_start;
            continue;
        }

        // Validate the declared parameters against what is actually left
        // before reserving any space for them.
        let declared = count as u64 * kind.parameter_words();
        let available = words.len() - params_start;
        if declared > available as u64 {
            return Err(Error::UnevenParameterList {
                kind,
                declared,
                available,
                word: position,
            });
        }

        declared_points += count as u64;
        if declared_points > max_points as u64 {
            return Err(Error::TooManyPoints {
                limit: max_points,
                declared: declared_points,
            });
        }

        // `declared <= available`, so the slice stays in bounds.
        let params_end = params_start + declared as usize;
        let params = &words[params_start..params_end];

        commands.reserve(count as usize);
        for pair in params.chunks_exact(2) {
            let delta = Point::new(zigzag::decode(pair[0]), zigzag::decode(pair[1]));
            commands.push(match kind {
                CommandKind::MoveTo => Command::MoveTo(delta),
                _ => Command::LineTo(delta),
            });
        }

        tracing::trace!(%kind, count, word = position, "decoded command");
        position = params_end;
    }

    Ok(commands)
}
