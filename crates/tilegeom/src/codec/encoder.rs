//! Command-stream encoding.

use crate::error::Error;
use crate::zigzag;

use super::{Command, CommandInteger, CommandKind, MAX_COMMAND_COUNT};

/// Encodes command records into wire integers.
///
/// Consecutive MoveTo records are emitted under one command integer, and so
/// are consecutive LineTo records; runs longer than [`MAX_COMMAND_COUNT`]
/// are split. Every ClosePath gets its own command integer with count 1.
///
/// ## Errors
/// * `Error::DeltaOutOfRange` - A delta does not fit in a 32-bit zigzag
///   parameter
pub fn encode_stream(commands: &[Command]) -> Result<Vec<u32>, Error> {
    let mut words = Vec::with_capacity(commands.len() * 2 + 1);
    let mut index = 0;

    while index < commands.len() {
        let kind = commands[index].kind();

        if kind == CommandKind::ClosePath {
            words.push(CommandInteger::pack(kind, 1));
            index += 1;
            continue;
        }

        let run = commands[index..]
            .iter()
            .take(MAX_COMMAND_COUNT as usize)
            .take_while(|command| command.kind() == kind)
            .count();

        words.push(CommandInteger::pack(kind, run as u32));
        for delta in commands[index..index + run].iter().filter_map(Command::delta) {
            words.push(zigzag::try_encode(delta.x)?);
            words.push(zigzag::try_encode(delta.y)?);
        }

        tracing::trace!(%kind, count = run, "encoded command");
        index += run;
    }

    Ok(words)
}
