//! Line string collections: each line is one MoveTo followed by LineTo
//! commands.

use crate::codec::{Command, CommandKind};
use crate::error::Error;
use crate::geometry::{GeomType, LineString, Point};

use super::advance_to;

/// A line under construction, with the position of its MoveTo.
struct OpenLine {
    start: usize,
    points: Vec<Point>,
}

impl OpenLine {
    fn finish(self) -> Result<LineString, Error> {
        if self.points.len() < 2 {
            return Err(Error::DegenerateLineString {
                points: self.points.len(),
                command: self.start,
            });
        }

        Ok(LineString(self.points))
    }
}

pub(super) fn assemble(commands: &[Command], cursor: &mut Point) -> Result<Vec<LineString>, Error> {
    let mut lines = Vec::new();
    let mut current: Option<OpenLine> = None;

    for (position, command) in commands.iter().enumerate() {
        match *command {
            Command::MoveTo(delta) => {
                if let Some(line) = current.take() {
                    lines.push(line.finish()?);
                }

                *cursor += delta;
                current = Some(OpenLine { start: position, points: vec![*cursor] });
            }
            Command::LineTo(delta) => {
                let Some(line) = current.as_mut() else {
                    return Err(Error::MissingMoveTo {
                        found: CommandKind::LineTo,
                        command: position,
                    });
                };

                *cursor += delta;
                line.points.push(*cursor);
            }
            Command::ClosePath => {
                return Err(Error::UnexpectedCommand {
                    geom_type: GeomType::LineString,
                    found: CommandKind::ClosePath,
                    command: position,
                });
            }
        }
    }

    if let Some(line) = current {
        lines.push(line.finish()?);
    }

    Ok(lines)
}

pub(super) fn flatten(
    lines: &[LineString],
    cursor: &mut Point,
    commands: &mut Vec<Command>,
) -> Result<(), Error> {
    for (index, line) in lines.iter().enumerate() {
        let [first, rest @ ..] = line.points() else {
            return Err(Error::DegenerateLineString { points: 0, command: index });
        };
        if rest.is_empty() {
            return Err(Error::DegenerateLineString { points: 1, command: index });
        }

        commands.reserve(line.len());
        commands.push(Command::MoveTo(advance_to(cursor, *first)?));
        for &point in rest {
            commands.push(Command::LineTo(advance_to(cursor, point)?));
        }
    }

    Ok(())
}
