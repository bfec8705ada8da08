//! Point collections: a run of MoveTo commands, one point each.

use crate::codec::Command;
use crate::error::Error;
use crate::geometry::{GeomType, Point};

use super::advance_to;

pub(super) fn assemble(commands: &[Command], cursor: &mut Point) -> Result<Vec<Point>, Error> {
    let mut points = Vec::with_capacity(commands.len());

    for (position, command) in commands.iter().enumerate() {
        match *command {
            Command::MoveTo(delta) => {
                *cursor += delta;
                points.push(*cursor);
            }
            Command::LineTo(_) | Command::ClosePath => {
                return Err(Error::UnexpectedCommand {
                    geom_type: GeomType::Point,
                    found: command.kind(),
                    command: position,
                });
            }
        }
    }

    Ok(points)
}

pub(super) fn flatten(
    points: &[Point],
    cursor: &mut Point,
    commands: &mut Vec<Command>,
) -> Result<(), Error> {
    commands.reserve(points.len());
    for &point in points {
        commands.push(Command::MoveTo(advance_to(cursor, point)?));
    }

    Ok(())
}
