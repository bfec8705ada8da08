//! Polygon collections: rings of MoveTo, LineTo..., ClosePath, grouped into
//! polygons by winding.
//!
//! Every ring with outer winding starts a new polygon, and every ring with
//! hole winding belongs to the polygon started most recently. This is what
//! lets a single feature carry several polygons.

use crate::codec::{Command, CommandKind};
use crate::error::Error;
use crate::geometry::{GeomType, Point, Polygon};
use crate::ring::{self, RingRole};

use super::advance_to;

/// Minimum number of vertices of a ring, counting the MoveTo position.
const MIN_RING_VERTICES: usize = 3;

/// A ring read from the stream, with the position of its MoveTo.
struct RawRing {
    start: usize,
    vertices: Vec<Point>,
}

pub(super) fn assemble(commands: &[Command], cursor: &mut Point) -> Result<Vec<Polygon>, Error> {
    let rings = read_rings(commands, cursor)?;

    let mut polygons: Vec<Polygon> = Vec::new();
    for RawRing { start, vertices } in rings {
        match ring::classify(&vertices, start)? {
            RingRole::Outer => polygons.push(Polygon {
                exterior: vertices,
                interiors: Vec::new(),
            }),
            RingRole::Hole => match polygons.last_mut() {
                Some(polygon) => polygon.interiors.push(vertices),
                None => return Err(Error::OrphanHole { command: start }),
            },
        }
    }

    Ok(polygons)
}

/// Splits the command records into closed rings, resolving the cursor.
fn read_rings(commands: &[Command], cursor: &mut Point) -> Result<Vec<RawRing>, Error> {
    let mut rings = Vec::new();
    let mut open: Option<RawRing> = None;

    for (position, command) in commands.iter().enumerate() {
        match *command {
            Command::MoveTo(delta) => {
                if open.is_some() {
                    return Err(Error::UnexpectedCommand {
                        geom_type: GeomType::Polygon,
                        found: CommandKind::MoveTo,
                        command: position,
                    });
                }

                *cursor += delta;
                open = Some(RawRing { start: position, vertices: vec![*cursor] });
            }
            Command::LineTo(delta) => {
                let Some(current) = open.as_mut() else {
                    return Err(Error::MissingMoveTo {
                        found: CommandKind::LineTo,
                        command: position,
                    });
                };

                *cursor += delta;
                current.vertices.push(*cursor);
            }
            Command::ClosePath => {
                let Some(mut closed) = open.take() else {
                    return Err(Error::MissingMoveTo {
                        found: CommandKind::ClosePath,
                        command: position,
                    });
                };

                // Rings are stored implicitly closed.
                let vertices = &mut closed.vertices;
                if vertices.len() > 1 && vertices.last() == vertices.first() {
                    vertices.pop();
                }

                if closed.vertices.len() < MIN_RING_VERTICES {
                    return Err(Error::DegenerateRing {
                        vertices: closed.vertices.len(),
                        command: closed.start,
                    });
                }

                rings.push(closed);
            }
        }
    }

    if let Some(unclosed) = open {
        return Err(Error::UnclosedRing { command: unclosed.start });
    }

    Ok(rings)
}

pub(super) fn flatten(
    polygons: &[Polygon],
    cursor: &mut Point,
    commands: &mut Vec<Command>,
) -> Result<(), Error> {
    let mut ring_index = 0;

    for polygon in polygons {
        for (position, vertices) in polygon.rings().enumerate() {
            let role = if position == 0 { RingRole::Outer } else { RingRole::Hole };
            emit_ring(vertices, role, ring_index, cursor, commands)?;
            ring_index += 1;
        }
    }

    Ok(())
}

/// Emits one ring with the winding its role requires.
///
/// A trailing vertex equal to the first is treated as an explicit closing
/// point and dropped. Rings wound the wrong way are walked backwards from
/// their first vertex.
fn emit_ring(
    vertices: &[Point],
    role: RingRole,
    ring_index: usize,
    cursor: &mut Point,
    commands: &mut Vec<Command>,
) -> Result<(), Error> {
    let vertices = match vertices {
        [first, .., last] if first == last => &vertices[..vertices.len() - 1],
        _ => vertices,
    };

    if vertices.len() < MIN_RING_VERTICES {
        return Err(Error::DegenerateRing {
            vertices: vertices.len(),
            command: ring_index,
        });
    }

    let first = vertices[0];
    let rest = &vertices[1..];
    let reversed = ring::classify(vertices, ring_index)? != role;

    commands.reserve(vertices.len() + 1);
    commands.push(Command::MoveTo(advance_to(cursor, first)?));
    if reversed {
        for &point in rest.iter().rev() {
            commands.push(Command::LineTo(advance_to(cursor, point)?));
        }
    } else {
        for &point in rest {
            commands.push(Command::LineTo(advance_to(cursor, point)?));
        }
    }
    commands.push(Command::ClosePath);

    Ok(())
}
