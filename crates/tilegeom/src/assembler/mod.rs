//! Cursor resolution between command records and geometries.
//!
//! Decoding folds the command records into a geometry while moving a single
//! cursor; encoding walks a geometry and emits each position as a delta from
//! the cursor. In both directions the cursor starts at [`Point::ORIGIN`] for
//! every feature and is never reset between lines or rings.

use crate::codec::Command;
use crate::error::Error;
use crate::geometry::{GeomType, Geometry, Point};
use crate::zigzag::{MAX_DELTA, MIN_DELTA};

mod lines;
mod points;
mod polygons;

/// Assembles command records into the geometry selected by `geom_type`.
///
/// ## Errors
/// * `Error::UnsupportedGeometryType` - For `GeomType::Unknown`
/// * Any grammar error of the selected geometry type
pub fn assemble(geom_type: GeomType, commands: &[Command]) -> Result<Geometry, Error> {
    let mut cursor = Point::ORIGIN;

    let geometry = match geom_type {
        GeomType::Point => Geometry::Points(points::assemble(commands, &mut cursor)?),
        GeomType::LineString => Geometry::LineStrings(lines::assemble(commands, &mut cursor)?),
        GeomType::Polygon => Geometry::Polygons(polygons::assemble(commands, &mut cursor)?),
        GeomType::Unknown => return Err(Error::UnsupportedGeometryType(geom_type)),
    };

    Ok(geometry)
}

/// Flattens a geometry into cursor-relative command records.
///
/// ## Errors
/// * `Error::DeltaOutOfRange` - Two consecutive positions are too far apart
/// * `Error::DegenerateLineString` / `Error::DegenerateRing` - The geometry
///   cannot be represented on the wire
pub fn flatten(geometry: &Geometry) -> Result<Vec<Command>, Error> {
    let mut cursor = Point::ORIGIN;
    let mut commands = Vec::new();

    match geometry {
        Geometry::Points(items) => points::flatten(items, &mut cursor, &mut commands)?,
        Geometry::LineStrings(items) => lines::flatten(items, &mut cursor, &mut commands)?,
        Geometry::Polygons(items) => polygons::flatten(items, &mut cursor, &mut commands)?,
    }

    Ok(commands)
}

/// Returns the delta from the cursor to `point` and moves the cursor there.
fn advance_to(cursor: &mut Point, point: Point) -> Result<Point, Error> {
    let delta = Point::new(checked_delta(point.x, cursor.x)?, checked_delta(point.y, cursor.y)?);
    *cursor = point;
    Ok(delta)
}

fn checked_delta(to: i64, from: i64) -> Result<i64, Error> {
    let delta = to
        .checked_sub(from)
        .ok_or(Error::DeltaOutOfRange { delta: to.saturating_sub(from) })?;

    if !(MIN_DELTA..=MAX_DELTA).contains(&delta) {
        return Err(Error::DeltaOutOfRange { delta });
    }

    Ok(delta)
}
