//! Ring orientation via the signed shoelace area.
//!
//! Tile coordinates grow rightwards and downwards, so a ring that looks
//! clockwise on screen has a positive shoelace sum. The wire format uses
//! that winding for exterior rings and the opposite winding for holes.

use crate::error::Error;
use crate::geometry::Point;

/// The role a ring plays in a polygon, derived from its winding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingRole {
    /// Positive area: starts a new polygon.
    Outer,
    /// Negative area: a hole in the preceding outer ring.
    Hole,
}

/// Returns twice the signed area of the ring, treating it as closed.
///
/// Computed in `i128` so that products of 64-bit coordinates cannot
/// overflow.
pub fn signed_area_doubled(ring: &[Point]) -> i128 {
    let Some(&last) = ring.last() else {
        return 0;
    };

    let mut prev = last;
    let mut sum: i128 = 0;
    for &point in ring {
        sum += prev.x as i128 * point.y as i128 - point.x as i128 * prev.y as i128;
        prev = point;
    }

    sum
}

/// Classifies a ring as outer or hole by the sign of its area.
///
/// `position` is only used to give a degenerate ring some context in the
/// returned error.
///
/// ## Errors
/// * `Error::DegenerateRing` - If the ring encloses zero area
pub fn classify(ring: &[Point], position: usize) -> Result<RingRole, Error> {
    match signed_area_doubled(ring).signum() {
        1 => Ok(RingRole::Outer),
        -1 => Ok(RingRole::Hole),
        _ => Err(Error::DegenerateRing {
            vertices: ring.len(),
            command: position,
        }),
    }
}
