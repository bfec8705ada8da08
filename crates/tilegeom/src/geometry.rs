//! Geometry values produced by decoding and consumed by encoding.
//!
//! All coordinates are tile-local absolute integers. Rings never store a
//! duplicate closing point: the last vertex implicitly connects back to the
//! first.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use crate::error::Error;

/// A tile-local position. Doubles as the running cursor during decoding
/// and encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate, increasing to the right.
    pub x: i64,
    /// Vertical coordinate, increasing downwards.
    pub y: i64,
}

impl Point {
    /// The cursor position at the start of every feature.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Creates a point from its coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

// The operators use plain `i64` arithmetic and panic on overflow in debug
// builds. Decoding cannot overflow: a feature holds at most `u32::MAX`
// deltas of 32 bits each. Encoding computes deltas with checked arithmetic.
impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An ordered sequence of points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineString(pub Vec<Point>);

impl LineString {
    /// Creates a line string from anything convertible into points.
    pub fn new<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self(points.into_iter().map(Into::into).collect())
    }

    /// Returns the points of the line string.
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the line string has no points.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A polygon: one outer ring and any number of holes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polygon {
    /// The exterior boundary.
    pub exterior: Vec<Point>,
    /// Interior boundaries, in stream order.
    pub interiors: Vec<Vec<Point>>,
}

impl Polygon {
    /// Creates a polygon without holes.
    pub fn new<I, P>(exterior: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self {
            exterior: exterior.into_iter().map(Into::into).collect(),
            interiors: Vec::new(),
        }
    }

    /// Adds a hole to the polygon.
    pub fn with_interior<I, P>(mut self, interior: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        self.interiors
            .push(interior.into_iter().map(Into::into).collect());
        self
    }

    /// Iterates the exterior ring followed by every hole.
    pub fn rings(&self) -> impl Iterator<Item = &[Point]> {
        std::iter::once(self.exterior.as_slice()).chain(self.interiors.iter().map(Vec::as_slice))
    }
}

/// The geometry-type tag supplied by the container format.
///
/// Values match the container's `GeomType` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeomType {
    /// No geometry grammar applies.
    Unknown = 0,
    /// One or more points.
    Point = 1,
    /// One or more line strings.
    LineString = 2,
    /// One or more polygons.
    Polygon = 3,
}

impl TryFrom<u32> for GeomType {
    type Error = Error;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(GeomType::Unknown),
            1 => Ok(GeomType::Point),
            2 => Ok(GeomType::LineString),
            3 => Ok(GeomType::Polygon),
            _ => Err(Error::UnknownGeometryType(tag)),
        }
    }
}

impl fmt::Display for GeomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeomType::Unknown => "Unknown",
            GeomType::Point => "Point",
            GeomType::LineString => "LineString",
            GeomType::Polygon => "Polygon",
        };
        f.write_str(name)
    }
}

/// The geometry of one feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Geometry {
    /// A point collection.
    Points(Vec<Point>),
    /// A line string collection.
    LineStrings(Vec<LineString>),
    /// A polygon collection.
    Polygons(Vec<Polygon>),
}

impl Geometry {
    /// Returns the tag the container should store alongside the encoded
    /// geometry.
    pub fn geom_type(&self) -> GeomType {
        match self {
            Geometry::Points(_) => GeomType::Point,
            Geometry::LineStrings(_) => GeomType::LineString,
            Geometry::Polygons(_) => GeomType::Polygon,
        }
    }

    /// Returns the number of top-level items (points, lines or polygons).
    pub fn len(&self) -> usize {
        match self {
            Geometry::Points(points) => points.len(),
            Geometry::LineStrings(lines) => lines.len(),
            Geometry::Polygons(polygons) => polygons.len(),
        }
    }

    /// Returns `true` if the collection holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
