//! End-to-end tests over whole feature streams: the published wire examples
//! and encode -> decode round trips for generated geometries.

use crate::{
    decode_geometry, encode_geometry, CodecConfig, CommandKind, Error, GeomType, Geometry,
    GeometryCodec, LineString, Point, Polygon,
};
use more_asserts::assert_lt;
use proptest::prelude::*;
use test_case::test_case;

/// Coordinate bound for generated geometries, well inside a tile's buffer.
const MAX_COORD: i64 = 8192;

fn points(coords: &[(i64, i64)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

/// Decodes the words, checks the geometry, and checks that encoding it
/// reproduces the exact words.
fn assert_wire_example(geom_type: GeomType, words: &[u32], expected: Geometry) {
    let decoded = decode_geometry(geom_type, words).expect("decoding failed");
    assert_eq!(decoded, expected);
    assert_eq!(decoded.geom_type(), geom_type);

    let encoded = encode_geometry(&decoded).expect("encoding failed");
    assert_eq!(encoded, words);
}

#[test_log::test]
fn wire_example_point() {
    assert_wire_example(
        GeomType::Point,
        &[9, 50, 34],
        Geometry::Points(points(&[(25, 17)])),
    );
}

#[test_log::test]
fn wire_example_multipoint() {
    assert_wire_example(
        GeomType::Point,
        &[17, 10, 14, 3, 9],
        Geometry::Points(points(&[(5, 7), (3, 2)])),
    );
}

#[test_log::test]
fn wire_example_linestring() {
    assert_wire_example(
        GeomType::LineString,
        &[9, 4, 4, 18, 0, 16, 16, 0],
        Geometry::LineStrings(vec![LineString::new([(2, 2), (2, 10), (10, 10)])]),
    );
}

#[test_log::test]
fn cursor_resolved_linestring() {
    // MoveTo(+25, +17), then LineTo (+5, 0) and (0, +5).
    assert_wire_example(
        GeomType::LineString,
        &[9, 50, 34, 18, 10, 0, 0, 10],
        Geometry::LineStrings(vec![LineString::new([(25, 17), (30, 17), (30, 22)])]),
    );
}

#[test_log::test]
fn wire_example_multilinestring() {
    assert_wire_example(
        GeomType::LineString,
        &[9, 4, 4, 18, 0, 16, 16, 0, 9, 17, 17, 10, 4, 8],
        Geometry::LineStrings(vec![
            LineString::new([(2, 2), (2, 10), (10, 10)]),
            LineString::new([(1, 1), (3, 5)]),
        ]),
    );
}

#[test_log::test]
fn wire_example_polygon() {
    assert_wire_example(
        GeomType::Polygon,
        &[9, 6, 12, 18, 10, 12, 24, 44, 15],
        Geometry::Polygons(vec![Polygon::new([(3, 6), (8, 12), (20, 34)])]),
    );
}

#[test_log::test]
fn wire_example_multipolygon() {
    #[rustfmt::skip]
    let words = [
        9, 0, 0, 26, 20, 0, 0, 20, 19, 0, 15,
        9, 22, 2, 26, 18, 0, 0, 18, 17, 0, 15,
        9, 4, 13, 26, 0, 8, 8, 0, 0, 7, 15,
    ];

    assert_wire_example(
        GeomType::Polygon,
        &words,
        Geometry::Polygons(vec![
            Polygon::new([(0, 0), (10, 0), (10, 10), (0, 10)]),
            Polygon::new([(11, 11), (20, 11), (20, 20), (11, 20)])
                .with_interior([(13, 13), (13, 17), (17, 17), (17, 13)]),
        ]),
    );
}

#[test_log::test]
fn explicitly_closed_ring_decodes_implicitly_closed() {
    // The last LineTo lands back on (0, 0) before the ClosePath.
    let words = [9, 0, 0, 26, 20, 0, 0, 20, 19, 19, 15];
    let expected = Geometry::Polygons(vec![Polygon::new([(0, 0), (10, 0), (10, 10)])]);

    let decoded = decode_geometry(GeomType::Polygon, &words).unwrap();
    assert_eq!(decoded, expected);

    let encoded = encode_geometry(&decoded).unwrap();
    assert_eq!(encoded, [9, 0, 0, 18, 20, 0, 0, 20, 15]);
    assert_eq!(decode_geometry(GeomType::Polygon, &encoded).unwrap(), decoded);
}

#[test_case(GeomType::Point; "points")]
#[test_case(GeomType::LineString; "linestrings")]
#[test_case(GeomType::Polygon; "polygons")]
fn empty_stream_is_empty_collection(geom_type: GeomType) {
    let geometry = decode_geometry(geom_type, &[]).unwrap();

    assert!(geometry.is_empty());
    assert_eq!(geometry.geom_type(), geom_type);
    assert_eq!(encode_geometry(&geometry), Ok(Vec::new()));
}

#[test_case(&[9, 2, 2, 10, 2, 2], CommandKind::LineTo, 1; "lineto in point stream")]
#[test_case(&[9, 2, 2, 15], CommandKind::ClosePath, 1; "closepath in point stream")]
fn point_stream_rejects_other_commands(words: &[u32], found: CommandKind, command: usize) {
    assert_eq!(
        decode_geometry(GeomType::Point, words),
        Err(Error::UnexpectedCommand {
            geom_type: GeomType::Point,
            found,
            command
        })
    );
}

#[test]
fn hole_before_outer_ring_is_orphaned() {
    // Only the counter-clockwise interior ring of the multipolygon example.
    let words = [9, 26, 26, 26, 0, 8, 8, 0, 0, 7, 15];

    assert_eq!(
        decode_geometry(GeomType::Polygon, &words),
        Err(Error::OrphanHole { command: 0 })
    );
}

#[test]
fn stream_errors_abort_the_feature() {
    assert_eq!(
        decode_geometry(GeomType::LineString, &[9, 4, 4, 18, 0, 16, 16]),
        Err(Error::UnevenParameterList {
            kind: CommandKind::LineTo,
            declared: 4,
            available: 3,
            word: 3
        })
    );
}

#[test]
fn unknown_geometry_type_cannot_be_decoded() {
    assert_eq!(
        decode_geometry(GeomType::Unknown, &[9, 0, 0]),
        Err(Error::UnsupportedGeometryType(GeomType::Unknown))
    );
}

#[test]
fn codec_applies_configured_point_limit() {
    let codec = GeometryCodec::new(CodecConfig { max_points: 2 });
    let words = [25, 0, 0, 2, 2, 4, 4];

    assert_eq!(
        codec.decode(GeomType::Point, &words),
        Err(Error::TooManyPoints {
            limit: 2,
            declared: 3
        })
    );
    assert!(GeometryCodec::default().decode(GeomType::Point, &words).is_ok());
}

#[test]
fn features_decode_in_parallel() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GeometryCodec>();
    assert_send_sync::<Geometry>();

    let codec = GeometryCodec::default();
    let words = [9, 4, 4, 18, 0, 16, 16, 0, 9, 17, 17, 10, 4, 8];
    let expected = codec.decode(GeomType::LineString, &words).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || codec.decode(GeomType::LineString, &words)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().as_ref(), Ok(&expected));
        }
    });
}

#[test]
fn encoding_rejects_far_apart_points() {
    let geometry = Geometry::Points(points(&[(0, 0), (1 << 32, 0)]));

    assert_eq!(
        encode_geometry(&geometry),
        Err(Error::DeltaOutOfRange { delta: 1 << 32 })
    );
}

fn coord() -> impl Strategy<Value = Point> {
    (-MAX_COORD..MAX_COORD, -MAX_COORD..MAX_COORD).prop_map(Point::from)
}

/// Axis-aligned rectangles with exterior winding, optionally with a
/// rectangular hole one unit inside.
fn polygon() -> impl Strategy<Value = Polygon> {
    (coord(), 4..512_i64, 4..512_i64, any::<bool>()).prop_map(|(origin, w, h, with_hole)| {
        let Point { x, y } = origin;
        let polygon = Polygon::new([(x, y), (x + w, y), (x + w, y + h), (x, y + h)]);
        if with_hole {
            polygon.with_interior([
                (x + 1, y + 1),
                (x + 1, y + h - 1),
                (x + w - 1, y + h - 1),
                (x + w - 1, y + 1),
            ])
        } else {
            polygon
        }
    })
}

fn roundtrip(geometry: &Geometry) -> Result<Geometry, Error> {
    let words = encode_geometry(geometry)?;
    decode_geometry(geometry.geom_type(), &words)
}

proptest! {
    #[test]
    fn roundtrip_points(items in prop::collection::vec(coord(), 0..64)) {
        let geometry = Geometry::Points(items);
        prop_assert_eq!(roundtrip(&geometry), Ok(geometry));
    }

    #[test]
    fn roundtrip_linestrings(
        items in prop::collection::vec(prop::collection::vec(coord(), 2..32), 0..8)
    ) {
        let geometry = Geometry::LineStrings(items.into_iter().map(LineString).collect());
        prop_assert_eq!(roundtrip(&geometry), Ok(geometry));
    }

    #[test]
    fn roundtrip_polygons(items in prop::collection::vec(polygon(), 0..8)) {
        let geometry = Geometry::Polygons(items);
        prop_assert_eq!(roundtrip(&geometry), Ok(geometry));
    }

    #[test]
    fn encoded_points_use_one_command_integer(items in prop::collection::vec(coord(), 1..64)) {
        let words = encode_geometry(&Geometry::Points(items.clone())).unwrap();

        prop_assert_eq!(words.len(), 1 + 2 * items.len());
        prop_assert_eq!(words[0], (items.len() as u32) << 3 | 1);
        // Deltas between coordinates in the generated range stay small.
        for &word in &words[1..] {
            assert_lt!(word, 4 * MAX_COORD as u32);
        }
    }
}
