//! # tilegeom: vector tile geometry command codec
//!
//! Decodes a feature's geometry, a stream of `u32` command and parameter
//! integers, into points, line strings or polygons, and encodes such
//! geometries back into the same stream.
//!
//! ## Usage Example
//!
//! ```
//! use tilegeom::{decode_geometry, encode_geometry, GeomType, Geometry, LineString};
//!
//! let words = [9, 50, 34, 18, 10, 0, 0, 10];
//! let geometry = decode_geometry(GeomType::LineString, &words).unwrap();
//!
//! assert_eq!(
//!     geometry,
//!     Geometry::LineStrings(vec![LineString::new([(25, 17), (30, 17), (30, 22)])])
//! );
//! assert_eq!(encode_geometry(&geometry).unwrap(), words);
//! ```
//!
//! ## Architecture
//!
//! * **zigzag**: signed deltas to and from unsigned wire parameters
//! * **codec**: command integers and the flat command/parameter stream
//! * **assembler**: resolves deltas against a per-feature cursor and applies
//!   each geometry type's command grammar
//! * **ring**: ring winding, used to tell exterior rings from holes
//!
//! Every entry point is a pure function of its input; features can be
//! decoded and encoded from any number of threads at once.

pub mod assembler;
pub mod codec;
pub mod config;
pub mod error;
pub mod geometry;
pub mod ring;
pub mod zigzag;

#[cfg(test)]
mod tests;

pub use codec::{Command, CommandKind, Commands, Decodable, Encodable};
pub use config::CodecConfig;
pub use error::Error;
pub use geometry::{GeomType, Geometry, LineString, Point, Polygon};
pub use ring::RingRole;

/// Decodes and encodes feature geometries under a [`CodecConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryCodec {
    config: CodecConfig,
}

impl GeometryCodec {
    /// Creates a codec applying the given limits.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Decodes one feature's geometry integers into a geometry of the given
    /// type.
    ///
    /// No partial geometry is returned: the first error aborts the feature.
    #[tracing::instrument(skip_all, fields(%geom_type, words = words.len()))]
    pub fn decode(&self, geom_type: GeomType, words: &[u32]) -> Result<Geometry, Error> {
        let result = codec::decode_stream(words, self.config.max_points)
            .and_then(|commands| assembler::assemble(geom_type, &commands));

        match &result {
            Ok(geometry) => tracing::debug!(items = geometry.len(), "decoded feature geometry"),
            Err(error) => tracing::debug!(%error, "could not decode feature geometry"),
        }

        result
    }

    /// Encodes a geometry into the integers to store in the feature.
    ///
    /// The container should store [`Geometry::geom_type`] as the feature's
    /// geometry type.
    #[tracing::instrument(skip_all, fields(geom_type = %geometry.geom_type(), items = geometry.len()))]
    pub fn encode(&self, geometry: &Geometry) -> Result<Vec<u32>, Error> {
        let result =
            assembler::flatten(geometry).and_then(|commands| codec::encode_stream(&commands));

        match &result {
            Ok(words) => tracing::debug!(words = words.len(), "encoded feature geometry"),
            Err(error) => tracing::debug!(%error, "could not encode feature geometry"),
        }

        result
    }
}

/// Decodes one feature's geometry with the default limits.
pub fn decode_geometry(geom_type: GeomType, words: &[u32]) -> Result<Geometry, Error> {
    GeometryCodec::default().decode(geom_type, words)
}

/// Encodes a geometry with the default limits.
pub fn encode_geometry(geometry: &Geometry) -> Result<Vec<u32>, Error> {
    GeometryCodec::default().encode(geometry)
}
