//! An implementation of the OGC Simple Feature Access geometry model with
//! codecs for the two standard interchange formats, Well-Known Text and
//! Well-Known Binary.
//!
//! The data model is a closed hierarchy of immutable value trees: [`Point`],
//! [`LineString`], [`Polygon`], [`Triangle`], the homogeneous collections
//! ([`MultiPoint`], [`MultiLineString`], [`MultiPolygon`],
//! [`PolyhedralSurface`], [`Tin`]) and the heterogeneous
//! [`GeometryCollection`], unified under the [`Geometry`] enum. Every tree
//! shares one dimensionality tag ([`Dimension`]) and one SRID across all of
//! its nodes; constructors and codecs enforce this along with ring closure
//! and the homogeneity of collection members.
//!
//! The SRID is an opaque tag. It is never embedded in WKT or WKB payloads;
//! callers supply it alongside the text or bytes.
//!
//! ```
//! use simple_features::Geometry;
//!
//! let geometry = Geometry::from_text("POINT Z (1 2 3)")?;
//! assert!(geometry.is_3d());
//! assert_eq!(geometry.as_text(), "POINT Z (1 2 3)");
//!
//! let wkb = geometry.as_binary();
//! assert_eq!(Geometry::from_binary(&wkb)?, geometry);
//! # Ok::<(), simple_features::GeometryError>(())
//! ```

pub mod coord;
pub mod dimension;
pub mod error;
pub mod geometry;
pub mod io;

pub use coord::Coord;
pub use dimension::Dimension;
pub use error::{GeometryError, Result};
pub use geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon, PolyhedralSurface, Tin, Triangle,
};
pub use io::wkb::Endianness;
