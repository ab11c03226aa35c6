//! The closed hierarchy of geometry types and the structural queries shared
//! by all of them.
//!
//! Geometries are immutable value trees: construction validates the
//! structural invariants, and every "modifying" operation ([`Geometry::
//! with_srid`], the codecs) produces a new owned tree.

mod geometry_collection;
mod line_string;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod polyhedral_surface;
mod tin;
mod triangle;

pub use geometry_collection::GeometryCollection;
pub use line_string::LineString;
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
pub use polyhedral_surface::PolyhedralSurface;
pub use tin::Tin;
pub use triangle::Triangle;

use serde_json::{json, Value};

use crate::dimension::Dimension;
use crate::error::{GeometryError, Result};
use crate::io::wkb::Endianness;

/// Any geometry of the Simple Feature Access hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
    PolyhedralSurface(PolyhedralSurface),
    Tin(Tin),
    Triangle(Triangle),
}

macro_rules! delegate {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            Geometry::Point($g) => $body,
            Geometry::LineString($g) => $body,
            Geometry::Polygon($g) => $body,
            Geometry::MultiPoint($g) => $body,
            Geometry::MultiLineString($g) => $body,
            Geometry::MultiPolygon($g) => $body,
            Geometry::GeometryCollection($g) => $body,
            Geometry::PolyhedralSurface($g) => $body,
            Geometry::Tin($g) => $body,
            Geometry::Triangle($g) => $body,
        }
    };
}

impl Geometry {
    /// Parse Well-Known Text, with SRID 0.
    pub fn from_text(wkt: &str) -> Result<Self> {
        Self::from_text_srid(wkt, 0)
    }

    /// Parse Well-Known Text, tagging every node of the resulting tree with
    /// `srid`.
    pub fn from_text_srid(wkt: &str, srid: u32) -> Result<Self> {
        crate::io::wkt::read_wkt(wkt, srid)
    }

    /// Serialize to Well-Known Text.
    pub fn as_text(&self) -> String {
        crate::io::wkt::write_wkt(self)
    }

    /// Parse Well-Known Binary, with SRID 0. The byte order is detected per
    /// node from the leading order byte.
    pub fn from_binary(wkb: &[u8]) -> Result<Self> {
        Self::from_binary_srid(wkb, 0)
    }

    /// Parse Well-Known Binary, tagging every node of the resulting tree with
    /// `srid`.
    pub fn from_binary_srid(wkb: &[u8], srid: u32) -> Result<Self> {
        crate::io::wkb::read_wkb(wkb, srid)
    }

    /// Serialize to Well-Known Binary in the host's native byte order.
    pub fn as_binary(&self) -> Vec<u8> {
        self.as_binary_in(Endianness::native())
    }

    /// Serialize to Well-Known Binary, emitting `order` uniformly through the
    /// whole tree.
    pub fn as_binary_in(&self, order: Endianness) -> Vec<u8> {
        crate::io::wkb::write_wkb(self, order)
    }

    /// The dimensionality tag shared by every node of this tree.
    pub fn dim(&self) -> Dimension {
        delegate!(self, g => g.dimension())
    }

    /// The topological dimension: 0 for point-like, 1 for curve-like, 2 for
    /// surface-like geometries. For a collection, the maximum dimension among
    /// its non-empty members, or 0 if there are none.
    pub fn dimension(&self) -> usize {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => 0,
            Geometry::LineString(_) | Geometry::MultiLineString(_) => 1,
            Geometry::Polygon(_)
            | Geometry::MultiPolygon(_)
            | Geometry::PolyhedralSurface(_)
            | Geometry::Tin(_)
            | Geometry::Triangle(_) => 2,
            Geometry::GeometryCollection(gc) => gc
                .geometries()
                .filter(|g| !g.is_empty())
                .map(Geometry::dimension)
                .max()
                .unwrap_or(0),
        }
    }

    /// The number of values per coordinate: 2, 3 or 4.
    pub fn coordinate_dimension(&self) -> usize {
        self.dim().coordinate_dimension()
    }

    /// The coordinate dimension, excluding the M axis.
    pub fn spatial_dimension(&self) -> usize {
        self.dim().spatial_dimension()
    }

    pub fn is_empty(&self) -> bool {
        delegate!(self, g => g.is_empty())
    }

    pub fn is_3d(&self) -> bool {
        self.dim().has_z()
    }

    pub fn is_measured(&self) -> bool {
        self.dim().has_m()
    }

    /// The name of the concrete variant, e.g. `"Point"` or `"TIN"`.
    pub fn geometry_type(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::GeometryCollection(_) => "GeometryCollection",
            Geometry::PolyhedralSurface(_) => "PolyhedralSurface",
            Geometry::Tin(_) => "TIN",
            Geometry::Triangle(_) => "Triangle",
        }
    }

    /// The spatial reference identifier shared by every node of this tree.
    /// The value is an opaque tag; it is never interpreted.
    pub fn srid(&self) -> u32 {
        delegate!(self, g => g.srid())
    }

    /// A structurally identical tree with `srid` at every node.
    pub fn with_srid(&self, srid: u32) -> Self {
        delegate!(self, g => g.with_srid(srid).into())
    }

    /// The number of immediate children: points of a curve, rings of a
    /// polygon, members of a collection. Zero for points and all EMPTY
    /// geometries.
    pub fn num_geometries(&self) -> usize {
        match self {
            Geometry::Point(_) => 0,
            Geometry::LineString(ls) => ls.num_points(),
            Geometry::Polygon(p) => p.rings().len(),
            Geometry::MultiPoint(mp) => mp.num_points(),
            Geometry::MultiLineString(mls) => mls.num_line_strings(),
            Geometry::MultiPolygon(mp) => mp.num_polygons(),
            Geometry::GeometryCollection(gc) => gc.num_geometries(),
            Geometry::PolyhedralSurface(ps) => ps.num_patches(),
            Geometry::Tin(tin) => tin.num_patches(),
            Geometry::Triangle(t) => usize::from(!t.is_empty()),
        }
    }

    /// The `n`-th immediate child, 1-based.
    pub fn geometry_n(&self, n: usize) -> Result<Geometry> {
        let i = n
            .checked_sub(1)
            .ok_or(GeometryError::IndexOutOfRange(n))?;
        self.geometries()
            .into_iter()
            .nth(i)
            .ok_or(GeometryError::IndexOutOfRange(n))
    }

    /// The immediate children in insertion order. Composites are not
    /// flattened: a nested collection is yielded as a single child.
    pub fn geometries(&self) -> Vec<Geometry> {
        match self {
            Geometry::Point(_) => Vec::new(),
            Geometry::LineString(ls) => ls.points().cloned().map(Geometry::Point).collect(),
            Geometry::Polygon(p) => p.rings().cloned().map(Geometry::LineString).collect(),
            Geometry::MultiPoint(mp) => mp.points().cloned().map(Geometry::Point).collect(),
            Geometry::MultiLineString(mls) => mls
                .line_strings()
                .cloned()
                .map(Geometry::LineString)
                .collect(),
            Geometry::MultiPolygon(mp) => {
                mp.polygons().cloned().map(Geometry::Polygon).collect()
            }
            Geometry::GeometryCollection(gc) => gc.geometries().cloned().collect(),
            Geometry::PolyhedralSurface(ps) => {
                ps.patches().cloned().map(Geometry::Polygon).collect()
            }
            Geometry::Tin(tin) => tin.patches().cloned().map(Geometry::Triangle).collect(),
            Geometry::Triangle(t) => t
                .ring()
                .cloned()
                .map(Geometry::LineString)
                .into_iter()
                .collect(),
        }
    }

    /// A nested numeric-array view of the coordinates: an empty geometry is
    /// `[]`, a point is its flat coordinate list, a curve is a list of
    /// coordinate lists, and a surface or collection is the list of its
    /// children's arrays.
    pub fn to_array(&self) -> Value {
        match self {
            Geometry::Point(p) => match p.coord() {
                Some(coord) => json!(coord.to_vec()),
                None => json!([]),
            },
            Geometry::LineString(ls) => {
                Value::Array(ls.points().map(|p| match p.coord() {
                    Some(coord) => json!(coord.to_vec()),
                    None => json!([]),
                }).collect())
            }
            _ => Value::Array(self.geometries().iter().map(Geometry::to_array).collect()),
        }
    }

    /// Structural equality: same concrete variant, dimension, SRID,
    /// bit-for-bit identical coordinates, same child order. This is not
    /// geometric equivalence.
    pub fn is_identical_to(&self, other: &Geometry) -> bool {
        self == other
    }
}

/// Validate the members of a composite: all must share the composite's
/// dimension and agree on a single SRID, which the composite adopts.
pub(crate) fn validate_members<T>(
    dimension: Dimension,
    members: &[T],
    what: &str,
    dim_of: impl Fn(&T) -> Dimension,
    srid_of: impl Fn(&T) -> u32,
) -> Result<u32> {
    for member in members {
        dimension.check_same(dim_of(member), what)?;
    }
    let srid = members.first().map(&srid_of).unwrap_or(0);
    for member in members {
        if srid_of(member) != srid {
            return Err(GeometryError::InvalidGeometry(format!(
                "{what} SRID {} differs from {srid}",
                srid_of(member)
            )));
        }
    }
    Ok(srid)
}

macro_rules! impl_concrete {
    ($variant:ident, $ty:ty, $name:literal) => {
        impl From<$ty> for Geometry {
            fn from(value: $ty) -> Self {
                Geometry::$variant(value)
            }
        }

        impl TryFrom<Geometry> for $ty {
            type Error = GeometryError;

            fn try_from(value: Geometry) -> Result<Self> {
                match value {
                    Geometry::$variant(g) => Ok(g),
                    other => Err(GeometryError::UnexpectedGeometryType {
                        expected: $name,
                        actual: other.geometry_type(),
                    }),
                }
            }
        }

        impl $ty {
            /// Parse Well-Known Text known to hold this concrete variant.
            pub fn from_text(wkt: &str) -> Result<Self> {
                Self::from_text_srid(wkt, 0)
            }

            /// Parse Well-Known Text known to hold this concrete variant.
            pub fn from_text_srid(wkt: &str, srid: u32) -> Result<Self> {
                Geometry::from_text_srid(wkt, srid)?.try_into()
            }

            /// Parse Well-Known Binary known to hold this concrete variant.
            pub fn from_binary(wkb: &[u8]) -> Result<Self> {
                Self::from_binary_srid(wkb, 0)
            }

            /// Parse Well-Known Binary known to hold this concrete variant.
            pub fn from_binary_srid(wkb: &[u8], srid: u32) -> Result<Self> {
                Geometry::from_binary_srid(wkb, srid)?.try_into()
            }

            /// Serialize to Well-Known Text.
            pub fn as_text(&self) -> String {
                Geometry::from(self.clone()).as_text()
            }

            /// Serialize to Well-Known Binary in the host's native byte order.
            pub fn as_binary(&self) -> Vec<u8> {
                Geometry::from(self.clone()).as_binary()
            }

            /// Serialize to Well-Known Binary in the given byte order.
            pub fn as_binary_in(&self, order: Endianness) -> Vec<u8> {
                Geometry::from(self.clone()).as_binary_in(order)
            }
        }
    };
}

impl_concrete!(Point, Point, "Point");
impl_concrete!(LineString, LineString, "LineString");
impl_concrete!(Polygon, Polygon, "Polygon");
impl_concrete!(MultiPoint, MultiPoint, "MultiPoint");
impl_concrete!(MultiLineString, MultiLineString, "MultiLineString");
impl_concrete!(MultiPolygon, MultiPolygon, "MultiPolygon");
impl_concrete!(GeometryCollection, GeometryCollection, "GeometryCollection");
impl_concrete!(PolyhedralSurface, PolyhedralSurface, "PolyhedralSurface");
impl_concrete!(Tin, Tin, "TIN");
impl_concrete!(Triangle, Triangle, "Triangle");

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coord;

    fn geom(wkt: &str) -> Geometry {
        Geometry::from_text(wkt).unwrap()
    }

    #[test]
    fn topological_dimension() {
        assert_eq!(geom("POINT (1 2)").dimension(), 0);
        assert_eq!(geom("POINT ZM EMPTY").dimension(), 0);
        assert_eq!(geom("LINESTRING (1 2, 3 4)").dimension(), 1);
        assert_eq!(geom("POLYGON ((0 0, 0 1, 1 1, 1 0, 0 0))").dimension(), 2);
        assert_eq!(geom("MULTIPOINT EMPTY").dimension(), 0);
        assert_eq!(geom("MULTIPOLYGON M EMPTY").dimension(), 2);
        assert_eq!(geom("TRIANGLE ((0 0, 0 1, 1 0, 0 0))").dimension(), 2);
    }

    #[test]
    fn collection_dimension_ignores_empty_members() {
        assert_eq!(geom("GEOMETRYCOLLECTION EMPTY").dimension(), 0);
        assert_eq!(geom("GEOMETRYCOLLECTION (POINT (1 1))").dimension(), 0);
        assert_eq!(
            geom("GEOMETRYCOLLECTION (POINT (1 1), MULTILINESTRING EMPTY)").dimension(),
            0
        );
        assert_eq!(
            geom("GEOMETRYCOLLECTION (POLYGON EMPTY, LINESTRING (1 1, 2 2), POINT (3 3))")
                .dimension(),
            1
        );
        assert_eq!(
            geom("GEOMETRYCOLLECTION Z (LINESTRING Z (1 2 3, 4 5 6))").dimension(),
            1
        );
    }

    #[test]
    fn coordinate_and_spatial_dimension() {
        for (wkt, coordinate, spatial) in [
            ("POINT (1 2)", 2, 2),
            ("POINT Z (1 2 3)", 3, 3),
            ("POINT M (1 2 3)", 3, 2),
            ("POINT ZM (1 2 3 4)", 4, 3),
        ] {
            let g = geom(wkt);
            assert_eq!(g.coordinate_dimension(), coordinate, "{wkt}");
            assert_eq!(g.spatial_dimension(), spatial, "{wkt}");
        }
    }

    #[test]
    fn geometry_type_names() {
        assert_eq!(geom("POINT EMPTY").geometry_type(), "Point");
        assert_eq!(geom("TIN ZM EMPTY").geometry_type(), "TIN");
        assert_eq!(
            geom("POLYHEDRALSURFACE EMPTY").geometry_type(),
            "PolyhedralSurface"
        );
        assert_eq!(geom("TRIANGLE M EMPTY").geometry_type(), "Triangle");
    }

    #[test]
    fn emptiness() {
        assert!(geom("POINT EMPTY").is_empty());
        assert!(!geom("POINT (1 2)").is_empty());
        assert!(geom("GEOMETRYCOLLECTION EMPTY").is_empty());
        assert!(geom("GEOMETRYCOLLECTION (POINT EMPTY, LINESTRING EMPTY)").is_empty());
        assert!(!geom("GEOMETRYCOLLECTION (POINT (1 2))").is_empty());
    }

    #[test]
    fn geometry_n_is_one_based() {
        let gc = geom("GEOMETRYCOLLECTION (LINESTRING (1 2, 3 4), POINT (5 6))");
        assert_eq!(gc.num_geometries(), 2);
        assert!(matches!(
            gc.geometry_n(0),
            Err(GeometryError::IndexOutOfRange(0))
        ));
        assert_eq!(gc.geometry_n(1).unwrap().as_text(), "LINESTRING (1 2, 3 4)");
        assert_eq!(gc.geometry_n(2).unwrap().as_text(), "POINT (5 6)");
        assert!(matches!(
            gc.geometry_n(3),
            Err(GeometryError::IndexOutOfRange(3))
        ));
    }

    #[test]
    fn geometry_n_on_empty_is_always_out_of_range() {
        let gc = geom("GEOMETRYCOLLECTION EMPTY");
        assert_eq!(gc.num_geometries(), 0);
        for n in [0, 1, 2] {
            assert!(matches!(
                gc.geometry_n(n),
                Err(GeometryError::IndexOutOfRange(_))
            ));
        }
    }

    #[test]
    fn polygon_children_are_rings() {
        let polygon = geom("POLYGON ((0 0, 0 3, 3 3, 3 0, 0 0), (1 1, 1 2, 2 2, 1 1))");
        assert_eq!(polygon.num_geometries(), 2);
        assert_eq!(
            polygon.geometry_n(1).unwrap().as_text(),
            "LINESTRING (0 0, 0 3, 3 3, 3 0, 0 0)"
        );
    }

    #[test]
    fn with_srid_propagates_to_every_node() {
        let gc = geom("GEOMETRYCOLLECTION (POINT (1 2), GEOMETRYCOLLECTION (LINESTRING (3 4, 5 6)))");
        let tagged = gc.with_srid(4326);
        fn assert_srid(g: &Geometry, srid: u32) {
            assert_eq!(g.srid(), srid);
            for child in g.geometries() {
                assert_srid(&child, srid);
            }
        }
        assert_srid(&tagged, 4326);
        assert_eq!(tagged.as_text(), gc.as_text());
    }

    #[test]
    fn identical_requires_same_srid() {
        let a = geom("POINT (1 2)");
        let b = Geometry::from_text_srid("POINT (1 2)", 4326).unwrap();
        assert!(!a.is_identical_to(&b));
        assert!(a.is_identical_to(&b.with_srid(0)));
    }

    #[test]
    fn identical_is_exact_and_ordered() {
        for (a, b, identical) in [
            ("POINT EMPTY", "POINT EMPTY", true),
            ("POINT EMPTY", "POINT Z EMPTY", false),
            ("POINT (1 1)", "POINT (1 1)", true),
            ("POINT (1 1)", "POINT (1 1.000001)", false),
            ("POINT Z (1 2 3)", "POINT M (1 2 3)", false),
            ("POINT (1 1)", "MULTIPOINT (1 1)", false),
            ("POINT (1 1)", "GEOMETRYCOLLECTION (POINT (1 1))", false),
            ("MULTIPOINT (1 2, 2 3)", "MULTIPOINT (2 3, 1 2)", false),
            ("MULTIPOINT (1 2, 2 3)", "MULTIPOINT (1 2, 2 3)", true),
        ] {
            assert_eq!(geom(a).is_identical_to(&geom(b)), identical, "{a} vs {b}");
        }
    }

    #[test]
    fn to_array() {
        assert_eq!(geom("POINT EMPTY").to_array(), json!([]));
        assert_eq!(geom("POINT ZM (1 2 3 4)").to_array(), json!([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(
            geom("LINESTRING ZM (1 2 3 4, 5 6 7 8)").to_array(),
            json!([[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]])
        );
        assert_eq!(geom("LINESTRING M EMPTY").to_array(), json!([]));
        assert_eq!(
            geom("POLYGON ((0 0, 0 1, 1 1, 1 0, 0 0))").to_array(),
            json!([[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]])
        );
        assert_eq!(
            geom("GEOMETRYCOLLECTION (POINT (1 2), LINESTRING EMPTY)").to_array(),
            json!([[1.0, 2.0], []])
        );
    }

    #[test]
    fn typed_conversion_rejects_other_variants() {
        let err = Point::from_text("LINESTRING (1 2, 3 4)").unwrap_err();
        assert_eq!(
            err,
            GeometryError::UnexpectedGeometryType {
                expected: "Point",
                actual: "LineString",
            }
        );
        assert!(Point::from_text("POINT (1 2)").is_ok());
    }

    #[test]
    fn builders_validate_invariants() {
        // Ring not closed.
        let open = LineString::new(
            Dimension::Xy,
            vec![Point::xy(0.0, 0.0), Point::xy(1.0, 0.0), Point::xy(1.0, 1.0)],
        )
        .unwrap();
        assert!(matches!(
            Polygon::new(Dimension::Xy, vec![open.clone()]),
            Err(GeometryError::InvalidGeometry(_))
        ));

        // Empty point on a curve: no WKT or WKB rendering exists for it.
        assert!(matches!(
            LineString::new(
                Dimension::Xy,
                vec![Point::empty(Dimension::Xy), Point::xy(1.0, 2.0)],
            ),
            Err(GeometryError::InvalidGeometry(_))
        ));
        assert!(matches!(
            LineString::new(Dimension::Xy, vec![Point::empty(Dimension::Xy); 4]),
            Err(GeometryError::InvalidGeometry(_))
        ));

        // Mixed dimensionality.
        assert!(matches!(
            MultiPoint::new(Dimension::Xyz, vec![Point::xy(1.0, 2.0)]),
            Err(GeometryError::DimensionalityMismatch(_))
        ));

        // Wrong coordinate arity.
        assert!(matches!(
            Point::new(Dimension::Xy, Some(Coord::xyz(1.0, 2.0, 3.0))),
            Err(GeometryError::InvalidGeometry(_))
        ));

        // Triangle ring must have exactly four coordinates.
        let square = LineString::new(
            Dimension::Xy,
            vec![
                Point::xy(0.0, 0.0),
                Point::xy(0.0, 1.0),
                Point::xy(1.0, 1.0),
                Point::xy(1.0, 0.0),
                Point::xy(0.0, 0.0),
            ],
        )
        .unwrap();
        assert!(matches!(
            Triangle::new(Dimension::Xy, Some(square)),
            Err(GeometryError::InvalidGeometry(_))
        ));

        // Mixed SRIDs.
        assert!(matches!(
            MultiPoint::new(
                Dimension::Xy,
                vec![Point::xy(1.0, 2.0), Point::xy(3.0, 4.0).with_srid(4326)],
            ),
            Err(GeometryError::InvalidGeometry(_))
        ));
    }
}
