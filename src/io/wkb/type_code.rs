use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::dimension::Dimension;
use crate::error::{GeometryError, Result};
use crate::geometry::Geometry;

/// The base WKB identifier of each concrete geometry kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum GeometryTypeId {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
    PolyhedralSurface = 15,
    Tin = 16,
    Triangle = 17,
}

impl GeometryTypeId {
    pub(crate) fn of(geometry: &Geometry) -> Self {
        match geometry {
            Geometry::Point(_) => GeometryTypeId::Point,
            Geometry::LineString(_) => GeometryTypeId::LineString,
            Geometry::Polygon(_) => GeometryTypeId::Polygon,
            Geometry::MultiPoint(_) => GeometryTypeId::MultiPoint,
            Geometry::MultiLineString(_) => GeometryTypeId::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryTypeId::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryTypeId::GeometryCollection,
            Geometry::PolyhedralSurface(_) => GeometryTypeId::PolyhedralSurface,
            Geometry::Tin(_) => GeometryTypeId::Tin,
            Geometry::Triangle(_) => GeometryTypeId::Triangle,
        }
    }
}

/// A full WKB type code: base geometry kind plus dimensionality offset.
///
/// The numeric form is `base + offset` with offsets 0 (XY), 1000 (XYZ),
/// 2000 (XYM) and 3000 (XYZM), e.g. 1002 for `LINESTRING Z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WkbType {
    geometry_type: GeometryTypeId,
    dimension: Dimension,
}

impl WkbType {
    pub fn new(geometry_type: GeometryTypeId, dimension: Dimension) -> Self {
        Self {
            geometry_type,
            dimension,
        }
    }

    pub fn geometry_type(self) -> GeometryTypeId {
        self.geometry_type
    }

    pub fn dimension(self) -> Dimension {
        self.dimension
    }

    /// Decode a numeric type code, failing if either component is unknown.
    pub fn from_code(code: u32) -> Result<Self> {
        let dimension = match code / 1000 {
            0 => Dimension::Xy,
            1 => Dimension::Xyz,
            2 => Dimension::Xym,
            3 => Dimension::Xyzm,
            _ => return Err(GeometryError::WkbUnknownTypeCode(code)),
        };
        let geometry_type = GeometryTypeId::try_from(code % 1000)
            .map_err(|_| GeometryError::WkbUnknownTypeCode(code))?;
        Ok(Self {
            geometry_type,
            dimension,
        })
    }

    /// The numeric type code.
    pub fn code(self) -> u32 {
        let offset = match self.dimension {
            Dimension::Xy => 0,
            Dimension::Xyz => 1000,
            Dimension::Xym => 2000,
            Dimension::Xyzm => 3000,
        };
        offset + u32::from(self.geometry_type)
    }
}
