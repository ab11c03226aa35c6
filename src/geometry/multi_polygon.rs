use crate::dimension::Dimension;
use crate::error::Result;
use crate::geometry::validate_members;
use crate::geometry::Polygon;

/// A collection of polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    dimension: Dimension,
    srid: u32,
}

impl MultiPolygon {
    pub fn new(dimension: Dimension, polygons: Vec<Polygon>) -> Result<Self> {
        let srid = validate_members(
            dimension,
            &polygons,
            "polygon",
            Polygon::dimension,
            Polygon::srid,
        )?;
        Ok(Self {
            polygons,
            dimension,
            srid,
        })
    }

    /// An empty multipolygon of the given dimension.
    pub fn empty(dimension: Dimension) -> Self {
        Self {
            polygons: Vec::new(),
            dimension,
            srid: 0,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn srid(&self) -> u32 {
        self.srid
    }

    /// Empty when it has no members, or when every member is empty.
    pub fn is_empty(&self) -> bool {
        self.polygons.iter().all(Polygon::is_empty)
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    pub fn polygons(&self) -> impl ExactSizeIterator<Item = &Polygon> {
        self.polygons.iter()
    }

    /// An identical multipolygon carrying `srid` at every node instead.
    pub fn with_srid(&self, srid: u32) -> Self {
        Self {
            polygons: self.polygons.iter().map(|p| p.with_srid(srid)).collect(),
            dimension: self.dimension,
            srid,
        }
    }
}
