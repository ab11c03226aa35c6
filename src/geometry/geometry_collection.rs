use crate::dimension::Dimension;
use crate::error::Result;
use crate::geometry::validate_members;
use crate::geometry::Geometry;

/// A heterogeneous collection of geometries, possibly nested.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    dimension: Dimension,
    srid: u32,
}

impl GeometryCollection {
    pub fn new(dimension: Dimension, geometries: Vec<Geometry>) -> Result<Self> {
        let srid = validate_members(
            dimension,
            &geometries,
            "member",
            Geometry::dim,
            Geometry::srid,
        )?;
        Ok(Self {
            geometries,
            dimension,
            srid,
        })
    }

    /// An empty collection of the given dimension.
    pub fn empty(dimension: Dimension) -> Self {
        Self {
            geometries: Vec::new(),
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
        self.geometries.iter().all(Geometry::is_empty)
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    /// Immediate members in insertion order; nested collections are not
    /// flattened.
    pub fn geometries(&self) -> impl ExactSizeIterator<Item = &Geometry> {
        self.geometries.iter()
    }

    /// An identical collection carrying `srid` at every node instead.
    pub fn with_srid(&self, srid: u32) -> Self {
        Self {
            geometries: self
                .geometries
                .iter()
                .map(|g| g.with_srid(srid))
                .collect(),
            dimension: self.dimension,
            srid,
        }
    }
}
