use crate::dimension::Dimension;
use crate::error::Result;
use crate::geometry::validate_members;
use crate::geometry::Polygon;

/// A contiguous collection of polygon patches.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyhedralSurface {
    patches: Vec<Polygon>,
    dimension: Dimension,
    srid: u32,
}

impl PolyhedralSurface {
    pub fn new(dimension: Dimension, patches: Vec<Polygon>) -> Result<Self> {
        let srid = validate_members(
            dimension,
            &patches,
            "patch",
            Polygon::dimension,
            Polygon::srid,
        )?;
        Ok(Self {
            patches,
            dimension,
            srid,
        })
    }

    /// An empty surface of the given dimension.
    pub fn empty(dimension: Dimension) -> Self {
        Self {
            patches: Vec::new(),
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

    /// Empty when it has no patches, or when every patch is empty.
    pub fn is_empty(&self) -> bool {
        self.patches.iter().all(Polygon::is_empty)
    }

    pub fn num_patches(&self) -> usize {
        self.patches.len()
    }

    pub fn patches(&self) -> impl ExactSizeIterator<Item = &Polygon> {
        self.patches.iter()
    }

    /// An identical surface carrying `srid` at every node instead.
    pub fn with_srid(&self, srid: u32) -> Self {
        Self {
            patches: self.patches.iter().map(|p| p.with_srid(srid)).collect(),
            dimension: self.dimension,
            srid,
        }
    }
}
