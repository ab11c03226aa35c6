use crate::dimension::Dimension;
use crate::error::Result;
use crate::geometry::validate_members;
use crate::geometry::Triangle;

/// A triangulated irregular network: a surface made of triangle patches.
#[derive(Debug, Clone, PartialEq)]
pub struct Tin {
    patches: Vec<Triangle>,
    dimension: Dimension,
    srid: u32,
}

impl Tin {
    pub fn new(dimension: Dimension, patches: Vec<Triangle>) -> Result<Self> {
        let srid = validate_members(
            dimension,
            &patches,
            "patch",
            Triangle::dimension,
            Triangle::srid,
        )?;
        Ok(Self {
            patches,
            dimension,
            srid,
        })
    }

    /// An empty TIN of the given dimension.
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
        self.patches.iter().all(Triangle::is_empty)
    }

    pub fn num_patches(&self) -> usize {
        self.patches.len()
    }

    pub fn patches(&self) -> impl ExactSizeIterator<Item = &Triangle> {
        self.patches.iter()
    }

    /// An identical TIN carrying `srid` at every node instead.
    pub fn with_srid(&self, srid: u32) -> Self {
        Self {
            patches: self.patches.iter().map(|t| t.with_srid(srid)).collect(),
            dimension: self.dimension,
            srid,
        }
    }
}
