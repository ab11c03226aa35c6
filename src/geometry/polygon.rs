use crate::dimension::Dimension;
use crate::error::{GeometryError, Result};
use crate::geometry::validate_members;
use crate::geometry::LineString;

/// A surface bounded by an exterior ring and zero or more interior rings.
///
/// Every ring is a closed [LineString]: its first and last coordinates are
/// identical.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<LineString>,
    dimension: Dimension,
    srid: u32,
}

impl Polygon {
    /// Build a polygon from its rings, exterior first.
    pub fn new(dimension: Dimension, rings: Vec<LineString>) -> Result<Self> {
        for ring in &rings {
            check_ring(ring)?;
        }
        let srid = validate_members(
            dimension,
            &rings,
            "ring",
            LineString::dimension,
            LineString::srid,
        )?;
        Ok(Self {
            rings,
            dimension,
            srid,
        })
    }

    /// An empty polygon of the given dimension.
    pub fn empty(dimension: Dimension) -> Self {
        Self {
            rings: Vec::new(),
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

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// The exterior ring, if the polygon is not empty.
    pub fn exterior_ring(&self) -> Option<&LineString> {
        self.rings.first()
    }

    pub fn num_interior_rings(&self) -> usize {
        self.rings.len().saturating_sub(1)
    }

    /// The `n`-th interior ring, 1-based.
    pub fn interior_ring_n(&self, n: usize) -> Option<&LineString> {
        n.checked_sub(1).and_then(|i| self.rings.get(i + 1))
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> impl ExactSizeIterator<Item = &LineString> {
        self.rings.iter()
    }

    /// An identical polygon carrying `srid` at every node instead.
    pub fn with_srid(&self, srid: u32) -> Self {
        Self {
            rings: self.rings.iter().map(|r| r.with_srid(srid)).collect(),
            dimension: self.dimension,
            srid,
        }
    }
}

pub(crate) fn check_ring(ring: &LineString) -> Result<()> {
    if ring.is_empty() {
        return Err(GeometryError::InvalidGeometry("ring is empty".to_string()));
    }
    if !ring.is_closed() {
        return Err(GeometryError::InvalidGeometry(
            "ring is not closed".to_string(),
        ));
    }
    Ok(())
}
