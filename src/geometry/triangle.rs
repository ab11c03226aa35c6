use crate::dimension::Dimension;
use crate::error::{GeometryError, Result};
use crate::geometry::polygon::check_ring;
use crate::geometry::LineString;

/// A polygon with a single ring of exactly four coordinates: three distinct
/// corners plus the closing repeat.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    ring: Option<LineString>,
    dimension: Dimension,
    srid: u32,
}

impl Triangle {
    /// Build a triangle from its ring.
    pub fn new(dimension: Dimension, ring: Option<LineString>) -> Result<Self> {
        let mut srid = 0;
        if let Some(ring) = &ring {
            check_ring(ring)?;
            if ring.num_points() != 4 {
                return Err(GeometryError::InvalidGeometry(format!(
                    "triangle ring has {} points, expected 4",
                    ring.num_points()
                )));
            }
            dimension.check_same(ring.dimension(), "ring")?;
            srid = ring.srid();
        }
        Ok(Self {
            ring,
            dimension,
            srid,
        })
    }

    /// An empty triangle of the given dimension.
    pub fn empty(dimension: Dimension) -> Self {
        Self {
            ring: None,
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
        self.ring.is_none()
    }

    /// The single ring, if the triangle is not empty.
    pub fn ring(&self) -> Option<&LineString> {
        self.ring.as_ref()
    }

    /// An identical triangle carrying `srid` at every node instead.
    pub fn with_srid(&self, srid: u32) -> Self {
        Self {
            ring: self.ring.as_ref().map(|r| r.with_srid(srid)),
            dimension: self.dimension,
            srid,
        }
    }
}
