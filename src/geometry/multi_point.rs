use crate::dimension::Dimension;
use crate::error::Result;
use crate::geometry::validate_members;
use crate::geometry::Point;

/// A collection of points.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
    dimension: Dimension,
    srid: u32,
}

impl MultiPoint {
    pub fn new(dimension: Dimension, points: Vec<Point>) -> Result<Self> {
        let srid = validate_members(dimension, &points, "point", Point::dimension, Point::srid)?;
        Ok(Self {
            points,
            dimension,
            srid,
        })
    }

    /// An empty multipoint of the given dimension.
    pub fn empty(dimension: Dimension) -> Self {
        Self {
            points: Vec::new(),
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
        self.points.iter().all(Point::is_empty)
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = &Point> {
        self.points.iter()
    }

    /// An identical multipoint carrying `srid` at every node instead.
    pub fn with_srid(&self, srid: u32) -> Self {
        Self {
            points: self.points.iter().map(|p| p.with_srid(srid)).collect(),
            dimension: self.dimension,
            srid,
        }
    }
}
