use crate::dimension::Dimension;
use crate::error::{GeometryError, Result};
use crate::geometry::validate_members;
use crate::geometry::Point;

/// An ordered sequence of points forming a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    points: Vec<Point>,
    dimension: Dimension,
    srid: u32,
}

impl LineString {
    /// Build a line string, validating that every point is non-empty, shares
    /// `dimension`, and agrees on its SRID. Only a point with a coordinate
    /// can sit on a curve; `LINESTRING` has no member-level `EMPTY` form in
    /// either interchange format.
    pub fn new(dimension: Dimension, points: Vec<Point>) -> Result<Self> {
        if points.iter().any(Point::is_empty) {
            return Err(GeometryError::InvalidGeometry(
                "line string contains an empty point".to_string(),
            ));
        }
        let srid = validate_members(dimension, &points, "point", Point::dimension, Point::srid)?;
        Ok(Self {
            points,
            dimension,
            srid,
        })
    }

    /// An empty line string of the given dimension.
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

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// The `n`-th point, 1-based.
    pub fn point_n(&self, n: usize) -> Option<&Point> {
        n.checked_sub(1).and_then(|i| self.points.get(i))
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = &Point> {
        self.points.iter()
    }

    pub fn start_point(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn end_point(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Whether the first and last coordinates are identical. An empty line
    /// string is not closed.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.coord() == last.coord(),
            _ => false,
        }
    }

    /// An identical line string carrying `srid` at every node instead.
    pub fn with_srid(&self, srid: u32) -> Self {
        Self {
            points: self.points.iter().map(|p| p.with_srid(srid)).collect(),
            dimension: self.dimension,
            srid,
        }
    }
}
