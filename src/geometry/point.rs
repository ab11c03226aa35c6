use crate::coord::Coord;
use crate::dimension::Dimension;
use crate::error::Result;

/// A single position, or nothing at all (`POINT EMPTY`).
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coord: Option<Coord>,
    dimension: Dimension,
    srid: u32,
}

impl Point {
    /// Build a point of the given dimension, validating the coordinate arity.
    pub fn new(dimension: Dimension, coord: Option<Coord>) -> Result<Self> {
        let coord = coord.map(|c| c.check(dimension)).transpose()?;
        Ok(Self {
            coord,
            dimension,
            srid: 0,
        })
    }

    /// An empty point of the given dimension.
    pub fn empty(dimension: Dimension) -> Self {
        Self {
            coord: None,
            dimension,
            srid: 0,
        }
    }

    /// An XY point.
    pub fn xy(x: f64, y: f64) -> Self {
        Self::from_coord(Coord::xy(x, y))
    }

    /// An XYZ point.
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::from_coord(Coord::xyz(x, y, z))
    }

    /// An XYM point.
    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self::from_coord(Coord::xym(x, y, m))
    }

    /// An XYZM point.
    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self::from_coord(Coord::xyzm(x, y, z, m))
    }

    fn from_coord(coord: Coord) -> Self {
        Self {
            dimension: coord.dimension(),
            coord: Some(coord),
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
        self.coord.is_none()
    }

    /// The coordinate, if the point is not empty.
    pub fn coord(&self) -> Option<&Coord> {
        self.coord.as_ref()
    }

    pub fn x(&self) -> Option<f64> {
        self.coord.map(|c| c.x)
    }

    pub fn y(&self) -> Option<f64> {
        self.coord.map(|c| c.y)
    }

    pub fn z(&self) -> Option<f64> {
        self.coord.and_then(|c| c.z)
    }

    pub fn m(&self) -> Option<f64> {
        self.coord.and_then(|c| c.m)
    }

    /// An identical point carrying `srid` instead.
    pub fn with_srid(&self, srid: u32) -> Self {
        Self {
            coord: self.coord,
            dimension: self.dimension,
            srid,
        }
    }
}
