use crate::dimension::Dimension;
use crate::error::Result;
use crate::geometry::validate_members;
use crate::geometry::LineString;

/// A collection of line strings.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    dimension: Dimension,
    srid: u32,
}

impl MultiLineString {
    pub fn new(dimension: Dimension, line_strings: Vec<LineString>) -> Result<Self> {
        let srid = validate_members(
            dimension,
            &line_strings,
            "line string",
            LineString::dimension,
            LineString::srid,
        )?;
        Ok(Self {
            line_strings,
            dimension,
            srid,
        })
    }

    /// An empty multilinestring of the given dimension.
    pub fn empty(dimension: Dimension) -> Self {
        Self {
            line_strings: Vec::new(),
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
        self.line_strings.iter().all(LineString::is_empty)
    }

    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }

    pub fn line_strings(&self) -> impl ExactSizeIterator<Item = &LineString> {
        self.line_strings.iter()
    }

    /// An identical multilinestring carrying `srid` at every node instead.
    pub fn with_srid(&self, srid: u32) -> Self {
        Self {
            line_strings: self
                .line_strings
                .iter()
                .map(|ls| ls.with_srid(srid))
                .collect(),
            dimension: self.dimension,
            srid,
        }
    }
}
