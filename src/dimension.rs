use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

/// Which optional axes (Z, M) the coordinates of a geometry carry.
///
/// Every node of a geometry tree shares a single dimension: a tree cannot mix
/// Z-only and M-only members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// X and Y
    Xy,
    /// X, Y and Z
    Xyz,
    /// X, Y and M
    Xym,
    /// X, Y, Z and M
    Xyzm,
}

impl Dimension {
    /// Construct from the two independent axis flags.
    pub fn new(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::Xy,
            (true, false) => Dimension::Xyz,
            (false, true) => Dimension::Xym,
            (true, true) => Dimension::Xyzm,
        }
    }

    /// Whether coordinates carry a Z value.
    pub fn has_z(self) -> bool {
        matches!(self, Dimension::Xyz | Dimension::Xyzm)
    }

    /// Whether coordinates carry an M value.
    pub fn has_m(self) -> bool {
        matches!(self, Dimension::Xym | Dimension::Xyzm)
    }

    /// The number of values per coordinate: 2, 3 or 4.
    pub fn coordinate_dimension(self) -> usize {
        match self {
            Dimension::Xy => 2,
            Dimension::Xyz | Dimension::Xym => 3,
            Dimension::Xyzm => 4,
        }
    }

    /// The coordinate dimension, excluding the M axis.
    pub fn spatial_dimension(self) -> usize {
        self.coordinate_dimension() - usize::from(self.has_m())
    }

    /// The WKT dimensionality marker: `""`, `"Z"`, `"M"` or `"ZM"`.
    pub fn wkt_marker(self) -> &'static str {
        match self {
            Dimension::Xy => "",
            Dimension::Xyz => "Z",
            Dimension::Xym => "M",
            Dimension::Xyzm => "ZM",
        }
    }

    /// Check that `other` is the same dimension, for use when validating
    /// children against the geometry that owns them.
    pub(crate) fn check_same(self, other: Dimension, what: &str) -> Result<()> {
        if self == other {
            Ok(())
        } else {
            Err(GeometryError::DimensionalityMismatch(format!(
                "{what} is {other}, expected {self}"
            )))
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Xy => "XY",
            Dimension::Xyz => "XYZ",
            Dimension::Xym => "XYM",
            Dimension::Xyzm => "XYZM",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coordinate_dimension() {
        assert_eq!(Dimension::Xy.coordinate_dimension(), 2);
        assert_eq!(Dimension::Xyz.coordinate_dimension(), 3);
        assert_eq!(Dimension::Xym.coordinate_dimension(), 3);
        assert_eq!(Dimension::Xyzm.coordinate_dimension(), 4);
    }

    #[test]
    fn spatial_dimension_excludes_m() {
        assert_eq!(Dimension::Xy.spatial_dimension(), 2);
        assert_eq!(Dimension::Xyz.spatial_dimension(), 3);
        assert_eq!(Dimension::Xym.spatial_dimension(), 2);
        assert_eq!(Dimension::Xyzm.spatial_dimension(), 3);
    }

    #[test]
    fn from_flags() {
        for dim in [Dimension::Xy, Dimension::Xyz, Dimension::Xym, Dimension::Xyzm] {
            assert_eq!(Dimension::new(dim.has_z(), dim.has_m()), dim);
        }
    }

    #[test]
    fn check_same_reports_mismatch() {
        assert!(Dimension::Xyz.check_same(Dimension::Xyz, "member").is_ok());
        let err = Dimension::Xyz
            .check_same(Dimension::Xym, "member")
            .unwrap_err();
        assert!(matches!(err, GeometryError::DimensionalityMismatch(_)));
    }
}
