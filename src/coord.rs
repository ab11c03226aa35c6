use crate::dimension::Dimension;
use crate::error::{GeometryError, Result};

/// A single position: X and Y, plus the optional Z and M values.
///
/// The axis order is always X, Y, Z, M. Which of the optional axes are
/// present must agree with the [Dimension] of the geometry the coordinate
/// belongs to; the geometry builders enforce this.
#[derive(Debug, Clone, Copy)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coord {
    /// An XY coordinate.
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    /// An XYZ coordinate.
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    /// An XYM coordinate.
    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: Some(m),
        }
    }

    /// An XYZM coordinate.
    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    /// The dimension implied by which optional axes are present.
    pub fn dimension(&self) -> Dimension {
        Dimension::new(self.z.is_some(), self.m.is_some())
    }

    /// Whether this coordinate has exactly the axes `dim` requires.
    pub fn matches(&self, dim: Dimension) -> bool {
        self.dimension() == dim
    }

    /// Validate the arity of this coordinate against `dim`.
    pub(crate) fn check(self, dim: Dimension) -> Result<Self> {
        if self.matches(dim) {
            Ok(self)
        } else {
            Err(GeometryError::InvalidGeometry(format!(
                "coordinate is {}, expected {dim}",
                self.dimension()
            )))
        }
    }

    /// Pack into a flat value list in axis order.
    pub fn to_vec(&self) -> Vec<f64> {
        let mut values = Vec::with_capacity(self.dimension().coordinate_dimension());
        values.push(self.x);
        values.push(self.y);
        if let Some(z) = self.z {
            values.push(z);
        }
        if let Some(m) = self.m {
            values.push(m);
        }
        values
    }

    /// Unpack from a flat value list, interpreting the values in axis order
    /// according to `dim`. Fails if the arity does not match.
    pub fn from_slice(values: &[f64], dim: Dimension) -> Result<Self> {
        if values.len() != dim.coordinate_dimension() {
            return Err(GeometryError::InvalidGeometry(format!(
                "coordinate has {} values, {dim} requires {}",
                values.len(),
                dim.coordinate_dimension()
            )));
        }
        let mut rest = values[2..].iter().copied();
        let z = dim.has_z().then(|| rest.next()).flatten();
        let m = dim.has_m().then(|| rest.next()).flatten();
        Ok(Self {
            x: values[0],
            y: values[1],
            z,
            m,
        })
    }
}

/// Coordinate equality is bit-for-bit on the underlying doubles.
impl PartialEq for Coord {
    fn eq(&self, other: &Self) -> bool {
        fn bits(value: Option<f64>) -> Option<u64> {
            value.map(f64::to_bits)
        }
        self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
            && bits(self.z) == bits(other.z)
            && bits(self.m) == bits(other.m)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pack_unpack_is_axis_order_stable() {
        let coord = Coord::xyzm(1.0, 2.0, 3.0, 4.0);
        assert_eq!(coord.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            Coord::from_slice(&[1.0, 2.0, 3.0, 4.0], Dimension::Xyzm).unwrap(),
            coord
        );

        let xym = Coord::from_slice(&[1.0, 2.0, 5.0], Dimension::Xym).unwrap();
        assert_eq!(xym.z, None);
        assert_eq!(xym.m, Some(5.0));
    }

    #[test]
    fn from_slice_rejects_wrong_arity() {
        let err = Coord::from_slice(&[1.0, 2.0, 3.0], Dimension::Xy).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidGeometry(_)));
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(Coord::xy(1.0, 1.0), Coord::xy(1.0, 1.0));
        assert_ne!(Coord::xy(1.0, 1.0), Coord::xy(1.0, 1.000001));
        assert_ne!(Coord::xy(1.0, 1.0), Coord::xyz(1.0, 1.0, 1.0));
    }
}
