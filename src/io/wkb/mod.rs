//! Reading and writing ISO-flavored WKB-encoded geometries.
//!
//! Every geometry node is framed as `[1-byte order][4-byte type code][body]`,
//! where the type code combines the base geometry kind with a dimensionality
//! offset (see [type_code::WkbType]). The SRID is never part of the payload;
//! it travels alongside the bytes.

mod reader;
mod type_code;
mod writer;

pub use reader::read_wkb;
pub use type_code::{GeometryTypeId, WkbType};
pub use writer::write_wkb;

use crate::error::GeometryError;

/// Byte order of a single WKB geometry node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl Endianness {
    /// The byte order of the host.
    pub fn native() -> Self {
        #[cfg(target_endian = "big")]
        {
            Endianness::BigEndian
        }
        #[cfg(target_endian = "little")]
        {
            Endianness::LittleEndian
        }
    }
}

impl TryFrom<u8> for Endianness {
    type Error = GeometryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(GeometryError::WkbInvalidByteOrder(other)),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        match value {
            Endianness::BigEndian => 0,
            Endianness::LittleEndian => 1,
        }
    }
}
