//! Reading and writing the two standard interchange formats.

pub mod wkb;
pub mod wkt;
