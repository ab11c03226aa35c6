//! Reading and writing WKT-encoded geometries.
//!
//! The reader is a single-pass recursive-descent parser with one token of
//! lookahead; the writer is its exact left inverse, so canonically formatted
//! text survives a read/write round trip byte for byte. As with WKB, the
//! SRID is supplied alongside the text rather than embedded in it.

mod reader;
mod writer;

pub use reader::read_wkt;
pub use writer::write_wkt;
