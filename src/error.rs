use thiserror::Error;

/// Errors produced while building geometries or converting them to and from
/// their interchange formats.
///
/// Every failure is terminal to the call that produced it: no partially
/// constructed geometry is ever returned, and none of these conditions is
/// transient or retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Malformed Well-Known Text. `position` is the byte offset of the
    /// offending token in the input.
    #[error("WKT syntax error at position {position}: {message}")]
    WktSyntax { position: usize, message: String },

    /// The WKB buffer ended before the current field could be read.
    #[error("WKB buffer truncated")]
    WkbTruncated,

    /// A WKB type code whose base id or dimensionality offset does not match
    /// any known combination.
    #[error("unknown WKB geometry type code {0}")]
    WkbUnknownTypeCode(u32),

    /// A WKB byte-order marker other than 0 (big-endian) or 1 (little-endian).
    #[error("invalid WKB byte order marker {0}")]
    WkbInvalidByteOrder(u8),

    /// Children of a geometry disagree on their Z/M axes.
    #[error("dimensionality mismatch: {0}")]
    DimensionalityMismatch(String),

    /// A structural invariant was violated: a ring is not closed, a
    /// homogeneous collection received a child of the wrong type, a
    /// coordinate has the wrong arity, or a tree mixes SRIDs.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// `geometry_n` was called with an index outside `1..=num_geometries()`.
    #[error("geometry index {0} out of range")]
    IndexOutOfRange(usize),

    /// A typed decode received a payload of a different concrete variant.
    #[error("unexpected geometry type: expected {expected}, got {actual}")]
    UnexpectedGeometryType {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeometryError>;
