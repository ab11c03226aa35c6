use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::coord::Coord;
use crate::dimension::Dimension;
use crate::error::{GeometryError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon, PolyhedralSurface, Tin, Triangle,
};
use crate::io::wkb::type_code::{GeometryTypeId, WkbType};
use crate::io::wkb::Endianness;

/// Decode a WKB payload into a geometry tree tagged with `srid`.
///
/// The byte order is detected per node from each node's leading order byte;
/// nested children may use a different order than their parent.
pub fn read_wkb(buf: &[u8], srid: u32) -> Result<Geometry> {
    let mut cursor = Cursor::new(buf);
    let geometry = read_geometry(&mut cursor)?;
    let consumed = cursor.position() as usize;
    if consumed < buf.len() {
        return Err(GeometryError::InvalidGeometry(format!(
            "{} trailing bytes after WKB geometry",
            buf.len() - consumed
        )));
    }
    Ok(geometry.with_srid(srid))
}

fn read_geometry(cursor: &mut Cursor<&[u8]>) -> Result<Geometry> {
    let order = Endianness::try_from(read_u8(cursor)?)?;
    let wkb_type = WkbType::from_code(read_u32(cursor, order)?)?;
    let dim = wkb_type.dimension();

    match wkb_type.geometry_type() {
        GeometryTypeId::Point => read_point_body(cursor, order, dim).map(Geometry::Point),
        GeometryTypeId::LineString => {
            read_line_string_body(cursor, order, dim).map(Geometry::LineString)
        }
        GeometryTypeId::Polygon => {
            let rings = read_rings(cursor, order, dim)?;
            Polygon::new(dim, rings).map(Geometry::Polygon)
        }
        GeometryTypeId::Triangle => {
            let mut rings = read_rings(cursor, order, dim)?;
            if rings.len() > 1 {
                return Err(GeometryError::InvalidGeometry(format!(
                    "triangle has {} rings, expected 1",
                    rings.len()
                )));
            }
            Triangle::new(dim, rings.pop()).map(Geometry::Triangle)
        }
        GeometryTypeId::MultiPoint => {
            let points = read_members(cursor, order, "MultiPoint", |g| match g {
                Geometry::Point(p) => Some(p),
                _ => None,
            })?;
            MultiPoint::new(dim, points).map(Geometry::MultiPoint)
        }
        GeometryTypeId::MultiLineString => {
            let line_strings = read_members(cursor, order, "MultiLineString", |g| match g {
                Geometry::LineString(ls) => Some(ls),
                _ => None,
            })?;
            MultiLineString::new(dim, line_strings).map(Geometry::MultiLineString)
        }
        GeometryTypeId::MultiPolygon => {
            let polygons = read_members(cursor, order, "MultiPolygon", |g| match g {
                Geometry::Polygon(p) => Some(p),
                _ => None,
            })?;
            MultiPolygon::new(dim, polygons).map(Geometry::MultiPolygon)
        }
        GeometryTypeId::PolyhedralSurface => {
            let patches = read_members(cursor, order, "PolyhedralSurface", |g| match g {
                Geometry::Polygon(p) => Some(p),
                _ => None,
            })?;
            PolyhedralSurface::new(dim, patches).map(Geometry::PolyhedralSurface)
        }
        GeometryTypeId::Tin => {
            let patches = read_members(cursor, order, "TIN", |g| match g {
                Geometry::Triangle(t) => Some(t),
                _ => None,
            })?;
            Tin::new(dim, patches).map(Geometry::Tin)
        }
        GeometryTypeId::GeometryCollection => {
            let count = read_u32(cursor, order)?;
            let mut members = Vec::new();
            for _ in 0..count {
                members.push(read_geometry(cursor)?);
            }
            GeometryCollection::new(dim, members).map(Geometry::GeometryCollection)
        }
    }
}

/// A point body has no count field; an empty point is encoded as all-NaN
/// coordinates.
fn read_point_body(cursor: &mut Cursor<&[u8]>, order: Endianness, dim: Dimension) -> Result<Point> {
    let mut values = Vec::with_capacity(dim.coordinate_dimension());
    for _ in 0..dim.coordinate_dimension() {
        values.push(read_f64(cursor, order)?);
    }
    if values.iter().all(|v| v.is_nan()) {
        return Ok(Point::empty(dim));
    }
    Point::new(dim, Some(Coord::from_slice(&values, dim)?))
}

fn read_line_string_body(
    cursor: &mut Cursor<&[u8]>,
    order: Endianness,
    dim: Dimension,
) -> Result<LineString> {
    let count = read_u32(cursor, order)?;
    let mut points = Vec::new();
    for _ in 0..count {
        let mut values = Vec::with_capacity(dim.coordinate_dimension());
        for _ in 0..dim.coordinate_dimension() {
            values.push(read_f64(cursor, order)?);
        }
        points.push(Point::new(dim, Some(Coord::from_slice(&values, dim)?))?);
    }
    LineString::new(dim, points)
}

/// Rings are bare: a count of points followed by raw coordinates, with no
/// per-ring order byte or type code.
fn read_rings(
    cursor: &mut Cursor<&[u8]>,
    order: Endianness,
    dim: Dimension,
) -> Result<Vec<LineString>> {
    let count = read_u32(cursor, order)?;
    let mut rings = Vec::new();
    for _ in 0..count {
        rings.push(read_line_string_body(cursor, order, dim)?);
    }
    Ok(rings)
}

/// Members of a homogeneous collection are fully framed child geometries,
/// each with its own order byte and type code.
fn read_members<T>(
    cursor: &mut Cursor<&[u8]>,
    order: Endianness,
    what: &str,
    narrow: impl Fn(Geometry) -> Option<T>,
) -> Result<Vec<T>> {
    // The member count belongs to the enclosing node and uses its byte order.
    let count = read_u32(cursor, order)?;
    let mut members = Vec::new();
    for _ in 0..count {
        let child = read_geometry(cursor)?;
        let type_name = child.geometry_type();
        members.push(narrow(child).ok_or_else(|| {
            GeometryError::InvalidGeometry(format!("{what} member may not be a {type_name}"))
        })?);
    }
    Ok(members)
}

fn read_u8(cursor: &mut Cursor<&[u8]>) -> Result<u8> {
    cursor.read_u8().map_err(|_| GeometryError::WkbTruncated)
}

fn read_u32(cursor: &mut Cursor<&[u8]>, order: Endianness) -> Result<u32> {
    match order {
        Endianness::BigEndian => cursor.read_u32::<BigEndian>(),
        Endianness::LittleEndian => cursor.read_u32::<LittleEndian>(),
    }
    .map_err(|_| GeometryError::WkbTruncated)
}

fn read_f64(cursor: &mut Cursor<&[u8]>, order: Endianness) -> Result<f64> {
    match order {
        Endianness::BigEndian => cursor.read_f64::<BigEndian>(),
        Endianness::LittleEndian => cursor.read_f64::<LittleEndian>(),
    }
    .map_err(|_| GeometryError::WkbTruncated)
}

#[cfg(test)]
mod test {
    use super::*;

    fn unhex(s: &str) -> Vec<u8> {
        s.as_bytes()
            .chunks(2)
            .map(|pair| {
                let text = std::str::from_utf8(pair).unwrap();
                u8::from_str_radix(text, 16).unwrap()
            })
            .collect()
    }

    #[test]
    fn point_big_endian() {
        let geometry = read_wkb(&unhex("00000000013ff00000000000004000000000000000"), 0).unwrap();
        assert_eq!(geometry.as_text(), "POINT (1 2)");
    }

    #[test]
    fn point_little_endian() {
        let geometry = read_wkb(&unhex("0101000000000000000000f03f0000000000000040"), 0).unwrap();
        assert_eq!(geometry.as_text(), "POINT (1 2)");
    }

    #[test]
    fn empty_line_string_z() {
        let geometry = read_wkb(&unhex("00000003ea00000000"), 0).unwrap();
        assert_eq!(geometry.as_text(), "LINESTRING Z EMPTY");
    }

    #[test]
    fn nan_point_reads_back_empty() {
        let geometry = Geometry::from_text("POINT ZM EMPTY").unwrap();
        let decoded = read_wkb(&geometry.as_binary(), 0).unwrap();
        assert_eq!(decoded, geometry);
    }

    #[test]
    fn mixed_endian_members() {
        // MULTIPOINT ((1 2), (3 4)) with a big-endian outer frame, one
        // little-endian member and one big-endian member.
        let hex = concat!(
            "0000000004",
            "00000002",
            "0101000000000000000000f03f0000000000000040",
            "000000000140080000000000004010000000000000",
        );
        let geometry = read_wkb(&unhex(hex), 0).unwrap();
        assert_eq!(geometry.as_text(), "MULTIPOINT ((1 2), (3 4))");
    }

    #[test]
    fn srid_is_applied_to_every_node() {
        let bytes = Geometry::from_text("GEOMETRYCOLLECTION (POINT (1 2))")
            .unwrap()
            .as_binary();
        let geometry = read_wkb(&bytes, 4326).unwrap();
        assert_eq!(geometry.srid(), 4326);
        assert_eq!(geometry.geometry_n(1).unwrap().srid(), 4326);
    }

    #[test]
    fn truncated_input() {
        assert_eq!(
            read_wkb(&unhex("00000000013ff00000"), 0).unwrap_err(),
            GeometryError::WkbTruncated
        );
        assert_eq!(read_wkb(&[], 0).unwrap_err(), GeometryError::WkbTruncated);
    }

    #[test]
    fn invalid_byte_order() {
        assert_eq!(
            read_wkb(&unhex("02000000013ff00000000000004000000000000000"), 0).unwrap_err(),
            GeometryError::WkbInvalidByteOrder(2)
        );
    }

    #[test]
    fn unknown_type_code() {
        assert_eq!(
            read_wkb(&unhex("0000000008"), 0).unwrap_err(),
            GeometryError::WkbUnknownTypeCode(8)
        );
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let err = read_wkb(&unhex("00000000013ff0000000000000400000000000000000"), 0).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidGeometry(_)));
    }

    #[test]
    fn foreign_member_type_is_rejected() {
        // MULTIPOINT framing a LINESTRING member
        let hex = concat!(
            "0000000004",
            "00000001",
            "000000000200000002",
            "3ff00000000000004000000000000000",
            "40080000000000004010000000000000",
        );
        let err = read_wkb(&unhex(hex), 0).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidGeometry(_)));
    }

    #[test]
    fn member_dimension_mismatch_is_rejected() {
        // XY MULTIPOINT framing an XYZ point
        let hex = concat!(
            "0000000004",
            "00000001",
            "00000003e9",
            "3ff000000000000040000000000000004008000000000000",
        );
        let err = read_wkb(&unhex(hex), 0).unwrap_err();
        assert!(matches!(err, GeometryError::DimensionalityMismatch(_)));
    }
}
