use crate::geometry::{Geometry, LineString, Point, Triangle};
use crate::io::wkb::type_code::{GeometryTypeId, WkbType};
use crate::io::wkb::Endianness;

/// Encode a geometry as ISO WKB using one byte order for every node.
///
/// The SRID is not written; WKB carries coordinates only.
pub fn write_wkb(geometry: &Geometry, order: Endianness) -> Vec<u8> {
    let mut out = Vec::new();
    write_geometry(&mut out, geometry, order);
    out
}

fn write_geometry(out: &mut Vec<u8>, geometry: &Geometry, order: Endianness) {
    out.push(u8::from(order));
    let code = WkbType::new(GeometryTypeId::of(geometry), geometry.dim()).code();
    put_u32(out, code, order);

    match geometry {
        Geometry::Point(point) => write_point_body(out, point, order),
        Geometry::LineString(line_string) => write_line_string_body(out, line_string, order),
        Geometry::Polygon(polygon) => {
            put_u32(out, polygon.rings().len() as u32, order);
            for ring in polygon.rings() {
                write_line_string_body(out, ring, order);
            }
        }
        Geometry::Triangle(triangle) => write_triangle_body(out, triangle, order),
        Geometry::MultiPoint(multi) => {
            put_u32(out, multi.num_points() as u32, order);
            for point in multi.points() {
                write_geometry(out, &Geometry::Point(point.clone()), order);
            }
        }
        Geometry::MultiLineString(multi) => {
            put_u32(out, multi.num_line_strings() as u32, order);
            for line_string in multi.line_strings() {
                write_geometry(out, &Geometry::LineString(line_string.clone()), order);
            }
        }
        Geometry::MultiPolygon(multi) => {
            put_u32(out, multi.num_polygons() as u32, order);
            for polygon in multi.polygons() {
                write_geometry(out, &Geometry::Polygon(polygon.clone()), order);
            }
        }
        Geometry::PolyhedralSurface(surface) => {
            put_u32(out, surface.num_patches() as u32, order);
            for patch in surface.patches() {
                write_geometry(out, &Geometry::Polygon(patch.clone()), order);
            }
        }
        Geometry::Tin(tin) => {
            put_u32(out, tin.num_patches() as u32, order);
            for patch in tin.patches() {
                write_geometry(out, &Geometry::Triangle(patch.clone()), order);
            }
        }
        Geometry::GeometryCollection(collection) => {
            put_u32(out, collection.num_geometries() as u32, order);
            for member in collection.geometries() {
                write_geometry(out, member, order);
            }
        }
    }
}

/// An empty point has no count field to set to zero, so it is written as
/// all-NaN coordinates.
fn write_point_body(out: &mut Vec<u8>, point: &Point, order: Endianness) {
    match point.coord() {
        Some(coord) => {
            for value in coord.to_vec() {
                put_f64(out, value, order);
            }
        }
        None => {
            for _ in 0..point.dimension().coordinate_dimension() {
                put_f64(out, f64::NAN, order);
            }
        }
    }
}

fn write_line_string_body(out: &mut Vec<u8>, line_string: &LineString, order: Endianness) {
    put_u32(out, line_string.num_points() as u32, order);
    for point in line_string.points() {
        if let Some(coord) = point.coord() {
            for value in coord.to_vec() {
                put_f64(out, value, order);
            }
        }
    }
}

fn write_triangle_body(out: &mut Vec<u8>, triangle: &Triangle, order: Endianness) {
    match triangle.ring() {
        Some(ring) => {
            put_u32(out, 1, order);
            write_line_string_body(out, ring, order);
        }
        None => put_u32(out, 0, order),
    }
}

fn put_u32(out: &mut Vec<u8>, value: u32, order: Endianness) {
    match order {
        Endianness::BigEndian => out.extend_from_slice(&value.to_be_bytes()),
        Endianness::LittleEndian => out.extend_from_slice(&value.to_le_bytes()),
    }
}

fn put_f64(out: &mut Vec<u8>, value: f64, order: Endianness) {
    match order {
        Endianness::BigEndian => out.extend_from_slice(&value.to_be_bytes()),
        Endianness::LittleEndian => out.extend_from_slice(&value.to_le_bytes()),
    }
}
