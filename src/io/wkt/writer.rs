use std::fmt::Write;

use crate::coord::Coord;
use crate::geometry::{Geometry, LineString, Polygon, Triangle};

/// Render a geometry as canonical WKT: uppercase keywords, a separate
/// dimensionality marker token, and shortest-round-trip coordinates.
pub fn write_wkt(geometry: &Geometry) -> String {
    let mut out = String::new();
    write_geometry(&mut out, geometry);
    out
}

fn write_geometry(out: &mut String, geometry: &Geometry) {
    out.push_str(keyword(geometry));
    let marker = geometry.dim().wkt_marker();
    if !marker.is_empty() {
        out.push(' ');
        out.push_str(marker);
    }
    out.push(' ');
    write_body(out, geometry);
}

fn keyword(geometry: &Geometry) -> &'static str {
    match geometry {
        Geometry::Point(_) => "POINT",
        Geometry::LineString(_) => "LINESTRING",
        Geometry::Polygon(_) => "POLYGON",
        Geometry::MultiPoint(_) => "MULTIPOINT",
        Geometry::MultiLineString(_) => "MULTILINESTRING",
        Geometry::MultiPolygon(_) => "MULTIPOLYGON",
        Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        Geometry::PolyhedralSurface(_) => "POLYHEDRALSURFACE",
        Geometry::Tin(_) => "TIN",
        Geometry::Triangle(_) => "TRIANGLE",
    }
}

fn write_body(out: &mut String, geometry: &Geometry) {
    match geometry {
        Geometry::Point(point) => match point.coord() {
            Some(coord) => {
                out.push('(');
                write_coord(out, coord);
                out.push(')');
            }
            None => out.push_str("EMPTY"),
        },
        Geometry::LineString(line_string) => write_coord_list(out, line_string),
        Geometry::Polygon(polygon) => write_polygon_body(out, polygon),
        Geometry::Triangle(triangle) => write_triangle_body(out, triangle),
        Geometry::MultiPoint(multi) => {
            write_member_list(out, multi.num_points(), multi.points(), |out, point| {
                match point.coord() {
                    Some(coord) => {
                        out.push('(');
                        write_coord(out, coord);
                        out.push(')');
                    }
                    None => out.push_str("EMPTY"),
                }
            });
        }
        Geometry::MultiLineString(multi) => {
            write_member_list(
                out,
                multi.num_line_strings(),
                multi.line_strings(),
                |out, line_string| write_coord_list(out, line_string),
            );
        }
        Geometry::MultiPolygon(multi) => {
            write_member_list(
                out,
                multi.num_polygons(),
                multi.polygons(),
                |out, polygon| write_polygon_body(out, polygon),
            );
        }
        Geometry::PolyhedralSurface(surface) => {
            write_member_list(out, surface.num_patches(), surface.patches(), |out, p| {
                write_polygon_body(out, p)
            });
        }
        Geometry::Tin(tin) => {
            write_member_list(out, tin.num_patches(), tin.patches(), |out, triangle| {
                write_triangle_body(out, triangle)
            });
        }
        Geometry::GeometryCollection(collection) => {
            write_member_list(
                out,
                collection.num_geometries(),
                collection.geometries(),
                |out, member| write_geometry(out, member),
            );
        }
    }
}

fn write_polygon_body(out: &mut String, polygon: &Polygon) {
    if polygon.rings().len() == 0 {
        out.push_str("EMPTY");
        return;
    }
    out.push('(');
    for (i, ring) in polygon.rings().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_coord_list(out, ring);
    }
    out.push(')');
}

fn write_triangle_body(out: &mut String, triangle: &Triangle) {
    match triangle.ring() {
        Some(ring) => {
            out.push('(');
            write_coord_list(out, ring);
            out.push(')');
        }
        None => out.push_str("EMPTY"),
    }
}

/// `(x y, x y, ...)`, or `EMPTY` for a point-less line string.
fn write_coord_list(out: &mut String, line_string: &LineString) {
    if line_string.num_points() == 0 {
        out.push_str("EMPTY");
        return;
    }
    out.push('(');
    for (i, point) in line_string.points().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if let Some(coord) = point.coord() {
            write_coord(out, coord);
        }
    }
    out.push(')');
}

fn write_member_list<'a, T: 'a>(
    out: &mut String,
    count: usize,
    members: impl Iterator<Item = &'a T>,
    write_member: impl Fn(&mut String, &T),
) {
    if count == 0 {
        out.push_str("EMPTY");
        return;
    }
    out.push('(');
    for (i, member) in members.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_member(out, member);
    }
    out.push(')');
}

/// Axis values space-separated, each in the shortest decimal form that
/// parses back to the identical double.
fn write_coord(out: &mut String, coord: &Coord) {
    for (i, value) in coord.to_vec().into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{value}");
    }
}
