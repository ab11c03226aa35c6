use crate::coord::Coord;
use crate::dimension::Dimension;
use crate::error::{GeometryError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon, PolyhedralSurface, Tin, Triangle,
};

/// Parse a WKT string into a geometry tree tagged with `srid`.
pub fn read_wkt(input: &str, srid: u32) -> Result<Geometry> {
    let mut parser = Parser::new(input);
    let geometry = parser.parse_geometry()?;
    parser.skip_whitespace();
    if !parser.at_end() {
        return Err(parser.syntax(parser.pos, "unexpected trailing input"));
    }
    Ok(geometry.with_srid(srid))
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn syntax(&self, position: usize, message: impl Into<String>) -> GeometryError {
        GeometryError::WktSyntax {
            position,
            message: message.into(),
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.pos += 1;
        }
    }

    fn accept(&mut self, c: u8) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: u8) -> Result<()> {
        if self.accept(c) {
            Ok(())
        } else {
            Err(self.syntax(self.pos, format!("expected '{}'", c as char)))
        }
    }

    /// The next run of ASCII letters, uppercased. `None` if the next
    /// character is not a letter.
    fn word(&mut self) -> Option<String> {
        self.skip_whitespace();
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        if self.pos == start {
            None
        } else {
            Some(self.input[start..self.pos].to_ascii_uppercase())
        }
    }

    fn number(&mut self) -> Result<f64> {
        self.skip_whitespace();
        let start = self.pos;
        while matches!(
            self.peek(),
            Some(b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E')
        ) {
            self.pos += 1;
        }
        self.input[start..self.pos]
            .parse::<f64>()
            .map_err(|_| self.syntax(start, "expected a number"))
    }

    fn parse_geometry(&mut self) -> Result<Geometry> {
        self.skip_whitespace();
        let start = self.pos;
        let word = self
            .word()
            .ok_or_else(|| self.syntax(start, "expected a geometry type"))?;
        let (name, fused) = split_type_word(&word)
            .ok_or_else(|| self.syntax(start, format!("unknown geometry type '{word}'")))?;

        // The marker may be fused to the keyword ("POINTZ") or stand alone.
        let mut dim = Dimension::Xy;
        if let Some(fused) = fused {
            dim = fused;
        } else {
            let save = self.pos;
            match self.word().as_deref() {
                Some("Z") => dim = Dimension::Xyz,
                Some("M") => dim = Dimension::Xym,
                Some("ZM") => dim = Dimension::Xyzm,
                _ => self.pos = save,
            }
        }

        let empty = {
            let save = self.pos;
            if self.word().as_deref() == Some("EMPTY") {
                true
            } else {
                self.pos = save;
                false
            }
        };

        match name {
            "POINT" => {
                if empty {
                    return Ok(Point::empty(dim).into());
                }
                self.expect(b'(')?;
                let coord = self.coord(dim)?;
                self.expect(b')')?;
                Ok(Point::new(dim, Some(coord))?.into())
            }
            "LINESTRING" => {
                if empty {
                    return Ok(LineString::empty(dim).into());
                }
                Ok(self.point_list(dim)?.into())
            }
            "POLYGON" => {
                if empty {
                    return Ok(Polygon::empty(dim).into());
                }
                Ok(Polygon::new(dim, self.ring_list(dim)?)?.into())
            }
            "TRIANGLE" => {
                if empty {
                    return Ok(Triangle::new(dim, None)?.into());
                }
                self.expect(b'(')?;
                let ring = self.point_list(dim)?;
                self.expect(b')')?;
                Ok(Triangle::new(dim, Some(ring))?.into())
            }
            "MULTIPOINT" => {
                if empty {
                    return Ok(MultiPoint::empty(dim).into());
                }
                let members = self.members(dim, Self::multi_point_member)?;
                Ok(MultiPoint::new(dim, members)?.into())
            }
            "MULTILINESTRING" => {
                if empty {
                    return Ok(MultiLineString::empty(dim).into());
                }
                let members = self.members(dim, |p, dim| {
                    if p.empty_sentinel() {
                        Ok(LineString::empty(dim))
                    } else {
                        p.point_list(dim)
                    }
                })?;
                Ok(MultiLineString::new(dim, members)?.into())
            }
            "MULTIPOLYGON" => {
                if empty {
                    return Ok(MultiPolygon::empty(dim).into());
                }
                let members = self.members(dim, Self::polygon_member)?;
                Ok(MultiPolygon::new(dim, members)?.into())
            }
            "POLYHEDRALSURFACE" => {
                if empty {
                    return Ok(PolyhedralSurface::empty(dim).into());
                }
                let members = self.members(dim, Self::polygon_member)?;
                Ok(PolyhedralSurface::new(dim, members)?.into())
            }
            "TIN" => {
                if empty {
                    return Ok(Tin::empty(dim).into());
                }
                let members = self.members(dim, |p, dim| {
                    if p.empty_sentinel() {
                        return Triangle::new(dim, None);
                    }
                    p.expect(b'(')?;
                    let ring = p.point_list(dim)?;
                    p.expect(b')')?;
                    Triangle::new(dim, Some(ring))
                })?;
                Ok(Tin::new(dim, members)?.into())
            }
            "GEOMETRYCOLLECTION" => {
                if empty {
                    return Ok(GeometryCollection::empty(dim).into());
                }
                let members = self.members(dim, |p, _| p.parse_geometry())?;
                Ok(GeometryCollection::new(dim, members)?.into())
            }
            _ => unreachable!(),
        }
    }

    /// Exactly the coordinate arity of `dim`, whitespace-separated.
    fn coord(&mut self, dim: Dimension) -> Result<Coord> {
        let mut values = Vec::with_capacity(dim.coordinate_dimension());
        for _ in 0..dim.coordinate_dimension() {
            values.push(self.number()?);
        }
        Coord::from_slice(&values, dim)
    }

    /// `(x y, x y, ...)`
    fn point_list(&mut self, dim: Dimension) -> Result<LineString> {
        self.expect(b'(')?;
        let mut points = Vec::new();
        loop {
            let coord = self.coord(dim)?;
            points.push(Point::new(dim, Some(coord))?);
            if !self.accept(b',') {
                break;
            }
        }
        self.expect(b')')?;
        LineString::new(dim, points)
    }

    /// `((x y, ...), (x y, ...))`
    fn ring_list(&mut self, dim: Dimension) -> Result<Vec<LineString>> {
        self.expect(b'(')?;
        let mut rings = Vec::new();
        loop {
            rings.push(self.point_list(dim)?);
            if !self.accept(b',') {
                break;
            }
        }
        self.expect(b')')?;
        Ok(rings)
    }

    /// A parenthesized, comma-separated member list.
    fn members<T>(
        &mut self,
        dim: Dimension,
        member: impl Fn(&mut Self, Dimension) -> Result<T>,
    ) -> Result<Vec<T>> {
        self.expect(b'(')?;
        let mut members = Vec::new();
        loop {
            members.push(member(self, dim)?);
            if !self.accept(b',') {
                break;
            }
        }
        self.expect(b')')?;
        Ok(members)
    }

    /// Consumes a bare `EMPTY` sentinel if one is next.
    fn empty_sentinel(&mut self) -> bool {
        let save = self.pos;
        if self.word().as_deref() == Some("EMPTY") {
            true
        } else {
            self.pos = save;
            false
        }
    }

    /// A MultiPoint member: `EMPTY`, a parenthesized point, or the legacy
    /// bare coordinate form.
    fn multi_point_member(&mut self, dim: Dimension) -> Result<Point> {
        if self.empty_sentinel() {
            return Ok(Point::empty(dim));
        }
        if self.accept(b'(') {
            let coord = self.coord(dim)?;
            self.expect(b')')?;
            return Point::new(dim, Some(coord));
        }
        Point::new(dim, Some(self.coord(dim)?))
    }

    /// A MultiPolygon or PolyhedralSurface member: `EMPTY` or a ring list.
    fn polygon_member(&mut self, dim: Dimension) -> Result<Polygon> {
        if self.empty_sentinel() {
            return Polygon::new(dim, Vec::new());
        }
        Polygon::new(dim, self.ring_list(dim)?)
    }
}

/// Splits an uppercased leading word into a type keyword and an optionally
/// fused dimensionality marker.
fn split_type_word(word: &str) -> Option<(&'static str, Option<Dimension>)> {
    if let Some(name) = type_keyword(word) {
        return Some((name, None));
    }
    for (suffix, dim) in [
        ("ZM", Dimension::Xyzm),
        ("Z", Dimension::Xyz),
        ("M", Dimension::Xym),
    ] {
        if let Some(prefix) = word.strip_suffix(suffix) {
            if let Some(name) = type_keyword(prefix) {
                return Some((name, Some(dim)));
            }
        }
    }
    None
}

fn type_keyword(word: &str) -> Option<&'static str> {
    Some(match word {
        "POINT" => "POINT",
        "LINESTRING" => "LINESTRING",
        "POLYGON" => "POLYGON",
        "MULTIPOINT" => "MULTIPOINT",
        "MULTILINESTRING" => "MULTILINESTRING",
        "MULTIPOLYGON" => "MULTIPOLYGON",
        "GEOMETRYCOLLECTION" => "GEOMETRYCOLLECTION",
        "POLYHEDRALSURFACE" => "POLYHEDRALSURFACE",
        "TIN" => "TIN",
        "TRIANGLE" => "TRIANGLE",
        _ => return None,
    })
}
