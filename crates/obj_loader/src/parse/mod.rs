//! Record-level parsing
//!
//! Line classification, attribute accumulation, face assembly, and polygon
//! triangulation. Everything here works on one record at a time and
//! reports failures as [`ParseErrorKind`](crate::error::ParseErrorKind);
//! the loader attaches line context.

pub mod attribute;
pub mod face;
pub mod line;
pub mod triangulate;

use crate::error::ParseErrorKind;
use crate::foundation::math::{Vec2, Vec3};

/// Parse one float token, treating a missing token as malformed.
pub(crate) fn parse_float(token: Option<&str>) -> Result<f32, ParseErrorKind> {
    let token = token.ok_or_else(|| ParseErrorKind::MalformedNumber(String::new()))?;
    token
        .parse()
        .map_err(|_| ParseErrorKind::MalformedNumber(token.to_string()))
}

/// Parse the first two float tokens of a record tail.
pub(crate) fn parse_vec2(tail: &str) -> Result<Vec2, ParseErrorKind> {
    let mut tokens = tail.split_whitespace();
    let x = parse_float(tokens.next())?;
    let y = parse_float(tokens.next())?;
    Ok(Vec2::new(x, y))
}

/// Parse the first three float tokens of a record tail.
pub(crate) fn parse_vec3(tail: &str) -> Result<Vec3, ParseErrorKind> {
    let mut tokens = tail.split_whitespace();
    let x = parse_float(tokens.next())?;
    let y = parse_float(tokens.next())?;
    let z = parse_float(tokens.next())?;
    Ok(Vec3::new(x, y, z))
}
