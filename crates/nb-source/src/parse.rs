//! Free-form `"x y"` coordinate parsing.

use nb_core::Point;

use crate::{SourceError, SourceResult};

/// Parse one `"x y"` entry into a finite [`Point`].
///
/// Exactly two whitespace-separated tokens are accepted; anything else is
/// rejected with a message suitable for showing to the user.
///
/// ```rust,ignore
/// assert_eq!(parse_point("10.0 15.0")?, Point::new(10.0, 15.0));
/// assert!(parse_point("10.0").is_err());
/// ```
pub fn parse_point(input: &str) -> SourceResult<Point> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [x, y] = tokens.as_slice() else {
        return Err(SourceError::WrongTokenCount {
            input: input.to_owned(),
            got:   tokens.len(),
        });
    };

    let point = Point::new(parse_coord(x)?, parse_coord(y)?);
    if !point.is_finite() {
        return Err(SourceError::NonFinite { input: input.to_owned() });
    }
    Ok(point)
}

fn parse_coord(token: &str) -> SourceResult<f64> {
    token
        .parse::<f64>()
        .map_err(|_| SourceError::NotANumber { token: token.to_owned() })
}

/// Reject a non-finite point that came from a typed source (CSV, RNG).
pub(crate) fn ensure_finite(point: Point) -> SourceResult<Point> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(SourceError::NonFinite { input: format!("{} {}", point.x, point.y) })
    }
}
