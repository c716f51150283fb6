use anyhow::{Context, Result};
use geo::Point;
use indicatif::ProgressStyle;

use crate::record::point;

pub fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template("[{elapsed_precise}] {human_pos}/{human_len} {percent}% ({eta})")
        .expect("hardcoded")
}

/// Parses `"lat, lon"` as typed by a user.
pub fn parse_point(raw: &str) -> Result<Point> {
    let (lat, lon) = raw
        .split_once(',')
        .context("expected a location like \"49.8177, 24.0237\"")?;
    let lat: f64 = lat.trim().parse().context("invalid latitude")?;
    let lon: f64 = lon.trim().parse().context("invalid longitude")?;
    Ok(point(lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        let p = parse_point("49.8177029, 24.0237912").unwrap();
        assert_eq!((p.y(), p.x()), (49.8177029, 24.0237912));
        let p = parse_point("-33.8688,151.2093").unwrap();
        assert_eq!((p.y(), p.x()), (-33.8688, 151.2093));

        assert!(parse_point("49.8177029").is_err());
        assert!(parse_point("north, 24.0").is_err());
    }
}
