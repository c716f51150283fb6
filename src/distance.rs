use geo::Point;

use crate::FilmRecord;

// metres
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Great-circle distance in metres between two latitude/longitude pairs,
/// using the haversine formula. Inputs are not range checked.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS * c
}

pub fn point_distance(a: Point, b: Point) -> f64 {
    distance(a.y(), a.x(), b.y(), b.x())
}

/// Sets `distance` on every record and sorts nearest first. Ties keep their
/// input order. Records without coordinates have no distance and are left
/// out.
pub fn rank_by_distance(records: Vec<FilmRecord>, reference: Point) -> Vec<FilmRecord> {
    let mut ranked: Vec<(f64, FilmRecord)> = records
        .into_iter()
        .filter_map(|record| Some((point_distance(record.coordinates?, reference), record)))
        .collect();
    ranked.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    ranked
        .into_iter()
        .map(|(distance, mut record)| {
            record.distance = Some(distance);
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use geo::HaversineDistance;

    use super::*;
    use crate::record::point;

    #[test]
    fn test_lviv_to_vinnytsia() {
        let d = distance(49.8177029, 24.0237912, 49.2204274, 28.3793954);
        assert_eq!((d / 100.0).round() * 100.0, 321300.0);
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(distance(5.0, 600.0, 5.0, 600.0), 0.0);
        for (lat, lon) in [(0.0, 0.0), (49.8177029, 24.0237912), (-89.9, 179.9), (90.0, -180.0)] {
            assert_eq!(distance(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let points = [
            (49.8177029, 24.0237912),
            (52.5310214, -1.2649062),
            (-33.8688, 151.2093),
            (64.1466, -21.9426),
        ];
        for (lat1, lon1) in points {
            for (lat2, lon2) in points {
                let d = distance(lat1, lon1, lat2, lon2);
                assert_eq!(d, distance(lat2, lon2, lat1, lon1));
                assert!(d >= 0.0);
            }
        }
    }

    #[test]
    fn test_agrees_with_geo() {
        // geo uses the mean radius 6371008.8
        let a = point(52.5310214, -1.2649062);
        let b = point(51.0834196, 10.4234469);
        let ours = point_distance(a, b);
        let theirs = a.haversine_distance(&b) * EARTH_RADIUS / 6_371_008.8;
        assert!((ours - theirs).abs() < 1e-5 * ours);
    }

    fn located(name: &str, lat: f64, lon: f64) -> FilmRecord {
        let mut record = FilmRecord::new(name.into(), Some("2011".into()), name.into());
        record.coordinates = Some(point(lat, lon));
        record
    }

    #[test]
    fn test_ranking() {
        let lviv = point(49.8177029, 24.0237912);
        let records = vec![
            located("far", -33.8688, 151.2093),
            located("tie-a", 49.2204274, 28.3793954),
            located("here", 49.8177029, 24.0237912),
            located("tie-b", 49.2204274, 28.3793954),
            located("mid", 52.5310214, -1.2649062),
        ];

        let ranked = rank_by_distance(records, lviv);
        let names: Vec<_> = ranked.iter().map(|x| x.name.as_str()).collect();
        assert_eq!(names, ["here", "tie-a", "tie-b", "mid", "far"]);
        assert_eq!(ranked[0].distance, Some(0.0));
        assert!(ranked
            .windows(2)
            .all(|x| x[0].distance.unwrap() <= x[1].distance.unwrap()));
    }

    #[test]
    fn test_ranking_skips_unresolved() {
        let records = vec![
            located("here", 0.0, 0.0),
            FilmRecord::new("lost".into(), None, "Nowhere".into()),
        ];
        let ranked = rank_by_distance(records, point(0.0, 0.0));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "here");
    }
}
