use geo::Point;
use tracing::info;

use crate::{
    distance::rank_by_distance,
    geocode::Geocoder,
    map::{MapLayers, Marker},
    resolve::resolve_all,
    FilmRecord,
};

pub const NEAREST: usize = 10;

pub fn filter_by_year(records: &[FilmRecord], year: &str) -> Vec<FilmRecord> {
    records
        .iter()
        .filter(|x| x.year.as_deref() == Some(year))
        .cloned()
        .collect()
}

/// The `k` records closest to `reference`, nearest first. Records should
/// already be resolved.
pub fn nearest(records: &[FilmRecord], reference: Point, k: usize) -> Vec<FilmRecord> {
    let mut ranked = rank_by_distance(records.to_vec(), reference);
    ranked.truncate(k);
    ranked
}

pub fn filter_by_name(records: &[FilmRecord], name: &str) -> Vec<FilmRecord> {
    records
        .iter()
        .filter(|x| x.name == name)
        .cloned()
        .collect()
}

/// Takes a loaded listing through year filtering, resolution and ranking and
/// returns the markers to draw. Only records of `year` are geocoded.
pub fn build_layers(
    records: &[FilmRecord],
    year: &str,
    film: &str,
    reference: Point,
    k: usize,
    geocoder: &mut impl Geocoder,
) -> MapLayers {
    let of_year = filter_by_year(records, year);
    info!(year, records = of_year.len(), "selected records");

    let resolved = resolve_all(of_year, geocoder);
    let closest = nearest(&resolved, reference, k);
    // film locations keep listing order
    let film_locations = filter_by_name(&resolved, film);
    info!(
        nearest = closest.len(),
        film_locations = film_locations.len(),
        "built map layers"
    );

    MapLayers {
        user: vec![Marker {
            latitude: reference.y(),
            longitude: reference.x(),
            label: "You are here".to_string(),
        }],
        nearest: closest.into_iter().filter_map(|x| marker(&x, &x.name)).collect(),
        film: film_locations
            .into_iter()
            .filter_map(|x| marker(&x, &x.location))
            .collect(),
        film_name: film.to_string(),
    }
}

fn marker(record: &FilmRecord, label: &str) -> Option<Marker> {
    Some(Marker {
        latitude: record.latitude()?,
        longitude: record.longitude()?,
        label: label.to_string(),
    })
}
