use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use crate::{geocode::Geocoder, utils::progress_style, FilmRecord};

pub fn resolve(mut record: FilmRecord, geocoder: &mut impl Geocoder) -> FilmRecord {
    match geocoder.lookup(&record.location) {
        Ok(Some(x)) => record.coordinates = Some(x),
        Ok(None) => {
            debug!(location = %record.location, "no geocoding match");
            record.coordinates = None;
        }
        Err(e) => {
            warn!(location = %record.location, "geocoder unavailable: {e:#}");
            record.coordinates = None;
        }
    }
    record
}

/// Resolves every record in order and keeps the ones with coordinates.
pub fn resolve_all(records: Vec<FilmRecord>, geocoder: &mut impl Geocoder) -> Vec<FilmRecord> {
    let total = records.len();
    info!("Resolving {total} locations...");

    let pb = ProgressBar::new(total as u64).with_style(progress_style());
    let mut output = Vec::new();
    for record in records {
        let record = resolve(record, geocoder);
        if record.is_resolved() {
            output.push(record);
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(resolved = output.len(), unresolved = total - output.len(), "resolved locations");
    output
}
