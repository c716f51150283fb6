use std::{
    fs::{self, File},
    io::Read,
    path::Path,
};

use anyhow::{Context, Result};
use itertools::Itertools;
use tracing::{debug, info};

use crate::{title::parse_title, FilmRecord};

/// Preamble length of the IMDb `locations.list` dump.
pub const HEADER_LINES: usize = 14;

pub fn load(path: &Path, header_lines: usize) -> Result<Vec<FilmRecord>> {
    let text = read_source(path)
        .with_context(|| format!("failed to read listing {}", path.display()))?;
    let records = parse(&text, header_lines);
    info!(path = %path.display(), records = records.len(), "loaded listing");
    Ok(records)
}

fn read_source(path: &Path) -> Result<String> {
    let bytes = if path.extension().is_some_and(|x| x == "zst") {
        let mut bytes = Vec::new();
        zstd::Decoder::new(File::open(path)?)?.read_to_end(&mut bytes)?;
        bytes
    } else {
        fs::read(path)?
    };
    Ok(decode(bytes))
}

// IMDb dumps are ISO-8859-1, where every byte is its own code point
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(x) => x,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}

pub fn parse(text: &str, header_lines: usize) -> Vec<FilmRecord> {
    let mut dropped = 0;
    let records: Vec<FilmRecord> = text
        .lines()
        .skip(header_lines)
        .filter_map(|line| {
            let record = parse_row(line);
            if record.is_none() && !line.trim().is_empty() {
                dropped += 1;
            }
            record
        })
        .unique_by(|x| (x.name.clone(), x.location.clone()))
        .collect();

    if dropped > 0 {
        debug!(dropped, "skipped malformed rows");
    }
    records
}

fn parse_row(line: &str) -> Option<FilmRecord> {
    let mut fields = line.split('\t').filter(|x| !x.is_empty());
    let raw_title = fields.next()?;
    let location = fields.next()?;
    // the remaining notes column carries no location data

    let (name, year) = parse_title(raw_title)?;
    Some(FilmRecord::new(name, year, location.to_string()))
}
