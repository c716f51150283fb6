use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use film_map::{
    geocode::{Nominatim, NOMINATIM_URL},
    listing::{self, HEADER_LINES},
    map,
    query::{build_layers, NEAREST},
    utils::parse_point,
};

/// Maps where films of a given year were shot, relative to you.
#[derive(Debug, Parser)]
struct Cli {
    /// Year of the films to map, compared verbatim
    #[arg(short, long)]
    year: String,
    /// Your position as "lat, lon"
    #[arg(short, long, allow_hyphen_values = true)]
    location: String,
    /// Film whose locations get their own layer
    #[arg(short, long)]
    film: String,

    /// Tab separated locations listing, optionally .zst compressed
    #[arg(long, env = "FILM_MAP_SOURCE", default_value = "locations.list")]
    source: PathBuf,
    #[arg(long, default_value_t = HEADER_LINES)]
    header_lines: usize,
    #[arg(long, default_value_t = NEAREST)]
    nearest: usize,
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    #[arg(long, env = "FILM_MAP_NOMINATIM_URL", default_value = NOMINATIM_URL)]
    nominatim_url: String,
    /// Contact address sent along with geocoding requests
    #[arg(long, env = "FILM_MAP_EMAIL")]
    email: Option<String>,
    /// Delay between geocoding requests, never less than a second
    #[arg(long, default_value_t = 1000)]
    min_delay_ms: u64,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "film_map=debug"
    } else {
        "film_map=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let reference = parse_point(&cli.location)?;
    let records = listing::load(&cli.source, cli.header_lines)?;

    let mut geocoder = Nominatim::new(
        &cli.nominatim_url,
        cli.email,
        Duration::from_millis(cli.min_delay_ms),
    );
    let layers = build_layers(
        &records,
        &cli.year,
        &cli.film,
        reference,
        cli.nearest,
        &mut geocoder,
    );

    let path = cli.output_dir.join(map::file_name(&cli.film, &cli.year));
    map::write(&path, &layers)?;
    info!("Finished. Please have a look at the map {}", path.display());

    Ok(())
}
