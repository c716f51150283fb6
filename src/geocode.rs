use std::{
    thread,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use geo::Point;
use serde::Deserialize;
use tracing::debug;
use ureq::{Agent, AgentBuilder};

use crate::record::point;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

// Nominatim usage policy: at most one request per second
pub const MIN_DELAY: Duration = Duration::from_secs(1);

/// Turns a free-text place into coordinates.
///
/// `Ok(None)` means the place is unknown to the provider, `Err` means the
/// provider could not be reached or answered garbage.
pub trait Geocoder {
    fn lookup(&mut self, place: &str) -> Result<Option<Point>>;
}

/// Keeps consecutive calls at least `min_delay` apart.
#[derive(Debug)]
pub struct Pacer {
    min_delay: Duration,
    last_call_at: Option<Instant>,
}

impl Pacer {
    pub fn new(min_delay: Duration) -> Self {
        Pacer {
            min_delay,
            last_call_at: None,
        }
    }

    pub fn wait(&mut self) {
        if let Some(last) = self.last_call_at {
            let elapsed = last.elapsed();
            if elapsed < self.min_delay {
                thread::sleep(self.min_delay - elapsed);
            }
        }
        self.last_call_at = Some(Instant::now());
    }
}

pub struct Nominatim {
    agent: Agent,
    base_url: String,
    email: Option<String>,
    pacer: Pacer,
}

impl Nominatim {
    pub fn new(base_url: &str, email: Option<String>, min_delay: Duration) -> Self {
        let agent = AgentBuilder::new()
            .user_agent(concat!("film_map/", env!("CARGO_PKG_VERSION")))
            .timeout_connect(Duration::from_secs(5))
            .timeout(Duration::from_secs(20))
            .build();

        Nominatim {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            email,
            pacer: Pacer::new(min_delay.max(MIN_DELAY)),
        }
    }
}

impl Geocoder for Nominatim {
    fn lookup(&mut self, place: &str) -> Result<Option<Point>> {
        self.pacer.wait();

        let mut request = self
            .agent
            .get(&format!("{}/search", self.base_url))
            .query("q", place)
            .query("format", "json")
            .query("limit", "1");
        if let Some(email) = &self.email {
            request = request.query("email", email);
        }

        let response: Vec<SearchResult> = request
            .call()
            .with_context(|| format!("geocoding request for {place:?} failed"))?
            .into_json()
            .context("invalid geocoding response")?;

        match response.into_iter().next() {
            Some(x) => {
                debug!(place, name = %x.display_name, "geocoded");
                Ok(Some(x.point()?))
            }
            None => Ok(None),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

impl SearchResult {
    fn point(&self) -> Result<Point> {
        Ok(point(
            self.lat.parse().context("invalid latitude")?,
            self.lon.parse().context("invalid longitude")?,
        ))
    }
}
