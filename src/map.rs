use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

/// The three marker groups drawn on a film map.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapLayers {
    pub user: Vec<Marker>,
    pub nearest: Vec<Marker>,
    pub film: Vec<Marker>,
    pub film_name: String,
}

pub fn file_name(film: &str, year: &str) -> String {
    format!("{}_{year}_film_map.html", film.replace(' ', "_"))
}

#[derive(Serialize)]
struct Layer<'a> {
    name: &'a str,
    color: &'static str,
    markers: &'a [Marker],
}

pub fn render(layers: &MapLayers) -> Result<String> {
    let data = [
        Layer {
            name: "Your location",
            color: "darkred",
            markers: &layers.user,
        },
        Layer {
            name: "Nearest film points",
            color: "purple",
            markers: &layers.nearest,
        },
        Layer {
            name: &layers.film_name,
            color: "orange",
            markers: &layers.film,
        },
    ];
    // labels come from the listing and must not close the script tag
    let data = serde_json::to_string(&data)?.replace("</", "<\\/");

    Ok(TEMPLATE.replace("{{LAYERS}}", &data))
}

pub fn write(path: &Path, layers: &MapLayers) -> Result<()> {
    fs::write(path, render(layers)?)
        .with_context(|| format!("failed to write map {}", path.display()))
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map { height: 100%; margin: 0; }</style>
</head>
<body>
<div id="map"></div>
<script>
const layers = {{LAYERS}};
const map = L.map("map").setView([0, 0], 2);
L.tileLayer("https://tile.openstreetmap.org/{z}/{x}/{y}.png", {
  maxZoom: 19,
  attribution: "&copy; OpenStreetMap contributors",
}).addTo(map);
const overlays = {};
for (const layer of layers) {
  const group = L.featureGroup();
  for (const marker of layer.markers) {
    const popup = document.createElement("span");
    popup.textContent = marker.label;
    L.circleMarker([marker.latitude, marker.longitude], { color: layer.color, radius: 8 })
      .bindPopup(popup)
      .addTo(group);
  }
  group.addTo(map);
  overlays[layer.name] = group;
}
L.control.layers(null, overlays).addTo(map);
</script>
</body>
</html>
"#;
