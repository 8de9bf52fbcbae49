//! Interactive HTML map output.
//!
//! Emits a self-contained Leaflet document plotting the full corpus in
//! green, the ranked winners in red, and the reference point in blue.
//! Marker data is embedded as JSON; the core knows nothing about this
//! format.

use std::io::Write;

use camino::Utf8Path;
use geo::Coord;
use serde::Serialize;

use nearstay_core::{Hotel, ScoredCandidate};
use nearstay_fs::{create_utf8_file, ensure_parent_dir};

use crate::CliError;

#[derive(Debug, Serialize)]
struct Marker {
    lat: f64,
    lon: f64,
    popup: String,
}

#[derive(Debug, Serialize)]
struct Reference {
    lat: f64,
    lon: f64,
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>Nearstay results</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map { height: 100%; margin: 0; }</style>
</head>
<body>
<div id="map"></div>
<script>
const hotels = __HOTELS__;
const results = __RESULTS__;
const reference = __REFERENCE__;
const map = L.map("map").setView([reference.lat, reference.lon], 14);
L.tileLayer("https://tile.openstreetmap.org/{z}/{x}/{y}.png", {
  maxZoom: 19,
  attribution: "&copy; OpenStreetMap contributors",
}).addTo(map);
for (const marker of hotels) {
  L.circleMarker([marker.lat, marker.lon], { color: "green", radius: 6 })
    .bindPopup(marker.popup)
    .addTo(map);
}
for (const marker of results) {
  L.circleMarker([marker.lat, marker.lon], { color: "red", radius: 8 })
    .bindPopup(marker.popup)
    .addTo(map);
}
L.circleMarker([reference.lat, reference.lon], { color: "blue", radius: 8 })
  .bindPopup("Reference Point")
  .addTo(map);
</script>
</body>
</html>
"#;

/// Render the map document for a corpus, its winners, and the query
/// reference point.
pub(crate) fn render_map(
    hotels: &[Hotel],
    results: &[ScoredCandidate],
    reference: Coord<f64>,
) -> Result<String, CliError> {
    let hotel_markers: Vec<Marker> = hotels.iter().map(hotel_marker).collect();
    let result_markers: Vec<Marker> = results.iter().map(result_marker).collect();
    let reference = Reference {
        lat: reference.y,
        lon: reference.x,
    };
    Ok(TEMPLATE
        .replace("__HOTELS__", &encode(&hotel_markers)?)
        .replace("__RESULTS__", &encode(&result_markers)?)
        .replace("__REFERENCE__", &encode(&reference)?))
}

/// Render the map and write it to `path`, creating parent directories
/// as needed.
pub(crate) fn write_map(
    path: &Utf8Path,
    hotels: &[Hotel],
    results: &[ScoredCandidate],
    reference: Coord<f64>,
) -> Result<(), CliError> {
    let html = render_map(hotels, results, reference)?;
    let write_error = |source| CliError::WriteMap {
        path: path.to_path_buf(),
        source,
    };
    ensure_parent_dir(path).map_err(write_error)?;
    let mut file = create_utf8_file(path).map_err(write_error)?;
    file.write_all(html.as_bytes()).map_err(write_error)?;
    Ok(())
}

fn encode<T: Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string(value).map_err(|source| CliError::EncodeMarkers { source })
}

fn hotel_marker(hotel: &Hotel) -> Marker {
    Marker {
        lat: hotel.location.y,
        lon: hotel.location.x,
        popup: format!(
            "Name: {}<br>Rating: {}<br>Reviews: {}",
            hotel.name, hotel.rating, hotel.reviews
        ),
    }
}

fn result_marker(candidate: &ScoredCandidate) -> Marker {
    Marker {
        lat: candidate.location.y,
        lon: candidate.location.x,
        popup: format!(
            "Name: {}<br>Rating: {}<br>Reviews: {}<br>Distance: {:.4}<br>Score: {:.3}",
            candidate.name, candidate.rating, candidate.reviews, candidate.distance,
            candidate.score
        ),
    }
}
