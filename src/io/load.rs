use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::campus::fallback_campus_features;
use crate::config::DataFiles;
use crate::layers::{Feature, LayerKind, Layers};
use super::geojson::read_features;

/// Reads features from a GeoJSON file at `path`.
pub fn read_geojson_file(path: &Path) -> Result<Vec<Feature>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read GeoJSON file: {}", path.display()))?;
    read_features(&bytes)
        .with_context(|| format!("Failed to parse GeoJSON file: {}", path.display()))
}

/// Load every layer from `dir` using the file names in `files`.
///
/// Required layers, universities included, propagate their error. Transit layers
/// that fail to load are replaced by an empty collection. A universities layer that
/// loads but holds no features is replaced by the built-in fallback campuses.
pub fn load_layers(dir: &Path, files: &DataFiles) -> Result<Layers> {
    let mut layers = Layers::default();

    for kind in LayerKind::order() {
        let path = dir.join(files.get(kind));
        let features = match read_geojson_file(&path) {
            Ok(features) => features,
            Err(e) if !kind.is_required() => {
                log::warn!("{} layer unavailable, using an empty collection: {:#}", kind, e);
                Vec::new()
            }
            Err(e) => return Err(e.context(format!("Failed to load required {} layer", kind))),
        };
        *layers.get_layer_mut(kind) = features;
    }

    if layers.universities.is_empty() {
        log::warn!("universities layer is empty, using fallback campuses");
        layers.universities = fallback_campus_features();
    }

    for kind in LayerKind::order() {
        log::info!("loaded {} {} features", layers.get_layer(kind).len(), kind);
    }
    Ok(layers)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    const POINT: &str = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"name":"A"},"geometry":{"type":"Point","coordinates":[-75.19,39.95]}}
    ]}"#;

    const EMPTY: &str = r#"{"type":"FeatureCollection","features":[]}"#;

    fn write_required(dir: &Path, files: &DataFiles) {
        for kind in [LayerKind::Neighborhoods, LayerKind::Parks, LayerKind::Amenities, LayerKind::BikeNetwork] {
            fs::write(dir.join(files.get(kind)), POINT).unwrap();
        }
        fs::write(dir.join(files.get(LayerKind::Universities)), EMPTY).unwrap();
    }

    #[test]
    fn optional_layers_fall_back() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        let files = DataFiles::default();
        write_required(dir, &files);

        let layers = load_layers(dir, &files).unwrap();
        assert_eq!(layers.neighborhoods.len(), 1);
        assert!(layers.bus_stops.is_empty());
        assert!(layers.subway_stops.is_empty());
        assert!(layers.bike_share.is_empty());
        assert_eq!(layers.universities, fallback_campus_features());
    }

    #[test]
    fn present_layers_are_used() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        let files = DataFiles::default();
        write_required(dir, &files);
        fs::write(dir.join(files.get(LayerKind::Universities)), POINT).unwrap();
        fs::write(dir.join(files.get(LayerKind::SubwayStops)), POINT).unwrap();

        let layers = load_layers(dir, &files).unwrap();
        assert_eq!(layers.universities.len(), 1);
        assert_eq!(layers.universities[0].prop_str("name"), Some("A"));
        assert_eq!(layers.subway_stops.len(), 1);
    }

    #[test]
    fn missing_required_layer_fails() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        let files = DataFiles::default();
        write_required(dir, &files);
        fs::remove_file(dir.join(files.get(LayerKind::Parks))).unwrap();

        let err = load_layers(dir, &files).unwrap_err();
        assert!(format!("{:#}", err).contains("required parks layer"));
    }

    #[test]
    fn unreadable_universities_fail() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        let files = DataFiles::default();
        write_required(dir, &files);

        fs::write(dir.join(files.get(LayerKind::Universities)), "{").unwrap();
        let err = load_layers(dir, &files).unwrap_err();
        assert!(format!("{:#}", err).contains("required universities layer"));

        fs::remove_file(dir.join(files.get(LayerKind::Universities))).unwrap();
        assert!(load_layers(dir, &files).is_err());
    }

    #[test]
    fn malformed_file_reports_path() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        let path = dir.join("broken.geojson");
        fs::write(&path, "{").unwrap();

        let err = read_geojson_file(&path).unwrap_err();
        assert!(err.to_string().contains("broken.geojson"));
    }
}
