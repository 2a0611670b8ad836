use geo::{Coord, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use serde_json::{json, Map, Value};

use crate::error::{Result, ScoutError};
use crate::layers::Feature;
use crate::score::Ranking;

/// Read features from GeoJSON FeatureCollection bytes.
///
/// A malformed document is an error. A malformed or unsupported geometry is not:
/// the feature is kept with no geometry so centroid-dependent steps skip it.
pub fn read_features(bytes: &[u8]) -> Result<Vec<Feature>> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| ScoutError::InvalidGeoJson(e.to_string()))?;

    let features = value.get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| ScoutError::InvalidGeoJson("missing 'features' array".into()))?;

    let mut skipped = 0;
    let features: Vec<Feature> = features.iter()
        .map(|feature| {
            let geometry = feature.get("geometry").and_then(parse_geometry);
            if geometry.is_none() { skipped += 1 }
            let properties = feature.get("properties")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default();
            Feature { geometry, properties }
        })
        .collect();

    if skipped > 0 {
        log::warn!("{} of {} features have no usable geometry", skipped, features.len());
    }
    Ok(features)
}

/// Parse a GeoJSON geometry object; `None` if it is null, unsupported or malformed.
fn parse_geometry(geometry: &Value) -> Option<Geometry<f64>> {
    let coords = geometry.get("coordinates")?;
    match geometry.get("type")?.as_str()? {
        "Point" => parse_position(coords).map(|c| Geometry::Point(Point::from(c))),
        "MultiPoint" => parse_positions(coords)
            .map(|cs| Geometry::MultiPoint(MultiPoint(cs.into_iter().map(Point::from).collect()))),
        "LineString" => parse_positions(coords).map(|cs| Geometry::LineString(LineString(cs))),
        "MultiLineString" => array_of(coords, |line| parse_positions(line).map(LineString))
            .map(|lines| Geometry::MultiLineString(MultiLineString(lines))),
        "Polygon" => parse_polygon(coords).map(Geometry::Polygon),
        "MultiPolygon" => array_of(coords, parse_polygon)
            .map(|polygons| Geometry::MultiPolygon(MultiPolygon(polygons))),
        _ => None,
    }
}

/// Parse `[[ring], [hole], ...]`; the first ring is the exterior.
fn parse_polygon(coords: &Value) -> Option<Polygon<f64>> {
    let mut rings = array_of(coords, |ring| parse_positions(ring).map(LineString))?.into_iter();
    let exterior = rings.next()?;
    Some(Polygon::new(exterior, rings.collect()))
}

fn array_of<T>(value: &Value, parse: impl Fn(&Value) -> Option<T>) -> Option<Vec<T>> {
    value.as_array()?.iter().map(parse).collect()
}

fn parse_positions(value: &Value) -> Option<Vec<Coord<f64>>> {
    array_of(value, parse_position)
}

/// Parse `[lon, lat, ...]`, rejecting out-of-range coordinates.
fn parse_position(value: &Value) -> Option<Coord<f64>> {
    let position = value.as_array()?;
    let x = position.first()?.as_f64()?;
    let y = position.get(1)?.as_f64()?;
    ((-180.0..=180.0).contains(&x) && (-90.0..=90.0).contains(&y)).then_some(Coord { x, y })
}

/// Write a ranking as a GeoJSON FeatureCollection of the ranked neighborhoods.
///
/// `neighborhoods` is the collection the ranking was computed from; each output
/// feature carries the source geometry plus rank, score and per-criterion values.
pub fn write_ranking(ranking: &Ranking, neighborhoods: &[Feature]) -> Result<Vec<u8>> {
    let features: Vec<Value> = ranking.iter().enumerate().map(|(rank, entry)| {
        let geometry = neighborhoods.get(entry.candidate.index)
            .and_then(|feature| feature.geometry.as_ref())
            .map_or(Value::Null, geometry_to_json);

        let raw = &entry.metrics.raw;
        let normalized = &entry.metrics.normalized;
        json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "name": entry.name(),
                "rank": rank + 1,
                "score": entry.score(),
                "campus_distance_m": raw.campus_distance,
                "transit_distance_m": raw.transit_distance,
                "parks": raw.parks_count,
                "grocery": raw.grocery_count,
                "supermarkets": raw.supermarket_count,
                "restaurants": raw.restaurant_count,
                "bike_distance_m": finite_or_null(raw.bike_distance),
                "bike_access": raw.bike_access,
                "normalized": {
                    "distance": normalized.distance,
                    "parks": normalized.parks,
                    "grocery": normalized.grocery,
                    "bikeAccess": normalized.bike_access,
                    "transit": normalized.transit,
                },
            }
        })
    }).collect();

    let feature_collection = json!({
        "type": "FeatureCollection",
        "features": features,
    });

    serde_json::to_vec(&feature_collection).map_err(|e| ScoutError::InvalidGeoJson(e.to_string()))
}

fn finite_or_null(value: f64) -> Value {
    if value.is_finite() { json!(value) } else { Value::Null }
}

fn ring_to_json(ring: &LineString<f64>) -> Value {
    ring.coords().map(|c| json!([c.x, c.y])).collect()
}

fn polygon_to_json(polygon: &Polygon<f64>) -> Value {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(ring_to_json)
        .collect()
}

/// Convert a geometry back to a GeoJSON geometry object. Types without a
/// GeoJSON reading counterpart here become `null`.
fn geometry_to_json(geometry: &Geometry<f64>) -> Value {
    let (ty, coordinates) = match geometry {
        Geometry::Point(p) => ("Point", json!([p.x(), p.y()])),
        Geometry::MultiPoint(mp) => ("MultiPoint", mp.iter().map(|p| json!([p.x(), p.y()])).collect()),
        Geometry::LineString(ls) => ("LineString", ring_to_json(ls)),
        Geometry::MultiLineString(mls) => ("MultiLineString", mls.iter().map(ring_to_json).collect()),
        Geometry::Polygon(polygon) => ("Polygon", polygon_to_json(polygon)),
        Geometry::MultiPolygon(mp) => ("MultiPolygon", mp.iter().map(polygon_to_json).collect()),
        _ => return Value::Null,
    };
    let mut object = Map::new();
    object.insert("type".into(), json!(ty));
    object.insert("coordinates".into(), coordinates);
    Value::Object(object)
}
