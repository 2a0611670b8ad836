use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use serde_json::json;

use crate::cli::{Cli, RankArgs};
use crate::explorer::{Evaluation, Selection};
use crate::io::write_ranking;
use super::open_explorer;

pub fn run(cli: &Cli, args: &RankArgs) -> Result<()> {
    // GeoJSON goes to a file; stdout is reserved for the ranking itself
    if args.geojson.as_deref() == Some(Path::new("-")) { bail!("stdout is not supported for --geojson."); }

    let explorer = open_explorer(cli, &args.data_dir)?;

    let selection = Selection {
        campus: Some(args.campus.clone()),
        travel_mode: args.mode,
        minutes: args.minutes,
        transit: args.transit,
        weights: args.weights.unwrap_or_default(),
    };
    let evaluation = explorer.evaluate(&selection)?;

    if args.json {
        let report = to_json(&evaluation);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_table(&evaluation));
    }

    if let Some(path) = &args.geojson {
        let bytes = write_ranking(&evaluation.ranking, &explorer.layers().neighborhoods)?;
        fs::write(path, bytes)
            .with_context(|| format!("Failed to write GeoJSON file: {}", path.display()))?;
        log::info!("wrote {} neighborhoods to {}", evaluation.ranking.len(), path.display());
    }
    Ok(())
}

/// Human-readable distance: whole meters below 1 km, otherwise kilometers to one decimal.
pub fn format_distance(meters: f64) -> String {
    if !meters.is_finite() {
        "-".to_string()
    } else if meters < 1000.0 {
        format!("{:.0}m", meters)
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

fn render_table(evaluation: &Evaluation) -> String {
    let selection = &evaluation.selection;
    let mut out = format!(
        "{} | {} min by {} at {:.0} m/min ({}) | nearest {} stop within range\n",
        selection.campus.as_deref().unwrap_or("-"),
        selection.minutes,
        selection.travel_mode,
        selection.travel_mode.speed(),
        format_distance(evaluation.threshold_m),
        selection.transit,
    );
    out.push_str(&format!("{} | total {:.2}\n", selection.weights, selection.weights.total()));

    if evaluation.is_empty() {
        out.push_str("No neighborhoods found within range. Try a longer time or a different transit mode.\n");
        return out;
    }

    let width = evaluation.ranking.iter().map(|e| e.name().len()).max().unwrap_or(0).max("Neighborhood".len());
    out.push_str(&format!(
        "{:>4}  {:<width$}  {:>5}  {:>8}  {:>5}  {:>7}  {:>8}  {:>8}\n",
        "#", "Neighborhood", "Score", "Campus", "Parks", "Grocery", "Bike", "Transit",
    ));
    for (rank, entry) in evaluation.ranking.iter().enumerate() {
        let raw = &entry.metrics.raw;
        out.push_str(&format!(
            "{:>4}  {:<width$}  {:>5.1}  {:>8}  {:>5}  {:>7}  {:>8}  {:>8}\n",
            rank + 1,
            entry.name(),
            entry.score() * 100.0,
            format_distance(raw.campus_distance),
            raw.parks_count,
            raw.grocery_count,
            format_distance(raw.bike_distance),
            format_distance(raw.transit_distance),
        ));
    }
    out
}

fn to_json(evaluation: &Evaluation) -> serde_json::Value {
    let neighborhoods: Vec<serde_json::Value> = evaluation.ranking.iter().enumerate()
        .map(|(rank, entry)| json!({
            "rank": rank + 1,
            "name": entry.name(),
            "score": entry.score(),
            "raw": entry.metrics.raw,
            "normalized": entry.metrics.normalized,
        }))
        .collect();

    json!({
        "selection": evaluation.selection,
        "threshold_m": evaluation.threshold_m,
        "campus_centroid": evaluation.campus_centroid.map(|c| [c.x(), c.y()]),
        "includes_transit": evaluation.ranking.includes_transit(),
        "maxima": evaluation.ranking.maxima(),
        "neighborhoods": neighborhoods,
    })
}
