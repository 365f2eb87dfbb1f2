//! helsinki — demo shell for the otto terminal locator.
//!
//! Stands in for the mobile application shell: the embedded JSON constant
//! plays the static terminal dataset, and the query point plays the position
//! a platform location service would deliver.  Defaults to Helsinki city
//! center; pass `lat lon` on the command line to query from elsewhere.

use std::io::Cursor;

use anyhow::{Context, Result, bail};

use otto_core::GeoPoint;
use otto_data::load_terminals_json_reader;
use otto_search::find_nearest;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Helsinki city center (Three Smiths Square).
const DEFAULT_QUERY: GeoPoint = GeoPoint { lat: 60.1699, lon: 24.9384 };

// A handful of real Helsinki-area terminal sites.
const TERMINALS_JSON: &str = r#"[
    {
        "latitude": 60.1686,
        "longitude": 24.9420,
        "address": "Aleksanterinkatu 52",
        "postalCode": "00100",
        "city": "Helsinki"
    },
    {
        "latitude": 60.1708,
        "longitude": 24.9415,
        "address": "Kaivokatu 8",
        "postalCode": "00100",
        "city": "Helsinki"
    },
    {
        "latitude": 60.1871,
        "longitude": 24.9600,
        "address": "Sturenkatu 1",
        "postalCode": "00510",
        "city": "Helsinki"
    },
    {
        "latitude": 60.2188,
        "longitude": 24.8133,
        "address": "Leppävaarankatu 3-9",
        "postalCode": "02600",
        "city": "Espoo"
    },
    {
        "latitude": 60.2934,
        "longitude": 25.0378,
        "address": "Kielotie 20",
        "postalCode": "01300",
        "city": "Vantaa"
    }
]"#;

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let query = parse_query(std::env::args().skip(1))?;

    // 1. Load the dataset — once, then read-only.
    let terminals = load_terminals_json_reader(Cursor::new(TERMINALS_JSON))
        .context("loading embedded terminal dataset")?;
    println!("Loaded {} terminals", terminals.len());
    println!("Query position: {query}");
    println!();

    // 2. Search.
    let hit = find_nearest(query, &terminals).context("searching for nearest terminal")?;

    // 3. Report, the way the mobile screen would.
    println!("Nearest Otto terminal:");
    println!("  Address     : {}", hit.terminal.address);
    println!("  Postal code : {}", hit.terminal.postal_code);
    println!("  City        : {}", hit.terminal.city);
    println!("  Distance    : {:.2} km", hit.distance_km);

    Ok(())
}

/// Parse an optional `lat lon` argument pair; no args means Helsinki center.
fn parse_query(mut args: impl Iterator<Item = String>) -> Result<GeoPoint> {
    let Some(lat) = args.next() else {
        return Ok(DEFAULT_QUERY);
    };
    let Some(lon) = args.next() else {
        bail!("expected both latitude and longitude, got only one argument");
    };

    let lat: f64 = lat.parse().with_context(|| format!("invalid latitude {lat:?}"))?;
    let lon: f64 = lon.parse().with_context(|| format!("invalid longitude {lon:?}"))?;

    let query = GeoPoint::new(lat, lon);
    if !query.is_valid() {
        bail!("coordinate {query} out of range (lat ±90, lon ±180)");
    }
    Ok(query)
}
