use anyhow::Result;
use csv::{Reader, ReaderBuilder, Trim};
use flate2::read::GzDecoder;
use serde::Deserialize;
use std::fs::File;
use tracing::{info, warn};

use crate::types::DeclinationSpec;

/// Anything that can answer "what is the magnetic declination here?".
pub trait DeclinationSource {
    fn lookup(&self, lat_deg: f64, lon_deg: f64) -> Option<DeclinationSpec>;
}

/// Same answer everywhere; used for values given on the command line.
pub struct FixedDeclination(pub DeclinationSpec);

impl DeclinationSource for FixedDeclination {
    fn lookup(&self, _lat_deg: f64, _lon_deg: f64) -> Option<DeclinationSpec> {
        Some(self.0.clone())
    }
}

/// Ask `source`, falling back to zero declination so rendering never waits
/// on a missing answer.
pub fn lookup_or_default(
    source: &dyn DeclinationSource,
    lat_deg: f64,
    lon_deg: f64,
) -> DeclinationSpec {
    source.lookup(lat_deg, lon_deg).unwrap_or_else(|| {
        warn!(lat_deg, lon_deg, "no declination available, using zero");
        DeclinationSpec::default()
    })
}

#[derive(Debug, Deserialize)]
struct DeclinationRow {
    lat: f64,
    lon: f64,
    declination: f64,
    annual_change: f64,
    #[serde(default)]
    year: String,
}

#[derive(Debug, Clone)]
struct GridPoint {
    lat_deg: f64,
    lon_deg: f64,
    spec: DeclinationSpec,
}

/// Precomputed declination samples; lookups answer with the nearest sample.
#[derive(Debug, Clone, Default)]
pub struct DeclinationTable {
    points: Vec<GridPoint>,
}

impl DeclinationTable {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// Central angle between two lat/lon positions, in radians (haversine).
fn central_angle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (p1, p2) = (lat1.to_radians(), lat2.to_radians());
    let dp = p2 - p1;
    let dl = (lon2 - lon1).to_radians();
    let a = (dp / 2.0).sin().powi(2) + p1.cos() * p2.cos() * (dl / 2.0).sin().powi(2);
    2.0 * a.sqrt().clamp(0.0, 1.0).asin()
}

impl DeclinationSource for DeclinationTable {
    fn lookup(&self, lat_deg: f64, lon_deg: f64) -> Option<DeclinationSpec> {
        self.points
            .iter()
            .map(|p| (central_angle(lat_deg, lon_deg, p.lat_deg, p.lon_deg), p))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, p)| p.spec.clone())
    }
}

fn parse_table_from_reader<R: std::io::Read>(mut rdr: Reader<R>) -> Result<DeclinationTable> {
    let mut points = Vec::new();
    for rec in rdr.deserialize() {
        let row: DeclinationRow = rec?;
        let spec = DeclinationSpec::new(row.declination, row.annual_change, &row.year);
        spec.validate()?;
        points.push(GridPoint {
            lat_deg: row.lat,
            lon_deg: row.lon,
            spec,
        });
    }
    Ok(DeclinationTable { points })
}

/// Load a `lat,lon,declination,annual_change,year` CSV, gunzipping paths ending in `.gz`.
pub fn load_declination_table(path: &str) -> Result<DeclinationTable> {
    let table = if path.ends_with(".gz") {
        let gz = GzDecoder::new(File::open(path)?);
        parse_table_from_reader(ReaderBuilder::new().trim(Trim::All).from_reader(gz))?
    } else {
        parse_table_from_reader(ReaderBuilder::new().trim(Trim::All).from_path(path)?)?
    };
    info!(path, rows = table.len(), "loaded declination table");
    Ok(table)
}
