use compass_rose::data::{
    load_declination_table, lookup_or_default, DeclinationSource, FixedDeclination,
};
use compass_rose::{DeclinationSpec, Height, Rose, RoseConfig, RoseKind, XML_DECLARATION};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "compass-rose")]
#[command(about = "Compass rose dials rendered as SVG", version)]
struct Args {
    /// Height of the SVG in user units
    #[arg(long, default_value = "100")]
    height: String,

    /// Kind of rose to draw, either basic or chs
    #[arg(long = "type", default_value = "basic")]
    rose_type: String,

    /// Latitude in decimal degrees, for declination table lookups
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude in decimal degrees, for declination table lookups
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Magnetic declination in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    declination: Option<f64>,

    /// Annual change of declination in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    annual_change: Option<f64>,

    /// Year the declination applies to
    #[arg(long)]
    year: Option<String>,

    /// CSV of lat,lon,declination,annual_change,year samples (may be .gz)
    #[arg(long)]
    declination_table: Option<String>,

    /// Stroke colour override
    #[arg(long)]
    stroke: Option<String>,

    /// Output SVG path; stdout when omitted
    #[arg(short = 'o', long = "out")]
    out: Option<String>,

    /// Prepend an XML declaration
    #[arg(long)]
    xml_declaration: bool,
}

fn parse_kind(s: &str) -> Result<RoseKind> {
    RoseKind::from_str(s).ok_or_else(|| anyhow!("invalid rose type '{s}'. Use: basic | chs"))
}

fn declination_source(args: &Args) -> Result<Box<dyn DeclinationSource>> {
    if let Some(path) = &args.declination_table {
        let table = load_declination_table(path).with_context(|| format!("reading {path}"))?;
        return Ok(Box::new(table));
    }
    Ok(Box::new(FixedDeclination(DeclinationSpec::new(
        args.declination.unwrap_or(0.0),
        args.annual_change.unwrap_or(0.0),
        args.year.as_deref().unwrap_or(""),
    ))))
}

// Table lookups need a position; explicit values win over looked-up ones.
fn resolve_declination(args: &Args) -> Result<DeclinationSpec> {
    let (lat, lon) = match (args.declination_table.is_some(), args.lat, args.lon) {
        (true, Some(lat), Some(lon)) => (lat, lon),
        (true, _, _) => bail!("--declination-table needs both --lat and --lon"),
        (false, lat, lon) => (lat.unwrap_or(0.0), lon.unwrap_or(0.0)),
    };
    let source = declination_source(args)?;
    let found = lookup_or_default(&*source, lat, lon);
    Ok(DeclinationSpec {
        declination_deg: args.declination.unwrap_or(found.declination_deg),
        annual_change_deg: args.annual_change.unwrap_or(found.annual_change_deg),
        reference_year: args.year.clone().unwrap_or(found.reference_year),
    })
}

fn build_config(args: &Args) -> Result<RoseConfig> {
    let kind = parse_kind(&args.rose_type)?;
    let height = Height::try_from(args.height.as_str())
        .with_context(|| format!("invalid height {:?}", args.height))?;
    let declination = match kind {
        RoseKind::Basic => DeclinationSpec::default(),
        RoseKind::Chs => resolve_declination(args)?,
    };
    Ok(RoseConfig {
        kind,
        height,
        stroke: args.stroke.clone(),
        declination,
    })
}

fn write_markup(mut out: impl Write, rose: &Rose, xml_declaration: bool) -> Result<()> {
    if xml_declaration {
        out.write_all(XML_DECLARATION.as_bytes()).context("writing to stdout")?;
    }
    out.write_all(rose.to_markup().as_bytes()).context("writing to stdout")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = build_config(&args)?;
    let rose = Rose::new(cfg)?;

    match &args.out {
        Some(path) => rose
            .to_file(path, args.xml_declaration)
            .with_context(|| format!("writing {path}"))?,
        None => write_markup(std::io::stdout().lock(), &rose, args.xml_declaration)?,
    }
    info!(kind = ?rose.context.cfg.kind, "rose written");

    Ok(())
}
