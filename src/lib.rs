//! Compass rose dials rendered as SVG.
//!
//! Two roses are available: a plain N/E/S/W dial ([`render_basic_rose`]) and
//! a nautical dial with true and magnetic rings offset by the local magnetic
//! declination ([`render_chs_rose`]). Rendering is pure; the same inputs give
//! byte-identical markup.

pub mod config;
pub mod context;
pub mod data;
pub mod declination;
pub mod error;
pub mod geometry;
pub mod layers;
pub mod layout;
pub mod rose;
pub mod types;

pub use config::RoseConfig;
pub use declination::{annual_change, declination_label, AnnualChange, Direction};
pub use error::RoseError;
pub use rose::{render_basic_rose, render_chs_rose, Rose, XML_DECLARATION};
pub use types::{DeclinationSpec, Height, RoseKind};

#[cfg(test)]
mod test_utils;
