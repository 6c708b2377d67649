use std::fmt;

use crate::types::DeclinationSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    West,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::East => "E",
            Self::West => "W",
        })
    }
}

/// Annual change of declination broken into whole degrees, minutes and
/// rounded seconds. Seconds and minutes are always below 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnualChange {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub direction: Direction,
}

pub fn annual_change(change_deg: f64) -> AnnualChange {
    let abs = change_deg.abs();
    let mut degrees = abs.floor() as u32;
    let minutes_f = (abs - abs.floor()) * 60.0;
    let mut minutes = minutes_f.floor() as u32;
    let mut seconds = ((minutes_f - minutes_f.floor()) * 60.0).round() as u32;
    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }
    if minutes == 60 {
        degrees += 1;
        minutes = 0;
    }
    let direction = if change_deg > 0.0 {
        Direction::East
    } else {
        Direction::West
    };
    AnnualChange {
        degrees,
        minutes,
        seconds,
        direction,
    }
}

/// Chart annotation such as `010°E 2024 (6'E)`.
///
/// The half-degree mark follows `declination % 1 >= 0.5`, so a negative
/// declination never carries one.
pub fn declination_label(spec: &DeclinationSpec) -> String {
    let d = spec.declination_deg;
    let mut label = format!("{:03}", d.trunc().abs() as u64);
    if d % 1.0 >= 0.5 {
        label.push_str(" \u{BD}");
    }
    label.push('\u{B0}');
    label.push_str(if d >= 0.0 { "E " } else { "W " });
    label.push_str(&spec.reference_year);

    let change = annual_change(spec.annual_change_deg);
    label.push_str(&format!(" ({}'{})", change.minutes, change.direction));
    label
}
