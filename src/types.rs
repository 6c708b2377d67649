use phf::phf_map;

use crate::error::RoseError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Canvas height in user units. Only constructible from a finite, positive value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Height(f64);

impl Height {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Height {
    fn default() -> Self {
        Self(100.0)
    }
}

impl TryFrom<f64> for Height {
    type Error = RoseError;

    fn try_from(h: f64) -> Result<Self, Self::Error> {
        if !h.is_finite() {
            return Err(RoseError::NotANumber(h.to_string()));
        }
        if h <= 0.0 {
            return Err(RoseError::NonPositiveHeight(h));
        }
        Ok(Self(h))
    }
}

impl TryFrom<&str> for Height {
    type Error = RoseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RoseError::EmptyInput);
        }
        let h: f64 = s
            .parse()
            .map_err(|_| RoseError::NotANumber(s.to_string()))?;
        Height::try_from(h)
    }
}

impl TryFrom<Option<&str>> for Height {
    type Error = RoseError;

    fn try_from(s: Option<&str>) -> Result<Self, Self::Error> {
        s.map_or(Err(RoseError::EmptyInput), Height::try_from)
    }
}

/// Magnetic variation at a location, east-positive degrees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclinationSpec {
    pub declination_deg: f64,
    pub annual_change_deg: f64,
    pub reference_year: String,
}

impl DeclinationSpec {
    pub fn new(declination_deg: f64, annual_change_deg: f64, reference_year: &str) -> Self {
        Self {
            declination_deg,
            annual_change_deg,
            reference_year: reference_year.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), RoseError> {
        if !self.declination_deg.is_finite() {
            return Err(RoseError::NonFiniteDeclination(self.declination_deg));
        }
        if self.declination_deg.abs() >= 360.0 {
            return Err(RoseError::DeclinationOutOfRange(self.declination_deg));
        }
        if !self.annual_change_deg.is_finite() {
            return Err(RoseError::NonFiniteAnnualChange(self.annual_change_deg));
        }
        if !self.reference_year.chars().all(|c| c.is_ascii_digit()) {
            return Err(RoseError::InvalidYear(self.reference_year.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoseKind {
    Basic,
    Chs,
}

static ROSE_KINDS: phf::Map<&'static str, RoseKind> = phf_map! {
    "basic" => RoseKind::Basic,
    "chs" => RoseKind::Chs,
};

impl RoseKind {
    pub fn from_str(s: &str) -> Option<Self> {
        ROSE_KINDS.get(s.to_lowercase().as_str()).copied()
    }
}

/// Tick classification for a whole degree on a dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickTier {
    /// Every 90°, only distinguished on the magnetic ring
    Cardinal,
    Major,
    Medium,
    Minor,
}

impl TickTier {
    pub fn classify(degree: u32) -> Self {
        if degree % 10 == 0 {
            Self::Major
        } else if degree % 5 == 0 {
            Self::Medium
        } else {
            Self::Minor
        }
    }

    pub fn classify_with_cardinal(degree: u32) -> Self {
        if degree % 90 == 0 {
            Self::Cardinal
        } else {
            Self::classify(degree)
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Cardinal => "cardinal",
            Self::Major => "major",
            Self::Medium => "medium",
            Self::Minor => "minor",
        }
    }
}

/// Wrap an angle into [0, 360).
pub fn normalize_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0) + 0.0
}

/// Round a coordinate for serialization so float noise such as
/// `0.55 * 50 = 27.500000000000004` prints as `27.5`.
///
/// Ordinary magnitudes keep six decimals. Values too small for that, or so
/// large that scaling would overflow, keep twelve significant digits instead.
pub fn tidy(v: f64) -> f64 {
    let scaled = v * 1e6;
    if scaled.is_finite() && v.abs() >= 1e-3 {
        return scaled.round() / 1e6 + 0.0;
    }
    significant(v, 12)
}

fn significant(v: f64, digits: usize) -> f64 {
    if v == 0.0 || !v.is_finite() {
        return v + 0.0;
    }
    format!("{:.*e}", digits - 1, v).parse::<f64>().unwrap_or(v) + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;

    #[test]
    fn height_from_str_reports_each_failure_kind() {
        assert_eq!(Height::try_from(""), Err(RoseError::EmptyInput));
        assert_eq!(Height::try_from("   "), Err(RoseError::EmptyInput));
        assert_eq!(Height::try_from(None::<&str>), Err(RoseError::EmptyInput));
        assert!(matches!(
            Height::try_from("abc"),
            Err(RoseError::NotANumber(_))
        ));
        assert!(matches!(
            Height::try_from("NaN"),
            Err(RoseError::NotANumber(_))
        ));
        assert!(matches!(
            Height::try_from("inf"),
            Err(RoseError::NotANumber(_))
        ));
        assert_eq!(
            Height::try_from("0"),
            Err(RoseError::NonPositiveHeight(0.0))
        );
        assert_eq!(
            Height::try_from("-12.5"),
            Err(RoseError::NonPositiveHeight(-12.5))
        );
    }

    #[test]
    fn height_accepts_positive_values() {
        assert!(approx(Height::try_from("100").unwrap().value(), 100.0, 1e-12));
        assert!(approx(Height::try_from(" 42.5 ").unwrap().value(), 42.5, 1e-12));
        assert!(approx(Height::try_from(0.001_f64).unwrap().value(), 0.001, 1e-15));
    }

    #[test]
    fn declination_spec_validation() {
        assert!(DeclinationSpec::default().validate().is_ok());
        assert!(DeclinationSpec::new(-14.5, 0.2, "2024").validate().is_ok());
        assert!(matches!(
            DeclinationSpec::new(f64::NAN, 0.0, "").validate(),
            Err(RoseError::NonFiniteDeclination(_))
        ));
        assert!(DeclinationSpec::new(359.9, 0.0, "").validate().is_ok());
        assert_eq!(
            DeclinationSpec::new(360.0, 0.0, "").validate(),
            Err(RoseError::DeclinationOutOfRange(360.0))
        );
        assert_eq!(
            DeclinationSpec::new(-1e30, 0.0, "").validate(),
            Err(RoseError::DeclinationOutOfRange(-1e30))
        );
        assert!(matches!(
            DeclinationSpec::new(1.0, f64::INFINITY, "").validate(),
            Err(RoseError::NonFiniteAnnualChange(_))
        ));
        assert_eq!(
            DeclinationSpec::new(1.0, 0.0, "20x4").validate(),
            Err(RoseError::InvalidYear("20x4".to_string()))
        );
    }

    #[test]
    fn rose_kind_parses_case_insensitive() {
        assert_eq!(RoseKind::from_str("basic"), Some(RoseKind::Basic));
        assert_eq!(RoseKind::from_str("CHS"), Some(RoseKind::Chs));
        assert_eq!(RoseKind::from_str("nautical"), None);
        assert_eq!(RoseKind::from_str(""), None);
    }

    #[test]
    fn tick_tiers_partition_a_full_circle() {
        let tiers: Vec<TickTier> = (0..360).map(TickTier::classify).collect();
        assert_eq!(tiers.iter().filter(|t| **t == TickTier::Major).count(), 36);
        assert_eq!(tiers.iter().filter(|t| **t == TickTier::Medium).count(), 36);
        assert_eq!(tiers.iter().filter(|t| **t == TickTier::Minor).count(), 288);

        assert_eq!(TickTier::classify_with_cardinal(0), TickTier::Cardinal);
        assert_eq!(TickTier::classify_with_cardinal(270), TickTier::Cardinal);
        assert_eq!(TickTier::classify_with_cardinal(30), TickTier::Major);
        assert_eq!(TickTier::classify_with_cardinal(45), TickTier::Medium);
        assert_eq!(TickTier::classify_with_cardinal(7), TickTier::Minor);
    }

    #[test]
    fn normalize_wraps_into_range() {
        assert!(approx(normalize_degrees(370.5), 10.5, 1e-12));
        assert!(approx(normalize_degrees(-80.0), 280.0, 1e-12));
        assert!(approx(normalize_degrees(360.0), 0.0, 1e-12));
        assert!(normalize_degrees(-0.0).is_sign_positive());
    }

    #[test]
    fn tidy_removes_float_noise() {
        assert_eq!(tidy(0.55 * 50.0).to_string(), "27.5");
        assert_eq!(tidy(0.64 * 50.0).to_string(), "32");
        assert_eq!(tidy(-0.0).to_string(), "0");
    }

    #[test]
    fn tidy_is_relative_at_extreme_magnitudes() {
        // 0.55 * 5e-8 carries the same noise as 0.55 * 50
        assert_eq!(tidy(0.55 * 5e-8).to_string(), "0.0000000275");
        assert_eq!(tidy(1e-7).to_string(), "0.0000001");
        assert!(tidy(1e-300) > 0.0);

        let huge = tidy(0.64 * 1e303);
        assert!(huge.is_finite());
        assert!(approx(huge / 1e303, 0.64, 1e-12));
        assert!(tidy(f64::MAX).is_finite());
    }
}
