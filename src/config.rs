use crate::types::{DeclinationSpec, Height, RoseKind};

pub const BASIC_STROKE: &str = "black";
pub const CHS_STROKE: &str = "#A3258D";

#[derive(Debug, Clone)]
pub struct RoseConfig {
    pub kind: RoseKind,
    pub height: Height,
    pub stroke: Option<String>,
    pub declination: DeclinationSpec,
}

impl RoseConfig {
    pub fn basic(height: Height) -> Self {
        Self {
            kind: RoseKind::Basic,
            height,
            ..Self::default()
        }
    }

    pub fn chs(height: Height, declination: DeclinationSpec) -> Self {
        Self {
            kind: RoseKind::Chs,
            height,
            declination,
            ..Self::default()
        }
    }

    /// Stroke colour, falling back to the kind's house colour.
    pub fn stroke(&self) -> &str {
        match (&self.stroke, self.kind) {
            (Some(s), _) => s,
            (None, RoseKind::Basic) => BASIC_STROKE,
            (None, RoseKind::Chs) => CHS_STROKE,
        }
    }
}

impl Default for RoseConfig {
    fn default() -> Self {
        Self {
            kind: RoseKind::Basic,
            height: Height::default(),
            stroke: None,
            declination: DeclinationSpec::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_a_basic_rose_of_height_100() {
        let cfg = RoseConfig::default();
        assert_eq!(cfg.kind, RoseKind::Basic);
        assert_eq!(cfg.height.value(), 100.0);
        assert_eq!(cfg.declination, DeclinationSpec::default());
    }

    #[test]
    fn stroke_falls_back_per_kind() {
        let h = Height::try_from(10.0).unwrap();
        assert_eq!(RoseConfig::basic(h).stroke(), "black");
        assert_eq!(
            RoseConfig::chs(h, DeclinationSpec::default()).stroke(),
            "#A3258D"
        );

        let mut cfg = RoseConfig::chs(h, DeclinationSpec::default());
        cfg.stroke = Some("navy".to_string());
        assert_eq!(cfg.stroke(), "navy");
    }
}
