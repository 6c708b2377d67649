use crate::config::RoseConfig;
use crate::types::{Point, RoseKind};

/// CHS canvases are narrower than they are tall.
pub const CHS_ASPECT: f64 = 0.915;
/// CHS rose center sits slightly below the canvas middle.
pub const CHS_CENTER_Y: f64 = 0.533;

#[derive(Debug, Clone, Copy)]
pub struct RoseLayout {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    /// Half the width; the unit all basic-rose fractions are expressed in.
    pub radius: f64,
}

impl From<&RoseConfig> for RoseLayout {
    fn from(cfg: &RoseConfig) -> Self {
        let height = cfg.height.value();
        let (width, center) = match cfg.kind {
            RoseKind::Basic => (height, Point::new(height / 2.0, height / 2.0)),
            RoseKind::Chs => {
                let width = CHS_ASPECT * height;
                (width, Point::new(width / 2.0, CHS_CENTER_Y * height))
            }
        };
        Self {
            width,
            height,
            center,
            radius: width / 2.0,
        }
    }
}
