use crate::{config::RoseConfig, layout::RoseLayout};

pub struct RoseContext {
    pub cfg: RoseConfig,
    pub layout: RoseLayout,
}

impl RoseContext {
    pub fn new(cfg: RoseConfig) -> Self {
        let layout = RoseLayout::from(&cfg);
        Self { cfg, layout }
    }

    pub fn stroke(&self) -> &str {
        self.cfg.stroke()
    }

    /// `rotate(angle cx cy)` about the rose center, angle wrapped into [0, 360).
    pub fn rotate_about_center(&self, angle_deg: f64) -> String {
        crate::geometry::rotate_transform(angle_deg, self.layout.center)
    }
}
