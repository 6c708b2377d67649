use svg::node::element::Group;

use crate::context::RoseContext;
use crate::geometry::label_orientation;
use crate::layers::{group_with_class, radial_line, text, Layer};
use crate::types::{tidy, TickTier};

/// Outer edge of the true ring, as a fraction of canvas width.
pub const TRUE_RING: f64 = 0.448;

/// True-north dial: one tick per degree, numbered every ten.
pub struct TrueRingLayer {
    major_from: f64,
    medium_from: f64,
    minor_from: f64,
    label_gap: f64,
    font_size: f64,
}
impl TrueRingLayer {
    pub fn new() -> Self {
        Self {
            major_from: 0.39,
            medium_from: 0.415,
            minor_from: 0.433,
            label_gap: 2.0,
            font_size: 0.015,
        }
    }

    fn tick_from(&self, tier: TickTier) -> f64 {
        match tier {
            TickTier::Cardinal | TickTier::Major => self.major_from,
            TickTier::Medium => self.medium_from,
            TickTier::Minor => self.minor_from,
        }
    }
}

impl Layer for TrueRingLayer {
    fn render(&self, context: &RoseContext) -> Group {
        let mut g = group_with_class("true-ring");
        let l = &context.layout;
        let w = l.width;
        let rt = TRUE_RING * w;

        for deg in 0..360u32 {
            let tier = TickTier::classify(deg);
            g = g.add(
                radial_line(context, self.tick_from(tier) * w, rt, deg as f64)
                    .set("class", format!("true-tick {}", tier.class())),
            );

            if tier == TickTier::Major {
                let o = label_orientation(deg as f64);
                let mut label = text(
                    "true-label",
                    l.center.x,
                    o.anchor_y(l.center.y, rt + self.label_gap),
                    "middle",
                    &deg.to_string(),
                )
                .set("font-family", "sans-serif")
                .set("font-size", tidy(self.font_size * w))
                .set("fill", context.stroke())
                .set("transform", context.rotate_about_center(o.rotation_deg));
                if let Some(baseline) = o.baseline() {
                    label = label.set("dominant-baseline", baseline);
                }
                g = g.add(label);
            }
        }
        g
    }
}
