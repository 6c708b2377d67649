use svg::node::element::{Circle, Group};

use crate::context::RoseContext;
use crate::layers::{group_with_class, Layer};
use crate::types::tidy;

/// Thick outer and thin inner dial rings of the basic rose.
pub struct RingsLayer {
    outer: f64,
    outer_stroke: f64,
    inner: f64,
}
impl RingsLayer {
    pub fn new() -> Self {
        Self {
            outer: 0.64,
            outer_stroke: 0.05,
            inner: 0.55,
        }
    }
}

impl Layer for RingsLayer {
    fn render(&self, context: &RoseContext) -> Group {
        let l = &context.layout;
        let ring = |r: f64, stroke_width: f64| {
            Circle::new()
                .set("cx", tidy(l.center.x))
                .set("cy", tidy(l.center.y))
                .set("r", tidy(r))
                .set("stroke", context.stroke())
                .set("stroke-width", tidy(stroke_width))
                .set("fill", "none")
        };

        group_with_class("rings")
            .add(ring(self.outer * l.radius, self.outer_stroke * l.radius))
            .add(ring(self.inner * l.radius, 1.0))
    }
}
