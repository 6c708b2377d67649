use svg::node::element::{Circle, Group};

use crate::context::RoseContext;
use crate::layers::{group_with_class, Layer};
use crate::types::tidy;

/// Fraction of the canvas width taken by the center circle radius.
pub const CENTER_CIRCLE: f64 = 0.009;

pub struct CenterLayer;
impl CenterLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for CenterLayer {
    fn render(&self, context: &RoseContext) -> Group {
        let l = &context.layout;
        let (cx, cy) = (tidy(l.center.x), tidy(l.center.y));

        let dot = Circle::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("r", 0.5)
            .set("stroke", context.stroke())
            .set("fill", context.stroke());
        let circle = Circle::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("r", tidy(CENTER_CIRCLE * l.width))
            .set("stroke", context.stroke())
            .set("fill", "none");

        group_with_class("center").add(dot).add(circle)
    }
}
