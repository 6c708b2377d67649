use svg::node::element::{Group, Line, Text as TextEl};

use crate::context::RoseContext;
use crate::types::tidy;

pub trait Layer {
    /// Produce an SVG group for this layer.
    fn render(&self, context: &RoseContext) -> Group;
}

pub fn group_with_class(class: &str) -> Group {
    let mut g = Group::new();
    g = g.set("class", class);
    g
}

pub fn text(class: &str, x: f64, y: f64, anchor: &str, content: &str) -> TextEl {
    TextEl::new(content)
        .set("class", class)
        .set("x", tidy(x))
        .set("y", tidy(y))
        .set("text-anchor", anchor)
}

/// Segment on the vertical through the rose center, `from`..`to` units above
/// it, turned to `angle_deg` by a rotation transform about the center.
pub fn radial_line(context: &RoseContext, from: f64, to: f64, angle_deg: f64) -> Line {
    let c = context.layout.center;
    Line::new()
        .set("x1", tidy(c.x))
        .set("y1", tidy(c.y - from))
        .set("x2", tidy(c.x))
        .set("y2", tidy(c.y - to))
        .set("stroke", context.stroke())
        .set("transform", context.rotate_about_center(angle_deg))
}

pub mod annotation;
pub mod arrow;
pub mod cardinals;
pub mod center;
pub mod compass_star;
pub mod magnetic_ring;
pub mod north_star;
pub mod rings;
pub mod true_ring;

pub use annotation::AnnotationLayer;
pub use arrow::MagneticArrowLayer;
pub use cardinals::CardinalLabelsLayer;
pub use center::CenterLayer;
pub use compass_star::CompassStarLayer;
pub use magnetic_ring::MagneticRingLayer;
pub use north_star::NorthStarLayer;
pub use rings::RingsLayer;
pub use true_ring::TrueRingLayer;
