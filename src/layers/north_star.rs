use svg::node::element::{Group, Line, Polygon};

use crate::context::RoseContext;
use crate::geometry::points_attr;
use crate::layers::{group_with_class, Layer};
use crate::types::{tidy, Point};

// Five-point star outline above the true ring's north tick, as
// (fraction of width, fraction of height).
const STAR_OUTLINE: [(f64, f64); 10] = [
    (0.5, 0.0273),
    (0.507, 0.0464),
    (0.528, 0.0464),
    (0.512, 0.0601),
    (0.517, 0.0792),
    (0.5, 0.0683),
    (0.483, 0.0792),
    (0.489, 0.0601),
    (0.472, 0.0464),
    (0.493, 0.0464),
];

const STEM: (f64, f64) = (0.0683, 0.0902);

pub struct NorthStarLayer;
impl NorthStarLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for NorthStarLayer {
    fn render(&self, context: &RoseContext) -> Group {
        let l = &context.layout;
        let outline: Vec<Point> = STAR_OUTLINE
            .iter()
            .map(|&(fx, fy)| Point::new(fx * l.width, fy * l.height))
            .collect();

        let star = Polygon::new()
            .set("points", points_attr(&outline))
            .set("stroke", context.stroke())
            .set("fill", "none");
        let stem = Line::new()
            .set("x1", tidy(l.center.x))
            .set("y1", tidy(STEM.0 * l.height))
            .set("x2", tidy(l.center.x))
            .set("y2", tidy(STEM.1 * l.height))
            .set("stroke", context.stroke());

        group_with_class("north-star").add(star).add(stem)
    }
}
