use svg::node::element::Group;

use crate::context::RoseContext;
use crate::geometry::on_bearing;
use crate::layers::{group_with_class, text, Layer};
use crate::types::tidy;

struct Cardinal {
    label: &'static str,
    bearing: f64,
    anchor: &'static str,
    baseline: &'static str,
}

// Each label hugs the ring from the outside.
const CARDINALS: [Cardinal; 4] = [
    Cardinal {
        label: "N",
        bearing: 0.0,
        anchor: "middle",
        baseline: "text-after-edge",
    },
    Cardinal {
        label: "E",
        bearing: 90.0,
        anchor: "start",
        baseline: "middle",
    },
    Cardinal {
        label: "S",
        bearing: 180.0,
        anchor: "middle",
        baseline: "text-before-edge",
    },
    Cardinal {
        label: "W",
        bearing: 270.0,
        anchor: "end",
        baseline: "middle",
    },
];

pub struct CardinalLabelsLayer {
    distance: f64,
    font_size: f64,
}
impl CardinalLabelsLayer {
    pub fn new() -> Self {
        Self {
            distance: 0.7,
            font_size: 0.06,
        }
    }
}

impl Layer for CardinalLabelsLayer {
    fn render(&self, context: &RoseContext) -> Group {
        let mut g = group_with_class("cardinals");
        let l = &context.layout;
        for c in &CARDINALS {
            let p = on_bearing(l.center, self.distance * l.radius, c.bearing);
            g = g.add(
                text("cardinal", p.x, p.y, c.anchor, c.label)
                    .set("dominant-baseline", c.baseline)
                    .set("font-family", "sans-serif")
                    .set("font-size", tidy(self.font_size * l.width))
                    .set("fill", context.stroke()),
            );
        }
        g
    }
}
