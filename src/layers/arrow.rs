use svg::node::element::{Group, Line};

use crate::context::RoseContext;
use crate::layers::magnetic_ring::MAGNETIC_RING;
use crate::layers::{group_with_class, radial_line, Layer};
use crate::types::tidy;

/// Magnetic-north arrow: shaft out from the magnetic ring with a one-sided
/// chevron head, turned by the declination.
pub struct MagneticArrowLayer {
    tip: f64,
    barb_x: f64,
    barb_y: f64,
    return_y: f64,
}
impl MagneticArrowLayer {
    pub fn new() -> Self {
        Self {
            tip: 0.38,
            barb_x: 0.02,
            barb_y: 0.34,
            return_y: 0.32,
        }
    }
}

impl Layer for MagneticArrowLayer {
    fn render(&self, context: &RoseContext) -> Group {
        let l = &context.layout;
        let (cx, cy, w) = (l.center.x, l.center.y, l.width);
        let declination = context.cfg.declination.declination_deg;
        let transform = context.rotate_about_center(declination);

        let segment = |x1: f64, y1: f64, x2: f64, y2: f64| {
            Line::new()
                .set("x1", tidy(x1))
                .set("y1", tidy(y1))
                .set("x2", tidy(x2))
                .set("y2", tidy(y2))
                .set("stroke", context.stroke())
                .set("transform", transform.clone())
        };

        let shaft = radial_line(context, MAGNETIC_RING * w, self.tip * w, declination);
        let barb = segment(
            cx,
            cy - self.tip * w,
            cx + self.barb_x * w,
            cy - self.barb_y * w,
        );
        let back = segment(
            cx + self.barb_x * w,
            cy - self.barb_y * w,
            cx,
            cy - self.return_y * w,
        );

        group_with_class("magnetic-arrow")
            .add(shaft)
            .add(barb)
            .add(back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{elements, make_context};
    use crate::types::{DeclinationSpec, Height, RoseKind};

    #[test]
    fn shaft_and_chevron_share_the_declination_turn() {
        let context = make_context(|cfg| {
            cfg.kind = RoseKind::Chs;
            cfg.height = Height::try_from(1000.0).unwrap();
            cfg.declination = DeclinationSpec::new(-7.0, 0.0, "");
        });
        let svg = MagneticArrowLayer::new().render(&context).to_string();
        let lines = elements(&svg, "line");
        assert_eq!(lines.len(), 3);
        for l in &lines {
            assert!(l.contains("rotate(353 457.5 533)"), "{l}");
        }

        // shaft 274.97 -> 533 - 347.7
        assert!(lines[0].contains(r#"y1="274.97""#));
        assert!(lines[0].contains(r#"y2="185.3""#));
        // barb to (457.5 + 18.3, 533 - 311.1)
        assert!(lines[1].contains(r#"x2="475.8""#));
        assert!(lines[1].contains(r#"y2="221.9""#));
        // back to the shaft at 533 - 292.8
        assert!(lines[2].contains(r#"y2="240.2""#));
    }
}
