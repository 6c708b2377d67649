use svg::node::element::Group;

use crate::context::RoseContext;
use crate::geometry::label_orientation;
use crate::layers::center::CENTER_CIRCLE;
use crate::layers::{group_with_class, radial_line, text, Layer};
use crate::types::{tidy, TickTier};

/// Inner edge of the magnetic ring, as a fraction of canvas width.
pub const MAGNETIC_RING: f64 = 0.282;

/// Magnetic dial, turned by the declination relative to the true ring.
pub struct MagneticRingLayer {
    major_len: f64,
    medium_len: f64,
    minor_len: f64,
    label_gap: f64,
    label_step: u32,
    font_size: f64,
}
impl MagneticRingLayer {
    pub fn new() -> Self {
        Self {
            major_len: 0.015,
            medium_len: 0.012,
            minor_len: 0.003,
            label_gap: 1.0,
            label_step: 30,
            font_size: 0.013,
        }
    }
}

impl Layer for MagneticRingLayer {
    fn render(&self, context: &RoseContext) -> Group {
        let mut g = group_with_class("magnetic-ring");
        let l = &context.layout;
        let w = l.width;
        let rm = MAGNETIC_RING * w;
        let declination = context.cfg.declination.declination_deg;

        for deg in 0..360u32 {
            let tier = TickTier::classify_with_cardinal(deg);
            let rotation = deg as f64 + declination;
            let (from, to) = match tier {
                // cardinal lines run in from the center circle
                TickTier::Cardinal => (CENTER_CIRCLE * w, rm + self.major_len * w),
                TickTier::Major => (rm, rm + self.major_len * w),
                TickTier::Medium => (rm, rm + self.medium_len * w),
                TickTier::Minor => (rm, rm + self.minor_len * w),
            };
            g = g.add(
                radial_line(context, from, to, rotation)
                    .set("class", format!("magnetic-tick {}", tier.class())),
            );

            if deg % self.label_step == 0 && deg != 0 {
                // upright side decided by the printed degree, rotation by the turned one
                let o = label_orientation(deg as f64);
                let distance = self.label_gap + rm + self.major_len * w;
                let mut label = text(
                    "magnetic-label",
                    l.center.x,
                    o.anchor_y(l.center.y, distance),
                    "middle",
                    &deg.to_string(),
                )
                .set("font-family", "sans-serif")
                .set("font-size", tidy(self.font_size * w))
                .set("fill", context.stroke())
                .set(
                    "transform",
                    context.rotate_about_center(o.rotation_deg + declination),
                );
                if let Some(baseline) = o.baseline() {
                    label = label.set("dominant-baseline", baseline);
                }
                g = g.add(label);
            }
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{count, elements, make_context};
    use crate::types::{DeclinationSpec, Height, RoseKind};

    fn render(declination: f64) -> String {
        let context = make_context(|cfg| {
            cfg.kind = RoseKind::Chs;
            cfg.height = Height::try_from(1000.0).unwrap();
            cfg.declination = DeclinationSpec::new(declination, 0.0, "");
        });
        MagneticRingLayer::new().render(&context).to_string()
    }

    #[test]
    fn one_tick_per_degree_with_cardinal_tier() {
        let svg = render(10.0);
        assert_eq!(count(&svg, "<line"), 360);
        assert_eq!(count(&svg, r#"class="magnetic-tick cardinal""#), 4);
        assert_eq!(count(&svg, r#"class="magnetic-tick major""#), 32);
        assert_eq!(count(&svg, r#"class="magnetic-tick medium""#), 36);
        assert_eq!(count(&svg, r#"class="magnetic-tick minor""#), 288);
    }

    #[test]
    fn labels_every_thirty_degrees_except_north() {
        let svg = render(10.0);
        let labels = elements(&svg, "text");
        assert_eq!(labels.len(), 11);
        assert!(!labels.iter().any(|l| l.contains(">0<")));
        for d in (30..360).step_by(30) {
            let needle = format!(">{d}<");
            assert!(labels.iter().any(|l| l.contains(&needle)), "label {d}");
        }
    }

    #[test]
    fn ring_is_turned_by_declination() {
        let svg = render(10.0);
        let lines = elements(&svg, "line");
        assert!(lines[0].contains("rotate(10 457.5 533)"));
        assert!(lines[355].contains("rotate(5 457.5 533)"));

        let west = render(-12.5);
        let lines = elements(&west, "line");
        assert!(lines[0].contains("rotate(347.5 457.5 533)"));
    }

    #[test]
    fn labels_keep_printed_degree_and_flip_by_it() {
        let svg = render(10.0);
        let labels = elements(&svg, "text");

        // 90 stays in the upper half even though the ring turned it to 100
        let ninety = labels.iter().find(|l| l.contains(">90<")).unwrap();
        assert!(ninety.contains("rotate(100 457.5 533)"));
        assert!(!ninety.contains("dominant-baseline"));

        let one_twenty = labels.iter().find(|l| l.contains(">120<")).unwrap();
        assert!(one_twenty.contains("rotate(310 457.5 533)"));
        assert!(one_twenty.contains(r#"dominant-baseline="text-before-edge""#));
        // drawn below the center: 533 + 1 + 258.03 + 13.725
        assert!(one_twenty.contains(r#"y="805.755""#), "{one_twenty}");
        assert!(ninety.contains(r#"y="260.245""#), "{ninety}");
    }

    #[test]
    fn cardinal_ticks_start_at_center_circle() {
        // center circle 8.235, ring 258.03, tick length 13.725
        let svg = render(0.0);
        let lines = elements(&svg, "line");
        assert!(lines[0].contains(r#"y1="524.765""#), "{}", lines[0]);
        assert!(lines[0].contains(r#"y2="261.245""#));
        assert!(lines[10].contains(r#"y1="274.97""#));
        assert!(lines[1].contains(r#"y2="272.225""#));
    }
}
