use svg::node::element::{Group, Polygon};

use crate::context::RoseContext;
use crate::geometry::{points_attr, star_vertices};
use crate::layers::{group_with_class, Layer};

/// One arm of the compass star; radii are fractions of the inner ring radius.
#[derive(Debug, Clone, Copy)]
struct StarArm {
    angle: f64,
    inner: f64,
    outer: f64,
}

const fn arm(angle: f64, inner: f64, outer: f64) -> StarArm {
    StarArm {
        angle,
        inner,
        outer,
    }
}

// Paint order: short intercardinal arms underneath the cardinal ones.
const ARMS: [StarArm; 8] = [
    arm(45.0, 0.15, 0.7),
    arm(135.0, 0.15, 0.7),
    arm(225.0, 0.15, 0.7),
    arm(315.0, 0.15, 0.7),
    arm(0.0, 0.2, 1.1),
    arm(90.0, 0.2, 1.1),
    arm(180.0, 0.2, 1.1),
    arm(270.0, 0.2, 1.1),
];

const STAR_POINTS: usize = 8;

/// Eight-point star of dark/light triangle pairs inside the basic rose rings.
pub struct CompassStarLayer {
    ring: f64,
}
impl CompassStarLayer {
    pub fn new() -> Self {
        Self { ring: 0.55 }
    }
}

impl Layer for CompassStarLayer {
    fn render(&self, context: &RoseContext) -> Group {
        let mut g = group_with_class("compass-star");
        let c = context.layout.center;
        let ring_r = self.ring * context.layout.radius;
        let n = STAR_POINTS * 2;

        for a in ARMS {
            let v = star_vertices(c, a.inner * ring_r, a.outer * ring_r, STAR_POINTS);
            let k = (a.angle / 45.0).round() as usize % STAR_POINTS;
            let tip = v[2 * k];
            let cw = v[2 * k + 1];
            let ccw = v[(2 * k + n - 1) % n];

            g = g
                .add(
                    Polygon::new()
                        .set("class", "arm dark")
                        .set("points", points_attr(&[c, tip, cw]))
                        .set("fill", context.stroke())
                        .set("stroke", context.stroke()),
                )
                .add(
                    Polygon::new()
                        .set("class", "arm light")
                        .set("points", points_attr(&[c, tip, ccw]))
                        .set("fill", "white")
                        .set("stroke", context.stroke()),
                );
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{count, make_context};
    use crate::types::Height;

    #[test]
    fn eight_pairs_of_triangles() {
        let context = make_context(|_| {});
        let svg = CompassStarLayer::new().render(&context).to_string();
        assert_eq!(count(&svg, "<polygon"), 16);
        assert_eq!(count(&svg, r#"class="arm dark""#), 8);
        assert_eq!(count(&svg, r#"class="arm light""#), 8);
        assert_eq!(count(&svg, r#"fill="white""#), 8);
    }

    #[test]
    fn north_arm_tip_reaches_past_inner_ring() {
        // height 100: ring 27.5, cardinal tip at 1.1 * 27.5 = 30.25 above center
        let context = make_context(|cfg| cfg.height = Height::try_from(100.0).unwrap());
        let svg = CompassStarLayer::new().render(&context).to_string();
        assert!(svg.contains("50,50 50,19.75 "));
    }

    #[test]
    fn cardinal_arms_are_painted_last() {
        let context = make_context(|cfg| cfg.height = Height::try_from(100.0).unwrap());
        let svg = CompassStarLayer::new().render(&context).to_string();
        let polys: Vec<usize> = svg.match_indices("<polygon").map(|(i, _)| i).collect();
        // north is the first cardinal arm, the fifth pair
        let north = svg.find("50,50 50,19.75 ").unwrap();
        assert!(north > polys[8] && north < polys[9]);
        // west is the last pair
        let west = svg.rfind("50,50 19.75,50 ").unwrap();
        assert!(west > polys[15]);
    }
}
