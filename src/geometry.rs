use crate::types::{normalize_degrees, tidy, Point};

/// Rotate `p` about `pivot` by `angle_deg`, clockwise on screen (y grows
/// downward), which is what an SVG `rotate()` transform does.
#[inline]
pub fn rotate_point(p: Point, pivot: Point, angle_deg: f64) -> Point {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    Point {
        x: pivot.x + dx * cos - dy * sin,
        y: pivot.y + dx * sin + dy * cos,
    }
}

/// Point `radius` away from `center` on a compass bearing (0 = up, clockwise).
#[inline]
pub fn on_bearing(center: Point, radius: f64, bearing_deg: f64) -> Point {
    rotate_point(Point::new(center.x, center.y - radius), center, bearing_deg)
}

// Vertices of a `point_count`-pointed star, starting with the outer vertex
// due north and alternating outer/inner clockwise.
pub fn star_vertices(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    point_count: usize,
) -> Vec<Point> {
    let step = 180.0 / point_count as f64;
    (0..point_count * 2)
        .map(|i| {
            let r = if i % 2 == 0 { outer_radius } else { inner_radius };
            on_bearing(center, r, i as f64 * step)
        })
        .collect()
}

pub fn rotate_transform(angle_deg: f64, pivot: Point) -> String {
    // angles live in [0, 360), so six decimals always apply
    let angle = normalize_degrees((normalize_degrees(angle_deg) * 1e6).round() / 1e6);
    format!(
        "rotate({} {} {})",
        angle,
        tidy(pivot.x),
        tidy(pivot.y)
    )
}

pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", tidy(p.x), tidy(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// How a label printed around a dial is turned so it reads upright.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelOrientation {
    pub rotation_deg: f64,
    /// Lower-half labels are drawn below the center and turned half a circle.
    pub flipped: bool,
}

impl LabelOrientation {
    pub fn baseline(&self) -> Option<&'static str> {
        self.flipped.then_some("text-before-edge")
    }

    /// Unrotated y of a label `distance` out from the center.
    pub fn anchor_y(&self, center_y: f64, distance: f64) -> f64 {
        if self.flipped {
            center_y + distance
        } else {
            center_y - distance
        }
    }
}

pub fn label_orientation(degree: f64) -> LabelOrientation {
    let d = normalize_degrees(degree);
    if d <= 90.0 || d >= 270.0 {
        LabelOrientation {
            rotation_deg: d,
            flipped: false,
        }
    } else {
        LabelOrientation {
            rotation_deg: d - 180.0,
            flipped: true,
        }
    }
}
