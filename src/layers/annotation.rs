use svg::node::element::Group;

use crate::context::RoseContext;
use crate::declination::declination_label;
use crate::layers::magnetic_ring::MAGNETIC_RING;
use crate::layers::{group_with_class, text, Layer};
use crate::types::tidy;

/// Declination and annual change printed inside the magnetic ring.
///
/// An easterly change is written vertically along the magnetic meridian; any
/// other change is written horizontally across it.
pub struct AnnotationLayer {
    offset: f64,
    font_size: f64,
}
impl AnnotationLayer {
    pub fn new() -> Self {
        Self {
            offset: 0.005,
            font_size: 0.015,
        }
    }
}

impl Layer for AnnotationLayer {
    fn render(&self, context: &RoseContext) -> Group {
        let l = &context.layout;
        let w = l.width;
        let rm = MAGNETIC_RING * w;
        let spec = &context.cfg.declination;
        let content = declination_label(spec);

        let label = if spec.annual_change_deg > 0.0 {
            text(
                "declination",
                l.center.x + self.offset * w,
                l.center.y - rm / 2.0,
                "middle",
                &content,
            )
            .set("transform", context.rotate_about_center(spec.declination_deg))
            .set("writing-mode", "tb")
            .set("glyph-orientation-vertical", "90")
        } else {
            text(
                "declination",
                l.center.x + rm / 2.0,
                l.center.y - self.offset * w,
                "middle",
                &content,
            )
            .set(
                "transform",
                context.rotate_about_center(spec.declination_deg - 90.0),
            )
        };

        group_with_class("annotation").add(
            label
                .set("font-family", "sans-serif")
                .set("font-size", tidy(self.font_size * w))
                .set("fill", context.stroke()),
        )
    }
}
