use std::fs;
use svg::Document;
use tracing::debug;

use crate::config::RoseConfig;
use crate::context::RoseContext;
use crate::error::RoseError;
use crate::layers::{
    AnnotationLayer, CardinalLabelsLayer, CenterLayer, CompassStarLayer, Layer,
    MagneticArrowLayer, MagneticRingLayer, NorthStarLayer, RingsLayer, TrueRingLayer,
};
use crate::types::{tidy, DeclinationSpec, Height, RoseKind};

pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

pub struct Rose {
    pub context: RoseContext,
}

impl Rose {
    /// Checks the declination inputs; the height is already valid by type.
    pub fn new(cfg: RoseConfig) -> Result<Self, RoseError> {
        cfg.declination.validate()?;
        Ok(Self {
            context: RoseContext::new(cfg),
        })
    }

    // Layer stack, back to front
    fn layers(&self) -> Vec<Box<dyn Layer>> {
        match self.context.cfg.kind {
            RoseKind::Basic => vec![
                Box::new(RingsLayer::new()),
                Box::new(CompassStarLayer::new()),
                Box::new(CardinalLabelsLayer::new()),
            ],
            RoseKind::Chs => vec![
                Box::new(CenterLayer::new()),
                Box::new(TrueRingLayer::new()),
                Box::new(NorthStarLayer::new()),
                Box::new(MagneticRingLayer::new()),
                Box::new(AnnotationLayer::new()),
                Box::new(MagneticArrowLayer::new()),
            ],
        }
    }

    pub fn draw_document(&self) -> Document {
        let w = tidy(self.context.layout.width);
        let h = tidy(self.context.layout.height);
        debug!(kind = ?self.context.cfg.kind, width = w, height = h, "drawing rose");

        let mut doc = Document::new()
            .set("id", "Layer_1")
            .set("version", "1.1")
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("xmlns:xlink", "http://www.w3.org/1999/xlink")
            .set("x", "0px")
            .set("y", "0px")
            .set("viewBox", format!("0 0 {w} {h}"))
            .set("style", format!("enable-background:new 0 0 {w} {h};"))
            .set("xml:space", "preserve");

        for layer in self.layers() {
            doc = doc.add(layer.render(&self.context));
        }
        doc
    }

    /// Complete document text, ending with a newline after `</svg>`.
    pub fn to_markup(&self) -> String {
        format!("{}\n", self.draw_document())
    }

    pub fn to_file(&self, path: &str, xml_declaration: bool) -> std::io::Result<()> {
        let mut out = String::new();
        if xml_declaration {
            out.push_str(XML_DECLARATION);
        }
        out.push_str(&self.to_markup());
        fs::write(path, out)
    }
}

/// Plain N/E/S/W rose on a square canvas.
pub fn render_basic_rose<H>(height: H) -> Result<String, RoseError>
where
    H: TryInto<Height, Error = RoseError>,
{
    let rose = Rose::new(RoseConfig::basic(height.try_into()?))?;
    Ok(rose.to_markup())
}

/// Nautical rose with true and magnetic rings. Unknown declination data is
/// passed as `0.0, 0.0, ""`.
pub fn render_chs_rose<H>(
    height: H,
    declination_deg: f64,
    annual_change_deg: f64,
    reference_year: &str,
) -> Result<String, RoseError>
where
    H: TryInto<Height, Error = RoseError>,
{
    let spec = DeclinationSpec::new(declination_deg, annual_change_deg, reference_year);
    let rose = Rose::new(RoseConfig::chs(height.try_into()?, spec))?;
    Ok(rose.to_markup())
}
