//! Unfolded net diagram drawn onto a 2D surface.

use crate::core::Dimensions;

mod layout;
pub use layout::*;

// Palette
const BODY_FILL: &str = "#3498db";
const BODY_STROKE: &str = "#ecf0f1";
const LID_FILL: &str = "#2980b9";
const LID_STROKE: &str = "#f1c40f";
const FLAP_FILL: &str = "#5dade2";
const FLAP_STROKE: &str = "#bdc3c7";
const GUIDE_STROKE: &str = "#95a5a6";
const LABEL_FILL: &str = "#ffffff";
const GUIDE_LABEL_FILL: &str = "#ecf0f1";

const LID_ALPHA: f64 = 0.5;
const FLAP_DASH: [f64; 2] = [5.0, 5.0];
const GUIDE_DASH: [f64; 2] = [4.0, 4.0];
const PANEL_FONT: &str = "12px system-ui";
const GUIDE_FONT: &str = "bold 12px system-ui";

/// 2D drawing capability. Mirrors the subset of the Canvas 2D API the
/// diagram needs.
pub trait Surface2d {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_line_dash(&mut self, segments: &[f64]);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: &str);
    fn set_text_baseline(&mut self, baseline: &str);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);
}

/// Clear the surface and paint the net for `dims`. Safe to call repeatedly.
pub fn draw<S: Surface2d + ?Sized>(surface: &mut S, dims: &Dimensions, width_px: f64, height_px: f64) {
    surface.clear_rect(0.0, 0.0, width_px, height_px);
    let net = layout(dims, width_px, height_px);
    paint(surface, &net);
}

pub fn paint<S: Surface2d + ?Sized>(surface: &mut S, net: &NetLayout) {
    surface.set_line_width(1.5);
    for p in &net.panels {
        let r = &p.rect;
        surface.save();
        match p.style {
            PanelStyle::Body => {
                surface.set_fill_style(BODY_FILL);
                surface.set_stroke_style(BODY_STROKE);
                surface.set_line_dash(&[]);
            }
            PanelStyle::Lid => {
                surface.set_global_alpha(LID_ALPHA);
                surface.set_fill_style(LID_FILL);
                surface.set_stroke_style(LID_STROKE);
                surface.set_line_dash(&[]);
            }
            PanelStyle::Flap => {
                surface.set_fill_style(FLAP_FILL);
                surface.set_stroke_style(FLAP_STROKE);
                surface.set_line_dash(&FLAP_DASH);
            }
        }
        surface.fill_rect(r.x, r.y, r.w, r.h);
        // border at full opacity even on the translucent lid
        surface.set_global_alpha(1.0);
        surface.stroke_rect(r.x, r.y, r.w, r.h);
        surface.restore();

        let (lx, ly) = r.center();
        draw_label(surface, p.kind.label(), lx, ly, p.label_rotation, LABEL_FILL, PANEL_FONT);
    }

    for g in &net.guides {
        surface.save();
        surface.set_stroke_style(GUIDE_STROKE);
        surface.set_line_width(1.0);
        surface.set_line_dash(&GUIDE_DASH);
        for seg in g.extensions.iter().chain(std::iter::once(&g.line)) {
            surface.line(seg.from.0, seg.from.1, seg.to.0, seg.to.1);
        }
        surface.restore();
        draw_label(
            surface,
            &g.text,
            g.label_at.0,
            g.label_at.1,
            g.label_rotation,
            GUIDE_LABEL_FILL,
            GUIDE_FONT,
        );
    }
}

fn draw_label<S: Surface2d + ?Sized>(
    surface: &mut S,
    text: &str,
    x: f64,
    y: f64,
    rotation: f64,
    fill: &str,
    font: &str,
) {
    surface.save();
    surface.translate(x, y);
    if rotation != 0.0 {
        surface.rotate(rotation);
    }
    surface.set_fill_style(fill);
    surface.set_font(font);
    surface.set_text_align("center");
    surface.set_text_baseline("middle");
    surface.fill_text(text, 0.0, 0.0);
    surface.restore();
}
