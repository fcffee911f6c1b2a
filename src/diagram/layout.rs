//! Cross-shaped net of the box in canvas pixels.
//!
//! The floor sits in the middle of the canvas. Front and back fold down and
//! up from it, the side walls fold left and right, the lid sits beyond the
//! back and each flap beyond its side wall.

use crate::core::constants::{
    LID_MARGIN, NET_FIT_MARGIN_PX, NET_PX_PER_UNIT, NET_SIDE_HEIGHT_RATIO,
};
use crate::core::{Axis, Dimensions, PanelKind};
use std::f64::consts::FRAC_PI_2;

const GUIDE_GAP_PX: f64 = 14.0; // panel edge to guide line
const GUIDE_OVERSHOOT_PX: f64 = 6.0; // extension lines run past the guide

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelStyle {
    Body,
    Lid,
    Flap,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetPanel {
    pub kind: PanelKind,
    pub rect: Rect,
    /// Label rotation in radians, positive is clockwise on screen.
    pub label_rotation: f64,
    pub style: PanelStyle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DimensionGuide {
    pub axis: Axis,
    pub line: Segment,
    pub extensions: [Segment; 2],
    pub label_at: (f64, f64),
    pub label_rotation: f64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetLayout {
    pub scale: f64,
    pub panels: Vec<NetPanel>,
    pub guides: Vec<DimensionGuide>,
}

impl NetLayout {
    pub fn panel(&self, kind: PanelKind) -> Option<&NetPanel> {
        self.panels.iter().find(|p| p.kind == kind)
    }

    pub fn guide(&self, axis: Axis) -> Option<&DimensionGuide> {
        self.guides.iter().find(|g| g.axis == axis)
    }
}

/// Dimension readout text, one decimal place, rounded the way the page's
/// `Number.prototype.toFixed(1)` rounds.
///
/// The value is widened through its shortest decimal form, so a slider
/// string such as `"1.45"` gives the same f64 the page holds. That f64 is
/// then rounded half up on its exact decimal expansion.
pub fn format_dimension(value: f32) -> String {
    let wide = value.to_string().parse::<f64>().unwrap_or(value as f64);
    to_fixed_1(wide)
}

fn to_fixed_1(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    // 60 places are enough to settle the rounding digit of any f64
    let exact = format!("{:.60}", value.abs());
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut frac_digits = frac.bytes();
    let tenths = frac_digits.next().unwrap_or(b'0');
    let round_up = frac_digits.next().is_some_and(|d| d >= b'5');

    let mut digits: Vec<u8> = int_part.bytes().chain(std::iter::once(tenths)).collect();
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }
    let (whole, tenth) = digits.split_at(digits.len() - 1);
    format!(
        "{}{}.{}",
        sign,
        String::from_utf8_lossy(whole),
        tenth[0] as char
    )
}

/// Pixel scale that fits the whole net inside the canvas, capped at the
/// design scale.
pub fn fit_scale(dims: &Dimensions, width_px: f64, height_px: f64) -> f64 {
    let (w, h, d) = (dims.width as f64, dims.height as f64, dims.depth as f64);
    // half extents in units around the floor center; the lid side is taller
    let half_x = w / 2.0 + d + d / 2.0;
    let half_y = h * NET_SIDE_HEIGHT_RATIO / 2.0 + d + d * LID_MARGIN as f64;
    let avail_x = (width_px / 2.0 - NET_FIT_MARGIN_PX).max(1.0);
    let avail_y = (height_px / 2.0 - NET_FIT_MARGIN_PX).max(1.0);
    NET_PX_PER_UNIT
        .min(avail_x / half_x.max(f64::EPSILON))
        .min(avail_y / half_y.max(f64::EPSILON))
}

pub fn layout(dims: &Dimensions, width_px: f64, height_px: f64) -> NetLayout {
    let s = fit_scale(dims, width_px, height_px);
    let (cx, cy) = (width_px / 2.0, height_px / 2.0);
    let fw = dims.width as f64 * s;
    let fh = dims.height as f64 * NET_SIDE_HEIGHT_RATIO * s;
    let dd = dims.depth as f64 * s;
    let flap = dims.flap_width() as f64 * s;
    let margin = LID_MARGIN as f64;

    let floor = Rect { x: cx - fw / 2.0, y: cy - fh / 2.0, w: fw, h: fh };
    let front = Rect { x: floor.x, y: floor.bottom(), w: fw, h: dd };
    let back = Rect { x: floor.x, y: floor.y - dd, w: fw, h: dd };
    let left = Rect { x: floor.x - dd, y: floor.y, w: dd, h: fh };
    let right = Rect { x: floor.right(), y: floor.y, w: dd, h: fh };
    let lid = Rect {
        x: cx - fw * margin / 2.0,
        y: back.y - dd * margin,
        w: fw * margin,
        h: dd * margin,
    };
    let flap_left = Rect { x: left.x - flap, y: floor.y, w: flap, h: fh };
    let flap_right = Rect { x: right.right(), y: floor.y, w: flap, h: fh };

    let panel = |kind, rect, label_rotation, style| NetPanel {
        kind,
        rect,
        label_rotation,
        style,
    };
    let panels = vec![
        panel(PanelKind::Floor, floor, 0.0, PanelStyle::Body),
        panel(PanelKind::Front, front, 0.0, PanelStyle::Body),
        panel(PanelKind::Back, back, 0.0, PanelStyle::Body),
        panel(PanelKind::Left, left, -FRAC_PI_2, PanelStyle::Body),
        panel(PanelKind::Right, right, FRAC_PI_2, PanelStyle::Body),
        panel(PanelKind::Lid, lid, 0.0, PanelStyle::Lid),
        panel(PanelKind::FlapLeft, flap_left, -FRAC_PI_2, PanelStyle::Flap),
        panel(PanelKind::FlapRight, flap_right, FRAC_PI_2, PanelStyle::Flap),
    ];

    let guides = vec![
        width_guide(dims, &front),
        height_guide(dims, &flap_right),
        depth_guide(dims, &left),
    ];

    NetLayout { scale: s, panels, guides }
}

// W: horizontal, below the front panel
fn width_guide(dims: &Dimensions, front: &Rect) -> DimensionGuide {
    let y = front.bottom() + GUIDE_GAP_PX;
    DimensionGuide {
        axis: Axis::Width,
        line: Segment { from: (front.x, y), to: (front.right(), y) },
        extensions: [
            Segment { from: (front.x, front.bottom()), to: (front.x, y + GUIDE_OVERSHOOT_PX) },
            Segment {
                from: (front.right(), front.bottom()),
                to: (front.right(), y + GUIDE_OVERSHOOT_PX),
            },
        ],
        label_at: (front.center().0, y + GUIDE_OVERSHOOT_PX + 8.0),
        label_rotation: 0.0,
        text: format!("W: {}", format_dimension(dims.width)),
    }
}

// H: vertical, outboard of the right flap, spanning the side height
fn height_guide(dims: &Dimensions, flap_right: &Rect) -> DimensionGuide {
    let x = flap_right.right() + GUIDE_GAP_PX;
    DimensionGuide {
        axis: Axis::Height,
        line: Segment { from: (x, flap_right.y), to: (x, flap_right.bottom()) },
        extensions: [
            Segment {
                from: (flap_right.right(), flap_right.y),
                to: (x + GUIDE_OVERSHOOT_PX, flap_right.y),
            },
            Segment {
                from: (flap_right.right(), flap_right.bottom()),
                to: (x + GUIDE_OVERSHOOT_PX, flap_right.bottom()),
            },
        ],
        label_at: (x + GUIDE_OVERSHOOT_PX + 8.0, flap_right.center().1),
        label_rotation: FRAC_PI_2,
        text: format!("H: {}", format_dimension(dims.height)),
    }
}

// D: horizontal, above the left panel
fn depth_guide(dims: &Dimensions, left: &Rect) -> DimensionGuide {
    let y = left.y - GUIDE_GAP_PX;
    DimensionGuide {
        axis: Axis::Depth,
        line: Segment { from: (left.x, y), to: (left.right(), y) },
        extensions: [
            Segment { from: (left.x, left.y), to: (left.x, y - GUIDE_OVERSHOOT_PX) },
            Segment { from: (left.right(), left.y), to: (left.right(), y - GUIDE_OVERSHOOT_PX) },
        ],
        label_at: (left.center().0, y - GUIDE_OVERSHOOT_PX - 8.0),
        label_rotation: 0.0,
        text: format!("D: {}", format_dimension(dims.depth)),
    }
}
