// Recording fakes for the rendering and 2D drawing capabilities.

#![allow(dead_code)]

use boxfold_web::core::{GeometryBackend, PanelKind};
use boxfold_web::diagram::Surface2d;
use glam::Vec3;

/// Geometry handle that remembers which allocation it came from.
#[derive(Debug, PartialEq)]
pub struct FakeGeometry {
    pub id: u32,
    pub kind: PanelKind,
    pub size: Vec3,
}

#[derive(Default)]
pub struct CountingBackend {
    next_id: u32,
    pub live: Vec<u32>,
    pub created: u32,
    pub disposed: Vec<u32>,
}

impl GeometryBackend for CountingBackend {
    type Geometry = FakeGeometry;

    fn create_box(&mut self, kind: PanelKind, size: Vec3) -> FakeGeometry {
        self.next_id += 1;
        self.created += 1;
        self.live.push(self.next_id);
        FakeGeometry {
            id: self.next_id,
            kind,
            size,
        }
    }

    fn dispose(&mut self, geometry: FakeGeometry) {
        let before = self.live.len();
        self.live.retain(|id| *id != geometry.id);
        assert_eq!(before, self.live.len() + 1, "disposed an unknown or stale geometry");
        self.disposed.push(geometry.id);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(f64, f64, f64, f64),
    FillRect(f64, f64, f64, f64),
    StrokeRect(f64, f64, f64, f64),
    Line(f64, f64, f64, f64),
    Text(String),
    Dash(Vec<f64>),
    Alpha(f64),
    Rotate(f64),
    Save,
    Restore,
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface2d for RecordingSurface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::Clear(x, y, w, h));
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::FillRect(x, y, w, h));
    }
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::StrokeRect(x, y, w, h));
    }
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.ops.push(Op::Line(x0, y0, x1, y1));
    }
    fn fill_text(&mut self, text: &str, _x: f64, _y: f64) {
        self.ops.push(Op::Text(text.to_string()));
    }
    fn set_fill_style(&mut self, _color: &str) {}
    fn set_stroke_style(&mut self, _color: &str) {}
    fn set_line_width(&mut self, _width: f64) {}
    fn set_line_dash(&mut self, segments: &[f64]) {
        self.ops.push(Op::Dash(segments.to_vec()));
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.ops.push(Op::Alpha(alpha));
    }
    fn set_font(&mut self, _font: &str) {}
    fn set_text_align(&mut self, _align: &str) {}
    fn set_text_baseline(&mut self, _baseline: &str) {}
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
    fn translate(&mut self, _x: f64, _y: f64) {}
    fn rotate(&mut self, radians: f64) {
        self.ops.push(Op::Rotate(radians));
    }
}
