//! Surface that records draw calls, for tests

use super::surface::{Glow, Paint, Path, Stroke, Surface};
use crate::math::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f64),
    Alpha(f64),
    Glow(Glow),
    FillRect { origin: Vec2, width: f64, height: f64, paint: Paint },
    Fill { path: Path, paint: Paint },
    Stroke { path: Path, stroke: Stroke },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn strokes(&self) -> Vec<(&Path, &Stroke)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Stroke { path, stroke } => Some((path, stroke)),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> Vec<(&Path, &Paint)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill { path, paint } => Some((path, paint)),
                _ => None,
            })
            .collect()
    }

    pub fn glows(&self) -> Vec<Glow> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Glow(g) => Some(*g),
                _ => None,
            })
            .collect()
    }

    /// save/restore calls are balanced and never go negative
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0i32;
        for op in &self.ops {
            match op {
                DrawOp::Save => depth += 1,
                DrawOp::Restore => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.ops.push(DrawOp::Translate(offset));
    }

    fn rotate(&mut self, angle: f64) {
        self.ops.push(DrawOp::Rotate(angle));
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ops.push(DrawOp::Alpha(alpha));
    }

    fn set_glow(&mut self, glow: Glow) {
        self.ops.push(DrawOp::Glow(glow));
    }

    fn fill_rect(&mut self, origin: Vec2, width: f64, height: f64, paint: &Paint) {
        self.ops.push(DrawOp::FillRect {
            origin,
            width,
            height,
            paint: paint.clone(),
        });
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        self.ops.push(DrawOp::Fill {
            path: path.clone(),
            paint: paint.clone(),
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke) {
        self.ops.push(DrawOp::Stroke {
            path: path.clone(),
            stroke,
        });
    }
}
