//! Browser 2D canvas backend

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::background::Viewport;
use super::surface::{ColorStop, Glow, Paint, Path, PathSegment, Stroke, Surface};
use crate::math::Vec2;

/// `Surface` over a browser 2D canvas context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire an opaque 2D context for `canvas`
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("alpha"), &JsValue::FALSE)
            .map_err(|e| format!("Failed to build context options: {:?}", e))?;

        let ctx = canvas
            .get_context_with_context_options("2d", &options)
            .map_err(|e| format!("Failed to get 2D context: {:?}", e))?
            .ok_or("Canvas has no 2D context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "2D context has an unexpected type".to_string())?;

        Ok(Self { canvas, ctx })
    }

    /// Size the backing store to the viewport and scale drawing to CSS pixels
    pub fn resize(&mut self, viewport: &Viewport) -> Result<(), String> {
        let (width, height) = viewport.device_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        let ratio = viewport.pixel_ratio;
        self.ctx
            .set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)
            .map_err(|e| format!("Failed to set canvas transform: {:?}", e))
    }

    fn trace(&self, path: &Path) {
        let ctx = &self.ctx;
        ctx.begin_path();
        for segment in &path.segments {
            match *segment {
                PathSegment::MoveTo(p) => ctx.move_to(p.x, p.y),
                PathSegment::QuadraticTo { control, to } => {
                    ctx.quadratic_curve_to(control.x, control.y, to.x, to.y)
                }
                PathSegment::CubicTo { c1, c2, to } => {
                    ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y)
                }
                PathSegment::Circle { center, radius } => {
                    // Negative radii throw; a vanished circle is simply skipped
                    if radius > 0.0 {
                        ctx.move_to(center.x + radius, center.y);
                        if let Err(e) = ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU) {
                            log::warn!("arc rejected: {:?}", e);
                        }
                    }
                }
                PathSegment::Close => ctx.close_path(),
            }
        }
    }

    fn gradient(&self, paint: &Paint) -> Result<Option<CanvasGradient>, JsValue> {
        let (gradient, stops) = match paint {
            Paint::Solid(_) => return Ok(None),
            Paint::Linear { from, to, stops } => {
                (self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y), stops)
            }
            Paint::Radial {
                inner,
                inner_radius,
                outer,
                outer_radius,
                stops,
            } => (
                self.ctx.create_radial_gradient(
                    inner.x,
                    inner.y,
                    *inner_radius,
                    outer.x,
                    outer.y,
                    *outer_radius,
                )?,
                stops,
            ),
        };
        add_stops(&gradient, stops)?;
        Ok(Some(gradient))
    }

    /// Set the fill style; false when the paint could not be built
    fn apply_fill(&self, paint: &Paint) -> bool {
        if let Paint::Solid(color) = paint {
            self.ctx.set_fill_style_str(&color.to_css());
            return true;
        }
        match self.gradient(paint) {
            Ok(Some(gradient)) => {
                self.ctx.set_fill_style_canvas_gradient(&gradient);
                true
            }
            Ok(None) => false,
            Err(e) => {
                log::warn!("gradient rejected, skipping fill: {:?}", e);
                false
            }
        }
    }
}

fn add_stops(gradient: &CanvasGradient, stops: &[ColorStop]) -> Result<(), JsValue> {
    for stop in stops {
        gradient.add_color_stop(stop.offset as f32, &stop.color.to_css())?;
    }
    Ok(())
}

impl Surface for CanvasSurface {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        if let Err(e) = self.ctx.translate(offset.x, offset.y) {
            log::warn!("translate rejected: {:?}", e);
        }
    }

    fn rotate(&mut self, angle: f64) {
        if let Err(e) = self.ctx.rotate(angle) {
            log::warn!("rotate rejected: {:?}", e);
        }
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_glow(&mut self, glow: Glow) {
        self.ctx.set_shadow_blur(glow.blur);
        self.ctx.set_shadow_color(&glow.color.to_css());
    }

    fn fill_rect(&mut self, origin: Vec2, width: f64, height: f64, paint: &Paint) {
        if self.apply_fill(paint) {
            self.ctx.fill_rect(origin.x, origin.y, width, height);
        }
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        if self.apply_fill(paint) {
            self.trace(path);
            self.ctx.fill();
        }
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke) {
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.set_line_width(stroke.width);
        self.ctx.set_line_cap("round");
        self.trace(path);
        self.ctx.stroke();
    }
}
