use std::f64::consts::TAU;

use crate::config::GardenParams;
use crate::math::{Sampler, Vec2};
use crate::palette::color::FIREFLY_COLORS;
use crate::palette::Color;
use crate::render::background::Viewport;
use crate::render::surface::{Glow, Paint, Path, Surface};

/// How far past an edge a firefly may drift before it wraps or respawns
pub const EDGE_MARGIN: f64 = 10.0;
/// Pulse phase advance per frame
const PULSE_STEP: f64 = 0.02;
const GLOW_BLUR: f64 = 6.0;

/// A single firefly particle
#[derive(Debug, Clone, PartialEq)]
pub struct Firefly {
    pub position: Vec2,
    /// Per-frame drift (y negative = upward)
    pub velocity: Vec2,
    pub radius: f64,
    pub color: Color,
    /// Base opacity before pulsing
    pub opacity: f64,
    /// Pulse phase (radians)
    pub phase: f64,
}

impl Firefly {
    fn spawn(viewport: &Viewport, params: &GardenParams, sampler: &mut Sampler) -> Self {
        Self {
            position: Vec2::new(
                sampler.range(0.0, viewport.width),
                sampler.range(0.0, viewport.height),
            ),
            radius: sampler.span(params.firefly_radius),
            color: sampler.pick(&FIREFLY_COLORS).copied().unwrap_or(FIREFLY_COLORS[0]),
            opacity: sampler.span(params.firefly_opacity),
            velocity: Vec2::new(
                sampler.span(params.firefly_speed_x),
                sampler.span(params.firefly_speed_y),
            ),
            phase: sampler.range(0.0, TAU),
        }
    }

    /// Opacity after the ±10% pulse
    pub fn alpha(&self) -> f64 {
        self.opacity * (self.phase.sin() * 0.1 + 0.9)
    }
}

/// Fixed-size pool of drifting, pulsing glow particles
#[derive(Debug, Clone)]
pub struct FireflySystem {
    fireflies: Vec<Firefly>,
}

impl FireflySystem {
    pub fn new(viewport: &Viewport, params: &GardenParams, sampler: &mut Sampler) -> Self {
        let fireflies = (0..params.firefly_count)
            .map(|_| Firefly::spawn(viewport, params, sampler))
            .collect();
        Self { fireflies }
    }

    /// Advance one frame. Frame-rate dependent: drift and pulse are per call.
    pub fn update(&mut self, viewport: &Viewport, sampler: &mut Sampler) {
        for firefly in &mut self.fireflies {
            firefly.position = firefly.position + firefly.velocity;

            // Respawn at the bottom after leaving through the top
            if firefly.position.y < -EDGE_MARGIN {
                firefly.position.y = viewport.height + EDGE_MARGIN;
                firefly.position.x = sampler.range(0.0, viewport.width);
            }

            if firefly.position.x < -EDGE_MARGIN {
                firefly.position.x = viewport.width + EDGE_MARGIN;
            }
            if firefly.position.x > viewport.width + EDGE_MARGIN {
                firefly.position.x = -EDGE_MARGIN;
            }

            firefly.phase += PULSE_STEP;
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        for firefly in &self.fireflies {
            surface.save();
            surface.set_alpha(firefly.alpha());
            surface.set_glow(Glow {
                blur: GLOW_BLUR,
                color: firefly.color,
            });
            surface.fill_path(
                &Path::new().circle(firefly.position, firefly.radius),
                &Paint::Solid(firefly.color),
            );
            surface.restore();
        }
    }

    pub fn fireflies(&self) -> &[Firefly] {
        &self.fireflies
    }

    pub fn count(&self) -> usize {
        self.fireflies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fireflies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::RecordingSurface;

    fn setup(count: usize) -> (FireflySystem, Viewport, Sampler) {
        let viewport = Viewport::new(400.0, 300.0, 1.0);
        let params = GardenParams {
            firefly_count: count,
            ..Default::default()
        };
        let mut sampler = Sampler::from_seed(21);
        let system = FireflySystem::new(&viewport, &params, &mut sampler);
        (system, viewport, sampler)
    }

    #[test]
    fn test_pool_size_is_fixed() {
        let (mut system, viewport, mut sampler) = setup(25);
        assert_eq!(system.count(), 25);
        for _ in 0..5000 {
            system.update(&viewport, &mut sampler);
        }
        assert_eq!(system.count(), 25);
    }

    #[test]
    fn test_spawn_ranges() {
        let (system, viewport, _) = setup(200);
        let params = GardenParams::default();
        for f in system.fireflies() {
            assert!(f.position.x >= 0.0 && f.position.x < viewport.width);
            assert!(f.position.y >= 0.0 && f.position.y < viewport.height);
            assert!(params.firefly_radius.contains(f.radius));
            assert!(params.firefly_opacity.contains(f.opacity));
            assert!(f.velocity.y < 0.0, "fireflies float upward");
            assert!(FIREFLY_COLORS.contains(&f.color));
        }
    }

    #[test]
    fn test_positions_change_every_frame() {
        let (mut system, viewport, mut sampler) = setup(25);
        let before: Vec<Vec2> = system.fireflies().iter().map(|f| f.position).collect();
        system.update(&viewport, &mut sampler);
        let after: Vec<Vec2> = system.fireflies().iter().map(|f| f.position).collect();
        assert!(before.iter().zip(&after).all(|(a, b)| a != b));
    }

    #[test]
    fn test_respawn_at_bottom() {
        let (mut system, viewport, mut sampler) = setup(1);
        system.fireflies[0].position = Vec2::new(50.0, -10.5);
        system.fireflies[0].velocity = Vec2::new(0.0, -0.5);

        system.update(&viewport, &mut sampler);

        let f = &system.fireflies()[0];
        assert_eq!(f.position.y, viewport.height + EDGE_MARGIN);
        assert!(f.position.x >= 0.0 && f.position.x < viewport.width);
    }

    #[test]
    fn test_horizontal_wrap() {
        let (mut system, viewport, mut sampler) = setup(2);
        system.fireflies[0].position = Vec2::new(-9.9, 100.0);
        system.fireflies[0].velocity = Vec2::new(-0.2, -0.3);
        system.fireflies[1].position = Vec2::new(viewport.width + 9.9, 100.0);
        system.fireflies[1].velocity = Vec2::new(0.2, -0.3);

        system.update(&viewport, &mut sampler);

        assert_eq!(system.fireflies()[0].position.x, viewport.width + EDGE_MARGIN);
        assert_eq!(system.fireflies()[1].position.x, -EDGE_MARGIN);
    }

    #[test]
    fn test_x_stays_within_margins() {
        let (mut system, viewport, mut sampler) = setup(50);
        for _ in 0..3000 {
            system.update(&viewport, &mut sampler);
            for f in system.fireflies() {
                assert!(f.position.x >= -EDGE_MARGIN && f.position.x <= viewport.width + EDGE_MARGIN);
            }
        }
    }

    #[test]
    fn test_pulse_stays_within_ten_percent() {
        let (mut system, viewport, mut sampler) = setup(10);
        for _ in 0..500 {
            system.update(&viewport, &mut sampler);
            for f in system.fireflies() {
                let ratio = f.alpha() / f.opacity;
                assert!((0.8 - 1e-9..=1.0 + 1e-9).contains(&ratio));
            }
        }
    }

    #[test]
    fn test_draw_one_glowing_circle_each() {
        let (system, _, _) = setup(5);
        let mut surface = RecordingSurface::new();
        system.draw(&mut surface);

        assert!(surface.is_balanced());
        assert_eq!(surface.fills().len(), 5);
        assert!(surface.glows().iter().all(|g| g.blur == GLOW_BLUR));
    }
}
