//! Per-frame garden update and redraw
//!
//! `Garden` owns every piece of mutable state: the flowers, the firefly pool,
//! the palette selector, the RNG and the viewport. Host event handlers and the
//! frame callback all go through it.

use crate::config::GardenParams;
use crate::flower::{create_flower, Flower, FlowerPhase};
use crate::math::{Sampler, Vec2};
use crate::palette::PaletteSelector;
use crate::particles::FireflySystem;
use crate::render::background::{Background, Theme, Viewport};
use crate::render::head::draw_flower_head;
use crate::render::stem::draw_stem;
use crate::render::surface::Surface;

pub struct Garden {
    params: GardenParams,
    sampler: Sampler,
    viewport: Viewport,
    background: Background,
    fireflies: FireflySystem,
    palettes: PaletteSelector,
    /// Live flowers in creation order (draw order)
    flowers: Vec<Flower>,
}

impl Garden {
    /// Create a garden for `viewport`. The seed fixes the background theme,
    /// the firefly pool and every later random choice.
    pub fn new(viewport: Viewport, params: GardenParams, seed: u64) -> Self {
        let mut sampler = Sampler::from_seed(seed);
        let theme = Theme::random(&mut sampler);
        let fireflies = FireflySystem::new(&viewport, &params, &mut sampler);

        Self {
            background: Background::new(theme, &viewport),
            params,
            sampler,
            viewport,
            fireflies,
            palettes: PaletteSelector::default(),
            flowers: Vec::new(),
        }
    }

    /// Plant a flower growing toward `(x, y)` from the bottom edge
    pub fn plant(&mut self, x: f64, y: f64, now: f64) -> &Flower {
        let palette = self.palettes.select(&mut self.sampler);
        let flower = create_flower(
            Vec2::new(x, y),
            self.viewport.height,
            now,
            palette,
            &self.params,
            &mut self.sampler,
        );
        log::debug!(
            "planted flower #{} at ({:.0}, {:.0}) with {} petals{}",
            self.flowers.len() + 1,
            x,
            y,
            flower.petals.len(),
            if palette.distinguished { " (red rose)" } else { "" }
        );
        self.flowers.push(flower);
        &self.flowers[self.flowers.len() - 1]
    }

    /// Drop every flower and restart the palette cadence
    pub fn clear(&mut self) {
        log::debug!("clearing {} flowers", self.flowers.len());
        self.flowers.clear();
        self.palettes.reset();
    }

    /// Adopt a new viewport. Placed flowers keep their geometry.
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!(
            "resize to {}x{} @{}x",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio
        );
        self.viewport = viewport;
        self.background.resize(&self.viewport);
    }

    /// Advance and draw one frame at time `now` (ms).
    ///
    /// Returns whether another frame should be scheduled.
    pub fn frame<S: Surface>(&mut self, surface: &mut S, now: f64) -> bool {
        self.background.paint(surface, &self.viewport);
        self.fireflies.update(&self.viewport, &mut self.sampler);
        self.fireflies.draw(surface);

        let mut active = false;
        for flower in &mut self.flowers {
            draw_flower(surface, flower, now);
            advance(flower, now);
            active |= flower.phase().is_active();
        }

        active || !self.flowers.is_empty() || !self.fireflies.is_empty()
    }

    /// Redraw the current state once without advancing anything
    pub fn repaint<S: Surface>(&mut self, surface: &mut S, now: f64) {
        self.background.paint(surface, &self.viewport);
        self.fireflies.draw(surface);
        for flower in &mut self.flowers {
            draw_flower(surface, flower, now);
        }
    }

    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }

    pub fn fireflies(&self) -> &FireflySystem {
        &self.fireflies
    }

    #[cfg(test)]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn theme(&self) -> Theme {
        self.background.theme()
    }

    #[cfg(test)]
    pub fn palette_counter(&self) -> u32 {
        self.palettes.counter()
    }
}

/// Draw a flower as its phase dictates at `now`
fn draw_flower<S: Surface>(surface: &mut S, flower: &mut Flower, now: f64) {
    match flower.phase() {
        FlowerPhase::Growing => {
            let progress = flower.stem_progress(now);
            draw_stem(surface, flower, progress, now);
        }
        FlowerPhase::Blooming { .. } => {
            draw_stem(surface, flower, 1.0, now);
            let bloom = flower.bloom_progress(now);
            draw_flower_head(surface, flower, bloom);
        }
        FlowerPhase::Settled { .. } => {
            draw_stem(surface, flower, 1.0, now);
            draw_flower_head(surface, flower, 1.0);
        }
    }
}

/// Apply at most one phase transition
fn advance(flower: &mut Flower, now: f64) {
    match flower.phase() {
        FlowerPhase::Growing => {
            if flower.stem_elapsed(now) {
                flower.finish_stem(now);
            }
        }
        FlowerPhase::Blooming { .. } => {
            if flower.bloom_elapsed(now) {
                flower.finish_bloom();
            }
        }
        FlowerPhase::Settled { .. } => {}
    }
}
