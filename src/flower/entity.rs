use crate::math::Vec2;
use crate::palette::{Color, Palette};

/// Lifecycle of one flower. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowerPhase {
    /// Stem is rising toward the target
    Growing,
    /// Stem finished at `bloom_started_at` (ms); head is opening
    Blooming { bloom_started_at: f64 },
    /// Fully open and swaying
    Settled { bloom_started_at: f64 },
}

impl FlowerPhase {
    pub fn is_active(&self) -> bool {
        !matches!(self, FlowerPhase::Settled { .. })
    }
}

/// Shape of a single petal, before bloom scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Petal {
    /// Rotation around the head (radians)
    pub angle: f64,
    pub length: f64,
    pub width: f64,
    /// Pulls the inner control point toward the petal axis
    pub curve: f64,
}

/// Breeze motion parameters, unique per flower
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sway {
    /// Radians per ms
    pub speed: f64,
    pub phase: f64,
    /// Pixels
    pub amount: f64,
}

impl Sway {
    /// Horizontal offset at time `now` (ms)
    pub fn offset(&self, now: f64) -> f64 {
        (now * self.speed + self.phase).sin() * self.amount
    }
}

/// One planted flower: fixed geometry and timing plus lifecycle state
#[derive(Debug, Clone)]
pub struct Flower {
    pub start: Vec2,
    pub target: Vec2,
    /// Creation time (ms)
    pub created_at: f64,
    /// Stem growth time (ms)
    pub stem_duration: f64,
    /// Bloom time (ms)
    pub bloom_duration: f64,
    pub stem_color: Color,
    pub stem_thickness: f64,
    /// Horizontal offset of the stem's control point at full growth
    pub stem_curve: f64,
    pub sway: Sway,
    pub palette: Palette,
    pub petals: Vec<Petal>,
    phase: FlowerPhase,
    /// Stem tip as of the last stem draw
    head: Option<Vec2>,
}

impl Flower {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start: Vec2,
        target: Vec2,
        created_at: f64,
        stem_duration: f64,
        bloom_duration: f64,
        stem_color: Color,
        stem_thickness: f64,
        stem_curve: f64,
        sway: Sway,
        palette: Palette,
        petals: Vec<Petal>,
    ) -> Self {
        Self {
            start,
            target,
            created_at,
            stem_duration,
            bloom_duration,
            stem_color,
            stem_thickness,
            stem_curve,
            sway,
            palette,
            petals,
            phase: FlowerPhase::Growing,
            head: None,
        }
    }

    pub fn phase(&self) -> FlowerPhase {
        self.phase
    }

    pub fn stem_complete(&self) -> bool {
        !matches!(self.phase, FlowerPhase::Growing)
    }

    pub fn bloom_complete(&self) -> bool {
        matches!(self.phase, FlowerPhase::Settled { .. })
    }

    /// Set once, when the stem finishes growing
    pub fn bloom_start_time(&self) -> Option<f64> {
        match self.phase {
            FlowerPhase::Growing => None,
            FlowerPhase::Blooming { bloom_started_at } | FlowerPhase::Settled { bloom_started_at } => {
                Some(bloom_started_at)
            }
        }
    }

    /// Stem progress at `now`, clamped to [0, 1]
    pub fn stem_progress(&self, now: f64) -> f64 {
        progress(now - self.created_at, self.stem_duration)
    }

    /// Bloom progress at `now`, clamped to [0, 1]; zero before the bloom starts
    pub fn bloom_progress(&self, now: f64) -> f64 {
        match self.bloom_start_time() {
            Some(started) => progress(now - started, self.bloom_duration),
            None => 0.0,
        }
    }

    /// Whether the full stem duration has elapsed at `now`
    pub fn stem_elapsed(&self, now: f64) -> bool {
        now >= self.created_at + self.stem_duration
    }

    /// Whether the full bloom duration has elapsed at `now`; false before the bloom starts
    pub fn bloom_elapsed(&self, now: f64) -> bool {
        match self.bloom_start_time() {
            Some(started) => now >= started + self.bloom_duration,
            None => false,
        }
    }

    /// Growing -> Blooming. Ignored in any later phase.
    pub fn finish_stem(&mut self, now: f64) {
        if self.phase == FlowerPhase::Growing {
            self.phase = FlowerPhase::Blooming { bloom_started_at: now };
        }
    }

    /// Blooming -> Settled. Ignored in any other phase.
    pub fn finish_bloom(&mut self) {
        if let FlowerPhase::Blooming { bloom_started_at } = self.phase {
            self.phase = FlowerPhase::Settled { bloom_started_at };
        }
    }

    pub fn head(&self) -> Option<Vec2> {
        self.head
    }

    pub(crate) fn set_head(&mut self, head: Vec2) {
        self.head = Some(head);
    }
}

fn progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}
