//! Fixed ranges for flowers and fireflies
//!
//! The values live in `assets/garden.yaml`, compiled into the crate and parsed
//! once at mount. There is no runtime override.

use serde::Deserialize;

const BUNDLED: &str = include_str!("../assets/garden.yaml");

/// Closed-open numeric range sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    #[cfg(test)]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies in the sampled interval, regardless of bound order
    #[cfg(test)]
    pub fn contains(&self, value: f64) -> bool {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        value >= lo && value <= hi
    }

    fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// Every fixed range used when planting flowers and seeding fireflies
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GardenParams {
    /// Horizontal jitter of the stem base around the target x (pixels)
    pub start_jitter: f64,
    /// Stem growth time (ms)
    pub stem_duration: Span,
    /// Bloom time (ms)
    pub bloom_duration: Span,
    pub stem_thickness: Span,
    /// Offset of the stem's quadratic control point (pixels)
    pub stem_curve: Span,
    /// Sway angular speed (radians per ms)
    pub sway_speed: Span,
    /// Sway amplitude (pixels)
    pub sway_amount: Span,
    /// Petal count is `floor(uniform[min, max))`
    pub petal_count_min: usize,
    pub petal_count_max: usize,
    pub petal_length: Span,
    pub petal_width: Span,
    pub petal_curve: Span,
    /// Random rotation added to each evenly spaced petal (radians)
    pub petal_angle_jitter: f64,
    pub firefly_count: usize,
    pub firefly_radius: Span,
    pub firefly_opacity: Span,
    /// Vertical drift per frame (negative floats upward)
    pub firefly_speed_y: Span,
    pub firefly_speed_x: Span,
}

impl GardenParams {
    /// The parameter set shipped with the crate
    pub fn bundled() -> Result<Self, String> {
        Self::from_yaml(BUNDLED)
    }

    fn from_yaml(yaml: &str) -> Result<Self, String> {
        let params: GardenParams = serde_yaml::from_str(yaml)
            .map_err(|e| format!("YAML parse error: {}", e))?;
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> Result<(), String> {
        let spans = [
            ("stem_duration", self.stem_duration),
            ("bloom_duration", self.bloom_duration),
            ("stem_thickness", self.stem_thickness),
            ("stem_curve", self.stem_curve),
            ("sway_speed", self.sway_speed),
            ("sway_amount", self.sway_amount),
            ("petal_length", self.petal_length),
            ("petal_width", self.petal_width),
            ("petal_curve", self.petal_curve),
            ("firefly_radius", self.firefly_radius),
            ("firefly_opacity", self.firefly_opacity),
            ("firefly_speed_y", self.firefly_speed_y),
            ("firefly_speed_x", self.firefly_speed_x),
        ];
        if let Some((name, _)) = spans.iter().find(|(_, span)| !span.is_finite()) {
            return Err(format!("{} must have finite bounds", name));
        }
        if !self.start_jitter.is_finite() || !self.petal_angle_jitter.is_finite() {
            return Err("Jitter values must be finite".to_string());
        }

        for (name, span) in [("stem_duration", self.stem_duration), ("bloom_duration", self.bloom_duration)] {
            if span.min <= 0.0 || span.min > span.max {
                return Err(format!(
                    "{} [{}, {}) must be positive and ordered",
                    name, span.min, span.max
                ));
            }
        }

        if self.petal_count_min == 0 || self.petal_count_min >= self.petal_count_max {
            return Err(format!(
                "Petal count range [{}, {}) must be non-empty and start above zero",
                self.petal_count_min, self.petal_count_max
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
impl Default for GardenParams {
    fn default() -> Self {
        Self::bundled().expect("bundled garden.yaml is valid")
    }
}
