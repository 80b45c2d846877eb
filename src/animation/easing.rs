//! Easing functions for smooth animations

/// Easing function types
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Easing {
    /// Linear interpolation
    Linear,
    /// Fast start, decelerate (flower head bloom)
    EaseOutQuad,
    /// Stronger deceleration (stem growth)
    #[default]
    EaseOutCubic,
    /// Slow start and finish
    EaseInOutCubic,
}

/// Apply easing function to a value t in range [0, 1]
pub fn ease(t: f64, easing: Easing) -> f64 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseOutQuad => t * (2.0 - t),
        Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        Easing::EaseInOutCubic => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}
