//! Builds flowers with randomized geometry, timing and sway

use std::f64::consts::TAU;

use super::entity::{Flower, Petal, Sway};
use crate::config::GardenParams;
use crate::math::{Sampler, Vec2};
use crate::palette::color::STEM_COLORS;
use crate::palette::Palette;

/// Create a flower whose stem rises from `ground` (the viewport bottom) to
/// `target`, planted at time `now` (ms).
pub fn create_flower(
    target: Vec2,
    ground: f64,
    now: f64,
    palette: Palette,
    params: &GardenParams,
    sampler: &mut Sampler,
) -> Flower {
    let petal_count = sampler.range_int(params.petal_count_min, params.petal_count_max);
    let start = Vec2::new(
        target.x + sampler.range(-params.start_jitter, params.start_jitter),
        ground,
    );

    let stem_duration = sampler.span(params.stem_duration);
    let bloom_duration = sampler.span(params.bloom_duration);
    let stem_color = sampler.pick(&STEM_COLORS).copied().unwrap_or(STEM_COLORS[0]);
    let stem_thickness = sampler.span(params.stem_thickness);
    let stem_curve = sampler.span(params.stem_curve);

    let sway = Sway {
        speed: sampler.span(params.sway_speed),
        phase: sampler.range(0.0, TAU),
        amount: sampler.span(params.sway_amount),
    };

    let petals = generate_petals(petal_count, params, sampler);

    Flower::new(
        start,
        target,
        now,
        stem_duration,
        bloom_duration,
        stem_color,
        stem_thickness,
        stem_curve,
        sway,
        palette,
        petals,
    )
}

/// Petals evenly spaced around a full turn, each nudged off its slot
fn generate_petals(count: usize, params: &GardenParams, sampler: &mut Sampler) -> Vec<Petal> {
    (0..count)
        .map(|i| Petal {
            angle: (i as f64 / count as f64) * TAU
                + sampler.range(-params.petal_angle_jitter, params.petal_angle_jitter),
            length: sampler.span(params.petal_length),
            width: sampler.span(params.petal_width),
            curve: sampler.span(params.petal_curve),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PETAL_PALETTES;

    fn plant(seed: u64) -> Flower {
        let mut sampler = Sampler::from_seed(seed);
        create_flower(
            Vec2::new(100.0, 100.0),
            800.0,
            0.0,
            PETAL_PALETTES[0],
            &GardenParams::default(),
            &mut sampler,
        )
    }

    #[test]
    fn test_start_is_on_ground_near_target() {
        for seed in 0..50 {
            let flower = plant(seed);
            assert_eq!(flower.start.y, 800.0);
            assert!((flower.start.x - 100.0).abs() <= 20.0);
            assert_eq!(flower.target, Vec2::new(100.0, 100.0));
        }
    }

    #[test]
    fn test_fields_within_ranges() {
        let params = GardenParams::default();
        for seed in 0..50 {
            let f = plant(seed);
            assert!(params.stem_duration.contains(f.stem_duration));
            assert!(params.bloom_duration.contains(f.bloom_duration));
            assert!(params.stem_thickness.contains(f.stem_thickness));
            assert!(params.stem_curve.contains(f.stem_curve));
            assert!(params.sway_speed.contains(f.sway.speed));
            assert!(params.sway_amount.contains(f.sway.amount));
            assert!((0.0..TAU).contains(&f.sway.phase));
            assert!(STEM_COLORS.contains(&f.stem_color));
        }
    }

    #[test]
    fn test_petal_count_and_spacing() {
        let params = GardenParams::default();
        for seed in 0..50 {
            let f = plant(seed);
            let n = f.petals.len();
            assert!((4..7).contains(&n), "petal count {}", n);

            for (i, petal) in f.petals.iter().enumerate() {
                let slot = i as f64 / n as f64 * TAU;
                assert!((petal.angle - slot).abs() <= params.petal_angle_jitter);
                assert!(params.petal_length.contains(petal.length));
                assert!(params.petal_width.contains(petal.width));
                assert!(params.petal_curve.contains(petal.curve));
            }
        }
    }

    #[test]
    fn test_sway_differs_between_flowers() {
        let a = plant(1);
        let b = plant(2);
        assert_ne!(a.sway, b.sway);
    }

    #[test]
    fn test_new_flower_has_no_head_yet() {
        let f = plant(3);
        assert!(f.head().is_none());
        assert_eq!(f.created_at, 0.0);
    }
}
