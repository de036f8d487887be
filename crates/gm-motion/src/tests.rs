//! Unit tests for the built-in motion generators.

use gm_core::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    CircularArcMovement, EllipticalArcMovement, FullCircleMovement, LinearMovement,
    MERGE_WINDOW, Motion, MotionError, MotionGenerator, Step,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const START: Vec3 = Vec3::new(0.0, 0.0, 0.0);
const END:   Vec3 = Vec3::new(2.0, 0.0, 0.0);
const PIVOT: Vec3 = Vec3::new(1.0, 1.0, 0.0);

/// Advance over the given dts, summing all displacements.
fn sum_steps(m: &mut impl MotionGenerator, dts: &[f32]) -> Vec3 {
    let mut acc = Vec3::ZERO;
    for &dt in dts {
        acc += m.advance(dt).displacement();
    }
    acc
}

/// `n` positive chunks summing to (approximately) `total`.
fn random_splits(rng: &mut SmallRng, total: f32, n: usize) -> Vec<f32> {
    let weights: Vec<f32> = (0..n).map(|_| rng.gen_range(0.05..1.0f32)).collect();
    let sum: f32 = weights.iter().sum();
    weights.into_iter().map(|w| w / sum * total).collect()
}

/// Minimal custom generator for enum-level tests.
struct Pulse {
    left:    f32,
    stacked: bool,
}

impl MotionGenerator for Pulse {
    fn advance(&mut self, dt: f32) -> Step {
        if self.left <= 0.0 {
            return Step::Done;
        }
        self.left = (self.left - dt).max(0.0);
        Step::Displace(Vec3::X)
    }

    fn is_stacked(&self) -> bool {
        self.stacked
    }

    fn time_left(&self) -> f32 {
        self.left
    }
}

// ── Step ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod step {
    use super::*;

    #[test]
    fn displacement_accessor() {
        assert_eq!(Step::Displace(Vec3::X).displacement(), Vec3::X);
        assert_eq!(Step::Done.displacement(), Vec3::ZERO);
        assert!(Step::Done.is_done());
        assert!(!Step::Displace(Vec3::ZERO).is_done());
    }
}

// ── LinearMovement ────────────────────────────────────────────────────────────

#[cfg(test)]
mod linear {
    use super::*;

    #[test]
    fn emits_uniform_fractions() {
        let mut m = LinearMovement::new(Vec3::new(2.0, 0.0, 0.0), 2.0, false).unwrap();
        assert_eq!(m.advance(0.5), Step::Displace(Vec3::new(0.5, 0.0, 0.0)));
        assert_eq!(m.advance(1.0), Step::Displace(Vec3::new(1.0, 0.0, 0.0)));
        assert!((m.time_left() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn conservation_under_random_splits() {
        let total = Vec3::new(3.0, -1.0, 0.5);
        let mut rng = SmallRng::seed_from_u64(7);
        let splits = random_splits(&mut rng, 1.0, 20);

        let mut m = LinearMovement::new(total, 1.0, true).unwrap();
        let mut acc = sum_steps(&mut m, &splits);
        // Flush any floating remainder of the split sum.
        acc += m.advance(1.0).displacement();

        assert!(acc.within_margin(total, 1e-4), "got {acc}");
        assert_eq!(m.advance(0.1), Step::Done);
    }

    #[test]
    fn overshoot_clamps_to_endpoint() {
        let total = Vec3::new(1.0, 2.0, 3.0);
        let mut m = LinearMovement::new(total, 1.0, false).unwrap();
        let first = m.advance(0.6).displacement();
        let last = m.advance(10.0).displacement();
        assert!((first + last).approx_eq(total));
        assert_eq!(m.time_left(), 0.0);
    }

    #[test]
    fn done_is_idempotent() {
        let mut m = LinearMovement::new(Vec3::X, 1.0, false).unwrap();
        m.advance(2.0);
        assert_eq!(m.advance(0.5), Step::Done);
        assert_eq!(m.advance(0.5), Step::Done);
        assert_eq!(m.advance(0.0), Step::Done);
    }

    #[test]
    fn zero_dt_is_a_noop() {
        let mut m = LinearMovement::new(Vec3::X, 1.0, false).unwrap();
        assert_eq!(m.advance(0.0), Step::Displace(Vec3::ZERO));
        assert_eq!(m.time_left(), 1.0);
    }

    #[test]
    fn rejects_non_positive_duration() {
        assert_eq!(
            LinearMovement::new(Vec3::X, 0.0, false).unwrap_err(),
            MotionError::NonPositiveDuration(0.0)
        );
        assert!(matches!(
            LinearMovement::new(Vec3::X, -1.0, false),
            Err(MotionError::NonPositiveDuration(_))
        ));
    }

    #[test]
    fn between_takes_endpoint_difference() {
        let m = LinearMovement::between(Vec3::new(1.0, 1.0, 0.0), Vec3::new(4.0, 0.0, 0.0), 1.0, false)
            .unwrap();
        assert_eq!(m.total, Vec3::new(3.0, -1.0, 0.0));
    }
}

// ── Linear merging ────────────────────────────────────────────────────────────

#[cfg(test)]
mod linear_merge {
    use super::*;

    fn linear(total: Vec3, duration: f32) -> LinearMovement {
        LinearMovement::new(total, duration, true).unwrap()
    }

    #[test]
    fn absorbs_matching_fresh_movement() {
        let mut a = linear(Vec3::new(1.0, 0.0, 0.0), 1.0);
        a.advance(0.5);
        let b = Motion::Linear(linear(Vec3::new(0.0, 2.0, 0.0), 0.5));

        assert!(a.attempt_merge(&b));

        // Remaining output = a's remainder + all of b.
        let mut rest = a.advance(0.25).displacement();
        rest += a.advance(0.25).displacement();
        rest += a.advance(1.0).displacement();
        assert!(rest.within_margin(Vec3::new(0.5, 2.0, 0.0), 1e-4), "got {rest}");
        assert_eq!(a.advance(0.1), Step::Done);
    }

    #[test]
    fn fresh_absorber_sums_totals() {
        let mut a = linear(Vec3::new(1.0, 1.0, 0.0), 2.0);
        let b = Motion::Linear(linear(Vec3::new(2.0, 0.0, 0.0), 2.0));
        assert!(a.attempt_merge(&b));
        assert!(a.total.approx_eq(Vec3::new(3.0, 1.0, 0.0)));
    }

    #[test]
    fn refuses_duration_mismatch() {
        let mut a = linear(Vec3::X, 1.0);
        a.advance(0.5);
        let b = Motion::Linear(linear(Vec3::Y, 0.8)); // 0.8 vs 0.5 left
        assert!(!a.attempt_merge(&b));
    }

    #[test]
    fn refuses_already_started_incoming() {
        let mut a = linear(Vec3::X, 1.0);
        let mut b = linear(Vec3::Y, 1.0);
        b.advance(0.25);
        assert!(!a.attempt_merge(&Motion::Linear(b)));
    }

    #[test]
    fn refuses_other_kinds() {
        let mut a = linear(Vec3::X, 1.0);
        let arc = CircularArcMovement::new(START, END, PIVOT, 90.0, 1.0, true).unwrap();
        assert!(!a.attempt_merge(&Motion::CircularArc(arc)));
    }

    #[test]
    fn refuses_when_nearly_finished() {
        let mut a = linear(Vec3::X, 1.0);
        a.advance(1.0 - MERGE_WINDOW * 0.5);
        let b = Motion::Linear(linear(Vec3::Y, MERGE_WINDOW * 0.5));
        assert!(!a.attempt_merge(&b));
    }

    #[test]
    fn arcs_never_merge() {
        let mut arc = CircularArcMovement::new(START, END, PIVOT, 90.0, 1.0, true).unwrap();
        let b = Motion::Linear(linear(Vec3::X, 1.0));
        assert!(!arc.attempt_merge(&b));

        let mut circle = FullCircleMovement::new(START, END, PIVOT, 1.0, true).unwrap();
        assert!(!circle.attempt_merge(&b));
    }
}

// ── CircularArcMovement ───────────────────────────────────────────────────────

#[cfg(test)]
mod circular_arc {
    use super::*;

    #[test]
    fn quarter_arc_lands_on_end() {
        let mut m = CircularArcMovement::new(START, END, PIVOT, 90.0, 1.0, false).unwrap();
        let acc = sum_steps(&mut m, &[0.3, 0.3, 0.4]);
        assert!(acc.within_margin(END - START, 1e-4), "got {acc}");
        assert_eq!(m.advance(0.1), Step::Done);
    }

    #[test]
    fn conservation_under_random_splits() {
        let mut rng = SmallRng::seed_from_u64(11);
        let splits = random_splits(&mut rng, 2.0, 50);

        let mut m = CircularArcMovement::new(START, END, PIVOT, 135.0, 2.0, false).unwrap();
        let mut acc = sum_steps(&mut m, &splits);
        acc += m.advance(1.0).displacement();

        assert!(acc.within_margin(END - START, 1e-3), "got {acc}");
    }

    #[test]
    fn coarse_and_fine_ticks_agree() {
        let mut coarse = CircularArcMovement::new(START, END, PIVOT, 120.0, 1.0, false).unwrap();
        let mut fine   = CircularArcMovement::new(START, END, PIVOT, 120.0, 1.0, false).unwrap();

        let one = coarse.advance(1.0).displacement();
        let ten = sum_steps(&mut fine, &[0.1; 10]);
        assert!(one.within_margin(ten, 1e-4), "coarse {one} vs fine {ten}");
    }

    #[test]
    fn semicircle_request_is_snapped() {
        // Exactly 180° is accepted and resolved just short of a true
        // semicircle; the endpoint contract still holds.
        let mut m = CircularArcMovement::new(START, END, PIVOT, 180.0, 1.0, false).unwrap();
        let acc = sum_steps(&mut m, &[0.5, 0.5, 0.5]);
        assert!(acc.within_margin(END - START, 1e-3), "got {acc}");
    }

    #[test]
    fn angle_out_of_range_rejected() {
        for bad in [10.0, 5.0, 0.0, -30.0, 180.01, 270.0, f32::NAN] {
            assert!(
                matches!(
                    CircularArcMovement::new(START, END, PIVOT, bad, 1.0, false),
                    Err(MotionError::ArcAngleOutOfRange(_))
                ),
                "angle {bad} should be rejected"
            );
        }
    }

    #[test]
    fn degenerate_chord_rejected() {
        assert_eq!(
            CircularArcMovement::new(START, START, PIVOT, 90.0, 1.0, false).unwrap_err(),
            MotionError::DegenerateChord
        );
    }

    #[test]
    fn collinear_reference_rejected() {
        let on_line = Vec3::new(5.0, 0.0, 0.0);
        assert_eq!(
            CircularArcMovement::new(START, END, on_line, 90.0, 1.0, false).unwrap_err(),
            MotionError::CollinearPivot
        );
    }

    #[test]
    fn rejects_non_positive_duration() {
        assert!(matches!(
            CircularArcMovement::new(START, END, PIVOT, 90.0, 0.0, false),
            Err(MotionError::NonPositiveDuration(_))
        ));
    }

    #[test]
    fn arc_bulges_away_from_reference() {
        // Center sits on the pivot's side, so the path curves through
        // the opposite half-plane.
        let mut m = CircularArcMovement::new(START, END, PIVOT, 90.0, 1.0, false).unwrap();
        let halfway = START + m.advance(0.5).displacement();
        assert!(halfway.y < 0.0, "midpoint {halfway} should be opposite the pivot");
    }

    #[test]
    fn samples_stay_on_the_circle() {
        let m = CircularArcMovement::new(START, END, PIVOT, 90.0, 1.0, false).unwrap();
        let radius = m.arc.v1.length();
        let mut walk = m.clone();
        let mut pos = START;
        for _ in 0..8 {
            pos += walk.advance(0.125).displacement();
            let r = pos.distance(m.arc.center);
            assert!((r - radius).abs() < 1e-4, "radius drifted to {r}");
        }
    }
}

// ── FullCircleMovement ────────────────────────────────────────────────────────

#[cfg(test)]
mod full_circle {
    use super::*;

    #[test]
    fn closes_loop_with_zero_net_displacement() {
        let mut m = FullCircleMovement::new(START, END, PIVOT, 2.0, false).unwrap();
        let mut acc = sum_steps(&mut m, &[0.7, 0.6, 0.5, 0.4]);
        acc += m.advance(1.0).displacement();
        assert!(acc.within_margin(Vec3::ZERO, 1e-3), "got {acc}");
        assert_eq!(m.advance(0.1), Step::Done);
    }

    #[test]
    fn passes_reference_side_at_quarter_turn() {
        let pivot = Vec3::new(1.0, 3.0, 0.0);
        let mut m = FullCircleMovement::new(START, END, pivot, 1.0, false).unwrap();
        let quarter = START + m.advance(0.25).displacement();
        assert!(quarter.within_margin(Vec3::new(1.0, 1.0, 0.0), 1e-4), "got {quarter}");
        assert!(quarter.y > 0.0, "loop should pass the pivot's side");
    }

    #[test]
    fn shares_chord_validation() {
        assert_eq!(
            FullCircleMovement::new(START, START, PIVOT, 1.0, false).unwrap_err(),
            MotionError::DegenerateChord
        );
        let on_line = Vec3::new(-3.0, 0.0, 0.0);
        assert_eq!(
            FullCircleMovement::new(START, END, on_line, 1.0, false).unwrap_err(),
            MotionError::CollinearPivot
        );
    }
}

// ── EllipticalArcMovement ─────────────────────────────────────────────────────

#[cfg(test)]
mod elliptical {
    use super::*;

    #[test]
    fn lands_on_end_when_flattened() {
        let mut m =
            EllipticalArcMovement::new(START, END, PIVOT, 120.0, 0.5, 1.0, false).unwrap();
        let mut acc = sum_steps(&mut m, &[0.4, 0.4, 0.3]);
        acc += m.advance(1.0).displacement();
        assert!(acc.within_margin(END - START, 1e-3), "got {acc}");
    }

    #[test]
    fn flatten_one_matches_circular_arc() {
        let mut ell =
            EllipticalArcMovement::new(START, END, PIVOT, 90.0, 1.0, 1.0, false).unwrap();
        let mut arc = CircularArcMovement::new(START, END, PIVOT, 90.0, 1.0, false).unwrap();
        for _ in 0..4 {
            let a = ell.advance(0.25).displacement();
            let b = arc.advance(0.25).displacement();
            assert!(a.within_margin(b, 1e-5), "ellipse {a} vs circle {b}");
        }
    }

    #[test]
    fn center_offset_is_scaled() {
        let mid = Vec3::midpoint(START, END);
        let ell = EllipticalArcMovement::new(START, END, PIVOT, 90.0, 0.5, 1.0, false).unwrap();
        let arc = CircularArcMovement::new(START, END, PIVOT, 90.0, 1.0, false).unwrap();
        let d_ell = ell.arc.center.distance(mid);
        let d_arc = arc.arc.center.distance(mid);
        assert!((d_ell - 0.5 * d_arc).abs() < 1e-5);
    }

    #[test]
    fn rejects_non_positive_ratio() {
        for bad in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            assert!(
                matches!(
                    EllipticalArcMovement::new(START, END, PIVOT, 90.0, bad, 1.0, false),
                    Err(MotionError::NonPositiveRatio(_))
                ),
                "flatten {bad} should be rejected"
            );
        }
    }
}

// ── Motion enum ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod motion_enum {
    use super::*;

    #[test]
    fn delegates_the_contract() {
        let mut m: Motion = LinearMovement::new(Vec3::X, 1.0, true).unwrap().into();
        assert!(m.is_stacked());
        assert_eq!(m.time_left(), 1.0);
        assert_eq!(m.advance(0.5), Step::Displace(Vec3::new(0.5, 0.0, 0.0)));
    }

    #[test]
    fn custom_variant_dispatches() {
        let mut m = Motion::Custom(Box::new(Pulse { left: 1.0, stacked: false }));
        assert!(!m.is_stacked());
        assert_eq!(m.advance(0.6), Step::Displace(Vec3::X));
        assert_eq!(m.advance(0.6), Step::Displace(Vec3::X));
        assert_eq!(m.advance(0.6), Step::Done);
    }

    #[test]
    fn kind_names() {
        let lin: Motion = LinearMovement::new(Vec3::X, 1.0, false).unwrap().into();
        let arc: Motion =
            CircularArcMovement::new(START, END, PIVOT, 90.0, 1.0, false).unwrap().into();
        assert_eq!(lin.kind_name(), "linear");
        assert_eq!(arc.kind_name(), "circular-arc");
        assert_eq!(
            Motion::Custom(Box::new(Pulse { left: 0.0, stacked: true })).kind_name(),
            "custom"
        );
    }

    #[test]
    fn debug_elides_custom_payload() {
        let m = Motion::Custom(Box::new(Pulse { left: 0.0, stacked: true }));
        assert_eq!(format!("{m:?}"), "Custom(..)");
    }
}
