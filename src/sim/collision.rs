//! Collision and containment constraints
//!
//! With a Verlet integrator a constraint is solved by simply moving the
//! positions until it holds. Overlapping balls are pushed apart as if joined
//! by a spring of infinite stiffness; walls clamp instantly.

use glam::Vec2;

/// Do two balls overlap (touching counts)?
#[inline]
pub fn overlaps(a: Vec2, b: Vec2, diameter_sq: f32) -> bool {
    a.distance_squared(b) <= diameter_sq
}

/// Push two overlapping balls apart so their centers end up `diameter` apart,
/// each one moving half of the missing distance.
///
/// `nudge` is added to the separation first so that two balls sitting exactly
/// on top of each other still get a direction. Returns `false` and leaves both
/// balls untouched when the nudged separation is still degenerate.
pub fn separate(a: &mut Vec2, b: &mut Vec2, diameter: f32, nudge: Vec2) -> bool {
    let d = *b - *a + nudge;
    let dist = d.length();
    if !(dist > 0.0 && dist.is_finite()) {
        return false;
    }

    let c = 0.5 * (diameter - dist) / dist;
    *a -= d * c;
    *b += d * c;
    true
}

/// Hard wall containment: clamp to `[-bounds, +bounds]` on each axis
#[inline]
pub fn clamp_to_bounds(pos: Vec2, bounds: Vec2) -> Vec2 {
    pos.clamp(-bounds, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    const D: f32 = 0.008;

    #[test]
    fn test_overlap_threshold_inclusive() {
        let a = Vec2::ZERO;
        assert!(overlaps(a, Vec2::new(0.004, 0.0), D * D));
        assert!(overlaps(a, Vec2::new(0.0, 0.0079), D * D));
        assert!(!overlaps(a, Vec2::new(0.0081, 0.0), D * D));
    }

    #[test]
    fn test_separate_restores_diameter() {
        let mut a = Vec2::ZERO;
        let mut b = Vec2::new(0.002, 0.0);
        assert!(separate(&mut a, &mut b, D, Vec2::ZERO));
        assert!((a.distance(b) - D).abs() < 1e-6);
        // Symmetric split
        assert!((a.x + 0.003).abs() < 1e-6);
        assert!((b.x - 0.005).abs() < 1e-6);
    }

    #[test]
    fn test_separate_coincident_with_nudge() {
        let mut a = Vec2::new(0.01, 0.01);
        let mut b = a;
        let nudge = Vec2::new(0.00003, -0.00002);
        assert!(separate(&mut a, &mut b, D, nudge));
        // The nudge steers the push but is not itself applied
        assert!((a.distance(b) - (D - nudge.length())).abs() < 1e-6);
        assert!(a.is_finite() && b.is_finite());
    }

    #[test]
    fn test_separate_degenerate_is_skipped() {
        let mut a = Vec2::new(0.01, 0.01);
        let mut b = a;
        assert!(!separate(&mut a, &mut b, D, Vec2::ZERO));
        assert_eq!(a, Vec2::new(0.01, 0.01));
        assert_eq!(b, a);
    }

    #[test]
    fn test_clamp_to_bounds() {
        let bounds = Vec2::new(0.1, 0.15);
        assert_eq!(clamp_to_bounds(Vec2::new(0.2, -0.3), bounds), Vec2::new(0.1, -0.15));
        assert_eq!(clamp_to_bounds(Vec2::new(-0.05, 0.05), bounds), Vec2::new(-0.05, 0.05));
    }
}
