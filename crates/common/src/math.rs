use glam::Vec3;

/// Heading used by an agent that has never moved.
pub const DEFAULT_HEADING: Vec3 = Vec3::Z;

/// Angle in radians between two vectors, in `[0, π]`.
///
/// The cosine ratio is clamped to `[-1, 1]` before `acos`, so rounding drift
/// on (anti)parallel inputs never leaves the function's domain. A zero-length
/// input has no direction and yields an angle of 0.
pub fn angle_between(a: Vec3, b: Vec3) -> f32 {
    let denom = a.length() * b.length();
    if denom <= 0.0 || !denom.is_finite() {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}

/// Whether `offset` lies inside the cone around `forward` with the given half-angle.
pub fn within_cone(forward: Vec3, offset: Vec3, half_angle: f32) -> bool {
    angle_between(forward, offset) <= half_angle
}

/// Unit heading for `velocity`, or `previous` when the velocity has no direction.
pub fn heading_from(velocity: Vec3, previous: Vec3) -> Vec3 {
    if velocity == Vec3::ZERO {
        return previous;
    }
    velocity.try_normalize().unwrap_or(previous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn angle_of_perpendicular_vectors() {
        let a = angle_between(Vec3::X, Vec3::Z);
        assert!((a - FRAC_PI_2).abs() < 1e-6);
    }

    /// A direction whose f32 cosine against its own multiple lands outside [-1, 1].
    fn overshooting_pair() -> (Vec3, Vec3) {
        let a = Vec3::new(-0.399_302_07, -0.930_022_3, 0.337_398_3);
        (a, a * 3.0)
    }

    #[test]
    fn parallel_overshoot_is_clamped() {
        let (a, b) = overshooting_pair();
        assert!(a.dot(b) / (a.length() * b.length()) > 1.0);
        let angle = angle_between(a, b);
        assert!(angle.is_finite());
        assert!(angle < 1e-3);
    }

    #[test]
    fn antiparallel_overshoot_is_clamped() {
        let (a, b) = overshooting_pair();
        assert!(a.dot(-b) / (a.length() * b.length()) < -1.0);
        let angle = angle_between(a, -b);
        assert!(angle.is_finite());
        assert!((angle - PI).abs() < 1e-3);
    }

    #[test]
    fn zero_vector_has_zero_angle() {
        assert_eq!(angle_between(Vec3::ZERO, Vec3::X), 0.0);
        assert_eq!(angle_between(Vec3::X, Vec3::ZERO), 0.0);
    }

    #[test]
    fn cone_includes_boundary() {
        assert!(within_cone(Vec3::X, Vec3::Z, FRAC_PI_2 + 1e-6));
        assert!(!within_cone(Vec3::X, -Vec3::X, FRAC_PI_2));
    }

    #[test]
    fn heading_normalizes_velocity() {
        let h = heading_from(Vec3::new(3.0, 0.0, 4.0), DEFAULT_HEADING);
        assert!((h.length() - 1.0).abs() < 1e-6);
        assert!((h.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn heading_keeps_previous_for_zero_velocity() {
        let prev = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(heading_from(Vec3::ZERO, prev), prev);
    }
}
