//! # Interpolation
//!
//! Small interpolation helpers shared by terrain shaping and rendering.

/// Linear interpolation between `a` and `b` by `t` in [0, 1].
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite smoothstep of `t` clamped to [0, 1].
pub fn smooth_step(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Remaps `value` from `[from_min, from_max]` into `[to_min, to_max]`.
/// A degenerate input range maps everything to `to_min`.
pub fn remap(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    let span = from_max - from_min;
    if span == 0.0 {
        return to_min;
    }
    let t = (value - from_min) / span;
    lerp(to_min, to_max, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn smooth_step_clamps_and_eases() {
        assert_eq!(smooth_step(-1.0), 0.0);
        assert_eq!(smooth_step(2.0), 1.0);
        assert_eq!(smooth_step(0.5), 0.5);
        assert!(smooth_step(0.25) < 0.25);
        assert!(smooth_step(0.75) > 0.75);
    }

    #[test]
    fn remap_handles_degenerate_range() {
        assert_eq!(remap(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
        assert_eq!(remap(5.0, 3.0, 3.0, -1.0, 1.0), -1.0);
    }
}
