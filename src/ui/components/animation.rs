//! Time-driven curves for the looping decorations. Everything here is a pure
//! function of elapsed seconds so the frame loop only has to feed `ctx` time.

const LAUNCHER_HALF_CYCLE: f64 = 1.0;
const LAUNCHER_LIFT: f32 = 20.0;

const DOT_HALF_CYCLE: f64 = 0.4;
const DOT_DELAY: f64 = 0.2;
pub(super) const DOT_MAX_SCALE: f32 = 1.3;

/// Smoothstep, close enough to an ease-in-out curve for decoration.
fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Goes 0 → 1 → 0 over two half cycles, forever.
fn ping_pong(elapsed: f64, half_cycle: f64) -> f64 {
    let phase = (elapsed / half_cycle).rem_euclid(2.0);
    if phase <= 1.0 { phase } else { 2.0 - phase }
}

/// Vertical offset of the launcher button in points; negative is up.
pub fn launcher_offset(elapsed: f64) -> f32 {
    -(LAUNCHER_LIFT * ease_in_out(ping_pong(elapsed, LAUNCHER_HALF_CYCLE)) as f32)
}

/// Scale of loading dot `index` (0..3). Later dots start later.
pub fn dot_scale(elapsed: f64, index: usize) -> f32 {
    let local = elapsed - DOT_DELAY * index as f64;
    if local <= 0.0 {
        return 1.0;
    }
    1.0 + (DOT_MAX_SCALE - 1.0) * ease_in_out(ping_pong(local, DOT_HALF_CYCLE)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn launcher_bobs_between_rest_and_lifted() {
        assert!(close(launcher_offset(0.0), 0.0));
        assert!(close(launcher_offset(1.0), -20.0));
        assert!(close(launcher_offset(2.0), 0.0));
        assert!(close(launcher_offset(0.5), -10.0));

        for step in 0..200 {
            let offset = launcher_offset(step as f64 * 0.037);
            assert!((-20.0..=0.0).contains(&offset));
        }
    }

    #[test]
    fn dots_pulse_within_bounds() {
        for index in 0..3 {
            for step in 0..200 {
                let scale = dot_scale(step as f64 * 0.013, index);
                assert!((1.0..=DOT_MAX_SCALE + 1e-4).contains(&scale));
            }
        }
        assert!(close(dot_scale(0.4, 0), 1.3));
        assert!(close(dot_scale(0.8, 0), 1.0));
    }

    #[test]
    fn later_dots_lag_behind() {
        assert!(close(dot_scale(0.1, 1), 1.0));
        assert!(close(dot_scale(0.3, 2), 1.0));
        assert!(close(dot_scale(0.6, 1), 1.3));
        assert!(close(dot_scale(0.8, 2), 1.3));
    }
}
