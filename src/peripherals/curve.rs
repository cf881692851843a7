//! Joystick shaping and differential power mixing.
//!
//! All values in this module are in "stick units": -127 to 127, the raw range
//! of a V5 controller axis. [`Differential`](super::drivetrain::Differential)
//! converts the mixed powers to volts.

/// Full-scale stick value.
pub const STICK_MAX: f64 = 127.0;

/// Exponential drive curve with a deadband and a minimum output.
///
/// Small stick movements are ignored entirely (the deadband), the first value
/// past the deadband jumps to `min_output` so the drivetrain overcomes
/// static friction, and the remaining travel follows an exponential so fine
/// adjustments are easier near center.
///
/// A `curve` gain of `1.0` makes the response linear past the deadband.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpoDriveCurve {
    /// Stick values with a magnitude at or below this are treated as zero.
    pub deadband:   f64,
    /// Output magnitude right past the deadband.
    pub min_output: f64,
    /// Exponential gain. Values slightly above 1.0 are typical.
    pub curve:      f64,
}

impl ExpoDriveCurve {
    pub const fn new(deadband: f64, min_output: f64, curve: f64) -> Self {
        Self {
            deadband,
            min_output,
            curve,
        }
    }

    /// Shapes a stick value. Full-scale input always maps to full-scale output.
    pub fn apply(&self, input: f64) -> f64 {
        if input.abs() <= self.deadband {
            return 0.0;
        }
        let sign = input.signum();
        let g = input.abs() - self.deadband;
        let g_max = STICK_MAX - self.deadband;
        let i = self.curve.powf(g - STICK_MAX) * g * sign;
        let i_max = self.curve.powf(g_max - STICK_MAX) * g_max;
        (STICK_MAX - self.min_output) / STICK_MAX * i * STICK_MAX / i_max + self.min_output * sign
    }
}

impl Default for ExpoDriveCurve {
    fn default() -> Self { Self::new(3.0, 10.0, 1.019) }
}

/// How much of the throttle is given up (versus turn) when arcade
/// inputs saturate. 0.5 splits the reduction evenly.
pub const DESATURATE_BIAS: f64 = 0.5;

/// Arcade mixing: throttle plus/minus turn.
///
/// When `|throttle| + |turn|` exceeds full scale both inputs are reduced,
/// weighted by `bias`, so the robot still turns at full throttle.
///
/// Returns `(left, right)` powers.
pub fn arcade_mix(
    throttle: f64,
    turn: f64,
    throttle_curve: &ExpoDriveCurve,
    steer_curve: &ExpoDriveCurve,
    bias: f64,
) -> (f64, f64) {
    let mut throttle = throttle_curve.apply(throttle);
    let mut turn = steer_curve.apply(turn);

    if throttle.abs() + turn.abs() > STICK_MAX {
        let old_throttle = throttle;
        throttle *= 1.0 - bias * (turn / STICK_MAX).abs();
        turn *= 1.0 - (1.0 - bias) * (old_throttle / STICK_MAX).abs();
    }

    (throttle + turn, throttle - turn)
}

/// Curvature mixing: the turn input sets the radius of the arc rather than a
/// rate, so steering feels the same at any speed.
///
/// With the throttle at exactly zero there is no arc to follow and the robot
/// turns in place through [`arcade_mix`].
///
/// Returns `(left, right)` powers.
pub fn curvature_mix(
    throttle: f64,
    turn: f64,
    throttle_curve: &ExpoDriveCurve,
    steer_curve: &ExpoDriveCurve,
) -> (f64, f64) {
    if throttle == 0.0 {
        return arcade_mix(throttle, turn, throttle_curve, steer_curve, DESATURATE_BIAS);
    }

    let throttle = throttle_curve.apply(throttle);
    let turn = steer_curve.apply(turn);

    let mut left = throttle + (throttle.abs() * turn) / STICK_MAX;
    let mut right = throttle - (throttle.abs() * turn) / STICK_MAX;

    let ratio = left.abs().max(right.abs()) / STICK_MAX;
    if ratio > 1.0 {
        left /= ratio;
        right /= ratio;
    }

    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < TOLERANCE }

    #[test]
    fn deadband_is_zero() {
        let curve = ExpoDriveCurve::default();
        assert_eq!(curve.apply(0.0), 0.0);
        assert_eq!(curve.apply(3.0), 0.0);
        assert_eq!(curve.apply(-3.0), 0.0);
    }

    #[test]
    fn full_scale_is_preserved() {
        let curve = ExpoDriveCurve::default();
        assert!(close(curve.apply(127.0), 127.0));
        assert!(close(curve.apply(-127.0), -127.0));
    }

    #[test]
    fn past_deadband_starts_at_min_output() {
        let curve = ExpoDriveCurve::default();
        let out = curve.apply(4.0);
        assert!(out > 10.0 && out < 11.0, "got {}", out);
    }

    #[test]
    fn curve_is_odd() {
        let curve = ExpoDriveCurve::default();
        for x in [5.0, 20.0, 64.0, 100.0] {
            assert!(close(curve.apply(-x), -curve.apply(x)));
        }
    }

    #[test]
    fn linear_curve_without_deadband_is_identity() {
        let curve = ExpoDriveCurve::new(0.0, 0.0, 1.0);
        for x in [-127.0, -50.0, 1.0, 64.0, 127.0] {
            assert!(close(curve.apply(x), x));
        }
    }

    #[test]
    fn curvature_straight() {
        let c = ExpoDriveCurve::default();
        let (left, right) = curvature_mix(127.0, 0.0, &c, &c);
        assert!(close(left, 127.0));
        assert!(close(right, 127.0));
    }

    #[test]
    fn curvature_desaturates() {
        let c = ExpoDriveCurve::default();
        let (left, right) = curvature_mix(127.0, 127.0, &c, &c);
        assert!(close(left, 127.0));
        assert!(close(right, 0.0));

        let (left, right) = curvature_mix(-127.0, -127.0, &c, &c);
        assert!(close(left, -127.0));
        assert!(close(right, 0.0));
    }

    #[test]
    fn curvature_turn_scales_with_throttle() {
        let c = ExpoDriveCurve::new(0.0, 0.0, 1.0);
        let (left, right) = curvature_mix(50.0, 127.0, &c, &c);
        assert!(close(left, 100.0));
        assert!(close(right, 0.0));
    }

    #[test]
    fn curvature_zero_throttle_turns_in_place() {
        let c = ExpoDriveCurve::default();
        let (left, right) = curvature_mix(0.0, 127.0, &c, &c);
        assert!(close(left, 127.0));
        assert!(close(right, -127.0));
    }

    #[test]
    fn curvature_throttle_in_deadband_holds_still() {
        let c = ExpoDriveCurve::default();
        let (left, right) = curvature_mix(2.0, 127.0, &c, &c);
        assert_eq!((left, right), (0.0, 0.0));
    }

    #[test]
    fn arcade_desaturates_evenly() {
        let c = ExpoDriveCurve::default();
        let (left, right) = arcade_mix(127.0, 127.0, &c, &c, DESATURATE_BIAS);
        assert!(close(left, 127.0));
        assert!(close(right, 0.0));
    }

    #[test]
    fn arcade_unsaturated_passes_through() {
        let c = ExpoDriveCurve::new(0.0, 0.0, 1.0);
        let (left, right) = arcade_mix(40.0, 20.0, &c, &c, DESATURATE_BIAS);
        assert!(close(left, 60.0));
        assert!(close(right, 20.0));
    }
}
