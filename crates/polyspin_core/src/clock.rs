//! Animation clock: per-axis angle accumulation and the rainbow repaint cadence
//!
//! The host drives [`AnimationClock::tick`] at a fixed interval
//! ([`TICK_INTERVAL`], 10 ms). Each tick advances every axis angle by
//! `speed / 20` degrees while animating, and decides whether the rainbow
//! palette repaints this tick.

use std::time::Duration;

use rand::Rng;

use crate::color::ColorState;

/// Fixed interval between ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Slider-units-to-degrees divisor: speed 20 advances 1 degree per tick
pub const SPEED_DIVISOR: f32 = 20.0;

/// A rotation axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// What one tick did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Angles moved; the frame on screen is stale
    pub angles_advanced: bool,
    /// A fresh rainbow palette was generated
    pub palette_repainted: bool,
}

/// Fixed-tick rotation and repaint state machine
///
/// Two independent boolean axes (animating / rainbow mode) give four
/// combinations; none is terminal. A paused clock never mutates angles.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    animating: bool,
    /// Slider domain [0, 100], degrees-per-tick-unit
    speeds: [i32; 3],
    /// Accumulated degrees, reduced modulo 360
    angles: [f32; 3],
    /// Ticks since the last rainbow repaint; starts at 1 and resets to 1
    rainbow_ticks: u32,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationClock {
    pub fn new() -> Self {
        Self {
            animating: true,
            speeds: [0; 3],
            angles: [0.0; 3],
            rainbow_ticks: 1,
        }
    }

    pub fn set_animating(&mut self, on: bool) {
        self.animating = on;
    }

    pub fn toggle_animating(&mut self) -> bool {
        self.animating = !self.animating;
        self.animating
    }

    #[inline]
    pub fn animating(&self) -> bool {
        self.animating
    }

    pub fn set_speed(&mut self, axis: Axis, speed: i32) {
        self.speeds[axis.index()] = speed;
    }

    #[inline]
    pub fn speed(&self, axis: Axis) -> i32 {
        self.speeds[axis.index()]
    }

    #[inline]
    pub fn angle(&self, axis: Axis) -> f32 {
        self.angles[axis.index()]
    }

    /// Accumulated angles in degrees, X/Y/Z order
    #[inline]
    pub fn angles(&self) -> [f32; 3] {
        self.angles
    }

    #[inline]
    pub fn rainbow_ticks(&self) -> u32 {
        self.rainbow_ticks
    }

    /// Advance one fixed-interval step
    ///
    /// While animating, each axis accumulates `speed / 20` degrees as a
    /// float (no truncation) and reduces modulo 360. In rainbow mode the
    /// tick counter decides whether `colors` repaints its palette this
    /// tick: speed 50 repaints every tick, speed 1 every 50th. The speed
    /// is clamped to [1, 50] here — the only consequence of an
    /// out-of-range value would be a zero or negative modulus, so the
    /// clamp intentionally swallows it instead of surfacing an error.
    pub fn tick(&mut self, colors: &mut ColorState, rng: &mut impl Rng) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if self.animating {
            for (angle, &speed) in self.angles.iter_mut().zip(&self.speeds) {
                *angle = (*angle + speed as f32 / SPEED_DIVISOR).rem_euclid(360.0);
            }
            outcome.angles_advanced = true;
        }

        if colors.rainbow_mode() {
            let interval = (51 - colors.rainbow_speed().clamp(1, 50)) as u32;
            if self.rainbow_ticks % interval == 0 {
                colors.regenerate_palette(rng);
                self.rainbow_ticks = 1;
                outcome.palette_repainted = true;
            } else {
                self.rainbow_ticks += 1;
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn fixture() -> (AnimationClock, ColorState, SmallRng) {
        let mut rng = SmallRng::seed_from_u64(1);
        let colors = ColorState::new(&mut rng);
        (AnimationClock::new(), colors, rng)
    }

    #[test]
    fn test_speed_twenty_is_one_degree_per_tick() {
        let (mut clock, mut colors, mut rng) = fixture();
        clock.set_speed(Axis::X, 20);
        let outcome = clock.tick(&mut colors, &mut rng);
        assert!(outcome.angles_advanced);
        assert_eq!(clock.angle(Axis::X), 1.0);
        assert_eq!(clock.angle(Axis::Y), 0.0);
        assert_eq!(clock.angle(Axis::Z), 0.0);
    }

    #[test]
    fn test_zero_speed_never_moves() {
        let (mut clock, mut colors, mut rng) = fixture();
        clock.set_animating(true);
        for _ in 0..1000 {
            clock.tick(&mut colors, &mut rng);
        }
        assert_eq!(clock.angles(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_paused_clock_freezes_angles() {
        let (mut clock, mut colors, mut rng) = fixture();
        clock.set_speed(Axis::Y, 80);
        clock.set_animating(false);
        for _ in 0..100 {
            let outcome = clock.tick(&mut colors, &mut rng);
            assert!(!outcome.angles_advanced);
        }
        assert_eq!(clock.angle(Axis::Y), 0.0);
    }

    #[test]
    fn test_accumulation_matches_single_effective_delta() {
        // N ticks of speed S equals N * (S / 20) mod 360
        let (mut clock, mut colors, mut rng) = fixture();
        let speed = 73;
        clock.set_speed(Axis::Z, speed);
        let n = 250;
        for _ in 0..n {
            clock.tick(&mut colors, &mut rng);
        }
        let expected = (n as f32 * (speed as f32 / SPEED_DIVISOR)).rem_euclid(360.0);
        assert!(
            (clock.angle(Axis::Z) - expected).abs() < 1e-2,
            "{} vs {}",
            clock.angle(Axis::Z),
            expected
        );
    }

    #[test]
    fn test_angles_wrap_mod_360() {
        let (mut clock, mut colors, mut rng) = fixture();
        clock.set_speed(Axis::X, 100); // 5 degrees per tick
        for _ in 0..73 {
            clock.tick(&mut colors, &mut rng);
        }
        // 73 * 5 = 365 -> 5
        assert!((clock.angle(Axis::X) - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_fractional_accumulation() {
        // Speed 1 advances 0.05 degrees per tick; no integer truncation
        let (mut clock, mut colors, mut rng) = fixture();
        clock.set_speed(Axis::X, 1);
        clock.tick(&mut colors, &mut rng);
        assert!((clock.angle(Axis::X) - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_rainbow_off_leaves_counter_alone() {
        let (mut clock, mut colors, mut rng) = fixture();
        for _ in 0..10 {
            clock.tick(&mut colors, &mut rng);
        }
        assert_eq!(clock.rainbow_ticks(), 1);
    }

    #[test]
    fn test_speed_50_repaints_every_tick() {
        let (mut clock, mut colors, mut rng) = fixture();
        colors.set_rainbow_mode(true);
        colors.set_rainbow_speed(50);
        for _ in 0..5 {
            let outcome = clock.tick(&mut colors, &mut rng);
            assert!(outcome.palette_repainted);
            assert_eq!(clock.rainbow_ticks(), 1);
        }
    }

    #[test]
    fn test_speed_1_repaints_every_50th_tick() {
        let (mut clock, mut colors, mut rng) = fixture();
        colors.set_rainbow_mode(true);
        colors.set_rainbow_speed(1);
        let mut repaints = 0;
        for tick in 1..=150 {
            let outcome = clock.tick(&mut colors, &mut rng);
            if outcome.palette_repainted {
                repaints += 1;
                assert_eq!(tick % 50, 0, "repaint on tick {}", tick);
            }
        }
        assert_eq!(repaints, 3);
    }

    #[test]
    fn test_single_tick_at_speed_50() {
        let (mut clock, mut colors, mut rng) = fixture();
        colors.set_rainbow_mode(true);
        colors.set_rainbow_speed(50);
        let before = colors.palette().to_vec();
        let outcome = clock.tick(&mut colors, &mut rng);
        assert!(outcome.palette_repainted);
        assert_eq!(clock.rainbow_ticks(), 1);
        assert_ne!(colors.palette(), &before[..]);
    }

    #[test]
    fn test_out_of_range_rainbow_speed_clamped() {
        let (mut clock, mut colors, mut rng) = fixture();
        colors.set_rainbow_mode(true);
        colors.set_rainbow_speed(0); // would be a zero modulus unclamped
        for _ in 0..60 {
            clock.tick(&mut colors, &mut rng);
        }
        colors.set_rainbow_speed(999); // clamps to 50: repaint every tick
        let outcome = clock.tick(&mut colors, &mut rng);
        assert!(outcome.palette_repainted);
    }

    #[test]
    fn test_toggle_animating() {
        let (mut clock, _, _) = fixture();
        assert!(clock.animating());
        assert!(!clock.toggle_animating());
        assert!(clock.toggle_animating());
    }
}
