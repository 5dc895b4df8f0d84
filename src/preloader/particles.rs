use rand::Rng;

const PEAK_OPACITY: f32 = 0.8;
const PEAK_SCALE: f32 = 1.5;

/// Decorative dot pulsing behind the preloader logo.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position in percent of the screen width
    pub x_pct: f32,
    /// Vertical position in percent of the screen height
    pub y_pct: f32,
    /// Length of one pulse in seconds
    pub duration_s: f32,
    /// Time before the first pulse in seconds
    pub delay_s: f32,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            x_pct: rng.random_range(0.0..100.0),
            y_pct: rng.random_range(0.0..100.0),
            duration_s: 2. + rng.random_range(0.0..3.0),
            delay_s: rng.random_range(0.0..2.0),
        }
    }

    /// Opacity and scale at `elapsed_s` seconds after mount. Both rise from 0 to
    /// their peak at mid-pulse and fall back to 0, repeating forever.
    pub fn pulse(&self, elapsed_s: f32) -> (f32, f32) {
        if elapsed_s < self.delay_s || self.duration_s <= 0. {
            return (0., 0.);
        }
        let t = ((elapsed_s - self.delay_s) % self.duration_s) / self.duration_s;
        let envelope = 1. - (2. * t - 1.).abs();
        (PEAK_OPACITY * envelope, PEAK_SCALE * envelope)
    }
}
