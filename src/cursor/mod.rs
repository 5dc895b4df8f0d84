pub mod history;

use serde::{Deserialize, Serialize};

pub use history::{PositionHistory, Sample};

/// Number of pointer samples the trail can look back on.
pub const HISTORY_CAPACITY: usize = 20;
const TRAIL_SEGMENTS: usize = 5;
const SPEED_NORMALIZATION: f32 = 10.;
const MIN_SPEED: f32 = 1.;
const MAX_SPEED: f32 = 3.;
const SIZE_STEP: f32 = 0.15;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TrailConfig {
    pub segments: usize,
    /// Pointer travel between two samples, in points, that counts as speed 1
    pub speed_normalization: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Scale and opacity lost per segment
    pub size_step: f32,
    /// Re-record the pointer on frames without movement so the trail
    /// collapses onto a resting pointer
    pub settle_on_idle: bool,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            segments: TRAIL_SEGMENTS,
            speed_normalization: SPEED_NORMALIZATION,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            size_step: SIZE_STEP,
            settle_on_idle: true,
        }
    }
}

/// What the element under the pointer (or one of its ancestors) is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Link,
    Button,
    /// Any element explicitly marked as acting like a button
    RoleButton,
    Input,
    TextArea,
    Select,
    /// Anything reachable with keyboard focus
    Focusable,
    Generic,
}

impl Role {
    pub fn is_interactive(&self) -> bool {
        !matches!(self, Role::Generic)
    }

    /// Role of a hovered egui widget, judged by the input it senses. Buttons
    /// take clicks and keyboard focus. Selectable text takes clicks without
    /// focus and scroll surfaces only take drags, both stay generic.
    pub fn from_sense(sense: egui::Sense) -> Self {
        if sense.senses_click() && sense.is_focusable() {
            Role::Button
        } else {
            Role::Generic
        }
    }

    /// Some widgets only announce themselves through the cursor icon they ask
    /// for, like hyperlinks and text fields.
    pub fn from_cursor_icon(icon: egui::CursorIcon) -> Self {
        match icon {
            egui::CursorIcon::PointingHand => Role::Link,
            egui::CursorIcon::Text | egui::CursorIcon::VerticalText => Role::Input,
            egui::CursorIcon::Grab | egui::CursorIcon::Grabbing => Role::RoleButton,
            _ => Role::Generic,
        }
    }
}

/// True when the hovered element or any of its ancestors is interactive.
/// `chain` starts at the hovered element and walks up to the root.
pub fn is_interactive(chain: impl IntoIterator<Item = Role>) -> bool {
    chain.into_iter().any(|role| role.is_interactive())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
    pub hovering: bool,
    pub clicking: bool,
}

impl CursorState {
    /// Blob radius for the current pointer state.
    pub fn radius(&self, base: f32) -> f32 {
        match (self.hovering, self.clicking) {
            (_, true) => base * 0.8,
            (true, false) => base * 1.6,
            (false, false) => base,
        }
    }
}

/// Where one trail segment is drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSegment {
    pub index: usize,
    pub history_index: usize,
    pub position: Sample,
    pub scale: f32,
    pub opacity: f32,
}

/// Cursor trail: segment `i` is drawn at a pointer sample that lags further
/// behind the live pointer the larger `i` is. Fast pointer movement makes the
/// lag larger in samples but the samples are also further apart, so the trail
/// keeps up instead of stretching.
#[derive(Debug, Clone)]
pub struct CursorTrail {
    config: TrailConfig,
    history: PositionHistory<HISTORY_CAPACITY>,
    pointer: Sample,
    moved_since_frame: bool,
    state: CursorState,
}

impl CursorTrail {
    /// A trail collapsed on `start`, usually the middle of the viewport.
    pub fn new(config: TrailConfig, start: Sample) -> Self {
        Self {
            config,
            history: PositionHistory::filled(start),
            pointer: start,
            moved_since_frame: false,
            state: CursorState::default(),
        }
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn history(&self) -> &PositionHistory<HISTORY_CAPACITY> {
        &self.history
    }

    pub fn pointer(&self) -> Sample {
        self.pointer
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.state.hovering = hovering;
    }

    pub fn set_clicking(&mut self, clicking: bool) {
        self.state.clicking = clicking;
    }

    pub fn on_pointer_move(&mut self, position: Sample) {
        self.pointer = position;
        self.history.push(position);
        self.moved_since_frame = true;
    }

    /// Frame callback: returns where every segment goes this frame.
    pub fn on_frame(&mut self) -> Vec<TrailSegment> {
        if !self.moved_since_frame && self.config.settle_on_idle {
            self.history.push(self.pointer);
        }
        self.moved_since_frame = false;
        self.segments()
    }

    /// Distance between the two most recent samples, normalized and clamped.
    pub fn speed_scalar(&self) -> f32 {
        let (Some(latest), Some(previous)) = (self.history.get(0), self.history.get(1)) else {
            return MIN_SPEED;
        };
        let normalization = if self.config.speed_normalization > 0. {
            self.config.speed_normalization
        } else {
            SPEED_NORMALIZATION
        };
        let min_speed = if self.config.min_speed.is_finite() {
            self.config.min_speed
        } else {
            MIN_SPEED
        };
        let max_speed = self.config.max_speed.max(min_speed);
        (latest.distance(&previous) / normalization).clamp(min_speed, max_speed)
    }

    pub fn segments(&self) -> Vec<TrailSegment> {
        let Some(oldest_index) = self.history.len().checked_sub(1) else {
            return Vec::new();
        };
        let speed = self.speed_scalar();

        (0..self.config.segments)
            .filter_map(|index| {
                let history_index = ((index as f32 * speed).floor() as usize).min(oldest_index);
                let size = (1. - index as f32 * self.config.size_step).max(0.);
                self.history.get(history_index).map(|position| TrailSegment {
                    index,
                    history_index,
                    position,
                    scale: size,
                    opacity: size,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CENTER: Sample = Sample::new(400., 300.);

    #[test]
    fn test_fast_motion_clamps_speed_and_skips_samples() {
        let mut trail = CursorTrail::new(TrailConfig::default(), CENTER);
        trail.on_pointer_move(Sample::new(0., 0.));
        trail.on_frame();
        trail.on_pointer_move(Sample::new(100., 0.));
        let segments = trail.on_frame();

        assert_eq!(trail.speed_scalar(), 3.);
        assert_eq!(segments.len(), TRAIL_SEGMENTS);
        assert_eq!(segments[0].history_index, 0);
        assert_eq!(segments[0].position, Sample::new(100., 0.));
        assert_eq!(segments[1].history_index, 3);
        assert_eq!(segments[1].position, CENTER);
        assert_eq!(segments[4].history_index, 12);
    }

    #[test]
    fn test_slow_motion_follows_consecutive_samples() {
        let mut trail = CursorTrail::new(TrailConfig::default(), CENTER);
        for step in 0..10 {
            trail.on_pointer_move(Sample::new(step as f32 * 2., 0.));
            trail.on_frame();
        }
        assert_eq!(trail.speed_scalar(), 1.);
        let indices: Vec<usize> = trail.segments().iter().map(|s| s.history_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_history_index_is_clamped_to_history_length() {
        let config = TrailConfig {
            segments: 30,
            ..Default::default()
        };
        let mut trail = CursorTrail::new(config, CENTER);
        trail.on_pointer_move(Sample::new(0., 0.));
        trail.on_pointer_move(Sample::new(500., 0.));
        let segments = trail.segments();
        assert_eq!(segments.len(), 30);
        assert!(segments.iter().all(|s| s.history_index < HISTORY_CAPACITY));
        assert_eq!(segments[29].history_index, HISTORY_CAPACITY - 1);
        assert_eq!(segments[29].scale, 0.);
    }

    #[test]
    fn test_resting_pointer_collapses_trail() {
        let mut trail = CursorTrail::new(TrailConfig::default(), CENTER);
        let rest = Sample::new(10., 20.);
        trail.on_pointer_move(rest);
        for _ in 0..HISTORY_CAPACITY {
            trail.on_frame();
        }
        assert!(trail.segments().iter().all(|s| s.position == rest));
    }

    #[test]
    fn test_trail_keeps_history_without_settling() {
        let config = TrailConfig {
            settle_on_idle: false,
            ..Default::default()
        };
        let mut trail = CursorTrail::new(config, CENTER);
        trail.on_pointer_move(Sample::new(10., 20.));
        for _ in 0..HISTORY_CAPACITY {
            trail.on_frame();
        }
        assert_eq!(trail.history().get(1), Some(CENTER));
    }

    #[test]
    fn test_segment_size_shrinks_by_index() {
        let trail = CursorTrail::new(TrailConfig::default(), CENTER);
        let scales: Vec<f32> = trail.segments().iter().map(|s| s.scale).collect();
        let expected = [1., 0.85, 0.7, 0.55, 0.4];
        for (scale, expected) in scales.iter().zip(expected) {
            assert!((scale - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn test_interactive_predicate_checks_ancestors() {
        assert!(!is_interactive([Role::Generic, Role::Generic]));
        assert!(is_interactive([Role::Generic, Role::Button]));
        assert!(is_interactive([Role::TextArea]));
        assert!(!is_interactive(std::iter::empty::<Role>()));
        assert_eq!(
            Role::from_cursor_icon(egui::CursorIcon::PointingHand),
            Role::Link
        );
        assert_eq!(
            Role::from_cursor_icon(egui::CursorIcon::Default),
            Role::Generic
        );
    }

    #[test]
    fn test_role_from_sense() {
        assert_eq!(Role::from_sense(egui::Sense::click()), Role::Button);
        assert_eq!(Role::from_sense(egui::Sense::click_and_drag()), Role::Button);
        assert_eq!(Role::from_sense(egui::Sense::drag()), Role::Generic);
        let mut selectable_text = egui::Sense::click_and_drag();
        selectable_text -= egui::Sense::FOCUSABLE;
        assert_eq!(Role::from_sense(selectable_text), Role::Generic);
        assert_eq!(Role::from_sense(egui::Sense::hover()), Role::Generic);
    }

    #[test]
    fn test_cursor_state_radius() {
        let mut trail = CursorTrail::new(TrailConfig::default(), CENTER);
        assert_eq!(trail.state().radius(10.), 10.);
        trail.set_hovering(true);
        assert_eq!(trail.state().radius(10.), 16.);
        trail.set_clicking(true);
        assert_eq!(trail.state().radius(10.), 8.);
        trail.set_clicking(false);
        trail.set_hovering(false);
        assert_eq!(trail.state(), CursorState::default());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_speed_and_indices_stay_in_bounds(
            moves in prop::collection::vec((-2000.0f32..2000.0, -2000.0f32..2000.0), 0..60),
        ) {
            let mut trail = CursorTrail::new(TrailConfig::default(), CENTER);
            for (x, y) in moves {
                trail.on_pointer_move(Sample::new(x, y));
                let segments = trail.on_frame();
                let speed = trail.speed_scalar();
                prop_assert!((MIN_SPEED..=MAX_SPEED).contains(&speed));
                prop_assert!(trail.history().len() <= HISTORY_CAPACITY);
                for segment in segments {
                    prop_assert!(segment.history_index < trail.history().len());
                    prop_assert!(segment.history_index <= segment.index * MAX_SPEED as usize);
                }
            }
        }
    }
}
