// Timers driving the preloader and the cursor frame loop.
//
// The UI is immediate mode: nothing runs unless a frame is requested. These
// types keep track of when work is due and ask the scheduler for the next
// frame, and they stop doing so as soon as they are cancelled or dropped.

use std::time::{Duration, Instant};

/// Something that can be asked to run another frame.
pub trait FrameScheduler {
    fn request_frame(&self);
    fn request_frame_after(&self, delay: Duration);
}

impl FrameScheduler for egui::Context {
    fn request_frame(&self) {
        self.request_repaint();
    }

    fn request_frame_after(&self, delay: Duration) {
        self.request_repaint_after(delay);
    }
}

/// Fixed-interval timer. Missed periods are reported as multiple due ticks so
/// a slow frame does not slow the timer down.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    next_due: Option<Instant>,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            // a zero period would never catch up
            period: period.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of ticks that elapsed up to `now`. Advances the timer past them.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(next_due) = self.next_due else {
            return 0;
        };
        if now < next_due {
            return 0;
        }
        let period_ns = self.period.as_nanos();
        let elapsed = (now - next_due).as_nanos() / period_ns + 1;
        // the timer skips ahead by every elapsed period, the count saturates
        let skipped = u32::try_from(elapsed).unwrap_or(u32::MAX);
        self.next_due = Some(next_due + self.period.saturating_mul(skipped));
        skipped
    }

    /// Time left until the next tick, `None` when cancelled.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|next_due| next_due.saturating_duration_since(now))
    }
}

/// One-shot timer that fires at most once.
#[derive(Debug, Clone, Default)]
pub struct Deadline {
    at: Option<Instant>,
    fired: bool,
}

impl Deadline {
    pub fn schedule(&mut self, at: Instant) {
        if !self.fired {
            self.at = Some(at);
        }
    }

    pub fn at(&self) -> Option<Instant> {
        self.at
    }

    pub fn cancel(&mut self) {
        self.at = None;
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns `true` exactly once, on the first call at or after the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.at {
            Some(at) if !self.fired && now >= at => {
                self.fired = true;
                self.at = None;
                true
            }
            _ => false,
        }
    }
}

/// Per-frame task that re-arms itself after every frame until cancelled.
/// Dropping the loop cancels it.
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    active: bool,
    frames: u64,
}

impl<S: FrameScheduler> FrameLoop<S> {
    /// Starts the loop and requests the first frame.
    pub fn start(scheduler: S) -> Self {
        scheduler.request_frame();
        Self {
            scheduler,
            active: true,
            frames: 0,
        }
    }

    /// Runs one frame of work and re-arms for the next one.
    pub fn on_frame(&mut self, work: impl FnOnce()) {
        if !self.active {
            return;
        }
        work();
        self.frames += 1;
        self.scheduler.request_frame();
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    pub(crate) struct CountingScheduler {
        pub(crate) requests: Rc<Cell<u32>>,
    }

    impl FrameScheduler for CountingScheduler {
        fn request_frame(&self) {
            self.requests.set(self.requests.get() + 1);
        }

        fn request_frame_after(&self, _delay: Duration) {
            self.requests.set(self.requests.get() + 1);
        }
    }

    #[test]
    fn test_interval_timer_catches_up_missed_ticks() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::new(Duration::from_millis(80));
        assert_eq!(timer.due_ticks(t0 + Duration::from_secs(1)), 0);

        timer.start(t0);
        assert_eq!(timer.due_ticks(t0 + Duration::from_millis(79)), 0);
        assert_eq!(timer.due_ticks(t0 + Duration::from_millis(80)), 1);
        assert_eq!(timer.due_ticks(t0 + Duration::from_millis(400)), 4);
        assert_eq!(
            timer.until_next(t0 + Duration::from_millis(400)),
            Some(Duration::from_millis(80))
        );

        timer.cancel();
        assert!(!timer.is_active());
        assert_eq!(timer.due_ticks(t0 + Duration::from_secs(10)), 0);
        assert_eq!(timer.until_next(t0), None);
    }

    #[test]
    fn test_interval_timer_long_stall_counts_in_one_step() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::new(Duration::ZERO);
        assert_eq!(timer.period(), Duration::from_millis(1));
        timer.start(t0);

        // a day without frames at a 1ms period
        let stalled = t0 + Duration::from_secs(24 * 60 * 60);
        assert_eq!(timer.due_ticks(stalled), 24 * 60 * 60 * 1000);
        assert_eq!(timer.due_ticks(stalled), 0);
        assert_eq!(timer.until_next(stalled), Some(Duration::from_millis(1)));
        assert_eq!(timer.due_ticks(stalled + Duration::from_micros(2500)), 2);
    }

    #[test]
    fn test_deadline_fires_once() {
        let t0 = Instant::now();
        let mut deadline = Deadline::default();
        assert!(!deadline.fire(t0));

        deadline.schedule(t0 + Duration::from_millis(100));
        assert!(!deadline.fire(t0 + Duration::from_millis(99)));
        assert!(deadline.fire(t0 + Duration::from_millis(100)));
        assert!(!deadline.fire(t0 + Duration::from_millis(200)));

        // rescheduling after firing is ignored
        deadline.schedule(t0 + Duration::from_millis(300));
        assert!(!deadline.fire(t0 + Duration::from_millis(400)));
        assert!(deadline.has_fired());
    }

    #[test]
    fn test_frame_loop_rearms_until_cancelled() {
        let scheduler = CountingScheduler::default();
        let requests = scheduler.requests.clone();
        let mut frame_loop = FrameLoop::start(scheduler);
        assert_eq!(requests.get(), 1);

        let mut work_done = 0;
        frame_loop.on_frame(|| work_done += 1);
        frame_loop.on_frame(|| work_done += 1);
        assert_eq!(work_done, 2);
        assert_eq!(requests.get(), 3);

        frame_loop.cancel();
        frame_loop.on_frame(|| work_done += 1);
        assert_eq!(work_done, 2);
        assert_eq!(requests.get(), 3);
        assert_eq!(frame_loop.frames(), 2);
    }
}
