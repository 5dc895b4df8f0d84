// Integration tests for the loading screen and the cursor trail as the root
// page drives them: one call per rendered frame, timestamps supplied by the
// caller.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use rand::{SeedableRng, rngs::StdRng};
use vitrine::cursor::HISTORY_CAPACITY;
use vitrine::{
    CursorTrail, FrameLoop, FrameScheduler, LoadPhase, Preloader, PreloaderConfig,
    PreloaderState, Sample, TrailConfig,
};

const FRAME: Duration = Duration::from_millis(16);

/// Runs frames until the preloader hides or `limit` passes. Returns when it hid.
fn run_frames(preloader: &mut Preloader, start: Instant, limit: Duration) -> Option<Duration> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut elapsed = Duration::ZERO;
    while elapsed <= limit {
        elapsed += FRAME;
        preloader.advance(start + elapsed, &mut rng);
        if preloader.is_hidden() {
            return Some(elapsed);
        }
    }
    None
}

#[test]
fn test_default_preloader_completes_once() {
    let start = Instant::now();
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let mut preloader = Preloader::new(PreloaderConfig::default(), start)
        .with_completion(move || counter.set(counter.get() + 1));

    let hidden_after = run_frames(&mut preloader, start, Duration::from_secs(10))
        .expect("preloader never hid");

    // 3 to 5 percent every 80ms needs at least 20 ticks
    assert!(hidden_after >= Duration::from_millis(1600));
    assert!(hidden_after <= Duration::from_millis(34 * 80 + 100) + FRAME);
    assert_eq!(preloader.progress(), 100.);
    assert_eq!(preloader.phase(), LoadPhase::Welcome);
    assert_eq!(calls.get(), 1);

    // more frames after hiding never call back again
    run_frames(&mut preloader, start + hidden_after, Duration::from_secs(1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_fast_progress_waits_for_minimum_display() {
    let config = PreloaderConfig {
        increment_min: 20.,
        increment_max: 20.,
        ..Default::default()
    };
    let start = Instant::now();
    let (done_tx, done_rx) = mpsc::channel();
    let mut preloader = Preloader::new(config, start).with_completion(move || {
        done_tx.send(()).unwrap();
    });

    let mut rng = StdRng::seed_from_u64(1);
    preloader.advance(start + Duration::from_millis(400), &mut rng);
    assert_eq!(preloader.progress(), 100.);
    assert_eq!(preloader.state(), PreloaderState::Completing);
    assert_eq!(
        preloader.hide_deadline(),
        Some(start + Duration::from_millis(1000))
    );
    assert!(done_rx.try_recv().is_err());

    let hidden_after = run_frames(&mut preloader, start, Duration::from_secs(2)).unwrap();
    assert!(hidden_after >= Duration::from_millis(1000));
    assert!(hidden_after < Duration::from_millis(1000) + FRAME);
    assert!(done_rx.try_recv().is_ok());
    assert!(done_rx.try_recv().is_err());
}

#[test]
fn test_unmounting_before_completion_never_signals() {
    let start = Instant::now();
    let (done_tx, done_rx) = mpsc::channel::<()>();
    let mut preloader = Preloader::new(PreloaderConfig::default(), start).with_completion(move || {
        done_tx.send(()).unwrap();
    });
    assert!(run_frames(&mut preloader, start, Duration::from_millis(500)).is_none());
    drop(preloader);

    // the sender went away together with the callback
    assert_eq!(done_rx.recv(), Err(mpsc::RecvError));
}

#[derive(Clone, Default)]
struct FrameCounter {
    requested: Rc<Cell<u32>>,
}

impl FrameScheduler for FrameCounter {
    fn request_frame(&self) {
        self.requested.set(self.requested.get() + 1);
    }

    fn request_frame_after(&self, _delay: Duration) {
        self.request_frame();
    }
}

#[test]
fn test_trail_follows_pointer_through_frame_loop() {
    let scheduler = FrameCounter::default();
    let mut frame_loop = FrameLoop::start(scheduler.clone());
    let mut trail = CursorTrail::new(TrailConfig::default(), Sample::new(640., 400.));

    let mut segments = Vec::new();
    for step in 0..HISTORY_CAPACITY {
        trail.on_pointer_move(Sample::new(step as f32 * 50., 0.));
        frame_loop.on_frame(|| segments = trail.on_frame());
    }
    assert_eq!(frame_loop.frames(), HISTORY_CAPACITY as u64);
    assert_eq!(scheduler.requested.get(), HISTORY_CAPACITY as u32 + 1);

    // 50 points per sample is fast: every segment skips three samples
    let indices: Vec<usize> = segments.iter().map(|s| s.history_index).collect();
    assert_eq!(indices, vec![0, 3, 6, 9, 12]);
    assert_eq!(segments[0].position, Sample::new(950., 0.));
    assert_eq!(segments[1].position, Sample::new(800., 0.));
    assert!(segments.windows(2).all(|w| w[0].opacity > w[1].opacity));

    drop(frame_loop);
    assert_eq!(scheduler.requested.get(), HISTORY_CAPACITY as u32 + 1);
}
