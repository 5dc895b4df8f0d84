use std::{
    sync::mpsc::{self, Receiver},
    time::{Duration, Instant},
};

use log::{debug, info};
use rand::Rng;

use vitrine::{Deadline, Preloader, PreloaderConfig};

use super::Section;

// the main view fades in before the scroll target is looked up
pub(crate) const SCROLL_DELAY: Duration = Duration::from_millis(300);

pub(crate) enum PageEvent {
    PreloaderDone,
}

pub(crate) enum Page {
    Loading(Preloader),
    Main { shown_at: Instant },
}

/// Which page is mounted and where the main page should scroll to.
///
/// The preloader reports completion through a channel. The swap to the main
/// page happens in the frame the event arrives, and the start section is
/// scrolled to once, `SCROLL_DELAY` after the main page appeared.
pub(crate) struct PageFlow {
    page: Page,
    events: Receiver<PageEvent>,
    start_section: Option<Section>,
    scroll_deadline: Deadline,
    scroll_request: Option<Section>,
}

impl PageFlow {
    pub(crate) fn mount<R: Rng>(
        config: &PreloaderConfig,
        start_section: Option<Section>,
        skip_preloader: bool,
        now: Instant,
        rng: &mut R,
    ) -> Self {
        let (page_tx, page_rx) = mpsc::channel();
        let mut scroll_deadline = Deadline::default();
        let page = if skip_preloader {
            if start_section.is_some() {
                scroll_deadline.schedule(now + SCROLL_DELAY);
            }
            Page::Main { shown_at: now }
        } else {
            let preloader = Preloader::new(config.clone(), now)
                .with_particles(rng)
                .with_completion(move || {
                    // the receiver only goes away together with the page flow
                    let _ = page_tx.send(PageEvent::PreloaderDone);
                });
            Page::Loading(preloader)
        };

        Self {
            page,
            events: page_rx,
            start_section,
            scroll_deadline,
            scroll_request: None,
        }
    }

    pub(crate) fn page(&self) -> &Page {
        &self.page
    }

    pub(crate) fn shown_at(&self) -> Option<Instant> {
        match self.page {
            Page::Main { shown_at } => Some(shown_at),
            Page::Loading(_) => None,
        }
    }

    fn handle_events(&mut self, now: Instant) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                PageEvent::PreloaderDone => {
                    info!("Preloader finished, showing portfolio");
                    // dropping the preloader stops its timers
                    self.page = Page::Main { shown_at: now };
                    if let Some(section) = self.start_section {
                        debug!("Scrolling to #{} once the page is shown", section.id());
                        self.scroll_deadline.schedule(now + SCROLL_DELAY);
                    }
                }
            }
        }
    }

    /// Runs one frame: advances the preloader, swaps pages on completion and
    /// fires the pending scroll. Returns when the next frame is needed.
    pub(crate) fn advance<R: Rng>(&mut self, now: Instant, rng: &mut R) -> Option<Duration> {
        self.handle_events(now);
        let mut wait = None;
        if let Page::Loading(preloader) = &mut self.page {
            wait = preloader.advance(now, rng);
        }
        // completion is delivered through the channel within the same frame
        self.handle_events(now);

        if self.scroll_deadline.fire(now) {
            self.scroll_request = self.start_section;
        }
        let scroll_wait = self
            .scroll_deadline
            .at()
            .map(|at| at.saturating_duration_since(now));
        wait.into_iter().chain(scroll_wait).min()
    }

    pub(crate) fn request_scroll(&mut self, section: Section) {
        self.scroll_request = Some(section);
    }

    pub(crate) fn scroll_target(&self) -> Option<Section> {
        self.scroll_request
    }

    pub(crate) fn scrolled(&mut self) {
        self.scroll_request = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const FRAME: Duration = Duration::from_millis(16);

    fn fast_preloader() -> PreloaderConfig {
        PreloaderConfig {
            increment_min: 20.,
            increment_max: 20.,
            ..Default::default()
        }
    }

    #[test]
    fn test_main_page_replaces_preloader_in_completion_frame() {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(9);
        let mut flow = PageFlow::mount(&fast_preloader(), None, false, start, &mut rng);
        assert!(matches!(flow.page(), Page::Loading(_)));

        let mut now = start;
        let mut swapped_at = None;
        for _ in 0..200 {
            now += FRAME;
            let was_loading = matches!(flow.page(), Page::Loading(_));
            flow.advance(now, &mut rng);
            if was_loading && flow.shown_at().is_some() {
                swapped_at = Some(now);
                break;
            }
        }
        let swapped_at = swapped_at.expect("main page never shown");
        assert_eq!(flow.shown_at(), Some(swapped_at));
        // the fast preloader still shows for its minimum display time
        assert!(swapped_at - start >= Duration::from_millis(1000));
        assert!(swapped_at - start < Duration::from_millis(1000) + FRAME);
        assert_eq!(flow.scroll_target(), None);
    }

    #[test]
    fn test_start_section_scrolls_once_after_delay() {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(9);
        let mut flow = PageFlow::mount(
            &fast_preloader(),
            Some(Section::Projects),
            false,
            start,
            &mut rng,
        );

        let mut now = start;
        while flow.shown_at().is_none() {
            now += FRAME;
            flow.advance(now, &mut rng);
            assert!(now - start < Duration::from_secs(5), "preloader never hid");
        }
        let shown_at = now;
        assert_eq!(flow.scroll_target(), None);

        let wait = flow.advance(shown_at + SCROLL_DELAY - Duration::from_millis(1), &mut rng);
        assert_eq!(wait, Some(Duration::from_millis(1)));
        assert_eq!(flow.scroll_target(), None);

        flow.advance(shown_at + SCROLL_DELAY, &mut rng);
        assert_eq!(flow.scroll_target(), Some(Section::Projects));
        flow.scrolled();

        for frame in 1..50 {
            let wait = flow.advance(shown_at + SCROLL_DELAY + FRAME * frame, &mut rng);
            assert_eq!(wait, None);
            assert_eq!(flow.scroll_target(), None);
        }
    }

    #[test]
    fn test_skipped_preloader_schedules_scroll_directly() {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(9);
        let mut flow = PageFlow::mount(
            &PreloaderConfig::default(),
            Some(Section::Contact),
            true,
            start,
            &mut rng,
        );
        assert_eq!(flow.shown_at(), Some(start));

        assert_eq!(flow.advance(start, &mut rng), Some(SCROLL_DELAY));
        assert_eq!(flow.scroll_target(), None);
        flow.advance(start + SCROLL_DELAY, &mut rng);
        assert_eq!(flow.scroll_target(), Some(Section::Contact));
    }

    #[test]
    fn test_no_start_section_never_scrolls() {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(9);
        let mut flow = PageFlow::mount(&PreloaderConfig::default(), None, true, start, &mut rng);
        assert_eq!(flow.advance(start + SCROLL_DELAY, &mut rng), None);
        assert_eq!(flow.scroll_target(), None);

        // footer links still request a scroll
        flow.request_scroll(Section::Tools);
        assert_eq!(flow.scroll_target(), Some(Section::Tools));
        flow.scrolled();
        assert_eq!(flow.scroll_target(), None);
    }
}
