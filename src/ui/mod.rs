mod about_view;
mod contact_view;
mod cursor_overlay;
mod footer_view;
mod hero_view;
mod page;
mod preloader_view;
mod projects_view;
mod tools_view;

use std::{sync::Arc, time::Instant};

use egui::{Color32, Pos2, Rect, ScrollArea, Ui, Visuals, style::Widgets};
use log::error;

use vitrine::{
    AppConfig, Catalogue, ContactForm, CursorTrail, FrameLoop, Gallery, JokeBox, MailTransport,
    Sample, TagFilter,
};

use page::{Page, PageFlow};

pub(crate) const PALETTE_BLACK: Color32 = Color32::from_rgb(10, 10, 14);
pub(crate) const PALETTE_NIGHT: Color32 = Color32::from_rgb(26, 26, 46);
pub(crate) const PALETTE_DUSK: Color32 = Color32::from_rgb(42, 42, 74);
pub(crate) const PALETTE_BLUE: Color32 = Color32::from_rgb(59, 130, 246);
pub(crate) const PALETTE_PURPLE: Color32 = Color32::from_rgb(139, 92, 246);
pub(crate) const PALETTE_GREEN: Color32 = Color32::from_rgb(16, 185, 129);

pub(crate) const DEFAULT_CORNER_RADIUS: u8 = 12;
pub(crate) const OWNER_NAME: &str = "Artin Teymoori";
pub(crate) const GITHUB_URL: &str = "https://github.com/Artin925";
pub(crate) const LINKEDIN_URL: &str = "https://www.linkedin.com/in/artin-teymoori-6b4977277";

/// Page sections that can be scrolled to, addressed like URL fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Hero,
    About,
    Projects,
    Tools,
    Contact,
}

impl Section {
    pub(crate) const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Tools,
        Section::Contact,
    ];

    pub(crate) fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Tools => "secret-tools",
            Section::Contact => "contact",
        }
    }

    pub(crate) fn title(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Tools => "Secret Tools",
            Section::Contact => "Contact",
        }
    }

    /// Accepts `projects` as well as `#projects`.
    pub(crate) fn from_fragment(fragment: &str) -> Option<Self> {
        let id = fragment.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(id))
    }
}

pub(crate) struct ProjectDetail {
    pub(crate) project_id: u32,
    pub(crate) gallery: Gallery,
}

/// Root page: shows the preloader first and swaps to the portfolio once the
/// preloader signals completion. The cursor trail is drawn on top of both.
pub struct PortfolioApp {
    app_config: AppConfig,
    catalogue: Catalogue,
    page_flow: PageFlow,
    trail: CursorTrail,
    frame_loop: FrameLoop<egui::Context>,
    active_filter: TagFilter,
    detail: Option<ProjectDetail>,
    contact_form: ContactForm,
    mail_transport: Arc<dyn MailTransport>,
    jokes: JokeBox,
}

pub struct LaunchOptions {
    pub start_section: Option<String>,
    pub skip_preloader: bool,
}

impl PortfolioApp {
    pub fn new(
        app_config: AppConfig,
        catalogue: Catalogue,
        mail_transport: Arc<dyn MailTransport>,
        options: LaunchOptions,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        cc.egui_ctx.set_visuals(portfolio_visuals());
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let now = Instant::now();
        let mut rng = rand::rng();
        let start_section = options.start_section.as_deref().and_then(|fragment| {
            let section = Section::from_fragment(fragment);
            if section.is_none() {
                error!("Unknown section {:?}, starting at the top", fragment);
            }
            section
        });
        let page_flow = PageFlow::mount(
            &app_config.preloader,
            start_section,
            options.skip_preloader,
            now,
            &mut rng,
        );

        let window_size: egui::Vec2 = app_config.window_size.clone().into();
        let trail = CursorTrail::new(
            app_config.trail.clone(),
            Sample::new(window_size.x / 2., window_size.y / 2.),
        );

        Self {
            app_config,
            catalogue,
            page_flow,
            trail,
            frame_loop: FrameLoop::start(cc.egui_ctx.clone()),
            active_filter: TagFilter::All,
            detail: None,
            contact_form: ContactForm::default(),
            mail_transport,
            jokes: JokeBox::new(now, &mut rng),
        }
    }

    pub(crate) fn request_scroll(&mut self, section: Section) {
        self.page_flow.request_scroll(section);
    }

    /// Scrolls `rect` into view if `section` is the pending scroll target.
    fn scroll_if_requested(&mut self, ui: &mut Ui, section: Section, rect: Rect) {
        if self.page_flow.scroll_target() == Some(section) {
            ui.scroll_to_rect(rect, Some(egui::Align::TOP));
            self.page_flow.scrolled();
        }
    }

    fn main_view(&mut self, ctx: &egui::Context, shown_at: Instant, now: Instant) {
        // fade the main content in
        let shown_for_s = now.duration_since(shown_at).as_secs_f32();
        let fade = (shown_for_s / 0.7).clamp(0., 1.);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_opacity(fade);
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for section in Section::ALL {
                        let top = ui.cursor().min;
                        match section {
                            Section::Hero => self.hero_section(ui, shown_for_s),
                            Section::About => self.about_section(ui),
                            Section::Projects => self.projects_section(ui),
                            Section::Tools => self.tools_section(ui, now - shown_at),
                            Section::Contact => self.contact_section(ui, now),
                        }
                        let rect = Rect::from_min_max(
                            top,
                            Pos2::new(ui.max_rect().right(), ui.cursor().min.y),
                        );
                        self.scroll_if_requested(ui, section, rect);
                    }
                    self.footer_section(ui);
                });
        });
        self.project_detail_window(ctx);
    }

    fn remember_window_geometry(&mut self, ctx: &egui::Context) {
        if let Some(outer_rect) = ctx.input(|is| is.viewport().outer_rect) {
            self.app_config.window_position = Some(outer_rect.min.into());
        }
        if let Some(inner_rect) = ctx.input(|is| is.viewport().inner_rect) {
            self.app_config.window_size = inner_rect.size().into();
        }
    }
}

impl eframe::App for PortfolioApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.app_config.save() {
            error!("Error while saving config file: {}", e);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let mut rng = rand::rng();
        let page_wait = self.page_flow.advance(now, &mut rng);

        match self.page_flow.page() {
            Page::Loading(preloader) => preloader_view::show(ctx, preloader, now),
            Page::Main { shown_at } => {
                let shown_at = *shown_at;
                if let Some(wait) = self.jokes.advance(now, &mut rng) {
                    ctx.request_repaint_after(wait);
                }
                self.main_view(ctx, shown_at, now);
            }
        }

        if let Some(wait) = self.contact_form.poll(now) {
            ctx.request_repaint_after(wait);
        }
        if let Some(wait) = page_wait {
            ctx.request_repaint_after(wait);
        }

        self.cursor_overlay(ctx);
        self.remember_window_geometry(ctx);
    }
}

/// Dark theme of the portfolio.
pub(crate) fn portfolio_visuals() -> Visuals {
    Visuals {
        dark_mode: true,
        hyperlink_color: PALETTE_PURPLE,
        faint_bg_color: PALETTE_NIGHT,
        extreme_bg_color: PALETTE_BLACK,
        panel_fill: PALETTE_BLACK,
        window_fill: PALETTE_NIGHT,
        button_frame: true,
        widgets: Widgets::dark(),
        striped: false,
        ..Default::default()
    }
}

/// Linear interpolation between two colours, `t` in `[0, 1]`.
pub(crate) fn color_mix(start: Color32, end: Color32, t: f32) -> Color32 {
    let t = t.clamp(0., 1.);
    let channel = |a: u8, b: u8| (a as f32 + t * (b as f32 - a as f32)).round().clamp(0., 255.) as u8;
    Color32::from_rgb(
        channel(start.r(), end.r()),
        channel(start.g(), end.g()),
        channel(start.b(), end.b()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_from_fragment() {
        assert_eq!(Section::from_fragment("#projects"), Some(Section::Projects));
        assert_eq!(Section::from_fragment("Contact"), Some(Section::Contact));
        assert_eq!(Section::from_fragment("#secret-tools"), Some(Section::Tools));
        assert_eq!(Section::from_fragment("#tools"), None);
    }

    #[test]
    fn test_color_mix() {
        assert_eq!(color_mix(Color32::BLACK, Color32::WHITE, 0.), Color32::BLACK);
        assert_eq!(color_mix(Color32::BLACK, Color32::WHITE, 2.), Color32::WHITE);
        assert_eq!(
            color_mix(Color32::BLACK, Color32::from_rgb(200, 100, 50), 0.5),
            Color32::from_rgb(100, 50, 25)
        );
    }
}
