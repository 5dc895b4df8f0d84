use std::time::Instant;

use egui::{Align2, Color32, FontId, Pos2, ProgressBar, RichText, Vec2};

use vitrine::Preloader;

use super::{PALETTE_BLACK, PALETTE_BLUE, PALETTE_DUSK, PALETTE_NIGHT, PALETTE_PURPLE, color_mix};

const LOGO: &str = "ARTIN";
const BACKDROP_CYCLE_S: f32 = 3.;
const LETTER_STAGGER_S: f32 = 0.1;
const LETTER_DROP_S: f32 = 0.7;
const LETTER_DROP_HEIGHT: f32 = 100.;
const SUBTITLE_DELAY_S: f32 = 0.7;
const SUBTITLE_FADE_S: f32 = 0.5;
const PARTICLE_RADIUS: f32 = 4.;

/// Backdrop colour: black to night to dusk and back again.
fn backdrop(elapsed_s: f32) -> Color32 {
    let cycle = (elapsed_s / BACKDROP_CYCLE_S) % 2.;
    let t = if cycle > 1. { 2. - cycle } else { cycle };
    if t < 0.5 {
        color_mix(PALETTE_BLACK, PALETTE_NIGHT, t * 2.)
    } else {
        color_mix(PALETTE_NIGHT, PALETTE_DUSK, (t - 0.5) * 2.)
    }
}

/// Drop-in progress of logo letter `index`, eased out, in `[0, 1]`.
fn letter_drop(index: usize, elapsed_s: f32) -> f32 {
    let t = ((elapsed_s - index as f32 * LETTER_STAGGER_S) / LETTER_DROP_S).clamp(0., 1.);
    1. - (1. - t).powi(3)
}

pub(crate) fn show(ctx: &egui::Context, preloader: &Preloader, now: Instant) {
    let elapsed_s = now.duration_since(preloader.started_at()).as_secs_f32();

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(backdrop(elapsed_s)))
        .show(ctx, |ui| {
            let screen = ui.max_rect();
            let painter = ui.painter();

            for particle in preloader.particles() {
                let (opacity, scale) = particle.pulse(elapsed_s);
                if opacity <= 0. {
                    continue;
                }
                let center = Pos2::new(
                    screen.left() + screen.width() * particle.x_pct / 100.,
                    screen.top() + screen.height() * particle.y_pct / 100.,
                );
                painter.circle_filled(
                    center,
                    PARTICLE_RADIUS * scale,
                    Color32::WHITE.gamma_multiply(opacity),
                );
            }

            let logo_font = FontId::proportional(64.);
            let letter_width = 52.;
            let logo_center = screen.center() - Vec2::new(0., 80.);
            let logo_left = logo_center.x - letter_width * LOGO.len() as f32 / 2.;
            for (index, letter) in LOGO.chars().enumerate() {
                let drop = letter_drop(index, elapsed_s);
                let position = Pos2::new(
                    logo_left + letter_width * (index as f32 + 0.5),
                    logo_center.y - LETTER_DROP_HEIGHT * (1. - drop),
                );
                painter.text(
                    position,
                    Align2::CENTER_CENTER,
                    letter,
                    logo_font.clone(),
                    Color32::WHITE.gamma_multiply(drop),
                );
            }

            let subtitle_alpha =
                ((elapsed_s - SUBTITLE_DELAY_S) / SUBTITLE_FADE_S).clamp(0., 1.) * 0.7;
            painter.text(
                logo_center + Vec2::new(0., 56.),
                Align2::CENTER_CENTER,
                "Portfolio",
                FontId::proportional(20.),
                Color32::WHITE.gamma_multiply(subtitle_alpha),
            );

            let bar_width = 320.;
            let bar_rect = egui::Rect::from_center_size(
                screen.center() + Vec2::new(0., 40.),
                Vec2::new(bar_width, 60.),
            );
            ui.scope_builder(egui::UiBuilder::new().max_rect(bar_rect), |ui| {
                ui.vertical_centered(|ui| {
                    let bar_color = color_mix(
                        PALETTE_BLUE,
                        PALETTE_PURPLE,
                        preloader.progress() / vitrine::preloader::MAX_PROGRESS,
                    );
                    ui.add(
                        ProgressBar::new(preloader.progress() / vitrine::preloader::MAX_PROGRESS)
                            .desired_width(bar_width)
                            .desired_height(8.)
                            .fill(bar_color),
                    );
                    ui.add_space(12.);
                    ui.label(
                        RichText::new(preloader.phase().text())
                            .color(Color32::WHITE)
                            .size(15.),
                    );
                });
            });
        });
}
