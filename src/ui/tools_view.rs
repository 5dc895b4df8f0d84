use std::time::Duration;

use egui::{Color32, CornerRadius, Frame, Margin, OpenUrl, RichText, Sense, Stroke, Ui};

use vitrine::Joke;
use vitrine::tools::{REVEAL_STAGGER, TOOLS, Tool, revealed_tools};

use super::{DEFAULT_CORNER_RADIUS, PALETTE_BLUE, PALETTE_GREEN, PALETTE_PURPLE, PortfolioApp};

const CARD_WIDTH: f32 = 240.;
const CARD_FADE: Duration = Duration::from_millis(500);

fn tool_card(ui: &mut Ui, tool: &Tool, opacity: f32) {
    ui.scope(|ui| {
        ui.set_opacity(opacity);
        let card = Frame::new()
            .fill(tool.color.gamma_multiply(0.08))
            .stroke(Stroke::new(1., tool.color.gamma_multiply(0.4)))
            .corner_radius(CornerRadius::same(DEFAULT_CORNER_RADIUS))
            .inner_margin(Margin::same(14))
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.label(RichText::new(tool.name).size(20.).strong().color(tool.color));
                ui.add_space(6.);
                ui.label(RichText::new(tool.caption).color(Color32::LIGHT_GRAY));
            });
        if card.response.interact(Sense::click()).clicked() {
            ui.ctx().open_url(OpenUrl::new_tab(tool.link));
        }
    });
}

impl PortfolioApp {
    pub(crate) fn tools_section(&mut self, ui: &mut Ui, shown_for: Duration) {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new("My secret").size(36.).strong());
                ui.heading(RichText::new("weapons").size(36.).strong().color(PALETTE_GREEN));
            });
            ui.label(
                RichText::new(
                    "These tools make me more productive, but don't ask how much time I spend with them!",
                )
                .color(Color32::LIGHT_GRAY),
            );
        });
        ui.add_space(24.);

        let revealed = revealed_tools(shown_for);
        ui.horizontal_wrapped(|ui| {
            for (index, tool) in TOOLS.iter().enumerate().take(revealed) {
                let visible_for = shown_for.saturating_sub(REVEAL_STAGGER * index as u32);
                let opacity = (visible_for.as_secs_f32() / CARD_FADE.as_secs_f32()).clamp(0., 1.);
                tool_card(ui, tool, opacity);
            }
        });
        ui.add_space(24.);

        Frame::new()
            .fill(PALETTE_PURPLE.gamma_multiply(0.06))
            .stroke(Stroke::new(1., PALETTE_BLUE.gamma_multiply(0.3)))
            .corner_radius(CornerRadius::same(DEFAULT_CORNER_RADIUS))
            .inner_margin(Margin::same(16))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Dev fact of the day").size(20.).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("New fact").clicked() {
                            self.jokes.shuffle(&mut rand::rng());
                        }
                    });
                });
                ui.add_space(8.);
                match self.jokes.current() {
                    Joke::Code(code) => {
                        ui.label(RichText::new(code).monospace().color(PALETTE_GREEN));
                    }
                    Joke::Text(text) => {
                        ui.label(RichText::new(text).italics());
                    }
                }
            });
        ui.add_space(64.);
    }
}
