use egui::{Color32, RichText, Ui};

use super::{GITHUB_URL, OWNER_NAME, PortfolioApp, Section};

const COPYRIGHT_YEAR: u16 = 2025;

impl PortfolioApp {
    pub(crate) fn footer_section(&mut self, ui: &mut Ui) {
        ui.separator();
        ui.add_space(12.);
        ui.horizontal(|ui| {
            for section in Section::ALL {
                if ui.link(section.title()).clicked() {
                    self.request_scroll(section);
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.hyperlink_to("GitHub", GITHUB_URL);
            });
        });
        ui.add_space(8.);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("© {} {}. All rights reserved.", COPYRIGHT_YEAR, OWNER_NAME))
                    .size(12.)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(12.);
    }
}
