use egui::{Color32, CornerRadius, Frame, Margin, RichText, Stroke, Ui};

use super::{DEFAULT_CORNER_RADIUS, PALETTE_BLUE, PALETTE_PURPLE, PortfolioApp};

const SKILLS: [(&str, Color32); 6] = [
    ("JavaScript", Color32::from_rgb(0xF7, 0xDF, 0x1E)),
    ("HTML/CSS", Color32::from_rgb(0xE3, 0x4F, 0x26)),
    ("UI/UX", Color32::from_rgb(0x8B, 0x5C, 0xF6)),
    ("Vue.js", Color32::from_rgb(0x10, 0xB9, 0x81)),
    ("Figma", Color32::from_rgb(0xF2, 0x4E, 0x1E)),
    ("Humor", Color32::from_rgb(0x3B, 0x82, 0xF6)),
];

const EDUCATION: [&str; 2] = [
    "Bachelor of Science in Media Informatics, TH Köln (expected 2026)",
    "Bachelor of Science in Medical Engineering, Maziar University, Iran (2017-2021)",
];

fn card(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    Frame::new()
        .fill(PALETTE_BLUE.gamma_multiply(0.05))
        .stroke(Stroke::new(1., PALETTE_BLUE.gamma_multiply(0.2)))
        .corner_radius(CornerRadius::same(DEFAULT_CORNER_RADIUS))
        .inner_margin(Margin::same(12))
        .show(ui, add_contents);
}

impl PortfolioApp {
    pub(crate) fn about_section(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("About me").size(36.).strong());
        });
        ui.add_space(24.);

        card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Hi! I'm").size(24.).strong());
                ui.label(RichText::new("Artin").size(24.).strong().color(PALETTE_PURPLE));
            });
            ui.label(
                "Front-end developer with a passion for usability and modern web technologies. \
                 As a media informatics student at TH Köln I combine technical know-how with a \
                 creative approach.",
            );
        });
        ui.add_space(12.);

        card(ui, |ui| {
            ui.label(RichText::new("Education").size(20.).strong());
            for entry in EDUCATION {
                ui.label(format!("• {}", entry));
            }
        });
        ui.add_space(12.);

        card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("What").size(20.).strong());
                ui.label(RichText::new("drives me").size(20.).strong().color(PALETTE_BLUE));
            });
            ui.label(
                "Solving technical challenges while designing interfaces that look good. \
                 I want to build digital experiences that are both functional and fun.",
            );
        });
        ui.add_space(12.);

        ui.horizontal_wrapped(|ui| {
            for (skill, color) in SKILLS {
                Frame::new()
                    .fill(color.gamma_multiply(0.2))
                    .stroke(Stroke::new(1., color.gamma_multiply(0.45)))
                    .corner_radius(CornerRadius::same(255))
                    .inner_margin(Margin::symmetric(10, 4))
                    .show(ui, |ui| {
                        ui.label(RichText::new(skill).color(Color32::WHITE));
                    });
            }
        });
        ui.add_space(64.);
    }
}
