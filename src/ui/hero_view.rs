use egui::{Color32, RichText, Ui};

use super::{PALETTE_PURPLE, PortfolioApp};

const HERO_WORDS: [&str; 5] = [
    "Artin Teymoori",
    "Frontend Developer",
    "UI/UX Designer",
    "Code Enthusiast",
    "CSS Master",
];
const WORD_DURATION_S: f32 = 3.;
const WORD_FADE_S: f32 = 0.4;
const RESUME_URL: &str =
    "https://drive.google.com/file/d/168MctrCGssDZa23epKSW-Uis0G2KcTfV/view?usp=drive_link";

/// Word shown at `elapsed_s` and its opacity; words fade out at the end of their slot.
fn flip_word(elapsed_s: f32) -> (&'static str, f32) {
    let slot = (elapsed_s / WORD_DURATION_S).max(0.) as usize;
    let in_slot = elapsed_s - slot as f32 * WORD_DURATION_S;
    let fade_out = ((WORD_DURATION_S - in_slot) / WORD_FADE_S).clamp(0., 1.);
    let fade_in = (in_slot / WORD_FADE_S).clamp(0., 1.);
    (HERO_WORDS[slot % HERO_WORDS.len()], fade_in.min(fade_out))
}

impl PortfolioApp {
    pub(crate) fn hero_section(&mut self, ui: &mut Ui, shown_for_s: f32) {
        let (word, alpha) = flip_word(shown_for_s);
        let min_height = ui.clip_rect().height();

        ui.allocate_ui(egui::vec2(ui.available_width(), min_height), |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(min_height * 0.3);
                ui.label(RichText::new("Hello World,").size(48.).strong());
                ui.horizontal(|ui| {
                    ui.label(RichText::new("I am").size(48.).strong());
                    ui.label(
                        RichText::new(word)
                            .size(48.)
                            .strong()
                            .color(PALETTE_PURPLE.gamma_multiply(alpha)),
                    );
                });
                ui.add_space(16.);
                ui.label(
                    RichText::new(
                        "Front-end Developer with expertise in building responsive web applications \
                         and modern user interfaces. Fluent in HTML, CSS, and turning \"it's just a \
                         small design change\" into 3 hours of figuring out which div is acting up.",
                    )
                    .color(Color32::LIGHT_GRAY),
                );
                ui.add_space(24.);
                ui.hyperlink_to(RichText::new("Know Me").size(20.), RESUME_URL);
            });
        });
        ui.add_space(64.);
    }
}
