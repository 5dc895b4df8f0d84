use std::time::Instant;

use egui::{Color32, CornerRadius, Frame, Margin, RichText, Stroke, TextEdit, Ui};

use vitrine::FormStatus;

use super::{
    DEFAULT_CORNER_RADIUS, GITHUB_URL, LINKEDIN_URL, PALETTE_BLUE, PALETTE_GREEN, PALETTE_PURPLE,
    PortfolioApp,
};

const FORM_WIDTH: f32 = 520.;

impl PortfolioApp {
    pub(crate) fn contact_section(&mut self, ui: &mut Ui, now: Instant) {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Get in touch").size(36.).strong());
            ui.label(
                RichText::new("Have a project in mind or just want to say hi? Drop me a line.")
                    .color(Color32::LIGHT_GRAY),
            );
        });
        ui.add_space(24.);

        ui.vertical_centered(|ui| {
            Frame::new()
                .fill(PALETTE_BLUE.gamma_multiply(0.05))
                .stroke(Stroke::new(1., PALETTE_PURPLE.gamma_multiply(0.3)))
                .corner_radius(CornerRadius::same(DEFAULT_CORNER_RADIUS))
                .inner_margin(Margin::same(20))
                .show(ui, |ui| {
                    ui.set_width(FORM_WIDTH);
                    if let FormStatus::Sent { reset_at } = self.contact_form.status() {
                        let remaining = reset_at.saturating_duration_since(now).as_secs();
                        ui.label(
                            RichText::new("Message sent!")
                                .size(22.)
                                .strong()
                                .color(PALETTE_GREEN),
                        );
                        ui.label(format!(
                            "Thanks for reaching out, I'll get back to you soon. \
                             The form resets in {}s.",
                            remaining + 1
                        ));
                        return;
                    }

                    let editable = !self.contact_form.is_submitting();
                    ui.add_enabled_ui(editable, |ui| {
                        ui.label("Name");
                        ui.add(
                            TextEdit::singleline(&mut self.contact_form.name)
                                .hint_text("Your name")
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(8.);
                        ui.label("Email");
                        ui.add(
                            TextEdit::singleline(&mut self.contact_form.email)
                                .hint_text("you@example.com")
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(8.);
                        ui.label("Message");
                        ui.add(
                            TextEdit::multiline(&mut self.contact_form.message)
                                .hint_text("What's on your mind?")
                                .desired_rows(5)
                                .desired_width(f32::INFINITY),
                        );
                    });
                    ui.add_space(12.);

                    ui.horizontal(|ui| {
                        let label = if editable { "Send message" } else { "Sending..." };
                        let send = egui::Button::new(RichText::new(label).color(Color32::WHITE))
                            .fill(PALETTE_PURPLE)
                            .corner_radius(CornerRadius::same(DEFAULT_CORNER_RADIUS / 2));
                        if ui.add_enabled(editable, send).clicked() {
                            self.contact_form.submit(self.mail_transport.clone());
                        }
                        if !editable {
                            ui.spinner();
                        }
                    });

                    if let Some(error) = self.contact_form.error() {
                        ui.add_space(8.);
                        ui.label(RichText::new(error).color(Color32::LIGHT_RED));
                    }
                });
        });
        ui.add_space(16.);

        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.hyperlink_to("LinkedIn", LINKEDIN_URL);
                ui.label("·");
                ui.hyperlink_to("GitHub", GITHUB_URL);
            });
        });
        ui.add_space(64.);
    }
}
