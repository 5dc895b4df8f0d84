use egui::{Color32, CornerRadius, Frame, Image, Margin, RichText, Sense, Stroke, Ui, Vec2};

use vitrine::projects::image_uri;
use vitrine::{Catalogue, Gallery, Project};

use super::{DEFAULT_CORNER_RADIUS, PortfolioApp, ProjectDetail};

const CARD_WIDTH: f32 = 300.;
const CARD_IMAGE_HEIGHT: f32 = 170.;
const DETAIL_IMAGE_HEIGHT: f32 = 360.;
const THUMBNAIL_SIZE: Vec2 = Vec2::new(72., 48.);

fn tag_chip(ui: &mut Ui, tag: &str, color: Color32) {
    Frame::new()
        .fill(color.gamma_multiply(0.2))
        .corner_radius(CornerRadius::same(255))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(tag).size(12.).color(color));
        });
}

/// Navigation request raised inside the detail window, applied after it closed.
enum DetailAction {
    Close,
    Open(u32),
}

impl PortfolioApp {
    fn open_detail(&mut self, project: &Project) {
        self.detail = Some(ProjectDetail {
            project_id: project.id,
            gallery: Gallery::for_project(project),
        });
    }

    pub(crate) fn projects_section(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("My Projects").size(36.).strong());
        });
        ui.add_space(16.);

        ui.horizontal_wrapped(|ui| {
            for filter in Catalogue::filters() {
                let selected = filter == self.active_filter;
                let color = filter.color();
                let text = RichText::new(filter.label()).color(if selected {
                    Color32::WHITE
                } else {
                    color
                });
                let button = egui::Button::new(text)
                    .fill(if selected {
                        color
                    } else {
                        color.gamma_multiply(0.15)
                    })
                    .corner_radius(CornerRadius::same(255));
                if ui.add(button).clicked() {
                    self.active_filter = filter;
                }
            }
        });
        ui.add_space(16.);

        let mut opened = None;
        let visible = self.catalogue.filter(&self.active_filter);
        if visible.is_empty() {
            ui.label(
                RichText::new("No projects with this tag yet.").color(Color32::GRAY),
            );
        }
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = Vec2::splat(16.);
            for project in visible {
                let accent = project.accent_color();
                let response = Frame::new()
                    .fill(accent.gamma_multiply(0.06))
                    .stroke(Stroke::new(1., accent.gamma_multiply(0.4)))
                    .corner_radius(CornerRadius::same(DEFAULT_CORNER_RADIUS))
                    .inner_margin(Margin::same(12))
                    .show(ui, |ui| {
                        ui.set_width(CARD_WIDTH);
                        ui.add(
                            Image::new(image_uri(&self.app_config.assets_root, &project.image))
                                .fit_to_exact_size(Vec2::new(CARD_WIDTH, CARD_IMAGE_HEIGHT))
                                .corner_radius(CornerRadius::same(DEFAULT_CORNER_RADIUS / 2)),
                        );
                        ui.add_space(8.);
                        ui.label(RichText::new(&project.title).size(18.).strong());
                        ui.label(RichText::new(&project.description).color(Color32::LIGHT_GRAY));
                        ui.horizontal_wrapped(|ui| {
                            for tag in &project.tags {
                                tag_chip(ui, tag, accent);
                            }
                        });
                        if ui.button("Details").clicked() {
                            opened = Some(project.id);
                        }
                    })
                    .response
                    .interact(Sense::click());
                if response.clicked() {
                    opened = Some(project.id);
                }
            }
        });
        ui.add_space(64.);

        if let Some(project) = opened.and_then(|id| self.catalogue.get(id)).cloned() {
            self.open_detail(&project);
        }
    }

    pub(crate) fn project_detail_window(&mut self, ctx: &egui::Context) {
        let Some(detail) = &mut self.detail else {
            return;
        };
        let Some(project) = self.catalogue.get(detail.project_id) else {
            self.detail = None;
            return;
        };
        let (previous, next) = self.catalogue.neighbours(project.id);
        let assets_root = &self.app_config.assets_root;

        let mut open = true;
        let mut action = None;
        egui::Window::new(&project.title)
            .id(egui::Id::new("project-detail"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(640.)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                let gallery = &mut detail.gallery;
                if let Some(current) = gallery.current() {
                    ui.add(
                        Image::new(image_uri(assets_root, current))
                            .max_height(DETAIL_IMAGE_HEIGHT)
                            .maintain_aspect_ratio(true)
                            .corner_radius(CornerRadius::same(DEFAULT_CORNER_RADIUS / 2)),
                    );
                }
                if gallery.has_multiple() {
                    ui.horizontal(|ui| {
                        if ui.button("◀").clicked() {
                            gallery.prev();
                        }
                        ui.label(gallery.position());
                        if ui.button("▶").clicked() {
                            gallery.next();
                        }
                    });
                    ui.horizontal_wrapped(|ui| {
                        let mut selected = None;
                        for (index, image) in gallery.images().iter().enumerate() {
                            let stroke = if index == gallery.current_index() {
                                Stroke::new(2., project.accent_color())
                            } else {
                                Stroke::NONE
                            };
                            let thumbnail = Frame::new()
                                .stroke(stroke)
                                .show(ui, |ui| {
                                    ui.add(
                                        Image::new(image_uri(assets_root, image))
                                            .fit_to_exact_size(THUMBNAIL_SIZE),
                                    );
                                })
                                .response
                                .interact(Sense::click());
                            if thumbnail.clicked() {
                                selected = Some(index);
                            }
                        }
                        if let Some(index) = selected {
                            gallery.select(index);
                        }
                    });
                }

                ui.separator();
                ui.horizontal_wrapped(|ui| {
                    for tag in &project.tags {
                        tag_chip(ui, tag, project.accent_color());
                    }
                });
                ui.add_space(8.);
                ui.label(
                    project
                        .detail_description
                        .as_deref()
                        .unwrap_or(&project.description),
                );
                if let Some(link) = &project.link {
                    ui.add_space(8.);
                    ui.hyperlink_to("Visit project", link);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if let Some(previous) = previous
                        && ui.button(format!("← {}", previous.title)).clicked()
                    {
                        action = Some(DetailAction::Open(previous.id));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some(next) = next
                            && ui.button(format!("{} →", next.title)).clicked()
                        {
                            action = Some(DetailAction::Open(next.id));
                        }
                        if ui.button("Close").clicked() {
                            action = Some(DetailAction::Close);
                        }
                    });
                });
            });

        if !open {
            action = Some(DetailAction::Close);
        }
        match action {
            Some(DetailAction::Close) => self.detail = None,
            Some(DetailAction::Open(id)) => {
                if let Some(project) = self.catalogue.get(id).cloned() {
                    self.open_detail(&project);
                }
            }
            None => {}
        }
    }
}
