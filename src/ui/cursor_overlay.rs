use egui::{CursorIcon, Id, LayerId, Order};

use vitrine::Sample;
use vitrine::cursor::{Role, is_interactive};

use super::{PALETTE_BLUE, PALETTE_PURPLE, PortfolioApp, color_mix};

const BLOB_RADIUS: f32 = 10.;

/// Roles of what is under the pointer: the widgets egui hit-tested as hovered
/// plus whatever the cursor icon requested this frame says.
fn hovered_roles(ctx: &egui::Context) -> Vec<Role> {
    let hovered: Vec<Id> = ctx.interaction_snapshot(|snapshot| snapshot.hovered.iter().copied().collect());
    hovered
        .into_iter()
        .filter_map(|id| ctx.read_response(id))
        .map(|response| Role::from_sense(response.sense))
        .chain([Role::from_cursor_icon(ctx.output(|o| o.cursor_icon))])
        .collect()
}

impl PortfolioApp {
    /// Feeds pointer input to the trail and paints it above everything else.
    /// Must run after the page was drawn so the hovered widget is known.
    pub(crate) fn cursor_overlay(&mut self, ctx: &egui::Context) {
        let (pointer, clicking) = ctx.input(|is| (is.pointer.latest_pos(), is.pointer.any_down()));
        if let Some(pointer) = pointer {
            let sample = Sample::from(pointer);
            if sample != self.trail.pointer() {
                self.trail.on_pointer_move(sample);
            }
        }
        self.trail.set_clicking(clicking);

        self.trail.set_hovering(is_interactive(hovered_roles(ctx)));
        if pointer.is_some() {
            ctx.set_cursor_icon(CursorIcon::None);
        }

        let trail = &mut self.trail;
        let mut segments = Vec::new();
        self.frame_loop.on_frame(|| segments = trail.on_frame());

        let radius = self.trail.state().radius(BLOB_RADIUS);
        let painter = ctx.layer_painter(LayerId::new(Order::Tooltip, Id::new("cursor-trail")));
        let count = segments.len().max(1) as f32;
        // draw the lagging segments first so the head stays on top
        for segment in segments.iter().rev() {
            let color = color_mix(PALETTE_BLUE, PALETTE_PURPLE, segment.index as f32 / count);
            painter.circle_filled(
                segment.position.into(),
                radius * segment.scale,
                color.gamma_multiply(segment.opacity),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::portfolio_visuals;
    use egui::{Event, Pos2, RawInput, Rect, Vec2};

    /// Runs one frame with a button and a plain label, returns their rects and
    /// what the trail would consider hovered at the end of the frame.
    fn run_frame(ctx: &egui::Context, pointer: Option<Pos2>) -> (Rect, Rect, bool) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(800., 600.))),
            events: pointer.map(Event::PointerMoved).into_iter().collect(),
            ..Default::default()
        };
        let mut rects = (Rect::NOTHING, Rect::NOTHING);
        let mut hovering = false;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                rects.0 = ui.button("Send message").rect;
                ui.add_space(40.);
                rects.1 = ui.label("Full-stack developer").rect;
            });
            hovering = is_interactive(hovered_roles(ctx));
        });
        (rects.0, rects.1, hovering)
    }

    #[test]
    fn test_button_under_pointer_counts_as_hovering() {
        let ctx = egui::Context::default();
        ctx.set_visuals(portfolio_visuals());
        let (button, _, hovering) = run_frame(&ctx, None);
        assert!(!hovering);

        let mut hovering = false;
        for _ in 0..3 {
            hovering = run_frame(&ctx, Some(button.center())).2;
        }
        assert!(hovering);
    }

    #[test]
    fn test_text_and_empty_space_are_not_hovering() {
        let ctx = egui::Context::default();
        ctx.set_visuals(portfolio_visuals());
        let (_, label, _) = run_frame(&ctx, None);

        for pointer in [label.center(), label.center_bottom() + Vec2::new(0., 100.)] {
            let mut hovering = true;
            for _ in 0..3 {
                hovering = run_frame(&ctx, Some(pointer)).2;
            }
            assert!(!hovering, "pointer at {:?}", pointer);
        }
    }
}
