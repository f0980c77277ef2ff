use eframe::egui;

use crate::common::Place;
use crate::ui::state::ChatState;

use super::{input_bar, loading_bubble, message_row};

const PANEL_WIDTH: f32 = 380.0;
const PANEL_MAX_HEIGHT: f32 = 500.0;

#[derive(Default)]
pub struct PanelActions {
    pub close: bool,
    pub submit: bool,
    pub open_place: Option<Place>,
}

pub fn render(ctx: &egui::Context, state: &mut ChatState, no_results: &str) -> PanelActions {
    let mut actions = PanelActions::default();

    egui::Window::new("hwibot_chat")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -104.0))
        .fixed_size(egui::vec2(PANEL_WIDTH, PANEL_MAX_HEIGHT))
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(egui::Color32::WHITE)
                .corner_radius(egui::CornerRadius::same(20))
                .inner_margin(egui::Margin::same(12)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("HWIBOT").strong().color(egui::Color32::BLACK));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✕").clicked() {
                        actions.close = true;
                    }
                });
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .max_height(PANEL_MAX_HEIGHT - 110.0)
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing.y = 10.0;
                    for message in &state.messages {
                        if let Some(place) = message_row::render(ui, message, no_results) {
                            actions.open_place = Some(place);
                        }
                    }
                    if state.is_loading() {
                        loading_bubble::render(ui);
                    }
                });

            ui.separator();
            actions.submit = input_bar::render(ui, &mut state.input_text);
        });

    actions
}
