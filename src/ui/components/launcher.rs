use eframe::egui;

use super::animation::launcher_offset;

const BUTTON_SIZE: f32 = 64.0;
const MARGIN: f32 = 24.0;

/// Floating bot button in the bottom-right corner. Bobs while the panel is
/// closed. Returns true when clicked.
pub fn render(ctx: &egui::Context, panel_open: bool) -> bool {
    let offset = if panel_open {
        0.0
    } else {
        launcher_offset(ctx.input(|i| i.time))
    };

    egui::Area::new(egui::Id::new("hwibot_launcher"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-MARGIN, -MARGIN + offset))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let button = egui::Button::new(egui::RichText::new("🤖").size(30.0))
                .fill(egui::Color32::WHITE)
                .corner_radius(egui::CornerRadius::same((BUTTON_SIZE / 2.0) as u8))
                .min_size(egui::vec2(BUTTON_SIZE, BUTTON_SIZE));
            ui.add(button).on_hover_text("HWIBOT").clicked()
        })
        .inner
}
