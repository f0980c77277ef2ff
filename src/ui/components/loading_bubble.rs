use eframe::egui;

use super::animation::{DOT_MAX_SCALE, dot_scale};

const DOT_RADIUS: f32 = 4.5;
const DOT_SPACING: f32 = 14.0;

pub fn render(ui: &mut egui::Ui) {
    let elapsed = ui.input(|i| i.time);

    egui::Frame::new()
        .fill(egui::Color32::from_gray(225))
        .corner_radius(egui::CornerRadius::same(20))
        .inner_margin(egui::Margin::same(15))
        .show(ui, |ui| {
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(DOT_SPACING * 3.0, DOT_RADIUS * 2.0 * DOT_MAX_SCALE),
                egui::Sense::hover(),
            );
            let painter = ui.painter();
            for index in 0..3 {
                let center = egui::pos2(
                    rect.left() + DOT_SPACING * (index as f32 + 0.5),
                    rect.center().y,
                );
                painter.circle_filled(
                    center,
                    DOT_RADIUS * dot_scale(elapsed, index),
                    egui::Color32::from_gray(150),
                );
            }
        });
}
