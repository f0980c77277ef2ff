use eframe::egui;

use crate::common::Place;

/// Read-only card for a recommended place. Returns false once closed.
pub fn render(ctx: &egui::Context, place: &Place) -> bool {
    let mut open = true;

    egui::Window::new(place.name.as_str())
        .id(egui::Id::new(("place_detail", &place.id)))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            egui::Grid::new("place_detail_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("장소명");
                    ui.label(egui::RichText::new(&place.name).strong());
                    ui.end_row();

                    ui.label("주소📍");
                    ui.label(&place.address);
                    ui.end_row();

                    ui.label("ID");
                    ui.label(egui::RichText::new(&place.id).monospace().weak());
                    ui.end_row();
                });
        });

    open
}
