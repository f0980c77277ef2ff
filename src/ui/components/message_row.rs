use eframe::egui;

use crate::common::{ChatMessage, Origin, Place};

pub const RECOMMENDATION_HEADER: &str = "제가 추천하는 장소는...";

const USER_BUBBLE: egui::Color32 = egui::Color32::from_rgb(0, 102, 230);
const BOT_BUBBLE: egui::Color32 = egui::Color32::from_gray(225);
const LINK_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 90, 220);

/// What a row shows, decided without touching egui.
#[derive(Debug, Clone, PartialEq)]
pub enum RowView<'a> {
    User { text: &'a str },
    Recommendations { places: &'a [Place] },
    NoResults { text: &'a str },
    Plain { text: &'a str },
}

impl<'a> RowView<'a> {
    pub fn for_message(message: &'a ChatMessage, no_results: &'a str) -> Self {
        match (message.origin, message.recommendations.as_deref()) {
            (Origin::User, _) => RowView::User {
                text: &message.text,
            },
            (Origin::Bot, Some([])) => RowView::NoResults { text: no_results },
            (Origin::Bot, Some(places)) => RowView::Recommendations { places },
            (Origin::Bot, None) => RowView::Plain {
                text: &message.text,
            },
        }
    }
}

/// Draws one message. Returns the place whose link was clicked, if any.
pub fn render(ui: &mut egui::Ui, message: &ChatMessage, no_results: &str) -> Option<Place> {
    let mut clicked = None;
    let timestamp = message.created_at.format("%H:%M").to_string();

    match RowView::for_message(message, no_results) {
        RowView::User { text } => {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                bubble(USER_BUBBLE).show(ui, |ui| {
                    ui.label(egui::RichText::new(text).color(egui::Color32::WHITE));
                });
                ui.label(egui::RichText::new(timestamp).small().weak());
            });
        }
        RowView::Recommendations { places } => {
            ui.horizontal(|ui| {
                bubble(BOT_BUBBLE).show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(RECOMMENDATION_HEADER).color(egui::Color32::BLACK),
                        );
                        ui.add_space(5.0);
                        for place in places {
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new("장소명: ").color(egui::Color32::BLACK),
                                );
                                let name = egui::RichText::new(&place.name)
                                    .underline()
                                    .color(LINK_COLOR);
                                let link = egui::Link::new(name);
                                if ui.add(link).clicked() {
                                    clicked = Some(place.clone());
                                }
                            });
                            ui.label(
                                egui::RichText::new(format!("주소📍 {}", place.address))
                                    .color(egui::Color32::BLACK),
                            );
                            ui.add_space(8.0);
                        }
                    });
                });
                ui.label(egui::RichText::new(timestamp).small().weak());
            });
        }
        RowView::NoResults { text } | RowView::Plain { text } => {
            ui.horizontal(|ui| {
                bubble(BOT_BUBBLE).show(ui, |ui| {
                    ui.label(egui::RichText::new(text).color(egui::Color32::BLACK));
                });
                ui.label(egui::RichText::new(timestamp).small().weak());
            });
        }
    }

    clicked
}

fn bubble(fill: egui::Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(10))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_RESULTS: &str = "추천할 장소가 없어요";

    #[test]
    fn user_rows_show_their_text() {
        let message = ChatMessage::from_user("한옥");
        assert_eq!(
            RowView::for_message(&message, NO_RESULTS),
            RowView::User { text: "한옥" }
        );
    }

    #[test]
    fn bot_rows_with_places_list_them() {
        let places = vec![Place::new("1", "A", "X"), Place::new("2", "B", "Y")];
        let message = ChatMessage::with_recommendations("ignored", places.clone());

        assert_eq!(
            RowView::for_message(&message, NO_RESULTS),
            RowView::Recommendations { places: &places }
        );
    }

    #[test]
    fn empty_result_uses_the_no_results_text() {
        let message = ChatMessage::with_recommendations("", Vec::new());
        assert_eq!(
            RowView::for_message(&message, NO_RESULTS),
            RowView::NoResults { text: NO_RESULTS }
        );
    }

    #[test]
    fn bot_rows_without_a_list_show_their_own_text() {
        let greeting = ChatMessage::from_bot("안녕하세요");
        let error = ChatMessage::from_bot("Error: timed out");

        assert_eq!(
            RowView::for_message(&greeting, NO_RESULTS),
            RowView::Plain { text: "안녕하세요" }
        );
        assert_eq!(
            RowView::for_message(&error, NO_RESULTS),
            RowView::Plain { text: "Error: timed out" }
        );
    }
}
