use eframe::egui;

const SEND_BUTTON_WIDTH: f32 = 40.0;

/// Keyword box plus send button. Returns true when the user asked to send;
/// the caller decides whether the text is worth sending. Focus is dropped on
/// send so the text box does not stay active while waiting.
pub fn render(ui: &mut egui::Ui, input_text: &mut String) -> bool {
    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("키워드를 입력하세요!")
                .desired_width(ui.available_width() - SEND_BUTTON_WIDTH),
        );
        if ui.button("➤").clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
        }

        if send {
            response.surrender_focus();
        }
    });

    send
}
