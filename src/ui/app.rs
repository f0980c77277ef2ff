use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{FetchCommand, FetchEvent};

use super::components::{chat_panel, launcher, place_detail};
use super::fonts::install_hangul_font;
use super::state::{ChatState, PanelEvent};

pub struct HwibotApp {
    state: ChatState,
    no_results_message: String,
    command_sender: mpsc::Sender<FetchCommand>,
    event_receiver: mpsc::Receiver<FetchEvent>,
}

impl HwibotApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        no_results_message: String,
        font_path: Option<&str>,
        command_sender: mpsc::Sender<FetchCommand>,
        event_receiver: mpsc::Receiver<FetchEvent>,
    ) -> Self {
        install_hangul_font(&cc.egui_ctx, font_path);

        Self {
            state: ChatState::new(),
            no_results_message,
            command_sender,
            event_receiver,
        }
    }

    fn handle_fetch_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.apply_fetch_event(event);
        }
    }

    fn submit(&mut self) {
        let Some((request_id, keyword)) = self.state.submit_input() else {
            return;
        };

        if let Err(err) = self
            .command_sender
            .try_send(FetchCommand::FetchRecommendations {
                request_id,
                keyword,
            })
        {
            log::warn!("Failed to send command to worker: {err}");
            self.state.abandon_request(request_id, &err.to_string());
        }
    }

    fn toggle_panel(&mut self) {
        match self.state.toggle_panel() {
            PanelEvent::FirstOpened => log::info!("Chat panel opened for the first time"),
            PanelEvent::Reopened => log::debug!("Chat panel reopened"),
            PanelEvent::Closed => log::debug!("Chat panel closed"),
        }
    }
}

impl eframe::App for HwibotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_fetch_events();

        egui::CentralPanel::default().show(ctx, |_ui| {});

        if launcher::render(ctx, self.state.is_open()) {
            self.toggle_panel();
        }

        if self.state.is_open() {
            let actions = chat_panel::render(ctx, &mut self.state, &self.no_results_message);
            if actions.submit {
                self.submit();
            }
            if let Some(place) = actions.open_place {
                self.state.select_place(place);
            }
            if actions.close {
                self.state.close_panel();
            }
        }

        let detail_closed = self
            .state
            .selected_place
            .as_ref()
            .is_some_and(|place| !place_detail::render(ctx, place));
        if detail_closed {
            self.state.clear_selected_place();
        }

        ctx.request_repaint();
    }
}
