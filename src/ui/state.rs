use std::collections::BTreeSet;

use crate::common::{ChatMessage, FetchEvent, Place, RequestId};

pub const GREETING: &str = "추천받고 싶은 장소에 대한 키워드를 입력해주세요!😊";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVisibility {
    Closed,
    Open,
}

/// Lifecycle transitions produced by opening and closing the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    FirstOpened,
    Reopened,
    Closed,
}

/// Formats places the way the bot replies: one two-line entry per place,
/// entries separated by a blank line.
pub fn recommendation_text(places: &[Place]) -> String {
    places
        .iter()
        .map(|place| format!("장소명: {}\n주소📍 {}", place.name, place.address))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Local UI state. Lives on the UI thread; fetch results only reach it
/// through `apply_fetch_event`.
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input_text: String,
    pub selected_place: Option<Place>,
    visibility: PanelVisibility,
    has_been_opened: bool,
    in_flight: BTreeSet<RequestId>,
    next_request_id: u64,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            input_text: String::new(),
            selected_place: None,
            visibility: PanelVisibility::Closed,
            has_been_opened: false,
            in_flight: BTreeSet::new(),
            next_request_id: 1,
        }
    }

    pub fn is_open(&self) -> bool {
        self.visibility == PanelVisibility::Open
    }

    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn toggle_panel(&mut self) -> PanelEvent {
        match self.visibility {
            PanelVisibility::Closed => self.open_panel(),
            PanelVisibility::Open => self.close_panel(),
        }
    }

    pub fn close_panel(&mut self) -> PanelEvent {
        self.visibility = PanelVisibility::Closed;
        PanelEvent::Closed
    }

    fn open_panel(&mut self) -> PanelEvent {
        self.visibility = PanelVisibility::Open;
        let event = if self.has_been_opened {
            PanelEvent::Reopened
        } else {
            self.has_been_opened = true;
            PanelEvent::FirstOpened
        };
        self.handle_panel_event(event);
        event
    }

    fn handle_panel_event(&mut self, event: PanelEvent) {
        if event == PanelEvent::FirstOpened {
            self.push_message(ChatMessage::from_bot(GREETING));
        }
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Submits whatever is in the input box. Returns the request to hand to
    /// the worker, or `None` when the input is blank. The input is cleared
    /// right away. A second submit while one is pending is allowed.
    pub fn submit_input(&mut self) -> Option<(RequestId, String)> {
        if self.input_text.trim().is_empty() {
            return None;
        }

        let keyword = std::mem::take(&mut self.input_text);
        self.push_message(ChatMessage::from_user(keyword.clone()));

        let request_id = RequestId(self.next_request_id);
        self.next_request_id += 1;
        self.in_flight.insert(request_id);

        Some((request_id, keyword))
    }

    /// Gives a request back when its command never reached the worker, so the
    /// loading indicator is not left on forever.
    pub fn abandon_request(&mut self, request_id: RequestId, reason: &str) {
        if self.in_flight.remove(&request_id) {
            self.push_message(ChatMessage::from_bot(format!("Error: {reason}")));
        }
    }

    pub fn apply_fetch_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::RecommendationsLoaded { request_id, result } => {
                if !self.in_flight.remove(&request_id) {
                    log::warn!("Ignoring result for unknown request #{}", request_id.0);
                    return;
                }

                let message = match result {
                    Ok(places) => {
                        ChatMessage::with_recommendations(recommendation_text(&places), places)
                    }
                    Err(description) => ChatMessage::from_bot(format!("Error: {description}")),
                };
                self.push_message(message);
            }
        }
    }

    pub fn select_place(&mut self, place: Place) {
        self.selected_place = Some(place);
    }

    pub fn clear_selected_place(&mut self) {
        self.selected_place = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Origin;

    fn loaded(request_id: RequestId, result: Result<Vec<Place>, String>) -> FetchEvent {
        FetchEvent::RecommendationsLoaded { request_id, result }
    }

    fn submit(state: &mut ChatState, text: &str) -> Option<(RequestId, String)> {
        state.input_text = text.to_string();
        state.submit_input()
    }

    #[test]
    fn greeting_appears_once_across_open_close_cycles() {
        let mut state = ChatState::new();

        assert_eq!(state.toggle_panel(), PanelEvent::FirstOpened);
        assert_eq!(state.toggle_panel(), PanelEvent::Closed);
        assert_eq!(state.toggle_panel(), PanelEvent::Reopened);
        state.close_panel();
        state.toggle_panel();

        let greetings = state.messages.iter().filter(|m| m.text == GREETING).count();
        assert_eq!(greetings, 1);
        assert_eq!(state.messages[0].origin, Origin::Bot);
        assert!(state.is_open());
    }

    #[test]
    fn blank_input_is_rejected() {
        let mut state = ChatState::new();

        assert!(submit(&mut state, "").is_none());
        assert!(submit(&mut state, "   \n\t").is_none());

        assert!(state.messages.is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.input_text, "   \n\t");
    }

    #[test]
    fn submit_appends_user_message_and_starts_loading() {
        let mut state = ChatState::new();

        let (request_id, keyword) = submit(&mut state, "야경 명소").unwrap();

        assert_eq!(keyword, "야경 명소");
        assert_eq!(request_id, RequestId(1));
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].origin, Origin::User);
        assert_eq!(state.messages[0].text, "야경 명소");
        assert!(state.input_text.is_empty());
        assert!(state.is_loading());
    }

    #[test]
    fn success_appends_one_bot_message_with_joined_text() {
        let mut state = ChatState::new();
        let (request_id, _) = submit(&mut state, "궁").unwrap();
        let places = vec![Place::new("1", "A", "X"), Place::new("2", "B", "Y")];

        state.apply_fetch_event(loaded(request_id, Ok(places.clone())));

        assert_eq!(state.messages.len(), 2);
        let reply = &state.messages[1];
        assert_eq!(reply.origin, Origin::Bot);
        assert_eq!(reply.text, "장소명: A\n주소📍 X\n\n장소명: B\n주소📍 Y");
        assert_eq!(reply.recommendations, Some(places));
        assert!(!state.is_loading());
    }

    #[test]
    fn failure_appends_error_text_without_recommendations() {
        let mut state = ChatState::new();
        let (request_id, _) = submit(&mut state, "궁").unwrap();

        state.apply_fetch_event(loaded(request_id, Err("connection refused".into())));

        assert_eq!(state.messages.len(), 2);
        assert!(state.messages[1].text.contains("connection refused"));
        assert!(state.messages[1].recommendations.is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn duplicate_result_is_ignored() {
        let mut state = ChatState::new();
        let (request_id, _) = submit(&mut state, "궁").unwrap();

        state.apply_fetch_event(loaded(request_id, Ok(Vec::new())));
        state.apply_fetch_event(loaded(request_id, Ok(Vec::new())));

        assert_eq!(state.messages.len(), 2);
    }

    #[test]
    fn loading_stays_on_until_every_pending_request_returns() {
        let mut state = ChatState::new();
        let (first, _) = submit(&mut state, "one").unwrap();
        let (second, _) = submit(&mut state, "two").unwrap();
        assert_ne!(first, second);

        state.apply_fetch_event(loaded(second, Ok(Vec::new())));
        assert!(state.is_loading());

        state.apply_fetch_event(loaded(first, Err("timeout".into())));
        assert!(!state.is_loading());
        assert_eq!(state.messages.len(), 4);
    }

    #[test]
    fn results_still_land_after_the_panel_is_closed() {
        let mut state = ChatState::new();
        state.toggle_panel();
        let (request_id, _) = submit(&mut state, "공원").unwrap();
        state.close_panel();

        state.apply_fetch_event(loaded(request_id, Ok(vec![Place::new("1", "A", "X")])));

        assert_eq!(state.messages.len(), 3);
        assert!(!state.is_open());
    }

    #[test]
    fn abandoned_request_clears_loading_with_error_row() {
        let mut state = ChatState::new();
        let (request_id, _) = submit(&mut state, "공원").unwrap();

        state.abandon_request(request_id, "worker unavailable");

        assert!(!state.is_loading());
        assert_eq!(state.messages[1].text, "Error: worker unavailable");
    }
}
