use super::types::{Place, RequestId};

/// Events the recommendation worker sends back up to the UI.
#[derive(Debug, Clone)]
pub enum FetchEvent {
    /// Exactly one per `FetchCommand`. The error side carries the
    /// human-readable description shown in the chat.
    RecommendationsLoaded {
        request_id: RequestId,
        result: Result<Vec<Place>, String>,
    },
}
