use super::types::RequestId;

/// Commands the UI sends down to the recommendation worker.
#[derive(Debug, Clone)]
pub enum FetchCommand {
    FetchRecommendations { request_id: RequestId, keyword: String },
}
