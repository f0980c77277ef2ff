use std::sync::Arc;

use tokio::sync::mpsc;

use crate::common::{FetchCommand, FetchEvent, RequestId};

use super::client::RecommendationSource;

/// Background side of the app: receives fetch commands from the UI and
/// answers each one with exactly one `FetchEvent`.
pub struct RecommendationWorker<S> {
    source: Arc<S>,
    event_sender: mpsc::Sender<FetchEvent>,
    command_receiver: mpsc::Receiver<FetchCommand>,
}

impl<S: RecommendationSource> RecommendationWorker<S> {
    pub fn new(
        source: S,
        event_sender: mpsc::Sender<FetchEvent>,
        command_receiver: mpsc::Receiver<FetchCommand>,
    ) -> Self {
        Self {
            source: Arc::new(source),
            event_sender,
            command_receiver,
        }
    }

    /// Runs until the UI drops its command sender. Requests are not
    /// serialized: each one gets its own task and nothing cancels it.
    pub async fn run(mut self) {
        log::info!("Recommendation worker started");

        while let Some(command) = self.command_receiver.recv().await {
            self.handle_command(command);
        }

        log::info!("Command channel closed; recommendation worker stopping");
    }

    fn handle_command(&self, command: FetchCommand) {
        match command {
            FetchCommand::FetchRecommendations {
                request_id,
                keyword,
            } => {
                let source = Arc::clone(&self.source);
                let event_sender = self.event_sender.clone();
                tokio::spawn(async move {
                    fetch_and_report(source.as_ref(), &event_sender, request_id, keyword).await;
                });
            }
        }
    }
}

async fn fetch_and_report<S: RecommendationSource>(
    source: &S,
    event_sender: &mpsc::Sender<FetchEvent>,
    request_id: RequestId,
    keyword: String,
) {
    log::info!("Fetching recommendations #{} for `{keyword}`", request_id.0);

    let result = match source.fetch(&keyword).await {
        Ok(places) => {
            log::info!(
                "Request #{} returned {} recommendations",
                request_id.0,
                places.len()
            );
            Ok(places)
        }
        Err(err) => {
            log::warn!("Request #{} failed: {err}", request_id.0);
            Err(err.to_string())
        }
    };

    if let Err(err) = event_sender
        .send(FetchEvent::RecommendationsLoaded { request_id, result })
        .await
    {
        log::warn!("Failed to notify UI about request #{}: {err}", request_id.0);
    }
}
