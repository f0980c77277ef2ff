pub mod client;
pub mod transport;
pub mod worker;

pub use client::RecommendationClient;
pub use worker::RecommendationWorker;
