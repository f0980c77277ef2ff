pub mod app;
pub mod components;
pub mod fonts;
pub mod state;

pub use app::HwibotApp;
