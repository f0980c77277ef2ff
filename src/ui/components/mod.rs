pub mod animation;
pub mod chat_panel;
pub mod input_bar;
pub mod launcher;
pub mod loading_bubble;
pub mod message_row;
pub mod place_detail;
