pub mod api;
pub mod sample;
pub mod ui;
