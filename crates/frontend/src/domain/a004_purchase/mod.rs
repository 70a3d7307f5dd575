pub mod api;
pub mod editor;
pub mod pivot;
pub mod ui;
