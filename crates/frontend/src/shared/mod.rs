pub mod api_error;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod local_catalog;
pub mod notifications;
pub mod page_frame;
