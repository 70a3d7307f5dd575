pub mod error_body;
