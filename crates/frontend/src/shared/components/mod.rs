pub mod catalog_cards;
pub mod date_input;
pub mod id_select;
