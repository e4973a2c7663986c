pub mod admin;
pub mod code_entry;
pub mod game;
pub mod not_found;
