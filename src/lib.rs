pub mod collision;
pub mod config;
pub mod constants;
pub mod entities;
pub mod game;
pub mod input;
pub mod rendering;
pub mod session;
pub mod terminal_io;
pub mod types;
