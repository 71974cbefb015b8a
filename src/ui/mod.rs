//! Front ends: a line-oriented console game and a full-screen terminal UI.

mod app;
pub mod console;
mod game_view;

pub use app::App;
pub use console::Console;
