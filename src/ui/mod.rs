//! Terminal UI: start menu, the playing board for both games, and the
//! checkers piece-selection flow.

mod app;
pub mod board_widget;
mod game_view;
pub mod selection;

pub use app::App;
