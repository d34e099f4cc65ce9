mod history;
mod theme;

pub use history::HistoryCommands;
pub use theme::ThemeCommands;
