pub mod check;
pub mod dispatch;
pub mod history;
pub mod resources;
pub mod sample;
pub mod schema;
pub mod theme;

mod rows;
