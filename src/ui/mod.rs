pub mod terminal;
pub mod theme;
pub mod view;

pub use terminal::TuiManager;
