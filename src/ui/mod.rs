pub mod actions;
pub mod app;
pub mod modal;
pub mod table;
pub mod toolbar;
