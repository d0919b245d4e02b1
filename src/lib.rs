//! Coursedeck - course progress and lesson reader for the terminal
//!
//! Coursedeck shows a catalog of courses with their completion, a progress
//! tracker per course, and a paged lesson reader that ends in an optional
//! one-question quiz.

pub mod app;
pub mod catalog;
pub mod config;
pub mod learning;
pub mod store;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use store::Store;
pub use theme::Theme;
