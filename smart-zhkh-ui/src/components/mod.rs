//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod nav;
pub mod toast;

pub use loading::{LoadError, Loading};
pub use nav::Nav;
pub use toast::Toast;
