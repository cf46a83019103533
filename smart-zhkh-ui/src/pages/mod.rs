//! Pages
//!
//! Top-level page components for each route.

pub mod bills;
pub mod history;
pub mod home;
pub mod payment;
pub mod settings;
pub mod statistics;

pub use bills::Bills;
pub use history::History;
pub use home::Home;
pub use payment::Payment;
pub use settings::Settings;
pub use statistics::Statistics;
