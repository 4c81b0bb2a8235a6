//! Waste Not API
//!
//! Backend for a food-donation matching app: donation records, food image
//! uploads with a detected label, and username/password accounts.

pub mod config;
pub mod detection;
pub mod error;
pub mod matching;
pub mod models;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod schema;
pub mod services;
pub mod state;
pub mod uploads;

pub use routes::create_router;
pub use state::AppState;
