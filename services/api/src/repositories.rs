//! Repositories for database operations
//!
//! Each store is a trait so handlers never depend on PostgreSQL directly.
//! The `Pg*` repositories back production; the in-memory ones back tests and
//! local demos without a database.

pub mod donation;
pub mod user;

pub use donation::{DonationStore, InMemoryDonationRepository, PgDonationRepository};
pub use user::{InMemoryUserRepository, PgUserRepository, UserStore};
