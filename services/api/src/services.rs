//! Application services behind the HTTP handlers

pub mod donations;
pub mod food;
pub mod users;

pub use donations::DonationService;
pub use food::FoodUploadService;
pub use users::UserService;
