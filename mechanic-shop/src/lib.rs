pub mod console;
pub mod core;
pub mod database;
pub mod entities;
pub mod errors;
pub mod ids;
pub mod menu;
pub mod settings;
pub mod validation;
pub mod workflows;

pub use console::Console;
pub use crate::core::ShopResource;
pub use database::Migrator;
pub use errors::{Result, ShopError};
pub use ids::IdGenerator;
pub use menu::MenuChoice;
pub use settings::Settings;
pub use validation::{ValidationError, YearRange};
pub use workflows::Session;
