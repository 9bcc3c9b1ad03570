pub mod address_book;
pub mod assistant;
pub mod birthdays;
pub mod commands;

pub use crate::domain::model::{Birthday, Name, Phone, Record};
pub use crate::domain::ports::{Clock, ConfigProvider};
pub use crate::utils::error::Result;
