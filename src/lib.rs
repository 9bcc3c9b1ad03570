pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{toml_config::TomlConfig, AssistantSettings};

pub use crate::core::address_book::AddressBook;
pub use crate::core::assistant::{Assistant, Reply};
pub use crate::core::birthdays::{due_within, BirthdayReport, BirthdayWindow, DueBirthday};
pub use crate::core::commands::Command;
pub use crate::domain::model::{Birthday, Name, Phone, Record};
pub use crate::domain::ports::{Clock, ConfigProvider, FixedClock, SystemClock};
pub use crate::utils::error::{AssistantError, Result};
pub use crate::utils::validation::{validate_birthday, validate_phone};
