pub mod toml_config;

use crate::core::birthdays::DEFAULT_WINDOW_DAYS;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use self::toml_config::TomlConfig;

pub const MAX_WINDOW_DAYS: u32 = 366;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "contact-assistant")]
#[command(about = "Console contact book with upcoming birthday reminders")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Length of the birthday window in days
    #[arg(long)]
    pub window_days: Option<u32>,

    /// Count a birthday that is today as upcoming
    #[arg(long, overrides_with = "no_include_today")]
    pub include_today: bool,

    /// Leave today's birthdays out, even if the config file includes them
    #[arg(long, overrides_with = "include_today")]
    pub no_include_today: bool,

    /// Pretend today is this date (DD.MM.YYYY)
    #[arg(long)]
    pub today: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Merged settings: defaults, then the config file, then command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantSettings {
    pub greeting: String,
    pub prompt: String,
    pub window_days: u32,
    pub include_today: bool,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            greeting: "Welcome to the assistant bot!".to_string(),
            prompt: "Enter a command: ".to_string(),
            window_days: DEFAULT_WINDOW_DAYS,
            include_today: false,
        }
    }
}

impl AssistantSettings {
    pub fn apply_file(mut self, file: &TomlConfig) -> Self {
        if let Some(assistant) = &file.assistant {
            if let Some(greeting) = &assistant.greeting {
                self.greeting = greeting.clone();
            }
            if let Some(prompt) = &assistant.prompt {
                self.prompt = prompt.clone();
            }
        }
        if let Some(birthdays) = &file.birthdays {
            if let Some(days) = birthdays.window_days {
                self.window_days = days;
            }
            if let Some(include_today) = birthdays.include_today {
                self.include_today = include_today;
            }
        }
        self
    }

    #[cfg(feature = "cli")]
    pub fn apply_cli(mut self, cli: &CliConfig) -> Self {
        if let Some(days) = cli.window_days {
            self.window_days = days;
        }
        if cli.include_today {
            self.include_today = true;
        } else if cli.no_include_today {
            self.include_today = false;
        }
        self
    }
}

impl Validate for AssistantSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("assistant.prompt", &self.prompt)?;
        validate_range("birthdays.window_days", self.window_days, 1, MAX_WINDOW_DAYS)
    }
}

impl ConfigProvider for AssistantSettings {
    fn greeting(&self) -> &str {
        &self.greeting
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn window_days(&self) -> u32 {
        self.window_days
    }

    fn include_today(&self) -> bool {
        self.include_today
    }
}
