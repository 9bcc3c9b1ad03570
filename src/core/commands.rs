use crate::utils::error::{AssistantError, Result};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Hello,
    Add,
    Change,
    Phone,
    RemovePhone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    Help,
    Exit,
}

pub struct CommandSpec {
    pub kind: CommandKind,
    pub names: &'static [&'static str],
    pub arity: RangeInclusive<usize>,
    pub usage: &'static str,
}

const ANY: RangeInclusive<usize> = 0..=usize::MAX;

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        kind: CommandKind::Hello,
        names: &["hello"],
        arity: ANY,
        usage: "hello",
    },
    CommandSpec {
        kind: CommandKind::Add,
        names: &["add"],
        arity: 2..=3,
        usage: "add [name] [phone] [birthday (optional)]",
    },
    CommandSpec {
        kind: CommandKind::Change,
        names: &["change"],
        arity: 2..=3,
        usage: "change [name] [new phone] | change [name] [old phone] [new phone]",
    },
    CommandSpec {
        kind: CommandKind::Phone,
        names: &["phone"],
        arity: 1..=1,
        usage: "phone [name]",
    },
    CommandSpec {
        kind: CommandKind::RemovePhone,
        names: &["remove-phone"],
        arity: 2..=2,
        usage: "remove-phone [name] [phone]",
    },
    CommandSpec {
        kind: CommandKind::All,
        names: &["all"],
        arity: 0..=0,
        usage: "all",
    },
    CommandSpec {
        kind: CommandKind::AddBirthday,
        names: &["add-birthday"],
        arity: 2..=2,
        usage: "add-birthday [name] [DD.MM.YYYY]",
    },
    CommandSpec {
        kind: CommandKind::ShowBirthday,
        names: &["show-birthday"],
        arity: 1..=1,
        usage: "show-birthday [name]",
    },
    CommandSpec {
        kind: CommandKind::Birthdays,
        names: &["birthdays"],
        arity: 0..=1,
        usage: "birthdays [days (optional)]",
    },
    CommandSpec {
        kind: CommandKind::Delete,
        names: &["delete"],
        arity: 1..=1,
        usage: "delete [name]",
    },
    CommandSpec {
        kind: CommandKind::Help,
        names: &["help"],
        arity: 0..=0,
        usage: "help",
    },
    CommandSpec {
        kind: CommandKind::Exit,
        names: &["close", "exit"],
        arity: ANY,
        usage: "close | exit",
    },
];

impl CommandKind {
    pub fn from_name(name: &str) -> Option<Self> {
        spec_by_name(name).map(|spec| spec.kind)
    }
}

fn spec_by_name(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.names.contains(&name))
}

/// A command line after arity checking. Argument values are not validated
/// here; that happens when they reach the domain types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    ChangePhone {
        name: String,
        old: Option<String>,
        new: String,
    },
    ShowPhones {
        name: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    All,
    AddBirthday {
        name: String,
        birthday: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays {
        days: Option<String>,
    },
    Delete {
        name: String,
    },
    Help,
    Exit,
}

impl Command {
    /// Splits on whitespace; the command word is case-insensitive. Blank input
    /// yields `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let word = word.to_lowercase();
        let args: Vec<String> = words.map(str::to_string).collect();

        let spec = spec_by_name(&word).ok_or_else(|| AssistantError::UnknownCommand {
            command: word.clone(),
        })?;
        if !spec.arity.contains(&args.len()) {
            return Err(AssistantError::InvalidArgumentCount {
                command: word,
                usage: spec.usage.to_string(),
            });
        }

        let count = args.len();
        let mut args = args.into_iter();
        let mut next = || args.next().unwrap_or_default();
        let command = match spec.kind {
            CommandKind::Hello => Self::Hello,
            CommandKind::Add => {
                let name = next();
                let phone = next();
                let birthday = (count == 3).then(&mut next);
                Self::Add {
                    name,
                    phone,
                    birthday,
                }
            }
            CommandKind::Change => {
                let name = next();
                let old = (count == 3).then(&mut next);
                Self::ChangePhone {
                    name,
                    old,
                    new: next(),
                }
            }
            CommandKind::Phone => Self::ShowPhones { name: next() },
            CommandKind::RemovePhone => {
                let name = next();
                Self::RemovePhone {
                    name,
                    phone: next(),
                }
            }
            CommandKind::All => Self::All,
            CommandKind::AddBirthday => {
                let name = next();
                Self::AddBirthday {
                    name,
                    birthday: next(),
                }
            }
            CommandKind::ShowBirthday => Self::ShowBirthday { name: next() },
            CommandKind::Birthdays => Self::Birthdays {
                days: (count == 1).then(&mut next),
            },
            CommandKind::Delete => Self::Delete { name: next() },
            CommandKind::Help => Self::Help,
            CommandKind::Exit => Self::Exit,
        };
        Ok(Some(command))
    }
}

pub fn help_text() -> String {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(COMMANDS.iter().map(|spec| format!("  {}", spec.usage)));
    lines.join("\n")
}
