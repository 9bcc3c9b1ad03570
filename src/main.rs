use anyhow::Context;
use clap::Parser;
use contact_assistant::utils::{logger, validation::parse_birthday, validation::Validate};
use contact_assistant::{
    Assistant, AssistantSettings, CliConfig, FixedClock, SystemClock, TomlConfig,
};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let mut settings = AssistantSettings::default();
    if let Some(path) = &cli.config {
        tracing::info!("📁 Loading configuration from: {}", path);
        let file = TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?;
        if let Err(e) = file.validate() {
            exit_with(&e);
        }
        settings = settings.apply_file(&file);
    }
    settings = settings.apply_cli(&cli);

    if let Err(e) = settings.validate() {
        exit_with(&e);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match &cli.today {
        Some(raw) => {
            let today = parse_birthday(raw)
                .with_context(|| format!("--today expects DD.MM.YYYY, got '{}'", raw))?;
            tracing::info!("🔧 Using fixed date {}", today);
            Assistant::new(FixedClock(today), settings).run(stdin.lock(), stdout.lock())?;
        }
        None => {
            Assistant::new(SystemClock, settings).run(stdin.lock(), stdout.lock())?;
        }
    }

    Ok(())
}

fn exit_with(e: &contact_assistant::AssistantError) -> ! {
    tracing::error!("❌ Configuration validation failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}
