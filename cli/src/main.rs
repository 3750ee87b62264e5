//! CLI entrypoint for Conference Agenda
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use agenda_application::{
    ConferenceApi, SearchUseCase, ShowAgendaInput, ShowAgendaUseCase, ShowSessionUseCase,
};
use agenda_domain::{Attendee, OutputFormat};
use agenda_infrastructure::{ConfigLoader, FileConfig, HttpConferenceApi};
use agenda_presentation::{Cli, Command, OutputFormatter, formatter_for};
use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let Some(command) = cli.command.clone() else {
        bail!("No command given. Run with --help to see available commands.");
    };

    let mut config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // --base-url beats every config source
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = config.output.resolve_format(cli.output.map(Into::into));

    let base_url = config.validate()?;
    info!("Using conference service at {}", base_url);

    // === Dependency Injection ===
    let api: Arc<dyn ConferenceApi> = Arc::new(HttpConferenceApi::new(base_url)?);
    let formatter = formatter_for(format);

    let output = run(command, api, formatter.as_ref()).await?;
    println!("{}", output);

    Ok(())
}

/// Execute one subcommand and render its result
async fn run(
    command: Command,
    api: Arc<dyn ConferenceApi>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    debug!("Running {:?}", command);

    let output = match command {
        Command::Agenda { day, attendee } => {
            let mut input = ShowAgendaInput::new(day);
            if let Some(name) = attendee {
                input = input.for_attendee(name);
            }
            let agenda = ShowAgendaUseCase::new(api).execute(input).await?;
            formatter.agenda(&agenda, day)
        }

        Command::Session { id } => {
            let detail = ShowSessionUseCase::new(api)
                .execute(id)
                .await?
                .with_context(|| format!("Session {} not found", id))?;
            formatter.session(&detail)
        }

        Command::Speakers => formatter.speakers(&api.list_speakers().await?),

        Command::Speaker { id } => {
            let speaker = api
                .get_speaker(id)
                .await?
                .with_context(|| format!("Speaker {} not found", id))?;
            formatter.speaker(&speaker)
        }

        Command::Search { query } => {
            let outcome = SearchUseCase::new(api).execute(&query).await?;
            formatter.search(&outcome)
        }

        Command::Attendee { name } => {
            let attendee = api
                .get_attendee(&name)
                .await?
                .with_context(|| format!("Attendee {:?} not found", name))?;
            let sessions = api.sessions_by_attendee(&name).await?;
            formatter.attendee(&attendee, &sessions)
        }

        Command::Register {
            name,
            first_name,
            last_name,
            email,
        } => {
            let attendee = Attendee {
                name,
                first_name,
                last_name,
                email_address: email,
            };
            api.add_attendee(&attendee).await?;
            format!("Registered {}", attendee.display_name())
        }

        Command::AddToAgenda { name, session_id } => {
            api.add_session_to_attendee(&name, session_id).await?;
            format!("Added session {} to {}'s agenda", session_id, name)
        }

        Command::RemoveFromAgenda { name, session_id } => {
            api.remove_session_from_attendee(&name, session_id).await?;
            format!("Removed session {} from {}'s agenda", session_id, name)
        }

        Command::Reschedule { id, start, end } => {
            let mut session = api
                .get_session(id)
                .await?
                .with_context(|| format!("Session {} not found", id))?;
            session.start_time = Some(start);
            session.end_time = Some(end);
            api.put_session(&session).await?;
            format!("Rescheduled session {} to {} - {}", id, start, end)
        }

        Command::DeleteSession { id } => {
            api.delete_session(id).await?;
            format!("Deleted session {}", id)
        }

        Command::Health => {
            if !api.check_health().await? {
                bail!("Conference service is not healthy");
            }
            "Conference service is healthy".to_string()
        }
    };

    Ok(output)
}
