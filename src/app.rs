use std::time::Duration;

use chrono::Local;
use thiserror::Error;

use crate::cli::args::{AddArgs, CliArgs, Command, ReportKind};
use crate::cli::validation;
use crate::client::{ApiClient, ClientError};
use crate::config::{self, ConfigFile};
use crate::model::Room;
use crate::validate::{self, RoomForm, ValidationError};
use crate::{output, report};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(String),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("room {0} not found")]
    RoomNotFound(String),
}

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Duration,
    pub no_color: bool,
}

/// CLI flags win over config file values; either source falls back to the
/// built-in defaults. The merged timeout is checked here so a zero from the
/// config file is rejected the same way as a zero flag.
pub fn merge_settings(args: &CliArgs, file: ConfigFile) -> Result<Settings, AppError> {
    let base_url = args
        .base_url
        .clone()
        .or(file.base_url)
        .unwrap_or_else(|| config::DEFAULT_BASE_URL.to_string());
    let timeout = args
        .timeout
        .or(file.timeout)
        .unwrap_or(config::DEFAULT_TIMEOUT_SECS);
    if timeout == 0 {
        return Err(AppError::Config(
            "invalid timeout, expected positive integer".to_string(),
        ));
    }
    Ok(Settings {
        base_url,
        timeout: Duration::from_secs(timeout),
        no_color: args.no_color || file.no_color.unwrap_or(false),
    })
}

fn resolve_settings(args: &CliArgs) -> Result<Settings, AppError> {
    let file = match args.config.as_deref() {
        Some(raw) => {
            let path = config::expand_tilde(raw);
            config::load_config(&path, false).map_err(AppError::Config)?
        }
        None => match config::default_config_path() {
            Some(path) => {
                config::ensure_default_config_file(&path).map_err(AppError::Config)?;
                config::load_config(&path, true).map_err(AppError::Config)?
            }
            None => ConfigFile::default(),
        },
    };
    merge_settings(args, file)
}

pub async fn run(args: CliArgs) -> Result<(), AppError> {
    validation::validate(&args).map_err(AppError::Config)?;
    let settings = resolve_settings(&args)?;
    if settings.no_color {
        colored::control::set_override(false);
    }
    log::debug!("using room service at {}", settings.base_url);

    let client = ApiClient::new(&settings.base_url, settings.timeout)?;
    match args.command {
        Command::List => {
            let rooms = client.list_rooms().await?;
            println!("{}", output::render_table(&rooms));
        }
        Command::Add(add) => run_add(&client, add).await?,
        Command::Toggle { numero } => run_toggle(&client, &numero).await?,
        Command::Delete { numero } => run_delete(&client, &numero).await?,
        Command::Report { kind } => run_report(&client, kind).await?,
    }
    Ok(())
}

/// Rows are addressed by their visible room number; the opaque id only
/// exists inside fetched records.
async fn find_room(client: &ApiClient, numero: &str) -> Result<Room, AppError> {
    let rooms = client.list_rooms().await?;
    rooms
        .into_iter()
        .find(|r| r.numero == numero)
        .ok_or_else(|| AppError::RoomNotFound(numero.to_string()))
}

async fn run_add(client: &ApiClient, add: AddArgs) -> Result<(), AppError> {
    // uniqueness is checked against the freshly loaded collection,
    // before anything is sent
    let rooms = client.list_rooms().await?;
    let existing: Vec<String> = rooms.iter().map(|r| r.numero.clone()).collect();
    let form = RoomForm {
        numero: add.numero,
        nombre: add.nombre,
        tipo: add.tipo,
        precio: add.precio,
        fecha: add.fecha,
    };
    let room = validate::validate_new_room(&form, &existing, Local::now().date_naive())?;
    client.create_room(&room).await?;

    // full reload after a create
    let rooms = client.list_rooms().await?;
    println!("{}", output::render_table(&rooms));
    Ok(())
}

async fn run_toggle(client: &ApiClient, numero: &str) -> Result<(), AppError> {
    let mut room = find_room(client, numero).await?;
    room.reservada = !room.reservada;
    client.update_room(&room).await?;
    println!("{}", output::render_room_update(&room));
    Ok(())
}

async fn run_delete(client: &ApiClient, numero: &str) -> Result<(), AppError> {
    let room = find_room(client, numero).await?;
    client.delete_room(&room.id).await?;
    println!("{}", output::render_room_deleted(&room));
    Ok(())
}

/// Every report is a fresh fetch of the whole collection; nothing is cached
/// between invocations.
async fn run_report(client: &ApiClient, kind: ReportKind) -> Result<(), AppError> {
    let rooms = client.list_rooms().await?;
    let rendered = match kind {
        ReportKind::Counts => output::render_counts(&report::occupancy(&rooms)),
        ReportKind::Average => output::render_average(report::average_price(&rooms)),
        ReportKind::Extremes => output::render_extremes(report::price_extremes(&rooms)),
        ReportKind::ByType => output::render_by_type(&report::available_by_type(&rooms)),
        ReportKind::NextWeek => {
            let today = Local::now().date_naive();
            output::render_next_week(&report::available_within(&rooms, today, 7))
        }
    };
    println!("{rendered}");
    Ok(())
}
