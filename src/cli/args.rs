use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "roomctl",
    version,
    about = "hotel room inventory admin client",
    long_about = "Roomctl manages a hotel room collection served over REST: list rooms, create them with validated input, flip reservation state, delete them, and run aggregate reports.\n\nExamples:\n  roomctl list\n  roomctl add --numero 101 --nombre \"suite real\" --tipo suite --precio 150.50 --fecha 2027-01-15\n  roomctl toggle 101\n  roomctl report average\n\nTip: Use --config to persist the service URL and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        long = "base-url",
        value_name = "URL",
        help_heading = "Connection",
        help = "Base URL of the room service (overrides config)."
    )]
    pub base_url: Option<String>,

    #[arg(
        long = "timeout",
        value_name = "SECONDS",
        help_heading = "Connection",
        help = "Request timeout in seconds."
    )]
    pub timeout: Option<u64>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.roomctl/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List every room in the collection
    List,
    /// Validate the given fields and create a new room
    Add(AddArgs),
    /// Flip a room between Reservada and Disponible
    Toggle {
        #[arg(value_name = "NUMERO", help = "3-digit number of the room to toggle.")]
        numero: String,
    },
    /// Delete a room from the collection
    Delete {
        #[arg(value_name = "NUMERO", help = "3-digit number of the room to delete.")]
        numero: String,
    },
    /// Run an aggregate report over the full collection
    Report {
        #[command(subcommand)]
        kind: ReportKind,
    },
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    #[arg(long, value_name = "NNN", help = "Room number, exactly 3 digits.")]
    pub numero: String,

    #[arg(long, value_name = "NAME", help = "Display name, at least two words.")]
    pub nombre: String,

    #[arg(
        long,
        value_name = "TYPE",
        help = "Individual, Doble or Suite (case-insensitive)."
    )]
    pub tipo: String,

    #[arg(
        long,
        value_name = "PRICE",
        help = "Price per night, positive, up to two decimals."
    )]
    pub precio: String,

    #[arg(
        long = "fecha",
        visible_alias = "fecha-disponibilidad",
        value_name = "YYYY-MM-DD",
        help = "Date the room becomes available (must be in the future)."
    )]
    pub fecha: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ReportKind {
    /// Reserved vs available totals
    Counts,
    /// Arithmetic mean price across all rooms
    Average,
    /// Most and least expensive rooms
    Extremes,
    /// Available rooms per type
    ByType,
    /// Rooms available within the next 7 days
    NextWeek,
}
