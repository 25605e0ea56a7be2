//! Clap derive structures for the `mselkit` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use uuid::Uuid;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// mselkit -- author master scenario event lists from the command line
#[derive(Debug, Parser)]
#[command(
    name = "mselkit",
    version,
    about = "Author MSELs, catalogs, injects, and exercise schedules",
    long_about = "A CLI for authoring master scenario event lists (MSELs):\n\
        scenario events, data fields, teams, units, catalogs of injects,\n\
        moves, cards, CITE evaluation scaffolding, and invitations.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "MSEL_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Server URL (overrides profile)
    #[arg(long, short = 's', env = "MSEL_SERVER", global = true)]
    pub server: Option<String>,

    /// Access token (overrides profile)
    #[arg(long, env = "MSEL_TOKEN", global = true, hide_env = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "MSEL_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "MSEL_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "MSEL_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage MSELs (list, author, copy, download)
    #[command(alias = "m")]
    Msel(MselArgs),

    /// Manage scenario events of an MSEL
    #[command(alias = "ev")]
    Event(EventArgs),

    /// Manage data fields (event-list columns) of an MSEL
    Field(FieldArgs),

    /// Manage participating teams
    #[command(alias = "t")]
    Team(TeamArgs),

    /// Manage organizational units
    Unit(UnitArgs),

    /// Manage inject catalogs
    #[command(alias = "cat")]
    Catalog(CatalogArgs),

    /// Manage injects within a catalog
    Inject(InjectArgs),

    /// Manage exercise moves
    Move(MoveArgs),

    /// Manage participant-facing cards
    Card(CardArgs),

    /// Manage CITE evaluation roles and actions
    Cite(CiteArgs),

    /// Manage join invitations for an MSEL
    #[command(alias = "inv")]
    Invitation(InvitationArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared List Arguments ────────────────────────────────────────────

/// Shared filter/sort/pagination arguments for all list commands.
/// These feed the derived-view pipeline directly.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring filter
    #[arg(long, short = 'f')]
    pub filter: Option<String>,

    /// Sort column (entity default when omitted)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,

    /// Zero-based page index
    #[arg(long)]
    pub page: Option<usize>,

    /// Page size (no pagination when omitted)
    #[arg(long)]
    pub page_size: Option<usize>,
}

// ── MSELs ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct MselArgs {
    #[command(subcommand)]
    pub command: MselCommand,
}

#[derive(Debug, Subcommand)]
pub enum MselCommand {
    /// List MSELs
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Only MSELs you own or participate in
        #[arg(long)]
        mine: bool,
    },

    /// Show one MSEL
    Show { id: Uuid },

    /// Create an MSEL
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Create as a reusable template
        #[arg(long)]
        template: bool,
    },

    /// Update an MSEL
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// New status: pending, in-progress, approved, complete
        #[arg(long)]
        status: Option<String>,
    },

    /// Delete an MSEL (prompts for confirmation)
    #[command(alias = "rm")]
    Delete { id: Uuid },

    /// Deep-copy an MSEL server-side (prompts for confirmation)
    Copy { id: Uuid },

    /// Download an MSEL as an xlsx workbook
    Download {
        id: Uuid,
        /// Output file (defaults to <id>.xlsx)
        #[arg(long, short = 'O')]
        out: Option<PathBuf>,
    },
}

// ── Scenario events ──────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct EventArgs {
    /// The MSEL the events belong to
    #[arg(long, short = 'm', env = "MSEL_ID", global = true)]
    pub msel: Option<Uuid>,

    #[command(subcommand)]
    pub command: EventCommand,
}

#[derive(Debug, Subcommand)]
pub enum EventCommand {
    /// List the MSEL's scenario events
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Create a scenario event
    Create {
        /// Row position on the event list
        #[arg(long)]
        row: i32,
        /// Offset from exercise start, in seconds
        #[arg(long, default_value = "0")]
        delta: i64,
        /// Hide from participant-facing views
        #[arg(long)]
        hidden: bool,
    },

    /// Update a scenario event
    Update {
        id: Uuid,
        #[arg(long)]
        row: Option<i32>,
        #[arg(long)]
        delta: Option<i64>,
        /// New status: pending, in-progress, approved, complete
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        hidden: Option<bool>,
    },

    /// Delete a scenario event (prompts for confirmation)
    #[command(alias = "rm")]
    Delete { id: Uuid },
}

// ── Data fields ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FieldArgs {
    /// The MSEL the fields belong to
    #[arg(long, short = 'm', env = "MSEL_ID", global = true)]
    pub msel: Option<Uuid>,

    #[command(subcommand)]
    pub command: FieldCommand,
}

#[derive(Debug, Subcommand)]
pub enum FieldCommand {
    /// List the MSEL's data fields
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Create a data field
    Create {
        name: String,
        /// Value type: text, numeric, date, boolean, select, url
        #[arg(long, default_value = "text")]
        data_type: String,
        /// Column position on the event list
        #[arg(long)]
        order: i32,
        /// Values are chosen from the field's options
        #[arg(long)]
        from_list: bool,
    },

    /// Update a data field
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        order: Option<i32>,
    },

    /// Delete a data field (prompts for confirmation)
    #[command(alias = "rm")]
    Delete { id: Uuid },

    /// List the options of a select field
    Options { field_id: Uuid },
}

// ── Teams ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TeamArgs {
    #[command(subcommand)]
    pub command: TeamCommand,
}

#[derive(Debug, Subcommand)]
pub enum TeamCommand {
    /// List teams (all, or one MSEL's with --msel)
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Only teams attached to this MSEL
        #[arg(long, short = 'm')]
        msel: Option<Uuid>,
    },

    /// Create a team
    Create {
        name: String,
        #[arg(long)]
        short_name: String,
        #[arg(long)]
        email: Option<String>,
    },

    /// Update a team
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        short_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a team (prompts for confirmation)
    #[command(alias = "rm")]
    Delete { id: Uuid },

    /// Attach a team to an MSEL
    Attach {
        team_id: Uuid,
        #[arg(long, short = 'm')]
        msel: Uuid,
    },

    /// Detach a team from an MSEL (by association id)
    Detach { msel_team_id: Uuid },
}

// ── Units ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct UnitArgs {
    #[command(subcommand)]
    pub command: UnitCommand,
}

#[derive(Debug, Subcommand)]
pub enum UnitCommand {
    /// List units (all, or one MSEL's with --msel)
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Only units attached to this MSEL
        #[arg(long, short = 'm')]
        msel: Option<Uuid>,
    },

    /// Create a unit
    Create {
        name: String,
        #[arg(long)]
        short_name: String,
    },

    /// Update a unit
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        short_name: Option<String>,
    },

    /// Delete a unit (prompts for confirmation)
    #[command(alias = "rm")]
    Delete { id: Uuid },

    /// Attach a unit to an MSEL
    Attach {
        unit_id: Uuid,
        #[arg(long, short = 'm')]
        msel: Uuid,
    },

    /// Detach a unit from an MSEL (by association id)
    Detach { msel_unit_id: Uuid },
}

// ── Catalogs ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List catalogs
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Create a catalog
    Create {
        name: String,
        /// Inject type id the catalog is scoped to
        #[arg(long)]
        inject_type: Uuid,
        #[arg(long)]
        description: Option<String>,
        /// Readable by every content developer
        #[arg(long)]
        public: bool,
    },

    /// Update a catalog
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a catalog (prompts for confirmation)
    #[command(alias = "rm")]
    Delete { id: Uuid },

    /// List the injects of a catalog
    Injects {
        catalog_id: Uuid,
        #[command(flatten)]
        list: ListArgs,
    },

    /// List inject types
    Types,
}

// ── Injects ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InjectArgs {
    #[command(subcommand)]
    pub command: InjectCommand,
}

#[derive(Debug, Subcommand)]
pub enum InjectCommand {
    /// Create an inject
    Create {
        name: String,
        /// Inject type id
        #[arg(long)]
        inject_type: Uuid,
        #[arg(long)]
        description: Option<String>,
        /// Also attach it to this catalog
        #[arg(long)]
        catalog: Option<Uuid>,
    },

    /// Update an inject
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an inject (prompts for confirmation)
    #[command(alias = "rm")]
    Delete { id: Uuid },

    /// Attach an inject to a catalog
    Attach {
        inject_id: Uuid,
        #[arg(long)]
        catalog: Uuid,
    },

    /// Detach an inject from a catalog (by association id)
    Detach { catalog_inject_id: Uuid },
}

// ── Moves ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// The MSEL the moves belong to
    #[arg(long, short = 'm', env = "MSEL_ID", global = true)]
    pub msel: Option<Uuid>,

    #[command(subcommand)]
    pub command: MoveCommand,
}

#[derive(Debug, Subcommand)]
pub enum MoveCommand {
    /// List the MSEL's moves
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Create a move
    Create {
        /// Move number on the timeline
        #[arg(long)]
        number: i32,
        #[arg(long)]
        description: Option<String>,
        /// Offset from exercise start, in seconds
        #[arg(long, default_value = "0")]
        delta: i64,
    },

    /// Update a move
    Update {
        id: Uuid,
        #[arg(long)]
        number: Option<i32>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        delta: Option<i64>,
    },

    /// Delete a move (prompts for confirmation)
    #[command(alias = "rm")]
    Delete { id: Uuid },
}

// ── Cards ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CardArgs {
    /// The MSEL the cards belong to
    #[arg(long, short = 'm', env = "MSEL_ID", global = true)]
    pub msel: Option<Uuid>,

    #[command(subcommand)]
    pub command: CardCommand,
}

#[derive(Debug, Subcommand)]
pub enum CardCommand {
    /// List the MSEL's cards
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Create a card
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        move_number: i32,
        #[arg(long)]
        inject_number: i32,
    },

    /// Update a card
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        move_number: Option<i32>,
        #[arg(long)]
        inject_number: Option<i32>,
    },

    /// Delete a card (prompts for confirmation)
    #[command(alias = "rm")]
    Delete { id: Uuid },
}

// ── CITE ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CiteArgs {
    /// The MSEL the CITE records belong to
    #[arg(long, short = 'm', env = "MSEL_ID", global = true)]
    pub msel: Option<Uuid>,

    #[command(subcommand)]
    pub command: CiteCommand,
}

#[derive(Debug, Subcommand)]
pub enum CiteCommand {
    /// List evaluation roles
    Roles {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Create an evaluation role
    CreateRole {
        name: String,
        #[arg(long)]
        team: Uuid,
    },

    /// Delete an evaluation role (prompts for confirmation)
    DeleteRole { id: Uuid },

    /// List evaluation actions
    Actions {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Create an evaluation action
    CreateAction {
        #[arg(long)]
        team: Uuid,
        #[arg(long)]
        move_number: i32,
        #[arg(long)]
        inject_number: i32,
        #[arg(long)]
        action_number: i32,
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an evaluation action (prompts for confirmation)
    DeleteAction { id: Uuid },
}

// ── Invitations ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InvitationArgs {
    /// The MSEL the invitations belong to
    #[arg(long, short = 'm', env = "MSEL_ID", global = true)]
    pub msel: Option<Uuid>,

    #[command(subcommand)]
    pub command: InvitationCommand,
}

#[derive(Debug, Subcommand)]
pub enum InvitationCommand {
    /// List the MSEL's invitations
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Create an invitation
    Create {
        /// Restrict redemption to this email domain
        #[arg(long)]
        email_domain: Option<String>,
        /// Team joined on redemption
        #[arg(long)]
        team: Option<Uuid>,
        /// Maximum number of redemptions (0 = unlimited)
        #[arg(long, default_value = "0")]
        max_users: i32,
    },

    /// Deactivate an invitation without deleting it
    Deactivate { id: Uuid },

    /// Delete an invitation (prompts for confirmation)
    #[command(alias = "rm")]
    Delete { id: Uuid },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or update a profile interactively-ish (flags only)
    Init {
        /// Server base URL
        #[arg(long)]
        server: String,
        /// Profile name
        #[arg(long, default_value = "default")]
        name: String,
    },

    /// Show the effective configuration (tokens redacted)
    Show,

    /// Print the config file path
    Path,

    /// Store an access token in the system keyring
    SetToken {
        /// The token value; read from MSEL_TOKEN when omitted
        #[arg(long)]
        token: Option<String>,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
