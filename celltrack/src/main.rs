use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod handlers;
mod output;

#[derive(Parser)]
#[command(name = "celltrack", version, about = "Cell lineage tracking parameter configuration")]
struct Cli {
    /// Preferences directory (defaults to CELLTRACK_PREFS_DIR, then ~/.celltrack)
    #[arg(long)]
    prefs_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate parameters without committing anything
    Validate {
        /// Params file to validate instead of the saved preferences
        #[arg(long)]
        params: Option<PathBuf>,
        /// Override individual parameters, e.g. --set weight_centroids=0.9
        #[arg(long = "set")]
        set: Vec<String>,
    },
    /// Print or write the default parameters
    Defaults {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the effective parameters as JSON
    Show {
        #[arg(long)]
        params: Option<PathBuf>,
    },
    /// Update preferences; only a fully valid store is persisted
    Set {
        #[arg(long = "set", required = true)]
        set: Vec<String>,
    },
    /// Describe a parameter
    Explain {
        key: String,
    },
    /// Manage named parameter profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    List,
    /// Save the current preferences under a profile name
    Save { name: String },
    Delete { name: String },
    /// Replace the preferences with a saved profile
    Load { name: String },
}

fn main() {
    let cli = Cli::parse();
    let prefs_dir = cli.prefs_dir.unwrap_or_else(handlers::default_prefs_dir);

    let code = match cli.command {
        Commands::Validate { params, set } => {
            handlers::handle_validate(&prefs_dir, params.as_deref(), &set)
        }
        Commands::Defaults { out } => handlers::handle_defaults(out.as_deref()),
        Commands::Show { params } => handlers::handle_show(&prefs_dir, params.as_deref()),
        Commands::Set { set } => handlers::handle_set(&prefs_dir, &set),
        Commands::Explain { key } => handlers::handle_explain(&key),
        Commands::Profile { command } => match command {
            ProfileCommands::List => handlers::handle_profile_list(&prefs_dir),
            ProfileCommands::Save { name } => handlers::handle_profile_save(&prefs_dir, &name),
            ProfileCommands::Delete { name } => {
                handlers::handle_profile_delete(&prefs_dir, &name)
            }
            ProfileCommands::Load { name } => handlers::handle_profile_load(&prefs_dir, &name),
        },
    };
    std::process::exit(code);
}
