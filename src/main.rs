use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use rentlog::cli::{
    handle_bill_command, handle_new_command, handle_payment_command, handle_property_command,
    handle_save_as_command, handle_summary_command, handle_tenant_command, BillCommands,
    PaymentCommands, PropertyCommands, Shell, TenantCommands,
};
use rentlog::config::{ProfilePreference, RentlogPaths, Settings};
use rentlog::gateway::{Affordances, HostProfile};
use rentlog::logging::init_cli_logger;
use rentlog::RentlogError;

#[derive(Parser)]
#[command(
    name = "rentlog",
    version,
    about = "Record keeping for landlords",
    long_about = "RentLog keeps track of properties, tenants, bills and payments \
                  in a single JSON file that you choose. Every command opens the \
                  file, and commands that change it save it back."
)]
struct Cli {
    /// Data file to open (or to create with `new`)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// How files are opened and saved
    #[arg(long, global = true, value_enum)]
    profile: Option<ProfileArg>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProfileArg {
    /// Reusable file handles when available
    Auto,
    /// Open a file and save back to it
    Handle,
    /// Read an uploaded file and save by downloading a copy
    Fallback,
}

impl From<ProfileArg> for ProfilePreference {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Auto => ProfilePreference::Auto,
            ProfileArg::Handle => ProfilePreference::Handle,
            ProfileArg::Fallback => ProfilePreference::Fallback,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new data file with a starter property
    New {
        /// Replace the file named by --file if it exists
        #[arg(long)]
        force: bool,
    },

    /// Show the dashboard
    #[command(alias = "dashboard")]
    Summary,

    /// Property management commands
    #[command(subcommand)]
    Property(PropertyCommands),

    /// Tenant management commands
    #[command(subcommand)]
    Tenant(TenantCommands),

    /// Bill commands
    #[command(subcommand)]
    Bill(BillCommands),

    /// Payment commands
    #[command(subcommand)]
    Payment(PaymentCommands),

    /// Save the current file under a new name
    SaveAs {
        /// Where to save the copy (file or folder); asked for when omitted.
        /// Not accepted with --profile fallback, which always downloads
        target: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    // Initialize paths and settings
    let paths = RentlogPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let preference = cli
        .profile
        .map(ProfilePreference::from)
        .unwrap_or(settings.host_profile);
    // Local files can always be reopened and rewritten
    let profile = preference.resolve(true);

    let Some(command) = cli.command else {
        println!("RentLog - record keeping for landlords");
        println!();
        println!("Run 'rentlog --help' for usage information.");
        println!("Run 'rentlog new --file rentlog-data.json' to start a new file.");
        return Ok(());
    };

    // The file the user is working on: named explicitly, or the last one used
    let current_file = cli.file.clone().or_else(|| match profile {
        HostProfile::Handle => settings.recent_file.clone(),
        HostProfile::Fallback => None,
    });

    match command {
        Commands::New { force } => {
            let target = cli.file.clone();
            let mut shell = Shell::new(paths, settings, profile, target.clone().into_iter().collect());
            handle_new_command(&mut shell, target.as_deref(), force)?;
        }
        Commands::Summary => {
            let mut shell = Shell::new(paths, settings, profile, current_file.into_iter().collect());
            handle_summary_command(&mut shell)?;
        }
        Commands::Property(cmd) => {
            let mut shell = Shell::new(paths, settings, profile, current_file.into_iter().collect());
            handle_property_command(&mut shell, cmd)?;
        }
        Commands::Tenant(cmd) => {
            let mut shell = Shell::new(paths, settings, profile, current_file.into_iter().collect());
            handle_tenant_command(&mut shell, cmd)?;
        }
        Commands::Bill(cmd) => {
            let mut shell = Shell::new(paths, settings, profile, current_file.into_iter().collect());
            handle_bill_command(&mut shell, cmd)?;
        }
        Commands::Payment(cmd) => {
            let mut shell = Shell::new(paths, settings, profile, current_file.into_iter().collect());
            handle_payment_command(&mut shell, cmd)?;
        }
        Commands::SaveAs { target } => {
            let source = current_file.ok_or_else(|| {
                RentlogError::Validation(
                    "No current file. Use --file to choose the file to copy".into(),
                )
            })?;
            let answers = std::iter::once(source).chain(target.clone()).collect();
            let mut shell = Shell::new(paths, settings, profile, answers);
            handle_save_as_command(&mut shell, target.as_deref())?;
        }
        Commands::Config => {
            let affordances = Affordances::for_profile(profile);
            println!("RentLog Configuration");
            println!("=====================");
            println!("Config directory:    {}", paths.base_dir().display());
            println!("Settings file:       {}", paths.settings_file().display());
            println!("Downloads directory: {}", paths.downloads_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Profile:           {:?} (using {})", settings.host_profile, profile);
            println!("  Save action:       {}", affordances.save_label);
            println!("  Default file name: {}", settings.default_file_name);
            match &settings.recent_file {
                Some(path) => println!("  Recent file:       {}", path.display()),
                None => println!("  Recent file:       (none)"),
            }
        }
    }

    Ok(())
}
