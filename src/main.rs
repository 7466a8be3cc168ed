use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use dur::config;
use dur::{RegistryError, UserRecord, UserRegistry};

fn build_registry(config_file: Option<&str>, env_file: Option<&str>) -> Result<UserRegistry, RegistryError> {
    config::load_env_file(env_file);
    let path = config::config_path(config_file);
    let module_config = config::load_module_config(&path)?;
    UserRegistry::from_config(&module_config)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn user_row(user: &UserRecord) -> Vec<String> {
    vec![
        user.name.clone(),
        user.password.clone(),
        user.roles.join(", "),
        user.email.clone().unwrap_or_default(),
        if user.is_root { "yes".to_string() } else { String::new() },
    ]
}

fn print_users<'a>(users: impl IntoIterator<Item = &'a UserRecord>) {
    let mut table = new_table();
    table.set_header(vec!["Name", "Password", "Roles", "Email", "Root"]);
    for user in users {
        table.add_row(user_row(user));
    }
    println!("\n{table}\n");
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", yansi::Paint::new(message.to_string()).red());
    process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "dur",
    author,
    version,
    about = "Synthetic test users for end-to-end suites",
    long_about = r#"dur reads the DrupalUserRegistry module configuration and prints the test users it defines.

The configuration is either an explicit `users` list or a list of `roles` from which one user per role is derived.
Pass a suite file (e.g. codeception.yml) or a file holding only the module section.

Examples:
  1) List every test user:
      dur --config tests/acceptance.suite.yml list
  2) Find the user for a role:
      dur by-role editor
"#,
    after_help = "The configuration path falls back to $DUR_CONFIG, then ./codeception.yml."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to the YAML configuration file
    #[arg(long, global = true)]
    config: Option<String>,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List all test users
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one test user
    Show {
        username: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the root test user
    Root,
    /// Show the first test user holding a role
    ByRole { role: String },
    /// List the roles held by the configured users
    Roles,
    #[command(about = "Validate configuration", long_about = "Load the configuration, build the roster and report which user source was selected.")]
    CheckConfig,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    let registry = match build_registry(cli.config.as_deref(), cli.env_file.as_deref()) {
        Ok(registry) => registry,
        Err(e) => fail(e),
    };

    match cli.command {
        Commands::List { json } => {
            if json {
                if let Err(e) = print_json(registry.users()) {
                    fail(e);
                }
            } else {
                print_users(registry.users());
            }
        }
        Commands::Show { username, json } => match registry.get_user(&username) {
            Ok(user) if json => {
                if let Err(e) = print_json(user) {
                    fail(e);
                }
            }
            Ok(user) => print_users([user]),
            Err(e) => fail(e),
        },
        Commands::Root => match registry.get_root_user() {
            Ok(user) => print_users([user]),
            Err(e) => fail(e),
        },
        Commands::ByRole { role } => match registry.get_user_by_role(&role) {
            Ok(user) => print_users([user]),
            Err(e) => fail(e),
        },
        Commands::Roles => {
            let mut table = new_table();
            table.set_header(vec!["Role"]);
            for role in registry.get_roles() {
                table.add_row(vec![role]);
            }
            println!("\n{table}\n");
        }
        Commands::CheckConfig => {
            println!(
                "{} ({} source, {} users)",
                yansi::Paint::new("Configuration looks valid").green(),
                registry.kind(),
                registry.users().len()
            );
        }
    }
}
