//! Venue Hub CLI
//!
//! Command-line access to the navigation core:
//! - Resolve a path against a session state
//! - Print the menus and layout a role gets
//! - Clear booking history against the API
//! - Generate a default config file

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use venue_hub::history::ReqwestHistoryClient;
use venue_hub::{
    clear_history, generate_default_config, resolve, BottomBar, ClearHistoryOutcome, Config,
    LayoutMode, MenuItem, MenuTarget, Navigator, Role, RoleMenus, RouteDecision, SessionStatus,
    UserStatus,
};

#[derive(Parser)]
#[command(name = "venue-hub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and exercise Venue Hub navigation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: user config dir, /etc/venue-hub, ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show how the router handles a path
    Route {
        /// Location path, e.g. /admin/manage-users
        path: String,
        /// Session state
        #[arg(short, long, value_enum, default_value = "signed-in")]
        session: SessionArg,
        /// User id for a signed-in session
        #[arg(long, default_value = "user_cli")]
        user_id: String,
    },

    /// Show the menus a role gets
    Menu {
        /// Role of the user
        #[arg(short, long, default_value = "user")]
        role: Role,
        /// Viewport width in pixels
        #[arg(short, long, default_value = "1280")]
        width: f64,
        /// Treat the user as banned
        #[arg(long)]
        banned: bool,
    },

    /// Clear the signed-in user's booking history
    ClearHistory {
        /// Session token
        #[arg(short, long)]
        token: String,
        /// API base URL (overrides config)
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SessionArg {
    Loading,
    SignedOut,
    SignedIn,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config);

    match cli.command {
        Commands::Route {
            path,
            session,
            user_id,
        } => {
            let status = match session {
                SessionArg::Loading => SessionStatus::Unresolved,
                SessionArg::SignedOut => SessionStatus::SignedOut,
                SessionArg::SignedIn => SessionStatus::signed_in(user_id),
            };

            match resolve(&status, &path) {
                RouteDecision::Loading => println!("loading (auth not resolved)"),
                RouteDecision::Render(route) => {
                    let shell = if route.is_public() { "" } else { " inside layout" };
                    println!("render {} ({}){}", route.path(), route.title(), shell);
                }
                RouteDecision::Redirect(route) => println!("redirect -> {}", route.path()),
                RouteDecision::NotFound => println!("not found"),
            }
        }

        Commands::Menu {
            role,
            width,
            banned,
        } => {
            let mut status = UserStatus::new(role);
            status.banned = banned;

            let Some(menus) = RoleMenus::for_status(&status) else {
                println!("banned: menus replaced by the banned notice");
                return Ok(());
            };

            let mut navigator = Navigator::new();
            navigator.initialize(menus);

            match LayoutMode::for_width(width, config.layout.mobile_breakpoint_px) {
                LayoutMode::Desktop => {
                    println!("Desktop sidebar ({})", role);
                    print_items(menus.primary(), &navigator);
                    println!("  ────────────");
                    print_items(menus.secondary(), &navigator);
                }
                LayoutMode::Mobile => {
                    let bar = BottomBar::new(menus);
                    let selected = bar.selected_slot(&navigator);
                    println!("Mobile bottom bar ({})", role);
                    for (index, item) in bar.slots().into_iter().enumerate() {
                        let marker = if selected == Some(index) { "*" } else { " " };
                        println!("{} [{}] {} {}", marker, index, item.icon.glyph(), item.label);
                    }
                }
            }
        }

        Commands::ClearHistory { token, api_url } => {
            let api_base = api_url.unwrap_or_else(|| config.api_base().to_string());
            let client = ReqwestHistoryClient::new(&api_base);

            match clear_history(&client, Ok(token)).await {
                ClearHistoryOutcome::Reload => println!("History cleared"),
                ClearHistoryOutcome::Alert(message) => {
                    eprintln!("{}", message);
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("venue_hub={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_items(items: &[MenuItem], navigator: &Navigator) {
    for item in items {
        let marker = if navigator.is_selected(item) { "*" } else { " " };
        let target = match item.target {
            MenuTarget::Route(route) => route.to_string(),
            MenuTarget::Action(action) => format!("{:?}", action),
        };
        println!("{} {} {:<16} {}", marker, item.icon.glyph(), item.label, target);
    }
}
