//! Chouette Learning CLI - drive the storefront state from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add a course to the cart and show it
//! chouette cart add python
//! chouette cart show
//!
//! # Talk to the assistant (waits for the reply)
//! chouette chat send "Quels sont vos tarifs ?"
//!
//! # Log in and look at the profile page
//! chouette session login -e marie@exemple.fr -p secret
//! chouette render profile
//! ```
//!
//! # Commands
//!
//! - `cart` - Manage the shopping cart
//! - `chat` - Talk to the assistant
//! - `session` - Log in and out
//! - `render` - Render a page surface to stdout
//!
//! State lives as JSON files under `CHOUETTE_STATE_DIR` (default
//! `.chouette`), so every invocation picks up where the previous one
//! left off.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "chouette")]
#[command(author, version, about = "Chouette Learning storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Talk to the assistant
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },
    /// Log in and out
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// Render a page surface to stdout
    Render {
        /// Page to render (home, courses, cart, chat, profile, login)
        page: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a course by catalog id, or any id with --name and --price
    Add {
        /// Course id (catalog: python, ux-ui-design, javascript, agile, ia, react)
        id: String,

        /// Display name, required for ids outside the catalog
        #[arg(short, long)]
        name: Option<String>,

        /// Unit price such as "49.99", required for ids outside the catalog
        #[arg(short, long)]
        price: Option<String>,
    },
    /// Show the cart contents and totals
    Show,
    /// Raise the quantity of a line by one
    Increment {
        /// Course id
        id: String,
    },
    /// Lower the quantity of a line by one, dropping it at one
    Decrement {
        /// Course id
        id: String,
    },
    /// Remove a line regardless of quantity
    Remove {
        /// Course id
        id: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum ChatAction {
    /// Send a message to the assistant
    Send {
        /// Message content
        message: String,

        /// Return immediately; the pending reply is lost, like closing the
        /// page before the assistant answers
        #[arg(long)]
        no_wait: bool,
    },
    /// Show the transcript
    Show,
    /// Wipe the transcript
    Clear {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Log in (123 / 123 opens the demo account)
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (at least 4 characters)
        #[arg(short, long)]
        password: String,
    },
    /// Log out
    Logout,
    /// Show the current session
    Show,
}

#[tokio::main]
async fn main() {
    // Load .env before the subscriber so RUST_LOG can come from it
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let app = commands::open_app()?;

    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add { id, name, price } => {
                commands::cart::add(&app, &id, name, price)?;
            }
            CartAction::Show => commands::cart::show(&app),
            CartAction::Increment { id } => commands::cart::increment(&app, &id),
            CartAction::Decrement { id } => commands::cart::decrement(&app, &id),
            CartAction::Remove { id } => commands::cart::remove(&app, &id),
            CartAction::Clear => commands::cart::clear(&app),
        },
        Commands::Chat { action } => match action {
            ChatAction::Send { message, no_wait } => {
                commands::chat::send(&app, &message, no_wait).await?;
            }
            ChatAction::Show => commands::chat::show(&app),
            ChatAction::Clear { yes } => commands::chat::clear(&app, yes)?,
        },
        Commands::Session { action } => match action {
            SessionAction::Login { email, password } => {
                commands::session::login(&app, &email, &password)?;
            }
            SessionAction::Logout => commands::session::logout(&app),
            SessionAction::Show => commands::session::show(&app),
        },
        Commands::Render { page } => commands::render::page(&app, &page).await?,
    }
    Ok(())
}
