mod auth;
mod catalog;
mod compare;
mod render;
mod shell;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shopcmp_client::ShopClient;
use shopcmp_core::{Language, ProductId};
use shopcmp_queue::QueueManager;
use shopcmp_session::{Session, SessionError, TokenStore};

#[derive(Debug, Parser)]
#[command(name = "shopcmp")]
#[command(about = "Search, review and compare products from the command line")]
struct Cli {
    /// Browse and compare without signing in
    #[arg(long, global = true)]
    guest: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search the catalog
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Show a product with its specifications
    Product { id: ProductId },
    /// Show one page of a product's reviews
    Reviews {
        id: ProductId,
        #[arg(long, default_value = "1")]
        page: u32,
    },
    /// Compare products by id
    Compare {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<ProductId>,
        /// Language of the comparison (en or vi); defaults to SHOPCMP_LANGUAGE
        #[arg(long)]
        lang: Option<Language>,
    },
    /// Interactive comparison queue
    Shell {
        #[arg(long)]
        lang: Option<Language>,
    },
    /// Sign in and remember the token
    Login {
        username: String,
        #[arg(long, env = "SHOPCMP_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        full_name: Option<String>,
    },
    /// Forget the stored token
    Logout,
    /// Show who is signed in
    Whoami,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = shopcmp_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("{LANDING}");
        return Ok(());
    };

    let client = Arc::new(ShopClient::from_app_config(&config)?);
    let store = TokenStore::new(config.token_path.clone());
    let mut session = Session::restore(Arc::clone(&client), store).await?;
    if cli.guest {
        session.enter_guest();
    }

    match command {
        Commands::Search { query } => {
            gate(session.require_catalog())?;
            catalog::run_search(&client, &query.join(" ")).await?;
        }
        Commands::Product { id } => {
            gate(session.require_catalog())?;
            catalog::run_product(&client, &id).await?;
        }
        Commands::Reviews { id, page } => {
            gate(session.require_catalog())?;
            catalog::run_reviews(&client, &id, page).await?;
        }
        Commands::Compare { ids, lang } => {
            gate(session.require_compare())?;
            let manager = QueueManager::from_app_config(Arc::clone(&client), &config);
            compare::run_compare(&manager, ids, lang.unwrap_or(config.language)).await?;
        }
        Commands::Shell { lang } => {
            gate(session.require_compare())?;
            let manager = QueueManager::from_app_config(Arc::clone(&client), &config);
            shell::run_shell(&client, &manager, lang.unwrap_or(config.language)).await?;
        }
        Commands::Login { username, password } => {
            auth::run_login(&mut session, &username, &password).await?;
        }
        Commands::Signup {
            email,
            username,
            password,
            full_name,
        } => {
            auth::run_signup(&session, email, username, password, full_name).await?;
        }
        Commands::Logout => auth::run_logout(&mut session)?,
        Commands::Whoami => auth::run_whoami(&session),
    }

    Ok(())
}

const LANDING: &str = "shopcmp: compare products side by side.\n\n\
Sign in with `shopcmp login <username>` or add --guest to browse without an account.\n\
Run `shopcmp --help` for the list of commands.";

/// Turns a missing capability into the landing hint.
fn gate(check: Result<(), SessionError>) -> anyhow::Result<()> {
    check.map_err(|e| {
        anyhow::anyhow!("{e}: sign in with `shopcmp login <username>` or pass --guest")
    })
}

#[cfg(test)]
mod tests;
