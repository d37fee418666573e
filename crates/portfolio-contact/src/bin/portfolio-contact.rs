use std::path::PathBuf;

use clap::{Parser, Subcommand};

use portfolio_contact::backend::BackendClient;
use portfolio_contact::config::ContactConfig;
use portfolio_contact::form::{ContactFields, ContactForm, FeedbackKind};
use portfolio_contact::prefs::{PreferenceStore, Theme};
use portfolio_contact::relay::RelayClient;

#[derive(Parser)]
#[command(name = "portfolio-contact", about = "Send a contact message or manage site preferences")]
struct Cli {
    /// Preferences file (overrides PORTFOLIO_PREFS_PATH)
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit the contact form
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long)]
        message: String,
        /// Relay endpoint (overrides PORTFOLIO_RELAY_URL)
        #[arg(long)]
        relay_url: Option<String>,
        /// Backend base URL (overrides PORTFOLIO_BACKEND_URL)
        #[arg(long)]
        backend_url: Option<String>,
    },
    /// Show, toggle or set the theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    Show,
    Toggle,
    Set { theme: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_contact=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut config = ContactConfig::from_env();
    if let Some(prefs) = cli.prefs {
        config.prefs_path = prefs;
    }

    match cli.command {
        Command::Send { name, email, subject, message, relay_url, backend_url } => {
            if let Some(url) = relay_url {
                config.relay_url = url;
            }
            if let Some(url) = backend_url {
                config.backend_url = url;
            }
            send(&config, ContactFields { name, email, subject, message }).await
        }
        Command::Theme { action } => theme(&config, action.unwrap_or(ThemeAction::Show)),
    }
}

async fn send(config: &ContactConfig, fields: ContactFields) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let mut form = ContactForm::new(
        RelayClient::new(client.clone(), &config.relay_url, &config.access_key),
        BackendClient::new(client, &config.backend_url),
    );
    form.fields = fields;

    let feedback = form.submit().await;

    // Let the backend copy land before the process exits
    form.drain_side_writes().await;

    match feedback.kind {
        FeedbackKind::Success => println!("{}", feedback.message),
        FeedbackKind::Error => anyhow::bail!("{}", feedback.message),
    }
    Ok(())
}

fn theme(config: &ContactConfig, action: ThemeAction) -> anyhow::Result<()> {
    let store = PreferenceStore::new(&config.prefs_path);

    let current = match action {
        ThemeAction::Show => store.theme(),
        ThemeAction::Toggle => store.toggle_theme()?,
        ThemeAction::Set { theme } => {
            let theme: Theme = theme.parse()?;
            store.set_theme(theme)?;
            theme
        }
    };

    println!("{}", current);
    Ok(())
}
