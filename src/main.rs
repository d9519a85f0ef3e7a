use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use devfolio::email::SmtpMailer;
use devfolio::routes::{router, AppState};
use devfolio_form::{ContactForm, Field, HttpSubmitClient, SubmitOutcome};

/// devfolio - personal portfolio site with a contact relay
#[derive(Parser)]
#[command(name = "devfolio")]
#[command(about = "Personal portfolio site with a contact relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit a contact message to a running server
    Send {
        /// Base URL of the server
        #[arg(long, default_value = "http://localhost:3000")]
        url: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = devfolio::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    devfolio::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Send {
            url,
            name,
            email,
            subject,
            message,
        } => send_command(url, name, email, subject, message).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: devfolio::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting devfolio server...");

    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    let mailer = SmtpMailer::new(&config.email)?;

    let state = AppState {
        mailer: Arc::new(mailer),
    };

    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Drive the form controller against a running server, the same way the
/// browser-side form does.
async fn send_command(
    url: String,
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<()> {
    let mut form = ContactForm::new();
    form.update_field(Field::Name, name);
    form.update_field(Field::Email, email);
    form.update_field(Field::Subject, subject);
    form.update_field(Field::Message, message);

    let client = HttpSubmitClient::new(url);

    match form.submit(&client).await {
        SubmitOutcome::Sent => {
            tracing::info!("Message sent");
            Ok(())
        }
        SubmitOutcome::Failed => Err(anyhow::anyhow!("submission failed, please retry")),
        SubmitOutcome::InFlight => unreachable!("no concurrent submission from the CLI"),
    }
}
