use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use linkedin_oauth::cli::commands;
use linkedin_oauth::cli::output::{print_error, print_response, OutputMode};
use linkedin_oauth::{LinkedInError, OAuthConfig};

#[derive(Parser)]
#[command(name = "linkedin-oauth", version, about = "LinkedIn OAuth 2.0 and profile API client")]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Structured JSON output
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    credentials: CredentialArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CredentialArgs {
    /// Application client ID (overrides LINKEDIN_CLIENT_ID)
    #[arg(long, global = true)]
    client_id: Option<String>,

    /// Application client secret (overrides LINKEDIN_CLIENT_SECRET)
    #[arg(long, global = true)]
    client_secret: Option<String>,

    /// Registered redirect URI (overrides LINKEDIN_REDIRECT_URI)
    #[arg(long, global = true)]
    redirect_uri: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the authorization URL to send the user to
    #[command(name = "auth-url")]
    AuthUrl {
        /// Requested scopes
        #[arg(long = "scope", value_delimiter = ',')]
        scopes: Vec<String>,

        /// Opaque state echoed back on the redirect
        #[arg(long, conflicts_with = "random_state")]
        state: Option<String>,

        /// Generate a random state
        #[arg(long)]
        random_state: bool,
    },

    /// Authorize in the browser and exchange the code via a loopback redirect
    Login {
        /// Requested scopes
        #[arg(long = "scope", value_delimiter = ',')]
        scopes: Vec<String>,

        /// Print the URL instead of opening a browser
        #[arg(long)]
        no_browser: bool,

        /// How long to wait for the redirect, in milliseconds
        #[arg(long, env = "LINKEDIN_OAUTH_TIMEOUT_MS", default_value_t = 120_000)]
        timeout_ms: u64,
    },

    /// Exchange an authorization code for an access token
    Exchange {
        /// Authorization code from the redirect
        code: String,
    },

    /// Obtain a new access token from a refresh token
    Refresh {
        #[arg(long, env = "LINKEDIN_REFRESH_TOKEN")]
        token: String,
    },

    /// Ask LinkedIn about a token's validity and metadata
    Introspect {
        #[arg(long, env = "LINKEDIN_ACCESS_TOKEN")]
        token: String,
    },

    /// Fetch the authenticated member's profile
    Profile {
        #[arg(long, env = "LINKEDIN_ACCESS_TOKEN")]
        token: String,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Display the resolved config with the secret masked
    Show,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("LINKEDIN_OAUTH_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Pretty
    };

    if let Err(e) = run(cli, mode).await {
        print_error(&e, mode, std::io::stderr().is_terminal());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, mode: OutputMode) -> Result<(), LinkedInError> {
    let overrides = OAuthConfig {
        client_id: cli.credentials.client_id,
        client_secret: cli.credentials.client_secret,
        redirect_uri: cli.credentials.redirect_uri,
        ..Default::default()
    };
    let config = linkedin_oauth::load_config(cli.config.as_deref())?.merge(overrides);
    let is_tty = std::io::stdout().is_terminal();

    let response = match cli.command {
        Commands::AuthUrl {
            scopes,
            state,
            random_state,
        } => {
            let client = commands::build_client(&config)?;
            let scopes = commands::effective_scopes(scopes, &config);
            let url = commands::run_auth_url(&client, &scopes, state.as_deref(), random_state);
            if mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "url": url }));
            } else {
                println!("{url}");
            }
            return Ok(());
        }
        Commands::Login {
            scopes,
            no_browser,
            timeout_ms,
        } => {
            let client = commands::build_client(&config)?;
            let scopes = commands::effective_scopes(scopes, &config);
            let timeout = std::time::Duration::from_millis(timeout_ms);
            commands::run_login(&client, &scopes, !no_browser, timeout).await?
        }
        Commands::Exchange { code } => {
            let client = commands::build_client(&config)?;
            commands::run_exchange(&client, &code).await?
        }
        Commands::Refresh { token } => {
            let mut client = commands::build_client(&config)?;
            commands::run_refresh(&mut client, &token).await?
        }
        Commands::Introspect { token } => {
            let mut client = commands::build_client(&config)?;
            commands::run_introspect(&mut client, &token).await?
        }
        Commands::Profile { token } => {
            let mut client = commands::build_client(&config)?;
            commands::run_profile(&mut client, &token).await?
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("{}", commands::run_config_show(&config)?);
                return Ok(());
            }
        },
    };

    print_response(&response, mode, is_tty);
    Ok(())
}
