use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stunning_api::types::LayerKind;
use stunning_core::config::AppConfig;
use stunning_core::query::QueryState;

use stunning_studio::app::App;
use stunning_studio::error::AppError;
use stunning_studio::screen::clients::ClientsScreen;
use stunning_studio::screen::lookbook::LookbookScreen;
use stunning_studio::screen::ready;
use stunning_studio::screen::studio::StudioScreen;

#[derive(Debug, Parser)]
#[command(name = "stunning", version, about = "AI modeling studio client")]
struct Cli {
    /// Backend address; overrides config and STUNNING_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in and store the access token.
    Login {
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored access token.
    Logout,
    /// Show the logged-in user.
    Me,
    /// List clients.
    Clients {
        #[arg(long)]
        search: Option<String>,
    },
    /// Preview a client's theme variables. The selection is not kept
    /// between runs.
    UseClient { id: i64 },
    /// List a client's models.
    Models {
        #[arg(long)]
        client: i64,
    },
    /// List styling layers.
    Layers {
        #[arg(long)]
        kind: Option<LayerKind>,
    },
    /// Generate an image for a model.
    Generate {
        #[arg(long)]
        model: i64,
        #[arg(long)]
        hair: Option<i64>,
        #[arg(long)]
        outfit: Option<i64>,
        #[arg(long)]
        scene: Option<i64>,
        #[arg(long, default_value = "")]
        prompt: String,
    },
    /// Browse past generations.
    History {
        #[arg(long)]
        model: Option<i64>,
    },
    /// List lookbooks and their entries.
    Lookbooks {
        #[arg(long)]
        client: Option<i64>,
    },
    /// Print the configured theme as CSS variables.
    Theme,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stunning=info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    config.apply_api_url_override(cli.api_url);
    let mut app = App::from_config(&config)?;

    let result = execute(&mut app, cli.command).await;
    if app.needs_login() {
        eprintln!("Session expired or not logged in; run `stunning login`.");
    }
    result
}

async fn execute(app: &mut App, command: Command) -> Result<(), AppError> {
    match command {
        Command::Login { username, password } => {
            app.api.auth().login(&username, &password).await?;
            println!("Logged in as {username}");
        }
        Command::Logout => {
            app.api.auth().logout()?;
            println!("Logged out");
        }
        Command::Me => {
            let user = app.api.auth().me().await?;
            println!("{} <{}> ({})", user.username, user.email, user.role);
        }
        Command::Clients { search } => {
            let mut screen = ClientsScreen::new();
            screen.search = search.unwrap_or_default();
            ready("clients", screen.load(&app.api).await)?;
            for client in screen.visible() {
                println!("{:>5}  {}", client.id, client.name);
            }
        }
        Command::UseClient { id } => {
            let client = app.select_client(id).await?;
            println!("Client: {}", client.name);
            println!("{}", app.style.to_css());
        }
        Command::Models { client } => {
            let mut screen = StudioScreen::new();
            let models = ready("models", screen.load_models(&app.api, client).await)?;
            for model in models {
                println!("{:>5}  {}", model.id, model.name);
            }
        }
        Command::Layers { kind } => {
            for layer in app.api.layers().list(kind).await? {
                println!("{:>5}  {:<7} {}", layer.id, layer.kind, layer.name);
            }
        }
        Command::Generate {
            model,
            hair,
            outfit,
            scene,
            prompt,
        } => {
            let mut screen = StudioScreen::new();
            screen.load_layers(&app.api).await;
            for (kind, id) in [
                (LayerKind::Hair, hair),
                (LayerKind::Outfit, outfit),
                (LayerKind::Scene, scene),
            ] {
                if let Some(id) = id {
                    let known = screen
                        .layers(kind)
                        .and_then(QueryState::data)
                        .is_some_and(|layers| layers.iter().any(|l| l.id == id));
                    if !known {
                        tracing::warn!(%kind, id, "layer not found in loaded list");
                    }
                }
                screen.select_layer(kind, id);
            }
            screen.prompt = prompt;
            let image = screen.generate(&app.api, model).await?;
            println!("Generated: {image}");
        }
        Command::History { model } => {
            let mut screen = LookbookScreen::new();
            screen.selected_model_id = model;
            let histories = ready("history", screen.load(&app.api).await)?;
            for history in histories {
                println!(
                    "{:>5}  model {}  {}  {}  -> {}",
                    history.id,
                    history.model_id,
                    history.created_at.format("%Y-%m-%d"),
                    LookbookScreen::prompt_preview(history),
                    LookbookScreen::restore_route(history.id),
                );
            }
        }
        Command::Lookbooks { client } => {
            for lookbook in app.api.lookbooks().list(client).await? {
                let entries = app.api.lookbooks().entries(lookbook.id).await?;
                println!(
                    "{:>5}  {}  ({} entries)",
                    lookbook.id,
                    lookbook.name,
                    entries.len()
                );
            }
        }
        Command::Theme => {
            println!("{}", app.style.to_css());
        }
    }
    Ok(())
}
