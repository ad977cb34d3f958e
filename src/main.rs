use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use zonetime::api;
use zonetime::server;
use zonetime::zones::ZoneTable;

#[derive(Parser)]
#[command(name = "zonetime")]
#[command(about = "Wall-clock lookup server for timezone abbreviations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Zonetime API",
        description = "Current wall-clock time lookup for timezone abbreviations",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_get_time),
    components(schemas(api::ErrorResponse)),
    tags(
        (name = "Time", description = "Timezone abbreviation lookup")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let table = ZoneTable::new();

    println!("Zonetime v{VERSION}");
    println!("Wall-clock lookup server for timezone abbreviations\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:8080 (default)")
    );

    println!("\nZone Table:");
    println!("  {} abbreviations built in", table.len());

    println!("\nCommands:");
    println!("  zonetime serve   Start the HTTP server");
    println!("\nRun 'zonetime --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zonetime=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let state = server::create_app_state();
    tracing::info!(zones = state.zones.len(), "Zone table loaded");

    // Build router: shared API routes plus OpenAPI documentation
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Zonetime server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
