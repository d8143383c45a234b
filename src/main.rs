use clap::Parser;
use pizzeria::{
    api::{handlers::AppState, routes},
    cli::{commands, Cli, Commands},
    config::Settings,
    Error, Result,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pizzeria=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_env()?;
    settings.validate()?;

    match cli.command {
        Commands::Serve { port, host } => {
            serve(settings, port, host).await?;
        }
        Commands::List { json } => {
            let state = AppState::from_settings(settings)?;
            commands::list(&state, json).await?;
        }
        Commands::Show { id, json } => {
            let state = AppState::from_settings(settings)?;
            commands::show(&state, &id, json).await?;
        }
    }

    Ok(())
}

async fn serve(mut settings: Settings, port: Option<u16>, host: Option<String>) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }
    settings.validate()?;

    info!("Starting Pizzeria front-end");
    info!(
        "Upstream API: {}{}",
        settings.upstream.base_url, settings.upstream.items_path
    );
    info!("Server: {}:{}", settings.server.host, settings.server.port);

    let state = AppState::from_settings(settings.clone())?;
    let app = routes::create_router(state, &settings);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    println!("\n========================================");
    println!("Pizzeria");
    println!("========================================");
    println!("Address: http://{addr}");
    println!(
        "Upstream: {}{}",
        settings.upstream.base_url, settings.upstream.items_path
    );
    println!("\nPages:");
    println!("  GET  /");
    println!("  GET  /pizzas/:id");
    println!("\nAPI Endpoints:");
    println!("  GET  /api/pizzas");
    println!("  GET  /api/pizzas/:id");
    println!("  GET  /health");
    println!("\nPress Ctrl+C to stop");
    println!("========================================\n");

    info!("Server listening on {}", addr);

    // Peer addresses feed the per-IP rate limiter
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}
