//! # HTTP Control Panel
//!
//! Provides a web page for changing the display's text, brightness,
//! contrast, color, autoscroll and backlight interactively.
//!
//! ## Usage
//!
//! ```bash
//! serial-lcd --device /dev/ttyACM0 serve --listen 0.0.0.0:12000
//! ```
//!
//! Then open http://localhost:12000 in a browser.
//!
//! All requests go through one [`Worker`], so concurrent requests never
//! interleave frames on the wire.

mod handlers;
mod state;
mod static_files;

pub use handlers::display::SetForm;
pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{
    display::DisplayConfig,
    error::LcdError,
    lcd::{Command, Lcd},
    transport::{BoxedTransport, SerialTransport},
    worker::Worker,
};

/// Build the router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(static_files::index_handler))
        .route("/set", post(handlers::display::set))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// What the display shows when the server comes up.
pub fn greeting(display: &DisplayConfig) -> Vec<Command> {
    vec![
        Command::Backlight(true),
        Command::Size {
            cols: display.cols,
            rows: display.rows,
        },
        Command::Clear,
        Command::Home,
        Command::text("Hi there!"),
    ]
}

/// Open the serial device and start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use serial_lcd::{display::DisplayConfig, server::{serve, ServerConfig}};
///
/// # async fn example() -> Result<(), serial_lcd::LcdError> {
/// let config = ServerConfig {
///     device_path: "/dev/ttyACM0".to_string(),
///     baud: 9600,
///     listen_addr: "0.0.0.0:12000".to_string(),
///     display: DisplayConfig::LCD_16X2,
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), LcdError> {
    let transport = SerialTransport::open(&config.device_path, config.baud)?;
    serve_with(config, Box::new(transport)).await
}

/// Start the HTTP server on an already open transport.
pub async fn serve_with(config: ServerConfig, transport: BoxedTransport) -> Result<(), LcdError> {
    let worker = Worker::spawn(Lcd::new(transport));
    let handle = worker.handle();

    handle.run_async(greeting(&config.display)).await?;

    let app_state = Arc::new(AppState::new(handle));
    let app = router(app_state);

    println!("serial-lcd HTTP server starting...");
    println!("Listening on: {}", config.listen_addr);
    println!("Display device: {} ({} baud, {})", config.device_path, config.baud, config.display);
    println!();
    println!("Open http://{}/ in your browser", config.listen_addr);
    println!();

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| LcdError::Open(format!("Failed to bind to {}: {}", config.listen_addr, e)))?;

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(LcdError::Transport);

    // The router and its worker handles are gone once serve returns
    let closed = tokio::task::spawn_blocking(move || worker.shutdown())
        .await
        .map_err(|e| LcdError::Transport(std::io::Error::other(e)))?;

    served?;
    closed
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

// ============================================================================
// TESTS
// ============================================================================
