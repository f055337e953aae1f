use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sydney_buses_live::api;
use sydney_buses_live::location::{self, ConfiguredLocation};
use sydney_buses_live::realtime::{FeedPoller, HttpFeedSource};
use sydney_buses_live::session::{self, ViewerPosition};

#[derive(Parser)]
#[command(name = "sydney-buses-live")]
#[command(about = "Live bus position view service")]
struct Args {
    /// Port to run the HTTP server on
    #[arg(short, long, env = "SERVER_PORT", default_value = "8080")]
    port: u16,

    /// Upstream realtime bus feed endpoint
    #[arg(long, env = "FEED_URL", default_value = "http://127.0.0.1:3000/api/buses")]
    feed_url: String,

    /// Viewer latitude; central Sydney is used when not set
    #[arg(long, env = "VIEWER_LAT")]
    viewer_lat: Option<f64>,

    /// Viewer longitude; central Sydney is used when not set
    #[arg(long, env = "VIEWER_LON")]
    viewer_lon: Option<f64>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    info!(feed_url = %args.feed_url, "starting Sydney buses live view service");

    let session = session::shared();

    let configured = match (args.viewer_lat, args.viewer_lon) {
        (Some(latitude), Some(longitude)) => Some(ViewerPosition { latitude, longitude }),
        _ => None,
    };
    location::resolve_viewer(&ConfiguredLocation::new(configured), &session).await;

    let poller = FeedPoller::spawn(HttpFeedSource::new(args.feed_url), session.clone());

    let server_session = session.clone();
    let port = args.port;
    let server_handle = tokio::spawn(async move {
        api::server::run_server(server_session, port).await
    });

    tokio::select! {
        result = server_handle => match result {
            Ok(Err(e)) => error!(error = %e, "API server exited"),
            _ => error!("API server task ended"),
        },
        _ = tokio::signal::ctrl_c() => info!("shutdown requested"),
    }

    poller.stop().await;
}
