use std::process;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer};
use tracing_subscriber::{fmt::{writer::BoxMakeWriter, Layer}, layer::SubscriberExt, EnvFilter, Registry};

use chain::SimulatedChain;
use db::tx::TxRepository;
use routes::tx::PaymentService;

mod chain;
mod db;
mod error;
mod routes;

#[tokio::main]
async fn main() {

    // optional fields
    let port = dotenv::var("PORT").unwrap_or("3000".to_string()).parse::<u16>().unwrap();
    let log_file = dotenv::var("LOG_FILE").unwrap_or("app.log".to_string());
    let processing_delay_ms = dotenv::var("PROCESSING_DELAY_MS").unwrap_or("1000".to_string()).parse::<u64>().unwrap();
    let verify_success_rate = dotenv::var("VERIFY_SUCCESS_RATE").unwrap_or("0.9".to_string()).parse::<f64>().unwrap();

    // add tracing layer
    let file_appender = tracing_appender::rolling::never(".", &log_file);
    let (file_writer, _file_guard) = tracing_appender::non_blocking(file_appender);
    let (stdout_writer, _stdout_guard) = tracing_appender::non_blocking(std::io::stdout());

    let file_layer = Layer::new().json().with_writer(BoxMakeWriter::new(move || file_writer.clone()));
    let stdout_layer = Layer::new().with_writer(BoxMakeWriter::new(move || stdout_writer.clone()));

    let subscriber = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(file_layer)
        .with(stdout_layer);

    tracing::subscriber::set_global_default(subscriber).expect("Unable to set global subscriber");

    let listener = match TcpListener::bind(("0.0.0.0", port)).await {
        Ok(port) => {
            tracing::info!("Listening on port: {}", port.local_addr().unwrap().port());
            port
        }
        Err(err) => {
            tracing::error!("Failed to bind to port: {}", err);
            process::exit(1);
        }
    };

    let router = match process_begin(processing_delay_ms, verify_success_rate) {
        Ok(router) => {
            tracing::info!("Routes constructed successfully");
            router
        }
        Err(err) => {
            tracing::error!("Failed to construct routes: {}", err);
            process::exit(1);
        }
    };

    //start the http service
    let http_service = axum::serve(listener, router);
    if let Err(err) = http_service.await {
        tracing::error!("Failed to start server: {}", err);
        process::exit(1);
    }
}

fn process_begin(processing_delay_ms: u64, verify_success_rate: f64) -> Result<Router, String> {
    if !(0.0..=1.0).contains(&verify_success_rate) {
        return Err(format!("VERIFY_SUCCESS_RATE must be within [0, 1], got {verify_success_rate}"));
    }

    let head_route = Router::new();

    let repo = TxRepository::new();
    let chain = Arc::new(SimulatedChain::new(verify_success_rate));
    let service = Arc::new(PaymentService::new(
        repo,
        chain,
        Duration::from_millis(processing_delay_ms),
    ));

    let tx_routes = routes::tx::tx_routes(service)
        .route_layer(CompressionLayer::new().gzip(true));
    let fee_routes = routes::fees::fee_routes();
    let meta_routes = routes::meta::meta_routes();

    let router = head_route
        .nest("/api", tx_routes)
        .nest("/api", fee_routes)
        .nest("/api", meta_routes)
        .layer(CorsLayer::permissive()) // the browser UI is served from another origin
        .route_layer(RequestBodyLimitLayer::new(1024 * 1024 * 10)); //10MB limit

    Ok(router)
}
