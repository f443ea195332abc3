use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use anyhow::Context;
use axum::{handler::HandlerWithoutStateExt, middleware, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    decompression::RequestDecompressionLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

use crate::{
    error::handle_panic,
    middleware::{
        cors::{cors_headers, preflight},
        json_body::json_body,
        method_not_allowed::method_not_allowed,
        not_found::not_found,
        trace_response_body::trace_response_body,
    },
    route,
    state::ApiState,
    store::BookStore,
};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "public";
const INDEX_FILE: &str = "index.html";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_socket_address")]
    socket_address: SocketAddr,
    /// Directory holding the landing page and any other static asset.
    #[serde(default = "default_static_dir")]
    static_dir: PathBuf,
}

fn default_socket_address() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT)
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(DEFAULT_STATIC_DIR)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(default_socket_address(), default_static_dir())
    }
}

impl ServerConfig {
    pub fn new(socket_address: SocketAddr, static_dir: PathBuf) -> Self {
        Self {
            socket_address,
            static_dir,
        }
    }

    pub async fn from_config_file(path: &str) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_string(),
                source,
            })?;

        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn socket_address(&self) -> SocketAddr {
        self.socket_address
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}

pub struct Server {
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let state = ApiState::new(BookStore::seeded());
        let app = app(state, self.config.static_dir());

        let socket_address = self.config.socket_address();
        let listener = TcpListener::bind(&socket_address)
            .await
            .context("Bind failed")?;

        tracing::info!(
            url = %format!("http://localhost:{}", socket_address.port()),
            addr = %socket_address,
            "Server is running"
        );

        for endpoint in route::api::ENDPOINTS {
            tracing::info!(
                method = endpoint.method,
                path = endpoint.path,
                "Available endpoint"
            );
        }

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

        Ok(())
    }
}

/// Builds the complete application: routes, static assets and every cross-cutting layer.
pub fn app(state: ApiState, static_dir: &Path) -> Router {
    layered(routes(static_dir).with_state(state))
}

fn routes(static_dir: &Path) -> Router<ApiState> {
    let landing_page = ServeFile::new(static_dir.join(INDEX_FILE));
    let assets = ServeDir::new(static_dir).fallback(not_found.into_service());

    Router::<ApiState>::new()
        .route_service("/", landing_page)
        .merge(route::api::app::app())
        .merge(route::books::app::app())
        .fallback_service(assets)
        .layer(middleware::from_fn(trace_response_body))
        .layer(middleware::from_fn(method_not_allowed))
}

/// Applies the request-wide layers.
///
/// Outermost first: tracing, CORS headers, panic recovery, (de)compression,
/// JSON body validation, `OPTIONS` short-circuit.
pub(crate) fn layered(router: Router) -> Router {
    router
        .layer(middleware::from_fn(preflight))
        .layer(middleware::from_fn(json_body))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                        .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                        .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
                )
                .layer(middleware::from_fn(cors_headers))
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(RequestDecompressionLayer::new())
                .layer(CompressionLayer::new()),
        )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");

        tracing::info!("CTRL+C received");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM signal handler")
            .recv()
            .await;

        tracing::info!("SIGTERM received");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
