mod handlers;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, patch},
    Router,
};

use crate::api::API;
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{delivery, parties, render};

pub type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/render_state", get(render::find))
        .route("/parties/:id/select", patch(parties::select))
        .route("/parties/:id/location", patch(parties::update_location))
        .route("/delivery", get(delivery::find))
        .route("/delivery/start", patch(delivery::start))
        .route("/delivery/complete", patch(delivery::complete))
        .layer(Extension(api))
}

pub async fn serve(
    api: DynAPI,
    addr: SocketAddr,
    shutdown: impl Future<Output = ()>,
) -> Result<(), Error> {
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::try_bind(&addr)
        .map_err(|err| {
            tracing::error!("failed to bind {}: {}", addr, err);
            unexpected_error()
        })?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|err| {
            tracing::error!("server error: {}", err);
            unexpected_error()
        })
}
