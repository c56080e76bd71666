use std::sync::Arc;

use courier::config::Config;
use courier::engine::Engine;
use courier::entities::reference_parties;
use courier::error::Error;
use courier::external::StaticPermission;
use courier::server::serve;
use courier::session::TrackingSession;
use courier::simulation::{SimulatedPositionProvider, UniformDrift};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let engine = Arc::new(Engine::new(
        config.aspect_ratio,
        Box::new(UniformDrift::new(config.drift_max)),
    ));

    let seeds = reference_parties();
    let deliverers = seeds
        .iter()
        .filter(|p| p.is_deliverer())
        .map(|p| p.id.clone())
        .collect();
    let positions = SimulatedPositionProvider::new(deliverers, config.tick);

    // a denied permission still serves the fallback viewport
    let session = match TrackingSession::start(
        engine.clone(),
        &StaticPermission(config.permission),
        &positions,
        seeds,
    )
    .await
    {
        Ok(session) => Some(session),
        Err(err) if err.is_permission_denied_error() => None,
        Err(err) => return Err(err),
    };

    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", err);
        }
    };

    let result = serve(engine, config.listen_addr, shutdown).await;

    if let Some(session) = session {
        session.stop().await;
    }

    result
}
