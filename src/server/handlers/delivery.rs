use axum::extract::{Extension, Json};

use crate::api::DeliveryAPI;
use crate::entities::DeliveryState;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn find(Extension(api): Extension<DynAPI>) -> Json<DeliveryState> {
    api.delivery_state().await.into()
}

pub async fn start(Extension(api): Extension<DynAPI>) -> Result<Json<DeliveryState>, Error> {
    let state = api.start_delivery().await?;

    Ok(state.into())
}

pub async fn complete(Extension(api): Extension<DynAPI>) -> Result<Json<DeliveryState>, Error> {
    let state = api.complete_delivery().await?;

    Ok(state.into())
}
