use axum::extract::{Extension, Json};

use crate::api::TrackingAPI;
use crate::entities::RenderState;
use crate::server::DynAPI;

pub async fn find(Extension(api): Extension<DynAPI>) -> Json<RenderState> {
    api.render_state().await.into()
}
