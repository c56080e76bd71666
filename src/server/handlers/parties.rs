use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};

use crate::api::TrackingAPI;
use crate::entities::{Coordinates, Party, Viewport};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct UpdateLocationParams {
    coordinates: Coordinates,
}

pub async fn select(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<String>,
) -> Result<Json<Viewport>, Error> {
    let viewport = api.select_party(id).await?;

    Ok(viewport.into())
}

pub async fn update_location(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<String>,
    Json(params): Json<UpdateLocationParams>,
) -> Result<Json<Party>, Error> {
    let party = api.update_party_location(id, params.coordinates).await?;

    Ok(party.into())
}
