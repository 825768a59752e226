//! Item route handlers: create, lookup, full replace, partial merge.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, header},
};
use serde::Serialize;
use tracing::instrument;

use pantry_core::{Image, Item, ItemPatch, Offer};

use crate::error::{AppError, Result};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// Item name the catalog refuses to serve.
const FORBIDDEN_NAME: &str = "yolo";

/// Response for item creation: the validated item plus its taxed price.
#[derive(Debug, Serialize)]
pub struct CreatedItem {
    #[serde(flatten)]
    pub item: Item,
    pub price_with_tax: f64,
}

/// Validate and echo an item, with `price + tax` computed.
///
/// The item is not stored; creation is an echo of the validated input.
pub async fn create(ValidatedJson(item): ValidatedJson<Item>) -> Json<CreatedItem> {
    let price_with_tax = item.price_with_tax();
    Json(CreatedItem {
        item,
        price_with_tax,
    })
}

/// Validate and echo an offer.
pub async fn create_offer(ValidatedJson(offer): ValidatedJson<Offer>) -> Json<Offer> {
    Json(offer)
}

/// Validate and echo a map of index weights.
///
/// JSON object keys are strings on the wire; deserialization coerces them to
/// integers and rejects anything non-numeric.
pub async fn create_index_weights(
    ValidatedJson(weights): ValidatedJson<HashMap<i64, f64>>,
) -> Json<HashMap<i64, f64>> {
    Json(weights)
}

/// Validate and echo a list of images.
pub async fn create_multiple_images(
    ValidatedJson(images): ValidatedJson<Vec<Image>>,
) -> Json<Vec<Image>> {
    Json(images)
}

/// Ads-cookie status for the item listing.
#[derive(Debug, Serialize)]
pub struct AdsStatus {
    /// Value of the `ads_in` cookie, or null when the caller sent none.
    pub ads_in: Option<String>,
}

/// Item listing stub: echo the `ads_in` cookie back to the caller.
pub async fn index(headers: HeaderMap) -> Json<AdsStatus> {
    Json(AdsStatus {
        ads_in: cookie_value(&headers, "ads_in"),
    })
}

/// Pull one cookie's value out of the request headers.
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Look up an item by identifier.
///
/// # Errors
///
/// The identifier `yolo` always fails with the teapot-mapped domain error;
/// an unknown identifier fails with `NotFound`.
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Item>> {
    if id == FORBIDDEN_NAME {
        return Err(AppError::ForbiddenName(id));
    }
    Ok(Json(state.store().get(&id)?))
}

/// Unconditionally replace the stored item.
#[instrument(skip(state, item), fields(id = %id))]
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(item): ValidatedJson<Item>,
) -> Json<Item> {
    state.store().replace(&id, item.clone());
    Json(item)
}

/// Merge the supplied fields onto the stored item.
///
/// Fields absent from the payload keep their stored values, including fields
/// whose supplied value happens to equal the stored one.
///
/// # Errors
///
/// Fails with `NotFound` if the identifier is not in the store.
#[instrument(skip(state, patch), fields(id = %id))]
pub async fn merge(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<ItemPatch>,
) -> Result<Json<Item>> {
    let merged = state.store().merge(&id, &patch)?;
    Ok(Json(merged))
}
