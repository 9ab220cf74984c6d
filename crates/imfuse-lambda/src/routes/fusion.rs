use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use imfuse_fusion::{ConfigVector, FusionMode, FusionOutcome, ModeFamily};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ModeSummary {
    tag: &'static str,
    title: &'static str,
    family: ModeFamily,
    /// Registrations are entered by hand rather than generated.
    manual: bool,
}

impl From<FusionMode> for ModeSummary {
    fn from(mode: FusionMode) -> Self {
        Self {
            tag: mode.tag(),
            title: mode.title(),
            family: mode.family(),
            manual: mode.is_manual(),
        }
    }
}

#[derive(Serialize)]
pub struct Classification {
    mode: FusionMode,
    title: &'static str,
}

pub async fn list_modes() -> Json<Vec<ModeSummary>> {
    Json(FusionMode::ALL.iter().copied().map(ModeSummary::from).collect())
}

pub async fn get_mode(Path(tag): Path<String>) -> Result<Json<ModeSummary>, ApiError> {
    let mode: FusionMode = tag.parse()?;
    Ok(Json(mode.into()))
}

pub async fn classify(
    State(state): State<AppState>,
    body: Result<Json<ConfigVector>, JsonRejection>,
) -> Result<Json<Classification>, ApiError> {
    let vector = checked_vector(&state, body)?;
    let mode = imfuse_fusion::classify(&vector);
    Ok(Json(Classification {
        mode,
        title: mode.title(),
    }))
}

pub async fn registrations(
    State(state): State<AppState>,
    body: Result<Json<ConfigVector>, JsonRejection>,
) -> Result<Json<FusionOutcome>, ApiError> {
    let vector = checked_vector(&state, body)?;
    let outcome = FusionOutcome::evaluate(&vector);
    tracing::debug!(
        mode = %outcome.mode,
        registrations = outcome.plan.len(),
        "registrations generated"
    );
    Ok(Json(outcome))
}

fn checked_vector(
    state: &AppState,
    body: Result<Json<ConfigVector>, JsonRejection>,
) -> Result<ConfigVector, ApiError> {
    let Json(vector) = body?;
    vector.validate(state.config.max_count)?;
    Ok(vector)
}
