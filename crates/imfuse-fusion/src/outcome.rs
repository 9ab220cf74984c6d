use serde::Serialize;
use ts_rs::TS;

use imfuse_core::models::plan::RegistrationPlan;
use imfuse_core::models::vector::ConfigVector;

use crate::mode::FusionMode;
use crate::{classify, generate};

/// Classification and generated registrations for one vector, in the shape
/// the form controller consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FusionOutcome {
    pub mode: FusionMode,
    pub title: String,
    #[serde(flatten)]
    pub plan: RegistrationPlan,
}

impl FusionOutcome {
    pub fn evaluate(vector: &ConfigVector) -> Self {
        let mode = classify(vector);
        Self {
            mode,
            title: mode.title().to_string(),
            plan: generate(vector, mode),
        }
    }
}
