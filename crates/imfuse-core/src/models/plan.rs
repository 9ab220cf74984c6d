use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::record::RegistrationRecord;

/// Ordered registrations handed to the form-state controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RegistrationPlan {
    pub registrations: Vec<RegistrationRecord>,
    /// Present (and `true`) only for the bladder-filling comparison.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub is_bladder_filling_study: Option<bool>,
}

impl RegistrationPlan {
    pub fn new(registrations: Vec<RegistrationRecord>) -> Self {
        Self {
            registrations,
            is_bladder_filling_study: None,
        }
    }

    pub fn bladder_filling(registrations: Vec<RegistrationRecord>) -> Self {
        Self {
            registrations,
            is_bladder_filling_study: Some(true),
        }
    }

    pub fn is_bladder_filling_study(&self) -> bool {
        self.is_bladder_filling_study.unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
