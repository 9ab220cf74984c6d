use imfuse_core::models::modality::{ModalityKind, RegistrationMethod};
use imfuse_core::models::plan::RegistrationPlan;
use imfuse_core::models::record::RegistrationRecord;
use imfuse_core::models::vector::ConfigVector;

use crate::error::FusionError;
use crate::mode::FusionMode;
use crate::{classify, generate};

/// The form controller's working registration list.
///
/// Every [`apply`](Self::apply) replaces the list wholesale with freshly
/// generated records; manual additions and removals only survive until the
/// next configuration change.
#[derive(Debug, Clone)]
pub struct RegistrationSession {
    vector: ConfigVector,
    mode: FusionMode,
    plan: RegistrationPlan,
    edited: bool,
}

impl Default for RegistrationSession {
    fn default() -> Self {
        Self::new(ConfigVector::default())
    }
}

impl RegistrationSession {
    pub fn new(vector: ConfigVector) -> Self {
        let mode = classify(&vector);
        Self {
            vector,
            mode,
            plan: generate(&vector, mode),
            edited: false,
        }
    }

    /// Reclassify for a changed configuration and replace the working list.
    pub fn apply(&mut self, vector: ConfigVector) -> FusionMode {
        let mode = classify(&vector);
        let plan = generate(&vector, mode);

        if self.edited {
            tracing::debug!(
                previous = self.plan.len(),
                "discarding manually edited registrations"
            );
        }
        tracing::debug!(mode = %mode, registrations = plan.len(), "registrations regenerated");

        self.vector = vector;
        self.mode = mode;
        self.plan = plan;
        self.edited = false;
        mode
    }

    pub fn add_record(
        &mut self,
        secondary: ModalityKind,
        method: RegistrationMethod,
    ) -> Result<RegistrationRecord, FusionError> {
        let record = RegistrationRecord::new(secondary, method)?;
        self.plan.registrations.push(record);
        self.edited = true;
        tracing::debug!(%secondary, %method, "registration added manually");
        Ok(record)
    }

    pub fn remove_record(&mut self, index: usize) -> Result<RegistrationRecord, FusionError> {
        let len = self.plan.len();
        if index >= len {
            return Err(FusionError::IndexOutOfRange { index, len });
        }
        let record = self.plan.registrations.remove(index);
        self.edited = true;
        tracing::debug!(index, "registration removed manually");
        Ok(record)
    }

    pub fn vector(&self) -> &ConfigVector {
        &self.vector
    }

    pub fn mode(&self) -> FusionMode {
        self.mode
    }

    pub fn title(&self) -> &'static str {
        self.mode.title()
    }

    pub fn records(&self) -> &[RegistrationRecord] {
        &self.plan.registrations
    }

    pub fn plan(&self) -> &RegistrationPlan {
        &self.plan
    }

    /// True once the list differs from what the generator produced.
    pub fn is_edited(&self) -> bool {
        self.edited
    }
}
