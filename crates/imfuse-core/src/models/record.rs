use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::modality::{ModalityKind, RegistrationMethod};
use crate::error::CoreError;

/// One requested comparison of a secondary volume against the planning CT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegistrationRecord {
    pub primary: ModalityKind,
    pub secondary: ModalityKind,
    pub method: RegistrationMethod,
}

impl RegistrationRecord {
    /// Build a record against the planning CT.
    ///
    /// Rejects MRI deformable registrations, which this domain never performs.
    pub fn new(secondary: ModalityKind, method: RegistrationMethod) -> Result<Self, CoreError> {
        if method == RegistrationMethod::Deformable && !secondary.supports_deformable() {
            return Err(CoreError::MriDeformable(secondary));
        }
        Ok(Self {
            primary: ModalityKind::CtCt,
            secondary,
            method,
        })
    }

    /// Check a record that arrived from outside (e.g. deserialized from a
    /// form submission) against the same rules [`RegistrationRecord::new`]
    /// enforces.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.primary != ModalityKind::CtCt {
            return Err(CoreError::UnsupportedPrimary(self.primary));
        }
        Self::new(self.secondary, self.method).map(|_| ())
    }

    pub(crate) const fn against_planning_ct(
        secondary: ModalityKind,
        method: RegistrationMethod,
    ) -> Self {
        Self {
            primary: ModalityKind::CtCt,
            secondary,
            method,
        }
    }

    pub const fn mri() -> Self {
        Self::against_planning_ct(ModalityKind::Mri, RegistrationMethod::Rigid)
    }

    pub const fn ct(method: RegistrationMethod) -> Self {
        Self::against_planning_ct(ModalityKind::CtCt, method)
    }

    pub const fn pet(method: RegistrationMethod) -> Self {
        Self::against_planning_ct(ModalityKind::PetCt, method)
    }
}
