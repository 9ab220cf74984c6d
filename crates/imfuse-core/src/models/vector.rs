use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::modality::{ModalityKind, RegistrationMethod};
use super::record::RegistrationRecord;
use crate::error::CoreError;

/// Requested registration counts, as submitted by the fusion form.
///
/// Omitted counts deserialize as zero so a bare `{}` is the "no
/// configuration supplied" vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ConfigVector {
    pub mri_rigid: u32,
    pub pet_rigid: u32,
    pub pet_deformable: u32,
    pub ct_rigid: u32,
    pub ct_deformable: u32,
    /// Overrides every count when set.
    pub bladder_filling: bool,
}

impl ConfigVector {
    /// Sum of every count field. Widened so no input can overflow it.
    pub fn total(&self) -> u64 {
        self.counts().iter().map(|(_, n)| u64::from(*n)).sum()
    }

    /// Sum of the counts belonging to one modality.
    pub fn modality_total(&self, modality: ModalityKind) -> u64 {
        match modality {
            ModalityKind::Mri => u64::from(self.mri_rigid),
            ModalityKind::CtCt => u64::from(self.ct_rigid) + u64::from(self.ct_deformable),
            ModalityKind::PetCt => u64::from(self.pet_rigid) + u64::from(self.pet_deformable),
        }
    }

    /// Requested count for one modality/method pair. MRI deformable is
    /// always zero.
    pub fn count(&self, modality: ModalityKind, method: RegistrationMethod) -> u32 {
        match (modality, method) {
            (ModalityKind::Mri, RegistrationMethod::Rigid) => self.mri_rigid,
            (ModalityKind::Mri, RegistrationMethod::Deformable) => 0,
            (ModalityKind::CtCt, RegistrationMethod::Rigid) => self.ct_rigid,
            (ModalityKind::CtCt, RegistrationMethod::Deformable) => self.ct_deformable,
            (ModalityKind::PetCt, RegistrationMethod::Rigid) => self.pet_rigid,
            (ModalityKind::PetCt, RegistrationMethod::Deformable) => self.pet_deformable,
        }
    }

    /// Every count paired with the record it expands to, in canonical
    /// emission order: MRI, CT rigid, CT deformable, PET rigid, PET
    /// deformable.
    pub fn counts(&self) -> [(RegistrationRecord, u32); 5] {
        [
            (RegistrationRecord::mri(), self.mri_rigid),
            (RegistrationRecord::ct(RegistrationMethod::Rigid), self.ct_rigid),
            (RegistrationRecord::ct(RegistrationMethod::Deformable), self.ct_deformable),
            (RegistrationRecord::pet(RegistrationMethod::Rigid), self.pet_rigid),
            (RegistrationRecord::pet(RegistrationMethod::Deformable), self.pet_deformable),
        ]
    }

    /// True when no count is set. The bladder flag is not considered.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Reject counts above `max`. This is the caller-side check; the
    /// classifier itself accepts any vector.
    pub fn validate(&self, max: u32) -> Result<(), CoreError> {
        let fields = [
            ("mriRigid", self.mri_rigid),
            ("petRigid", self.pet_rigid),
            ("petDeformable", self.pet_deformable),
            ("ctRigid", self.ct_rigid),
            ("ctDeformable", self.ct_deformable),
        ];
        match fields.into_iter().find(|(_, value)| *value > max) {
            Some((field, value)) => Err(CoreError::CountTooLarge { field, value, max }),
            None => Ok(()),
        }
    }
}
