use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Imaging modality on either side of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ModalityKind {
    /// MRI compared against the planning CT.
    Mri,
    /// Prior CT compared against the planning CT.
    CtCt,
    /// PET/CT compared against the planning CT.
    PetCt,
}

impl ModalityKind {
    pub const fn label(self) -> &'static str {
        match self {
            ModalityKind::Mri => "MRI",
            ModalityKind::CtCt => "CT_CT",
            ModalityKind::PetCt => "PET_CT",
        }
    }

    /// Whether a deformable registration is meaningful for this modality.
    pub const fn supports_deformable(self) -> bool {
        !matches!(self, ModalityKind::Mri)
    }
}

impl fmt::Display for ModalityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the secondary volume is aligned to the planning CT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RegistrationMethod {
    /// Fixed-transform alignment.
    Rigid,
    /// Non-linear, voxel-displacement alignment.
    Deformable,
}

impl fmt::Display for RegistrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationMethod::Rigid => f.write_str("Rigid"),
            RegistrationMethod::Deformable => f.write_str("Deformable"),
        }
    }
}
