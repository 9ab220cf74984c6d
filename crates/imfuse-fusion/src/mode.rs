use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use imfuse_core::models::modality::RegistrationMethod;
use imfuse_core::models::record::RegistrationRecord;

use crate::error::FusionError;

/// Partition of the fusion modes by cardinality and modality mixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ModeFamily {
    BladderFilling,
    /// Exactly one comparison.
    Single,
    /// Two or more comparisons of a single modality.
    Multiple,
    PetCt,
    MriPet,
    MriCt,
    MriCtPet,
    /// Not recognised; the caller populates registrations by hand.
    Complex,
}

/// Declares the closed mode set as data: variant, wire tag, family and
/// display title. The enum, [`FusionMode::ALL`] and the lookups are all
/// generated from this one table.
macro_rules! fusion_modes {
    ($($variant:ident => $tag:tt, $family:ident, $title:tt;)+) => {
        /// Canonical fusion configuration, as produced by [`crate::classify`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
        #[ts(export)]
        pub enum FusionMode {
            $(
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl FusionMode {
            /// Every mode, in declaration order.
            pub const ALL: &'static [FusionMode] = &[$(FusionMode::$variant),+];

            /// Wire tag, e.g. `MriCtPet_Single_Rigid_Rigid`.
            pub const fn tag(self) -> &'static str {
                match self {
                    $(FusionMode::$variant => $tag,)+
                }
            }

            /// Display copy for the form header.
            pub const fn title(self) -> &'static str {
                match self {
                    $(FusionMode::$variant => $title,)+
                }
            }

            pub const fn family(self) -> ModeFamily {
                match self {
                    $(FusionMode::$variant => ModeFamily::$family,)+
                }
            }
        }
    };
}

fusion_modes! {
    BladderFilling => "BladderFilling", BladderFilling, "Bladder Filling Comparison";

    SingleMri => "Single_MRI", Single, "MRI/CT Fusion";
    SinglePetRigid => "Single_PET_Rigid", Single, "PET/CT Fusion";
    SinglePetDeformable => "Single_PET_Deformable", Single, "PET/CT Deformable Fusion";
    SingleCtRigid => "Single_CT_Rigid", Single, "CT/CT Fusion";
    SingleCtDeformable => "Single_CT_Deformable", Single, "CT/CT Deformable Fusion";

    MultipleMriRigid => "Multiple_MRI_Rigid", Multiple, "Multiple MRI/CT Fusions";
    MultiplePetRigid => "Multiple_PET_Rigid", Multiple, "Multiple PET/CT Fusions";
    MultiplePetDeformable => "Multiple_PET_Deformable", Multiple, "Multiple PET/CT Deformable Fusions";
    MultiplePetRigidDeformable => "Multiple_PET_Rigid_Deformable", Multiple, "Multiple PET/CT Rigid and Deformable Fusions";
    MultipleCtRigid => "Multiple_CT_Rigid", Multiple, "Multiple CT/CT Fusions";
    MultipleCtDeformable => "Multiple_CT_Deformable", Multiple, "Multiple CT/CT Deformable Fusions";
    MultipleCtRigidDeformable => "Multiple_CT_Rigid_Deformable", Multiple, "Multiple CT/CT Rigid and Deformable Fusions";

    PetCtSingleRigidRigid => "PetCt_Single_Rigid_Rigid", PetCt, "PET/CT and CT/CT Fusion";
    PetCtSingleRigidDeformable => "PetCt_Single_Rigid_Deformable", PetCt, "PET/CT and CT/CT Deformable Fusion";
    PetCtSingleDeformableRigid => "PetCt_Single_Deformable_Rigid", PetCt, "PET/CT Deformable and CT/CT Fusion";
    PetCtSingleDeformableDeformable => "PetCt_Single_Deformable_Deformable", PetCt, "PET/CT and CT/CT Deformable Fusions";
    PetCtMultiplePet => "PetCt_Multiple_Pet", PetCt, "Multiple PET/CT and CT/CT Fusion";
    PetCtMultipleCt => "PetCt_Multiple_Ct", PetCt, "PET/CT and Multiple CT/CT Fusions";
    PetCtMultiple => "PetCt_Multiple", PetCt, "Multiple PET/CT and CT/CT Fusions";

    MriPetSingleRigidRigid => "MriPet_Single_Rigid_Rigid", MriPet, "MRI/CT and PET/CT Fusion";
    MriPetSingleRigidDeformable => "MriPet_Single_Rigid_Deformable", MriPet, "MRI/CT and PET/CT Deformable Fusion";
    MriPetMultipleMri => "MriPet_Multiple_Mri", MriPet, "Multiple MRI/CT and PET/CT Fusion";
    MriPetMultiplePet => "MriPet_Multiple_Pet", MriPet, "MRI/CT and Multiple PET/CT Fusions";
    MriPetMultiple => "MriPet_Multiple", MriPet, "Multiple MRI/CT and PET/CT Fusions";

    MriCtSingleRigidRigid => "MriCt_Single_Rigid_Rigid", MriCt, "MRI/CT and CT/CT Fusion";
    MriCtSingleRigidDeformable => "MriCt_Single_Rigid_Deformable", MriCt, "MRI/CT and CT/CT Deformable Fusion";
    MriCtMultipleMri => "MriCt_Multiple_Mri", MriCt, "Multiple MRI/CT and CT/CT Fusion";
    MriCtMultipleCt => "MriCt_Multiple_Ct", MriCt, "MRI/CT and Multiple CT/CT Fusions";
    MriCtMultiple => "MriCt_Multiple", MriCt, "Multiple MRI/CT and CT/CT Fusions";

    MriCtPetSingleRigidRigid => "MriCtPet_Single_Rigid_Rigid", MriCtPet, "MRI/CT, CT/CT and PET/CT Fusion";
    MriCtPetSingleRigidDeformable => "MriCtPet_Single_Rigid_Deformable", MriCtPet, "MRI/CT, CT/CT and PET/CT Deformable Fusion";
    MriCtPetSingleDeformableRigid => "MriCtPet_Single_Deformable_Rigid", MriCtPet, "MRI/CT, CT/CT Deformable and PET/CT Fusion";
    MriCtPetSingleDeformableDeformable => "MriCtPet_Single_Deformable_Deformable", MriCtPet, "MRI/CT, CT/CT Deformable and PET/CT Deformable Fusion";
    MriCtPetMultipleMri => "MriCtPet_Multiple_Mri", MriCtPet, "Multiple MRI/CT with CT/CT and PET/CT Fusion";
    MriCtPetMultipleCt => "MriCtPet_Multiple_Ct", MriCtPet, "MRI/CT with Multiple CT/CT and PET/CT Fusion";
    MriCtPetMultiplePet => "MriCtPet_Multiple_Pet", MriCtPet, "MRI/CT and CT/CT with Multiple PET/CT Fusions";
    MriCtPetUltimateComplex => "MriCtPet_UltimateComplex", MriCtPet, "Multiple MRI/CT, CT/CT and PET/CT Fusions";

    Complex => "Complex", Complex, "Custom Fusion Configuration";
}

impl FusionMode {
    /// The fixed record for modes whose output does not depend on the
    /// counts. `None` for modes expanded from the vector.
    pub const fn fixed_record(self) -> Option<RegistrationRecord> {
        match self {
            FusionMode::BladderFilling | FusionMode::SingleCtRigid => {
                Some(RegistrationRecord::ct(RegistrationMethod::Rigid))
            }
            FusionMode::SingleMri => Some(RegistrationRecord::mri()),
            FusionMode::SinglePetRigid => Some(RegistrationRecord::pet(RegistrationMethod::Rigid)),
            FusionMode::SinglePetDeformable => {
                Some(RegistrationRecord::pet(RegistrationMethod::Deformable))
            }
            FusionMode::SingleCtDeformable => {
                Some(RegistrationRecord::ct(RegistrationMethod::Deformable))
            }
            _ => None,
        }
    }

    /// Whether the registration list is filled in by hand rather than
    /// generated.
    pub const fn is_manual(self) -> bool {
        matches!(self, FusionMode::Complex)
    }
}

impl fmt::Display for FusionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FusionMode {
    type Err = FusionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FusionMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.tag() == s)
            .ok_or_else(|| FusionError::UnknownMode(s.to_string()))
    }
}
