//! Rule-table classifier.
//!
//! Rules are evaluated top to bottom and the first match wins. After the
//! bladder override and the zero/one-count rules, each remaining rule
//! requires a different set of modalities to be present, so at most one of
//! them can match any vector.

use imfuse_core::models::modality::{ModalityKind, RegistrationMethod};
use imfuse_core::models::vector::ConfigVector;

use crate::mode::FusionMode;

/// How much one modality contributes to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Absent,
    One(RegistrationMethod),
    Many,
}

impl Shape {
    fn of(vector: &ConfigVector, modality: ModalityKind) -> Self {
        match vector.modality_total(modality) {
            0 => Shape::Absent,
            1 if vector.count(modality, RegistrationMethod::Rigid) == 1 => {
                Shape::One(RegistrationMethod::Rigid)
            }
            1 => Shape::One(RegistrationMethod::Deformable),
            _ => Shape::Many,
        }
    }

    fn present(self) -> bool {
        self != Shape::Absent
    }
}

/// Everything a rule needs to decide, computed once per vector.
#[derive(Debug, Clone, Copy)]
struct Profile<'a> {
    vector: &'a ConfigVector,
    total: u64,
    mri: Shape,
    ct: Shape,
    pet: Shape,
}

impl<'a> Profile<'a> {
    fn new(vector: &'a ConfigVector) -> Self {
        Self {
            vector,
            total: vector.total(),
            mri: Shape::of(vector, ModalityKind::Mri),
            ct: Shape::of(vector, ModalityKind::CtCt),
            pet: Shape::of(vector, ModalityKind::PetCt),
        }
    }

    /// True when exactly the named modalities have non-zero counts.
    fn only(&self, mri: bool, ct: bool, pet: bool) -> bool {
        self.mri.present() == mri && self.ct.present() == ct && self.pet.present() == pet
    }
}

struct Rule {
    name: &'static str,
    apply: fn(&Profile<'_>) -> Option<FusionMode>,
}

const RULES: &[Rule] = &[
    Rule {
        name: "bladder_override",
        apply: bladder_override,
    },
    Rule {
        name: "empty_default",
        apply: empty_default,
    },
    Rule {
        name: "exactly_one",
        apply: exactly_one,
    },
    Rule {
        name: "single_modality",
        apply: single_modality,
    },
    Rule {
        name: "pet_ct",
        apply: pet_ct,
    },
    Rule {
        name: "mri_pet",
        apply: mri_pet,
    },
    Rule {
        name: "mri_ct",
        apply: mri_ct,
    },
    Rule {
        name: "mri_ct_pet",
        apply: mri_ct_pet,
    },
];

/// Classify a configuration vector. Total: unmatched vectors fall through to
/// [`FusionMode::Complex`].
pub fn classify(vector: &ConfigVector) -> FusionMode {
    let (rule, mode) = matched_rule(vector);
    tracing::trace!(rule, mode = %mode, "fusion configuration classified");
    mode
}

/// Name of the rule that decided `vector`, alongside its mode. The fallback
/// is reported as `"complex_fallback"`.
pub fn matched_rule(vector: &ConfigVector) -> (&'static str, FusionMode) {
    let profile = Profile::new(vector);
    RULES
        .iter()
        .find_map(|rule| (rule.apply)(&profile).map(|mode| (rule.name, mode)))
        .unwrap_or(("complex_fallback", FusionMode::Complex))
}

fn bladder_override(p: &Profile<'_>) -> Option<FusionMode> {
    p.vector.bladder_filling.then_some(FusionMode::BladderFilling)
}

fn empty_default(p: &Profile<'_>) -> Option<FusionMode> {
    (p.total == 0).then_some(FusionMode::SingleMri)
}

fn exactly_one(p: &Profile<'_>) -> Option<FusionMode> {
    if p.total != 1 {
        return None;
    }
    let mode = match (p.mri, p.ct, p.pet) {
        (Shape::One(_), _, _) => FusionMode::SingleMri,
        (_, Shape::One(RegistrationMethod::Rigid), _) => FusionMode::SingleCtRigid,
        (_, Shape::One(RegistrationMethod::Deformable), _) => FusionMode::SingleCtDeformable,
        (_, _, Shape::One(RegistrationMethod::Rigid)) => FusionMode::SinglePetRigid,
        (_, _, Shape::One(RegistrationMethod::Deformable)) => FusionMode::SinglePetDeformable,
        _ => return None,
    };
    Some(mode)
}

fn single_modality(p: &Profile<'_>) -> Option<FusionMode> {
    if p.total < 2 {
        return None;
    }
    let v = p.vector;
    if p.only(true, false, false) {
        return Some(FusionMode::MultipleMriRigid);
    }
    if p.only(false, true, false) {
        return Some(match (v.ct_rigid > 0, v.ct_deformable > 0) {
            (true, false) => FusionMode::MultipleCtRigid,
            (false, true) => FusionMode::MultipleCtDeformable,
            _ => FusionMode::MultipleCtRigidDeformable,
        });
    }
    if p.only(false, false, true) {
        return Some(match (v.pet_rigid > 0, v.pet_deformable > 0) {
            (true, false) => FusionMode::MultiplePetRigid,
            (false, true) => FusionMode::MultiplePetDeformable,
            _ => FusionMode::MultiplePetRigidDeformable,
        });
    }
    None
}

fn pet_ct(p: &Profile<'_>) -> Option<FusionMode> {
    use RegistrationMethod::{Deformable, Rigid};

    if !p.only(false, true, true) {
        return None;
    }
    match (p.pet, p.ct) {
        (Shape::One(Rigid), Shape::One(Rigid)) => Some(FusionMode::PetCtSingleRigidRigid),
        (Shape::One(Rigid), Shape::One(Deformable)) => {
            Some(FusionMode::PetCtSingleRigidDeformable)
        }
        (Shape::One(Deformable), Shape::One(Rigid)) => {
            Some(FusionMode::PetCtSingleDeformableRigid)
        }
        (Shape::One(Deformable), Shape::One(Deformable)) => {
            Some(FusionMode::PetCtSingleDeformableDeformable)
        }
        (Shape::Many, Shape::One(_)) => Some(FusionMode::PetCtMultiplePet),
        (Shape::One(_), Shape::Many) => Some(FusionMode::PetCtMultipleCt),
        (Shape::Many, Shape::Many) => Some(FusionMode::PetCtMultiple),
        _ => None,
    }
}

fn mri_pet(p: &Profile<'_>) -> Option<FusionMode> {
    if !p.only(true, false, true) {
        return None;
    }
    match (p.mri, p.pet) {
        (Shape::One(_), Shape::One(RegistrationMethod::Rigid)) => {
            Some(FusionMode::MriPetSingleRigidRigid)
        }
        (Shape::One(_), Shape::One(RegistrationMethod::Deformable)) => {
            Some(FusionMode::MriPetSingleRigidDeformable)
        }
        (Shape::Many, Shape::One(_)) => Some(FusionMode::MriPetMultipleMri),
        (Shape::One(_), Shape::Many) => Some(FusionMode::MriPetMultiplePet),
        (Shape::Many, Shape::Many) => Some(FusionMode::MriPetMultiple),
        _ => None,
    }
}

fn mri_ct(p: &Profile<'_>) -> Option<FusionMode> {
    if !p.only(true, true, false) {
        return None;
    }
    match (p.mri, p.ct) {
        (Shape::One(_), Shape::One(RegistrationMethod::Rigid)) => {
            Some(FusionMode::MriCtSingleRigidRigid)
        }
        (Shape::One(_), Shape::One(RegistrationMethod::Deformable)) => {
            Some(FusionMode::MriCtSingleRigidDeformable)
        }
        (Shape::Many, Shape::One(_)) => Some(FusionMode::MriCtMultipleMri),
        (Shape::One(_), Shape::Many) => Some(FusionMode::MriCtMultipleCt),
        (Shape::Many, Shape::Many) => Some(FusionMode::MriCtMultiple),
        _ => None,
    }
}

fn mri_ct_pet(p: &Profile<'_>) -> Option<FusionMode> {
    use RegistrationMethod::{Deformable, Rigid};

    if !p.only(true, true, true) {
        return None;
    }
    let mode = match (p.mri, p.ct, p.pet) {
        (Shape::One(_), Shape::One(Rigid), Shape::One(Rigid)) => {
            FusionMode::MriCtPetSingleRigidRigid
        }
        (Shape::One(_), Shape::One(Rigid), Shape::One(Deformable)) => {
            FusionMode::MriCtPetSingleRigidDeformable
        }
        (Shape::One(_), Shape::One(Deformable), Shape::One(Rigid)) => {
            FusionMode::MriCtPetSingleDeformableRigid
        }
        (Shape::One(_), Shape::One(Deformable), Shape::One(Deformable)) => {
            FusionMode::MriCtPetSingleDeformableDeformable
        }
        (Shape::Many, Shape::One(_), Shape::One(_)) => FusionMode::MriCtPetMultipleMri,
        (Shape::One(_), Shape::Many, Shape::One(_)) => FusionMode::MriCtPetMultipleCt,
        (Shape::One(_), Shape::One(_), Shape::Many) => FusionMode::MriCtPetMultiplePet,
        _ => FusionMode::MriCtPetUltimateComplex,
    };
    Some(mode)
}
