use std::iter;

use imfuse_core::models::plan::RegistrationPlan;
use imfuse_core::models::record::RegistrationRecord;
use imfuse_core::models::vector::ConfigVector;

use crate::mode::FusionMode;

/// Build the registration list for a classified vector.
///
/// Only the bladder override, the `Single_*` modes and `Complex` consult the
/// mode. Every other mode expands the raw counts in canonical order: MRI,
/// CT rigid, CT deformable, PET rigid, PET deformable.
pub fn generate(vector: &ConfigVector, mode: FusionMode) -> RegistrationPlan {
    match mode {
        FusionMode::BladderFilling => {
            RegistrationPlan::bladder_filling(mode.fixed_record().into_iter().collect())
        }
        FusionMode::Complex => RegistrationPlan::default(),
        _ => match mode.fixed_record() {
            Some(record) => RegistrationPlan::new(vec![record]),
            None => RegistrationPlan::new(expand(vector)),
        },
    }
}

fn expand(vector: &ConfigVector) -> Vec<RegistrationRecord> {
    vector
        .counts()
        .into_iter()
        .flat_map(|(record, count)| iter::repeat_n(record, count as usize))
        .collect()
}
