use thiserror::Error;

use crate::models::modality::ModalityKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{field} count {value} exceeds the maximum of {max}")]
    CountTooLarge {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("{0} registrations are always rigid")]
    MriDeformable(ModalityKind),

    #[error("unsupported primary modality {0}; every comparison is against the planning CT")]
    UnsupportedPrimary(ModalityKind),
}
