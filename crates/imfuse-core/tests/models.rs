use imfuse_core::error::CoreError;
use imfuse_core::models::modality::{ModalityKind, RegistrationMethod};
use imfuse_core::models::plan::RegistrationPlan;
use imfuse_core::models::record::RegistrationRecord;
use imfuse_core::models::vector::ConfigVector;

#[test]
fn mri_deformable_record_is_rejected() {
    let err = RegistrationRecord::new(ModalityKind::Mri, RegistrationMethod::Deformable)
        .unwrap_err();
    assert_eq!(err, CoreError::MriDeformable(ModalityKind::Mri));
}

#[test]
fn records_are_always_against_planning_ct() {
    let record = RegistrationRecord::new(ModalityKind::PetCt, RegistrationMethod::Deformable)
        .unwrap();
    assert_eq!(record.primary, ModalityKind::CtCt);
    assert_eq!(record.secondary, ModalityKind::PetCt);
    assert_eq!(record.method, RegistrationMethod::Deformable);
}

#[test]
fn validate_rejects_foreign_primary() {
    let record = RegistrationRecord {
        primary: ModalityKind::Mri,
        secondary: ModalityKind::CtCt,
        method: RegistrationMethod::Rigid,
    };
    assert_eq!(
        record.validate(),
        Err(CoreError::UnsupportedPrimary(ModalityKind::Mri))
    );
}

#[test]
fn total_sums_every_count() {
    let vector = ConfigVector {
        mri_rigid: 1,
        pet_rigid: 2,
        pet_deformable: 3,
        ct_rigid: 4,
        ct_deformable: 5,
        bladder_filling: false,
    };
    assert_eq!(vector.total(), 15);
    assert_eq!(vector.modality_total(ModalityKind::Mri), 1);
    assert_eq!(vector.modality_total(ModalityKind::PetCt), 5);
    assert_eq!(vector.modality_total(ModalityKind::CtCt), 9);
}

#[test]
fn total_does_not_overflow() {
    let vector = ConfigVector {
        mri_rigid: u32::MAX,
        pet_rigid: u32::MAX,
        pet_deformable: u32::MAX,
        ct_rigid: u32::MAX,
        ct_deformable: u32::MAX,
        bladder_filling: false,
    };
    assert_eq!(vector.total(), 5 * u64::from(u32::MAX));
}

#[test]
fn mri_deformable_count_is_always_zero() {
    let vector = ConfigVector {
        mri_rigid: 3,
        ..Default::default()
    };
    assert_eq!(vector.count(ModalityKind::Mri, RegistrationMethod::Rigid), 3);
    assert_eq!(vector.count(ModalityKind::Mri, RegistrationMethod::Deformable), 0);
}

#[test]
fn counts_follow_canonical_order() {
    let order: Vec<_> = ConfigVector::default()
        .counts()
        .iter()
        .map(|(record, _)| (record.secondary, record.method))
        .collect();
    assert_eq!(
        order,
        vec![
            (ModalityKind::Mri, RegistrationMethod::Rigid),
            (ModalityKind::CtCt, RegistrationMethod::Rigid),
            (ModalityKind::CtCt, RegistrationMethod::Deformable),
            (ModalityKind::PetCt, RegistrationMethod::Rigid),
            (ModalityKind::PetCt, RegistrationMethod::Deformable),
        ]
    );
}

#[test]
fn validate_reports_first_oversized_field() {
    let vector = ConfigVector {
        pet_deformable: 11,
        ct_rigid: 12,
        ..Default::default()
    };
    assert_eq!(
        vector.validate(10),
        Err(CoreError::CountTooLarge {
            field: "petDeformable",
            value: 11,
            max: 10,
        })
    );
    assert!(vector.validate(12).is_ok());
}

#[test]
fn vector_deserializes_camel_case_with_defaults() {
    let vector: ConfigVector =
        serde_json::from_str(r#"{"mriRigid": 2, "bladderFilling": true}"#).unwrap();
    assert_eq!(vector.mri_rigid, 2);
    assert_eq!(vector.ct_rigid, 0);
    assert!(vector.bladder_filling);

    let empty: ConfigVector = serde_json::from_str("{}").unwrap();
    assert!(empty.is_empty());
    assert!(!empty.bladder_filling);
}

#[test]
fn negative_counts_fail_to_deserialize() {
    let result: Result<ConfigVector, _> = serde_json::from_str(r#"{"ctRigid": -1}"#);
    assert!(result.is_err());
}

#[test]
fn plan_serializes_wire_shape() {
    let plan = RegistrationPlan::bladder_filling(vec![RegistrationRecord::ct(
        RegistrationMethod::Rigid,
    )]);
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "registrations": [
                { "primary": "CT_CT", "secondary": "CT_CT", "method": "Rigid" }
            ],
            "isBladderFillingStudy": true
        })
    );
}

#[test]
fn plan_omits_bladder_flag_when_unset() {
    let plan = RegistrationPlan::new(vec![RegistrationRecord::pet(
        RegistrationMethod::Deformable,
    )]);
    let json = serde_json::to_value(&plan).unwrap();
    assert!(json.get("isBladderFillingStudy").is_none());
    assert_eq!(json["registrations"][0]["secondary"], "PET_CT");
    assert!(!plan.is_bladder_filling_study());
}
