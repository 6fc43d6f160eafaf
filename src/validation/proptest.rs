//! Property-based tests for the validator.
//!
//! These tests use proptest to verify invariants around:
//! - Absence detection with and without value-type validation
//! - Ignored fields never influencing the result
//! - Agreement between `validate` and `report`

use crate::core::error::ValidatorError;
use crate::validation::check;
use proptest::prelude::*;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Record {
    label: Option<String>,
    count: i64,
    ratio: f64,
    enabled: bool,
    owner: Uuid,
    seen_at: OffsetDateTime,
}

crate::inspect!(Record {
    label,
    count,
    ratio,
    enabled,
    owner,
    seen_at,
});

const FIELD_NAMES: [&str; 6] = ["label", "count", "ratio", "enabled", "owner", "seen_at"];

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for optional labels, including empty strings.
fn arb_label() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::string::string_regex("[a-zA-Z ]{0,12}").unwrap())
}

/// Strategy for uuids biased towards nil.
fn arb_uuid() -> impl Strategy<Value = Uuid> {
    prop_oneof![Just(Uuid::nil()), any::<u128>().prop_map(Uuid::from_u128)]
}

/// Strategy for timestamps biased towards the epoch.
fn arb_timestamp() -> impl Strategy<Value = OffsetDateTime> {
    prop_oneof![
        Just(OffsetDateTime::UNIX_EPOCH),
        (1i64..4_000_000_000).prop_map(|secs| {
            OffsetDateTime::from_unix_timestamp(secs).unwrap_or(OffsetDateTime::UNIX_EPOCH)
        }),
    ]
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        arb_label(),
        prop_oneof![Just(0i64), any::<i64>()],
        prop_oneof![Just(0.0f64), -1.0e6f64..1.0e6],
        any::<bool>(),
        arb_uuid(),
        arb_timestamp(),
    )
        .prop_map(|(label, count, ratio, enabled, owner, seen_at)| Record {
            label,
            count,
            ratio,
            enabled,
            owner,
            seen_at,
        })
}

/// Strategy for a subset of field names to ignore.
fn arb_ignored() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(FIELD_NAMES.to_vec(), 0..=FIELD_NAMES.len())
}

fn field_is_default(record: &Record, name: &str) -> bool {
    match name {
        "label" => false,
        "count" => record.count == 0,
        "ratio" => record.ratio == 0.0,
        "enabled" => !record.enabled,
        "owner" => record.owner.is_nil(),
        "seen_at" => record.seen_at == OffsetDateTime::UNIX_EPOCH,
        _ => unreachable!("unknown field {name}"),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn default_mode_only_fails_on_null(record in arb_record()) {
        let valid = check(&record).validate().unwrap();
        prop_assert_eq!(valid, record.label.is_some());
    }

    #[test]
    fn value_type_mode_fails_on_any_default(record in arb_record()) {
        let expected = record.label.is_some()
            && !FIELD_NAMES.iter().any(|name| field_is_default(&record, name));
        let valid = check(&record)
            .allow_value_type_validation()
            .validate()
            .unwrap();
        prop_assert_eq!(valid, expected);
    }

    #[test]
    fn ignored_fields_never_count(
        record in arb_record(),
        ignored in arb_ignored(),
        value_types in any::<bool>(),
    ) {
        let mut validator = check(&record);
        for name in &ignored {
            validator = validator.ignore(*name).unwrap();
        }
        if value_types {
            validator = validator.allow_value_type_validation();
        }

        let remaining: Vec<_> = FIELD_NAMES
            .iter()
            .filter(|name| !ignored.contains(name))
            .collect();
        prop_assert_eq!(validator.pending_fields().len(), remaining.len());

        if remaining.is_empty() {
            let is_invalid_operation = matches!(
                validator.validate(),
                Err(ValidatorError::InvalidOperation { .. })
            );
            prop_assert!(is_invalid_operation);
        } else {
            let expected = remaining.iter().all(|name| {
                let null = **name == "label" && record.label.is_none();
                !null && !(value_types && field_is_default(&record, name))
            });
            prop_assert_eq!(validator.validate().unwrap(), expected);
        }
    }

    #[test]
    fn report_agrees_with_validate(
        record in arb_record(),
        ignored in prop::sample::subsequence(FIELD_NAMES.to_vec(), 0..FIELD_NAMES.len()),
        value_types in any::<bool>(),
    ) {
        let mut validator = check(&record);
        for name in &ignored {
            validator = validator.ignore(*name).unwrap();
        }
        if value_types {
            validator = validator.allow_value_type_validation();
        }

        let report = validator.report().unwrap();
        prop_assert_eq!(report.is_valid(), validator.validate().unwrap());
        prop_assert_eq!(report.checked.len(), FIELD_NAMES.len() - ignored.len());
    }

    #[test]
    fn unknown_names_are_tolerated(name in "[a-z_]{1,16}") {
        let record = Record {
            label: Some("x".to_string()),
            count: 1,
            ratio: 1.0,
            enabled: true,
            owner: Uuid::from_u128(1),
            seen_at: OffsetDateTime::UNIX_EPOCH,
        };
        let validator = check(&record).ignore(name.as_str()).unwrap();
        let expected = FIELD_NAMES.len() - usize::from(FIELD_NAMES.contains(&name.as_str()));
        prop_assert_eq!(validator.pending_fields().len(), expected);
    }
}
