//! Property-based tests for circular enums
//!
//! - Name and ordinal pass through the factory unchanged
//! - `compare_to` is exactly the ordinal difference
//! - Display and JSON both yield the name
//! - Guarded writes never change what reads return

use circular_enum::{
    CircularEnum, GuardPolicy, Property, WriteAttempt, WriteGuard, WriteKind, guard,
    new_circular_enum,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

// =============================================================================
// Generators
// =============================================================================

#[allow(clippy::unwrap_used)] // Generator functions: regex patterns are hardcoded and valid
/// Generate enum-style names
pub fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[A-Z][A-Z0-9_]{0,31}").unwrap()
}

/// Any i64, extremes included
pub fn arb_ordinal() -> impl Strategy<Value = i64> {
    any::<i64>()
}

pub fn arb_policy() -> impl Strategy<Value = GuardPolicy> {
    prop::sample::select(GuardPolicy::iter().collect::<Vec<_>>())
}

pub fn arb_attempt() -> impl Strategy<Value = WriteAttempt> {
    let kind = prop_oneof![
        Just(WriteKind::Define),
        Just(WriteKind::Overwrite),
        Just(WriteKind::Delete),
    ];
    let property = prop_oneof![
        Just(Property::Name),
        Just(Property::Ordinal),
        Just(Property::CompareTo),
        "[a-z]{1,8}".prop_map(Property::Other),
    ];
    (kind, property).prop_map(|(kind, property)| WriteAttempt::new(kind, property))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: name and ordinal come back exactly as given
    #[test]
    fn prop_factory_passes_fields_through(
        name in arb_name(),
        ordinal in arb_ordinal(),
        safe in any::<bool>(),
    ) {
        let handle = new_circular_enum(safe, name.clone(), ordinal);
        prop_assert_eq!(handle.name(), &name);
        prop_assert_eq!(handle.ordinal(), ordinal);
        prop_assert_eq!(handle.is_guarded(), safe);
    }

    /// Property: compare_to is the raw ordinal difference, sign and magnitude
    #[test]
    fn prop_compare_to_is_difference(
        name in arb_name(),
        o1 in arb_ordinal(),
        o2 in arb_ordinal(),
    ) {
        let a = new_circular_enum(false, name.clone(), o1);
        let b = new_circular_enum(false, name, o2);
        prop_assert_eq!(a.compare_to(b.value()), i128::from(o1) - i128::from(o2));
        prop_assert_eq!(b.compare_to(a.value()), i128::from(o2) - i128::from(o1));
        prop_assert_eq!(a.ordering(b.value()), Some(o1.cmp(&o2)));
    }

    /// Property: Display and JSON both render the bare name
    #[test]
    fn prop_string_forms_are_name(name in arb_name(), ordinal in arb_ordinal()) {
        let handle = new_circular_enum(false, name.clone(), ordinal);
        prop_assert_eq!(handle.to_string(), name.clone());
        let json = serde_json::to_string(&handle).unwrap();
        prop_assert_eq!(json, serde_json::to_string(&name).unwrap());
    }

    /// Property: no write sequence changes guarded reads
    #[test]
    fn prop_guarded_reads_survive_writes(
        name in arb_name(),
        ordinal in arb_ordinal(),
        policy in arb_policy(),
        attempts in prop::collection::vec(arb_attempt(), 0..16),
    ) {
        let guarded = guard(CircularEnum::new(name.clone(), ordinal), policy);
        for attempt in attempts {
            let result = guarded.attempt(attempt);
            match policy {
                GuardPolicy::Reject => prop_assert!(result.is_err()),
                GuardPolicy::Ignore => prop_assert!(result.is_ok()),
            }
            prop_assert_eq!(guarded.name(), &name);
            prop_assert_eq!(guarded.ordinal(), ordinal);
        }
    }

    /// Property: sorting siblings orders them by ordinal
    #[test]
    fn prop_sort_follows_ordinal(ordinals in prop::collection::vec(arb_ordinal(), 0..32)) {
        let mut values: Vec<_> = ordinals
            .iter()
            .enumerate()
            .map(|(i, &o)| CircularEnum::new(format!("V{i}"), o))
            .collect();
        values.sort();
        for pair in values.windows(2) {
            prop_assert!(pair[0].compare_to(&pair[1]) <= 0);
        }
    }
}
