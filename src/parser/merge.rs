//! Negative-assertion pairing.
//!
//! `assertFoo` / `assertFooNot` are documented as one assertion and its
//! inverse; the negative record moves into the positive's `inverse` slot
//! and disappears from the top-level method map.

use crate::model::MethodRecord;
use std::collections::BTreeMap;

const ASSERT_PREFIX: &str = "assert";
const NEGATION: &str = "Not";

/// Pair each negative assertion with its positive counterpart. A negative
/// with no matching positive stays top-level untouched. Candidates are
/// visited in the map's lexicographic order.
pub fn merge_negatives(methods: &mut BTreeMap<String, MethodRecord>) {
    let negatives: Vec<String> = methods
        .keys()
        .filter(|name| is_negative(name))
        .cloned()
        .collect();

    for name in negatives {
        let positive = name.replacen(NEGATION, "", 1);
        if !methods.contains_key(&positive) {
            continue;
        }
        if let Some(negative) = methods.remove(&name) {
            if let Some(record) = methods.get_mut(&positive) {
                record.inverse = Some(Box::new(negative));
            }
        }
    }
}

/// A candidate negative starts with the assert prefix and carries the
/// negation substring somewhere after it. Names like `assertAnnotation`
/// can match too; the pairing only sticks when the shortened name exists.
fn is_negative(name: &str) -> bool {
    name.strip_prefix(ASSERT_PREFIX)
        .is_some_and(|rest| rest.contains(NEGATION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MethodDoc;

    fn record(name: &str) -> MethodRecord {
        MethodRecord {
            name: name.to_string(),
            doc: MethodDoc::default(),
            inverse: None,
        }
    }

    fn methods(names: &[&str]) -> BTreeMap<String, MethodRecord> {
        names
            .iter()
            .map(|n| (n.to_string(), record(n)))
            .collect()
    }

    #[test]
    fn negative_moves_into_positive() {
        let mut map = methods(&["assertFoo", "assertFooNot"]);
        merge_negatives(&mut map);

        assert_eq!(map.len(), 1);
        let positive = map.get("assertFoo").unwrap();
        let inverse = positive.inverse.as_ref().unwrap();
        assert_eq!(inverse.name, "assertFooNot");
    }

    #[test]
    fn lone_negative_stays_top_level() {
        let mut map = methods(&["assertFooNot"]);
        merge_negatives(&mut map);

        assert_eq!(map.len(), 1);
        assert!(map.get("assertFooNot").unwrap().inverse.is_none());
    }

    #[test]
    fn negation_inside_the_name_pairs_too() {
        let mut map = methods(&["assertNull", "assertNotNull"]);
        merge_negatives(&mut map);

        assert_eq!(map.len(), 1);
        let positive = map.get("assertNull").unwrap();
        assert_eq!(positive.inverse.as_ref().unwrap().name, "assertNotNull");
    }

    #[test]
    fn only_first_negation_occurrence_is_removed() {
        let mut map = methods(&["assertFooBarNot", "assertFooNotBarNot"]);
        merge_negatives(&mut map);

        assert_eq!(map.len(), 1);
        let positive = map.get("assertFooBarNot").unwrap();
        assert_eq!(
            positive.inverse.as_ref().unwrap().name,
            "assertFooNotBarNot"
        );
    }

    #[test]
    fn non_assert_names_are_ignored() {
        let mut map = methods(&["notifyFoo", "notify"]);
        merge_negatives(&mut map);
        assert_eq!(map.len(), 2);
    }
}
