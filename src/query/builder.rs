//! Predicate building
//!
//! Combines a resolved attribute path with one or more raw values. A single
//! raw value yields one predicate. Several raw values are built
//! independently and, when every one of them compared with `Eq`, collapsed
//! into a single `Like` predicate carrying the ordered value list: a
//! repeated parameter means set membership, not N independent conjuncts.
//! Mixed comparators are preserved uncollapsed rather than silently merged.

use crate::schema::AttributePath;

use super::coerce::{coerce, CoerceConfig};
use super::errors::QueryResult;
use super::record::RawRecord;
use super::types::{Comparator, Predicate, TypedValue};

/// Build one predicate from a single raw value.
///
/// When the terminal attribute is a collection the coercion target is its
/// element kind, not the collection itself.
pub fn build_one(path: &AttributePath, raw: &str, cfg: &CoerceConfig) -> QueryResult<Predicate> {
    let record = RawRecord::parse(raw);
    let kind = path.semantic_kind();
    let value = coerce(&record.value, kind, cfg, &path.dotted())?;
    Ok(Predicate::new(value, record.comparator, path.clone()))
}

/// Build predicates from all raw values of one parameter.
pub fn build_many(
    path: &AttributePath,
    raws: &[String],
    cfg: &CoerceConfig,
) -> QueryResult<Vec<Predicate>> {
    if raws.len() <= 1 {
        return raws
            .iter()
            .map(|raw| build_one(path, raw, cfg))
            .collect();
    }

    let predicates: Vec<Predicate> = raws
        .iter()
        .map(|raw| build_one(path, raw, cfg))
        .collect::<QueryResult<_>>()?;

    if predicates.iter().all(|p| p.comparator == Comparator::Eq) {
        let values = predicates.into_iter().map(|p| p.value).collect();
        return Ok(vec![Predicate::new(
            TypedValue::List(values),
            Comparator::Like,
            path.clone(),
        )]);
    }

    Ok(predicates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EntityDef, SchemaRegistry, ValueKind};
    use std::collections::HashMap;

    fn registry() -> SchemaRegistry {
        let mut fields = HashMap::new();
        fields.insert("id".to_string(), ValueKind::Text);
        fields.insert("name".to_string(), ValueKind::Text);
        fields.insert(
            "status".to_string(),
            ValueKind::Enum {
                variants: vec!["active".to_string(), "archived".to_string()],
            },
        );
        fields.insert(
            "tags".to_string(),
            ValueKind::List {
                element: Box::new(ValueKind::Text),
            },
        );

        let mut registry = SchemaRegistry::new();
        registry
            .register(EntityDef::new("track", fields))
            .unwrap();
        registry
    }

    fn path(field: &str) -> AttributePath {
        registry().resolve("track", field).unwrap()
    }

    fn cfg() -> CoerceConfig {
        CoerceConfig::default()
    }

    #[test]
    fn test_single_value_eq_predicate() {
        let predicate = build_one(&path("name"), "5", &cfg()).unwrap();
        assert_eq!(predicate.comparator, Comparator::Eq);
        assert_eq!(predicate.value, TypedValue::Text("5".to_string()));
        assert_eq!(predicate.path.dotted(), "name");
    }

    #[test]
    fn test_single_value_marker_comparator() {
        let predicate = build_one(&path("name"), "like.ro", &cfg()).unwrap();
        assert_eq!(predicate.comparator, Comparator::Like);
        assert_eq!(predicate.value, TypedValue::Text("ro".to_string()));
    }

    #[test]
    fn test_collection_coerces_element_kind() {
        let predicate = build_one(&path("tags"), "live", &cfg()).unwrap();
        assert_eq!(predicate.value, TypedValue::Text("live".to_string()));
    }

    #[test]
    fn test_multi_value_all_eq_collapses_to_like() {
        let raws = vec!["5".to_string(), "7".to_string()];
        let predicates = build_many(&path("name"), &raws, &cfg()).unwrap();
        assert_eq!(predicates.len(), 1);
        assert_eq!(predicates[0].comparator, Comparator::Like);
        assert_eq!(
            predicates[0].value,
            TypedValue::List(vec![
                TypedValue::Text("5".to_string()),
                TypedValue::Text("7".to_string()),
            ])
        );
    }

    #[test]
    fn test_multi_value_mixed_comparators_stay_apart() {
        let raws = vec!["gte.5".to_string(), "7".to_string()];
        let predicates = build_many(&path("name"), &raws, &cfg()).unwrap();
        assert_eq!(predicates.len(), 2);
        assert_eq!(predicates[0].comparator, Comparator::Gte);
        assert_eq!(predicates[1].comparator, Comparator::Eq);
    }

    #[test]
    fn test_single_element_slice_does_not_collapse() {
        let raws = vec!["5".to_string()];
        let predicates = build_many(&path("name"), &raws, &cfg()).unwrap();
        assert_eq!(predicates.len(), 1);
        assert_eq!(predicates[0].comparator, Comparator::Eq);
    }

    #[test]
    fn test_coercion_failure_propagates() {
        let raws = vec!["active".to_string(), "bogus".to_string()];
        assert!(build_many(&path("status"), &raws, &cfg()).is_err());
    }

    #[test]
    fn test_empty_slice_builds_nothing() {
        let predicates = build_many(&path("name"), &[], &cfg()).unwrap();
        assert!(predicates.is_empty());
    }
}
