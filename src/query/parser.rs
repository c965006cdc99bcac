//! Query parameter orchestrator
//!
//! Walks a decoded query-parameter map and dispatches to the schema
//! registry, the predicate builder, and the direction/pagination parsers.
//! Filter and sort fields that do not resolve are logged at WARN and
//! skipped; coercion and control-parameter failures propagate.

use std::collections::HashMap;

use crate::observability::{LogSink, Severity};
use crate::schema::SchemaRegistry;

use super::builder::build_many;
use super::coerce::CoerceConfig;
use super::errors::{QueryError, QueryResult};
use super::types::{Direction, OrderSpec, Page, Predicate};

/// Decoded query string: parameter name to its ordered raw values.
pub type Params = HashMap<String, Vec<String>>;

/// Control parameters that never become filter fields. Matched
/// case-sensitively.
pub const RESERVED_PARAMS: [&str; 5] = ["sort", "page", "per_page", "direction", "format"];

/// List-filter alias for the entity identifier field.
const IDS_KEY: &str = "ids[]";

/// Event logged when a filter or sort field does not resolve.
const ATTRIBUTE_NOT_FOUND: &str = "ATTRIBUTE_NOT_FOUND";

/// Extracts predicates, sort specifications, and a pagination window from
/// decoded query parameters.
///
/// Stateless per call: each operation is a pure function of the parameter
/// map and the read-only registry.
pub struct QueryParser<'a> {
    schema: &'a SchemaRegistry,
    log: &'a dyn LogSink,
    coerce: CoerceConfig,
}

impl<'a> QueryParser<'a> {
    /// Create a parser over a registry, logging through the given sink.
    pub fn new(schema: &'a SchemaRegistry, log: &'a dyn LogSink) -> Self {
        Self {
            schema,
            log,
            coerce: CoerceConfig::default(),
        }
    }

    /// Replace the coercion settings.
    pub fn with_coerce_config(mut self, coerce: CoerceConfig) -> Self {
        self.coerce = coerce;
        self
    }

    /// Translate filter parameters into predicates.
    ///
    /// Reserved control parameters are skipped. `ids[]` values are merged
    /// into the entity's identifier key (existing identifier values first)
    /// so singular and list identifier filters land in one multi-valued
    /// predicate. Unresolvable fields are logged and skipped. Output order
    /// follows the map's iteration order; callers must not depend on it.
    pub fn parse(&self, params: &Params, entity: &str) -> QueryResult<Vec<Predicate>> {
        let params = self.merge_id_aliases(params, entity);
        let mut predicates = Vec::new();

        for (field, values) in &params {
            if RESERVED_PARAMS.contains(&field.as_str()) {
                continue;
            }
            let Some(path) = self.schema.resolve(entity, field) else {
                self.warn_not_found(entity, field);
                continue;
            };
            predicates.extend(build_many(&path, values, &self.coerce)?);
        }

        Ok(predicates)
    }

    /// Translate `sort`/`direction` parameters into sort specifications.
    ///
    /// `sort` defaults to the entity's identifier field, `direction` to
    /// ascending; `sort[i]` pairs with `direction[i]` and directions past
    /// the end of the list default to ascending. Unresolvable sort fields
    /// are logged and skipped, matching the filter policy.
    pub fn order(&self, params: Option<&Params>, entity: &str) -> QueryResult<Vec<OrderSpec>> {
        let Some(params) = params else {
            return Ok(Vec::new());
        };

        let default_sort = vec![self.schema.id_field(entity).to_string()];
        let sorts = params.get("sort").unwrap_or(&default_sort);
        let directions: &[String] = params.get("direction").map(Vec::as_slice).unwrap_or(&[]);

        let mut specs = Vec::with_capacity(sorts.len());
        for (i, field) in sorts.iter().enumerate() {
            let direction = match directions.get(i) {
                Some(token) => Direction::parse(token)?,
                None => Direction::Asc,
            };
            let Some(path) = self.schema.resolve(entity, field) else {
                self.warn_not_found(entity, field);
                continue;
            };
            specs.push(OrderSpec { direction, path });
        }

        Ok(specs)
    }

    /// Translate `page`/`per_page` parameters into a pagination window.
    ///
    /// An absent map or absent parameters yield the zero window. Values
    /// that do not parse as non-negative integers fail the call.
    pub fn paginate(&self, params: Option<&Params>, _entity: &str) -> QueryResult<Page> {
        let Some(params) = params else {
            return Ok(Page::none());
        };

        Ok(Page {
            page: Self::first_integer(params, "page")?,
            per_page: Self::first_integer(params, "per_page")?,
        })
    }

    /// Merge `ids[]` values into the identifier key: identifier values
    /// first, then list values, and the alias removed.
    fn merge_id_aliases(&self, params: &Params, entity: &str) -> Params {
        let mut params = params.clone();
        if let Some(list_values) = params.remove(IDS_KEY) {
            let id_key = self.schema.id_field(entity).to_string();
            params.entry(id_key).or_default().extend(list_values);
        }
        params
    }

    fn first_integer(params: &Params, key: &str) -> QueryResult<u64> {
        match params.get(key).and_then(|values| values.first()) {
            Some(raw) => raw
                .parse()
                .map_err(|_| QueryError::InvalidPageNumber(raw.clone())),
            None => Ok(0),
        }
    }

    fn warn_not_found(&self, entity: &str, field: &str) {
        self.log.log(
            Severity::Warn,
            ATTRIBUTE_NOT_FOUND,
            &[("entity", entity), ("field", field)],
        );
    }
}
