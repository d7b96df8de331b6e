//! Query descriptors and the filter builder that produces them.
//!
//! A [`QueryDescriptor`] is the pre-execution form of a catalog query: an
//! ordered list of equality predicates plus an ordered list of ascending sort
//! keys over one storage kind. Stores execute descriptors; [`to_sql`] renders
//! one for SQL-backed stores.
//!
//! [`to_sql`]: QueryDescriptor::to_sql

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config;
use crate::error::{CatalogError, Result, ValidationError};
use crate::sql_builder::SqlBuilder;
use crate::validation::FieldCheck;

/// Predicate operator. Catalog queries only ever compare for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FilterOp {
    #[serde(rename = "=")]
    Eq,
}

impl FilterOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Eq => "=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filter {
    pub field: &'static str,
    pub op: FilterOp,
    pub value: Value,
}

/// Ascending sort on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortKey {
    pub field: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryDescriptor {
    pub kind: &'static str,
    pub filters: Vec<Filter>,
    pub order: Vec<SortKey>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl QueryDescriptor {
    /// Create an empty query over the given storage kind.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Add an equality predicate: `{field} = value`.
    pub fn filter_eq(&mut self, field: &'static str, value: Value) -> &mut Self {
        self.filters.push(Filter {
            field,
            op: FilterOp::Eq,
            value,
        });
        self
    }

    /// Append an ascending sort key.
    pub fn order_asc(&mut self, field: &'static str) -> &mut Self {
        self.order.push(SortKey { field });
        self
    }

    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(&mut self, n: usize) -> &mut Self {
        self.offset = Some(n);
        self
    }

    /// Render the descriptor as parameterised SQL over a document table.
    ///
    /// Documents live in a `doc` column as JSON text; every predicate compares
    /// the extracted field as a string, so non-string values are bound in
    /// their JSON text form (`false`, `250`).
    pub fn to_sql(&self) -> Result<(String, Vec<String>)> {
        let table = config::table_for_kind(self.kind).ok_or_else(|| {
            CatalogError::InvalidArgument(format!("unknown storage kind {:?}", self.kind))
        })?;

        let mut qb = SqlBuilder::new(table);
        for filter in &self.filters {
            qb.field_eq(filter.field, &param_text(&filter.value));
        }
        for key in &self.order {
            qb.order_by_field(key.field);
        }

        if let Some(n) = self.limit {
            qb.limit(n);
        }
        if let Some(n) = self.offset {
            qb.offset(n);
        }

        Ok(qb.build())
    }
}

// ---------------------------------------------------------------------------
// Filter builder
// ---------------------------------------------------------------------------

/// Build a query from a sparse filter object.
///
/// `fields` fixes both which keys are recognized and the order they are
/// applied in. Each recognized key present in `filter` is validated with its
/// check, then contributes one equality predicate and one ascending sort key.
/// The first invalid value aborts the whole build. Unrecognized keys are
/// ignored. When no recognized key is present the query is ordered by
/// `default_sort` alone.
pub fn build_query(
    kind: &'static str,
    fields: &[(&'static str, FieldCheck)],
    default_sort: &'static str,
    filter: &Map<String, Value>,
) -> std::result::Result<QueryDescriptor, ValidationError> {
    let mut query = QueryDescriptor::new(kind);
    let mut no_filters_applied = true;

    for &(field, check) in fields {
        let Some(value) = filter.get(field) else {
            continue;
        };
        if let Err(e) = check(Some(value)) {
            tracing::debug!(kind, field, error = %e, "rejected query filter");
            return Err(e);
        }
        query.filter_eq(field, value.clone()).order_asc(field);
        no_filters_applied = false;
    }

    if no_filters_applied {
        query.order_asc(default_sort);
    }

    tracing::debug!(kind, filters = query.filters.len(), "built catalog query");
    Ok(query)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn param_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
