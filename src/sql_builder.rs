//! Parameterised SQL over document tables.
//!
//! Catalog tables hold one JSON document per row in a `doc` column. The
//! builder addresses document fields by name and renders them as
//! `json_extract_string(doc, '$.field')`. Field names come from the fixed
//! filter tables; values are always bound through `?` placeholders.
//!
//! # Example
//!
//! ```rust
//! use mtg_catalog::SqlBuilder;
//!
//! let (sql, params) = SqlBuilder::new("sets")
//!     .field_eq("block_code", "xln")
//!     .order_by_field("block_code")
//!     .limit(10)
//!     .build();
//! assert_eq!(
//!     sql,
//!     "SELECT doc\nFROM sets\n\
//!      WHERE json_extract_string(doc, '$.block_code') = ?\n\
//!      ORDER BY json_extract_string(doc, '$.block_code') ASC\n\
//!      LIMIT 10"
//! );
//! assert_eq!(params, vec!["xln"]);
//! ```

/// Builds a `SELECT doc` query against one document table.
pub struct SqlBuilder {
    table: String,
    predicates: Vec<String>,
    params: Vec<String>,
    order: Vec<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl SqlBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            predicates: Vec::new(),
            params: Vec::new(),
            order: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// `json_extract_string(doc, '$.{field}') = ?`, binding `value`.
    pub fn field_eq(&mut self, field: &str, value: &str) -> &mut Self {
        self.predicates.push(format!("{} = ?", extract(field)));
        self.params.push(value.to_string());
        self
    }

    /// Append an ascending sort on a document field.
    pub fn order_by_field(&mut self, field: &str) -> &mut Self {
        self.order.push(format!("{} ASC", extract(field)));
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

    /// Render the SQL text and its bound parameters, in placeholder order.
    pub fn build(&self) -> (String, Vec<String>) {
        let mut parts = vec!["SELECT doc".to_string(), format!("FROM {}", self.table)];

        if !self.predicates.is_empty() {
            parts.push(format!("WHERE {}", self.predicates.join(" AND ")));
        }
        if !self.order.is_empty() {
            parts.push(format!("ORDER BY {}", self.order.join(", ")));
        }
        if let Some(n) = self.limit {
            parts.push(format!("LIMIT {}", n));
        }
        if let Some(n) = self.offset {
            parts.push(format!("OFFSET {}", n));
        }

        (parts.join("\n"), self.params.clone())
    }
}

fn extract(field: &str) -> String {
    format!("json_extract_string(doc, '$.{}')", field)
}
