//! Builds parameterized SELECT and COUNT statements over the catalog table.

use crate::config::TableRef;

/// Columns searched by `/list?query=`. Never derived from request input.
pub const SEARCH_FIELDS: &[&str] = &["modelo", "serie", "tipo", "marca", "categoria"];

/// Primary key column.
pub const ID_COLUMN: &str = "id";

/// Column holding each row serialized by `row_to_json`.
pub const ROW_COLUMN: &str = "car";

const ROW_ALIAS: &str = "main";

/// Quote identifier for PostgreSQL (safe: only from config or constants).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
fn qualified_table(table: &TableRef) -> String {
    format!("{}.{}", quoted(&table.schema), quoted(&table.table))
}

/// Free-text filter shared by the page and count reads so both see the same predicate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilter {
    term: Option<String>,
}

impl SearchFilter {
    /// Empty term means no filter.
    pub fn new(term: &str) -> Self {
        SearchFilter {
            term: (!term.is_empty()).then(|| term.to_string()),
        }
    }

    pub fn all() -> Self {
        SearchFilter { term: None }
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// `%term%`; the term is not escaped, so `%` and `_` inside it act as wildcards.
    pub fn pattern(&self) -> Option<String> {
        self.term.as_ref().map(|t| format!("%{}%", t))
    }
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<String>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: String) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

/// ` WHERE f1 ILIKE $1 OR ... OR f5 ILIKE $5`, one parameter per field, or empty when unfiltered.
fn search_where_clause(q: &mut QueryBuf, filter: &SearchFilter) -> String {
    let Some(pattern) = filter.pattern() else {
        return String::new();
    };
    let parts: Vec<String> = SEARCH_FIELDS
        .iter()
        .map(|field| {
            let n = q.push_param(pattern.clone());
            format!("{} ILIKE ${}", quoted(field), n)
        })
        .collect();
    format!(" WHERE {}", parts.join(" OR "))
}

/// Wrap a `SELECT *` so PostgreSQL renders every column as JSON, whatever its type
/// (numeric, enums, arrays, time). Rows come back as one JSON object in `ROW_COLUMN`, ordered by id.
fn rows_as_json(inner: &str) -> String {
    format!(
        "SELECT row_to_json({alias}) AS {col} FROM ({inner}) {alias} ORDER BY {alias}.{id}",
        alias = ROW_ALIAS,
        col = quoted(ROW_COLUMN),
        inner = inner,
        id = quoted(ID_COLUMN)
    )
}

/// One page of matching rows ordered by id. `limit` and `offset` are inlined as integers.
pub fn select_page(table: &TableRef, filter: &SearchFilter, limit: i64, offset: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_clause = search_where_clause(&mut q, filter);
    let inner = format!(
        "SELECT * FROM {}{} ORDER BY {} LIMIT {} OFFSET {}",
        qualified_table(table),
        where_clause,
        quoted(ID_COLUMN),
        limit,
        offset
    );
    q.sql = rows_as_json(&inner);
    q
}

/// Count of all rows matching the filter, as `total_count`.
pub fn count_matching(table: &TableRef, filter: &SearchFilter) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_clause = search_where_clause(&mut q, filter);
    q.sql = format!(
        "SELECT COUNT({}) AS total_count FROM {}{}",
        quoted(ID_COLUMN),
        qualified_table(table),
        where_clause
    );
    q
}

/// SELECT by primary key, compared as text so any id column type binds.
pub fn select_by_id(table: &TableRef, id: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id.to_string());
    let inner = format!(
        "SELECT * FROM {} WHERE {}::text = ${}",
        qualified_table(table),
        quoted(ID_COLUMN),
        n
    );
    q.sql = rows_as_json(&inner);
    q
}

/// Every row up to `limit`, ordered by id.
pub fn select_all(table: &TableRef, limit: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let inner = format!(
        "SELECT * FROM {} ORDER BY {} LIMIT {}",
        qualified_table(table),
        quoted(ID_COLUMN),
        limit
    );
    q.sql = rows_as_json(&inner);
    q
}
