/// Structured facts extracted from SQL text, each tagged with its source location.
pub mod facts;
/// Identifier and table-name normalization helpers (schema-qualified names, quoted identifiers).
pub mod names;
/// `sqlparser`-backed extraction of table, RLS and policy facts.
pub mod sql_parser;
