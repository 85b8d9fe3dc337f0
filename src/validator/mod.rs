/// Per-table correlation of facts and the RLS compliance decision.
pub mod correlator;
/// Exact-match table exclusion list.
pub mod exclusion;
/// Finding records and rule identifiers.
pub mod finding;
