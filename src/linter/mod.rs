/// Multi-source reading and fact aggregation.
pub mod aggregate;
/// End-to-end lint run: aggregate, validate, emit.
pub mod runner;
