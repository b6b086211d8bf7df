pub mod ast;
pub mod backends;
pub mod check;
pub mod compile;
pub mod events;
pub mod query_loader;
pub mod run_common;
