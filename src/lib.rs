pub mod backend;
pub mod cli;
pub mod database;
pub mod diagnostics;
pub mod sync;
