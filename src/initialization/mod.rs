//! One-time process initialization.
//!
//! Logger setup is explicit and owned by the constructing context (the binary
//! or a test harness), never an import-time side effect.

mod logger;

pub use logger::init_logger_with;
