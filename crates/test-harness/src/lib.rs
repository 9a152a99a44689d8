//! Test harness for macro-script generation.
//!
//! Reads emitted VBScript back into statements so tests can check structure
//! rather than raw substrings.
//!
//! # Key Components
//!
//! - [`ScriptBuilder`]: Fluent API for building scripts in tests
//! - [`statement`]: Statement tokenizer and `"Key:=", value` entry lookup
//! - [`report`]: Plain-text summary of an emitted script
//! - [`helpers`]: Error type, hole builders, literal parsing
//! - [`assertions`]: Assertion helpers with diagnostics

pub mod assertions;
pub mod helpers;
pub mod report;
pub mod statement;
pub mod workflow;

pub use helpers::HarnessError;
pub use report::ScriptReport;
pub use statement::{tokenize, Statement};
pub use workflow::ScriptBuilder;
