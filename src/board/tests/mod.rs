//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `edge_cases.rs` - board edges, back rows and error precedence
//! - `proptest.rs` - Property-based tests

mod edge_cases;
