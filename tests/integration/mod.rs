//! Integration test modules.

mod cli_test;
