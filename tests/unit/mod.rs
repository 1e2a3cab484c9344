//! Unit test modules.

mod classifier_test;
mod config_file_test;
