//! Integration tests for umireport library.
//!
//! These tests validate end-to-end workflows that span multiple modules,
//! ensuring that module interactions work correctly.

mod helpers;
mod test_data_files;
mod test_error_paths;
mod test_extract_pipeline;
