// Common test utilities and fixtures

pub mod fixtures;

// Re-export commonly used items
// Note: not every test binary uses every helper
#[allow(unused_imports)]
pub use fixtures::TestCorpus;
#[allow(unused_imports)]
pub use helpers::{create_test_services, loaded_test_services, unicode_tokenizer};
