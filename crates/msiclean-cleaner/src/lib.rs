mod clean;
mod matcher;
mod orchestrator;
mod passes;
mod types;

pub use clean::clean_subkeys_if;
pub use matcher::KeyMatcher;
pub use orchestrator::run_cleanup;
pub use types::{CleanupEvent, CleanupSummary};
