// Utility functions
// Helper functions for common operations

pub mod data_state;
pub mod format;
pub mod navigation;

pub use data_state::DataState;
pub use format::format_stat;
pub use navigation::{EntryContext, NavIntent};

#[cfg(test)]
pub mod test_support;
