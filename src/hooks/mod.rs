pub mod use_entry_context;
pub mod use_profile;

pub use use_entry_context::use_entry_context;
pub use use_profile::use_profile;
