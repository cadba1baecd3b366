// UI Components
// This module contains all reusable UI components

pub mod app_header;
pub mod icons;
pub mod profile_view;
pub mod project_card;
pub mod screen_placeholder;

pub use app_header::AppHeader;
pub use profile_view::ProfileView;
pub use project_card::ProjectGrid;
pub use screen_placeholder::ScreenPlaceholder;
