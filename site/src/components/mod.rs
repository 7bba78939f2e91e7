//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: copy comes from `content`, pointer math
//! from the `effects` crate, and the only shared state is `UiState` context.

pub mod badge;
pub mod floating_decor;
pub mod footer;
pub mod hero;
pub mod hero_parallax;
pub mod icon;
pub mod navbar;
pub mod project_card;
pub mod sections;
pub mod service_card;
pub mod tilt_card;
pub mod timeline_item;
