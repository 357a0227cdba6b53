//! Reusable UI components.

pub mod common;
mod edit_drawer;
mod focal_point_picker;
mod forge_wizard;
mod foundry_modal;
pub mod library;
mod moment_viewer;
mod navigation_sidebar;
mod smart_fab;
pub mod tapestry;

pub use edit_drawer::EditDrawer;
pub use focal_point_picker::FocalPointPicker;
pub use forge_wizard::ForgeModal;
pub use foundry_modal::FoundryOverlay;
pub use moment_viewer::MomentViewer;
pub use navigation_sidebar::NavigationSidebar;
pub use smart_fab::SmartFab;
pub use tapestry::Tapestry;
