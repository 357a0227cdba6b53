//! Common reusable UI components.
//!
//! Shared form controls and small building blocks used across views.

mod image_input;
pub use image_input::ImageInput;

mod toggle_row;
pub use toggle_row::ToggleRow;

mod grip_handle;
pub use grip_handle::GripHandle;
