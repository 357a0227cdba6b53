//! Page-level views rendered by the router.

mod discover_view;
mod library_view;

pub use discover_view::DiscoverView;
pub use library_view::LibraryView;
