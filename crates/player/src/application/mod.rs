//! Application layer: session state, workflows and services.
//!
//! Everything here is plain Rust over the domain types. The UI keeps these
//! values in signals and calls into them; nothing here renders.

pub mod edit_drawer;
pub mod feed;
pub mod forge;
pub mod foundry;
pub mod library;
pub mod moment_editor;
pub mod reorder;
pub mod seed;
pub mod services;
pub mod tapestry;
pub mod timing;

pub use edit_drawer::{DrawerTab, EditDrawerDraft};
pub use feed::{derive_feed, ContentFilter, FeedMoment, FeedQuery, FeedTab, FeedView};
pub use forge::{ForgeStep, ForgeWizard, RealmChoice};
pub use foundry::{FoundryEffect, FoundryModal, FoundryStep};
pub use library::{ActionOutcome, Layout, LibraryAction, LibraryState, LibraryView, NewLegend};
pub use moment_editor::{DebounceTicket, Debouncer, MomentEditor};
pub use reorder::ReorderSession;
pub use services::GameSearchService;
pub use tapestry::TapestryDraft;
