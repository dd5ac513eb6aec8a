//! Application layer: the list screen controller.
//!
//! Instead of component-held arrays filtered and sorted in place, a screen
//! keeps only its collection snapshot, the latest query and the latest page.
//! Every interaction rebuilds the query and re-runs the engine.
//!
//! ```text
//! User Input → Event → handle_event → QuerySpec' → engine::paginate → ResultPage
//!                                                        │
//!                               Host ◄── Actions ◄───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and query transitions
//! - [`modes`]: Collection load lifecycle
//! - [`state`]: State container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::LoadState;
pub use state::{ListViewState, DEFAULT_PAGER_WINDOW, DEFAULT_PAGE_SIZE_OPTIONS};
