//! The search/save/refresh controller behind the weather view.
//!
//! Owns the displayed state (search term, suggestions, loading flag,
//! saved list) and coordinates the asynchronous work around it: debounced
//! country lookup, the create-then-refresh save workflow, and the
//! background weather poll. Presentation is someone else's problem; this
//! crate only produces state snapshots for rendering.

pub mod notify;
pub mod save;
pub mod search;
pub mod sync;
pub mod timer;
pub mod view;

pub use notify::{DismissReason, Notification, NotificationQueue, Severity};
pub use save::SaveError;
pub use search::{SearchController, SearchState};
pub use sync::SyncScheduler;
pub use view::WeatherViewModel;
