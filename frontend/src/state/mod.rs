//! View state kept independent of the DOM.
//!
//! Components wrap these types in signals; all pagination, filtering and
//! editing rules live here so they can be tested without a browser.
//!
//! - [`pagination`] - Page bookkeeping
//! - [`listing`] - Server-paginated dissected listing
//! - [`mapping`] - Transaction summary editing
//! - [`comparison`] - Comparison search, facet and pagination
//! - [`feedback`] - Editable feedback grid
//! - [`pipeline`] - References passed between workflow steps
//! - [`activity`] - Activity log

pub mod activity;
pub mod comparison;
pub mod feedback;
pub mod listing;
pub mod mapping;
pub mod pagination;
pub mod pipeline;

pub use comparison::{ComparisonBrowser, ComparisonFilter};
pub use feedback::FeedbackGrid;
pub use listing::{DissectListing, PageRequest};
pub use mapping::{MappingGroup, SummaryEditor};
pub use pagination::PaginationState;
pub use pipeline::{PipelineContext, Stage};
