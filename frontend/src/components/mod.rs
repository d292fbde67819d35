//! UI Components for the Caseflow application.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar listing the workflow steps
//! - [`PageHeader`] - Page title and description
//! - [`LogsPanel`] - Activity log of the current session
//! - [`Footer`] - Page footer
//!
//! # Workflow Pages
//! - [`UploadPage`] - Test-case upload
//! - [`DissectPage`] - Server-paginated dissected test cases
//! - [`AnalysePage`] - Label processing and the [`TransactionSummaryEditor`]
//! - [`PreProcessPage`] - Mapped/unmapped pre-processing
//! - [`ComparisonPage`] - Filterable comparison results
//! - [`FeedbackPage`] - Editable feedback grid
//!
//! # Building Blocks
//! - [`FileUploadForm`], [`DownloadLink`], [`Notice`], [`TestCaseTable`], [`PageControls`]

mod analyse;
mod comparison;
mod dissect;
mod download;
mod feedback;
mod footer;
mod header;
mod hero;
mod logs;
mod notice;
mod preprocess;
mod summary;
mod table;
mod upload;

pub use analyse::*;
pub use comparison::*;
pub use dissect::*;
pub use download::*;
pub use feedback::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use logs::*;
pub use notice::*;
pub use preprocess::*;
pub use summary::*;
pub use table::*;
pub use upload::*;
