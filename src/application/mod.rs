//! Application layer - Use cases and business workflows

pub mod browse_days;
pub mod context;
pub mod correct_entry;
pub mod import_log;
pub mod init;
pub mod manage_config;
pub mod manage_routes;
pub mod preview;

pub use browse_days::{BrowseService, ListOptions};
pub use context::ParsingContext;
pub use correct_entry::{CorrectionRequest, CorrectionService};
pub use import_log::{ImportService, ImportSummary};
pub use init::InitService;
pub use manage_config::ConfigService;
pub use manage_routes::{RouteCandidate, RouteService};
pub use preview::preview_comment;
