pub mod authority;
pub mod clusters;
pub mod geocode;
pub mod model;
pub mod store;
pub mod summary;

pub use authority::{AuthorityChannel, LoggingAuthority};
pub use clusters::{cluster_reports, MarkerColor, ReportCluster, MAP_CENTER};
pub use geocode::{Geocoder, RandomGeocoder};
pub use model::{parse_age, DataQualityFlag, EvidencePolicy, Location, Report, ReportStatus};
pub use store::{ReportSink, ReportStore};
pub use summary::{EvidenceLink, ReportSummary};
