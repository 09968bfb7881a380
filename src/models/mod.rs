pub mod hit;
pub mod params;

pub use hit::{CreditEntry, DownloadReport, FailedItem, Hit, HitCount, SearchResponse, StoredResultSet};
pub use params::{Color, Colors, ImageType, Orientation, RawSearchParameters, SearchParameters};
