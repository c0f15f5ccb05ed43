pub mod duplicates;
pub mod fetch;
pub mod oasis;
pub mod report;

mod error;

pub use error::ScrapeError;
pub use oasis::RunnerEntry;

/// Entry listing endpoint of the source site. Both the page fetch and the
/// per-club entries links are built on top of it.
pub(crate) const OASIS_ENTRIES_URL: &str = "https://www.orioasis.pt/oasis/entries.php";
