use scraper::ElementRef;
use serde::Serialize;

/// One registration as listed on the entries-per-club page, paired with the
/// club context it was found under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunnerEntry {
    pub club_entries_link: String,
    pub club_code: String,
    pub runner_name: String,
}

/// Contiguous slice of table rows belonging to one club: the row holding the
/// club links, the header row holding the club name, and one row per runner.
/// Borrowed straight from the parsed document and consumed immediately.
#[derive(Debug)]
pub(crate) struct ClubGroup<'a> {
    pub metadata_row: ElementRef<'a>,
    pub header_row: ElementRef<'a>,
    pub runner_rows: Vec<ElementRef<'a>>,
}
