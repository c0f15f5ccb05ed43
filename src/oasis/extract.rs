use super::data::{ClubGroup, RunnerEntry};
use crate::{ScrapeError, OASIS_ENTRIES_URL};
use lazy_regex::regex_captures;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

const E: &str = "Invalid selector";
lazy_static! {
    static ref DATA_TABLE: Selector = Selector::parse("table.TableBorderLight").expect(E);
    static ref ANCHOR: Selector = Selector::parse("a").expect(E);
    static ref BOLD: Selector = Selector::parse("b").expect(E);
    static ref CELL: Selector = Selector::parse("td").expect(E);
}

/// Tables on the entries page come in a stable order:
/// 1st clubs, 2nd classes, 3rd countries, 4th runners.
const RUNNERS_TABLE_INDEX: usize = 3;

/// Class of the rows that carry a club's links and open its group. The same
/// class is reused by the page for the empty separator rows between groups.
const GROUP_BOUNDARY_CLASS: &str = "row-no-border";

/// Extract every runner listed on the page, paired with the entries link and
/// code of the club it was registered under.
pub fn extract_runner_entries(doc: &Html, event_id: &str) -> Result<Vec<RunnerEntry>, ScrapeError> {
    let table = doc
        .select(&DATA_TABLE)
        .nth(RUNNERS_TABLE_INDEX)
        .ok_or_else(|| {
            ScrapeError::PageStructure(format!(
                "runners table not found, expected at least {} tables of class TableBorderLight",
                RUNNERS_TABLE_INDEX + 1
            ))
        })?;

    let rows: Vec<ElementRef> = table_rows(table)
        .into_iter()
        .filter(is_relevant_row)
        .collect();
    // The first surviving row is the column header of the whole table, not
    // part of any club group.
    let rows = rows.get(1..).unwrap_or_default();

    let mut entries = Vec::new();
    for group in partition_club_groups(rows)? {
        entries.extend(expand_club_group(&group, event_id)?);
    }
    Ok(entries)
}

/// Direct child rows of the table in document order. html5ever wraps loose
/// `tr`s into implicit `tbody` elements, so those are expanded in place.
fn table_rows(table: ElementRef) -> Vec<ElementRef> {
    let mut rows = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "thead" | "tr" => rows.push(child),
            "tbody" => rows.extend(
                child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|el| el.value().name() == "tr"),
            ),
            _ => {}
        }
    }
    rows
}

/// Keep `thead` rows, and `tr` rows unless they are boundary-marked *and*
/// empty: those are the decorative separator rows between club groups.
fn is_relevant_row(row: &ElementRef) -> bool {
    match row.value().name() {
        "thead" => true,
        "tr" => !is_group_boundary(row) || has_text(row),
        _ => false,
    }
}

/// A `tr` carrying the boundary class starts a new club group.
fn is_group_boundary(row: &ElementRef) -> bool {
    row.value().name() == "tr" && row.value().classes().any(|c| c == GROUP_BOUNDARY_CLASS)
}

fn has_text(row: &ElementRef) -> bool {
    row.text().any(|t| !t.trim().is_empty())
}

/// Scan the filtered rows into club groups. A boundary row and the row right
/// after it always come as a pair (links row, club header row); anything else
/// is a runner row of the currently open group.
fn partition_club_groups<'a>(rows: &[ElementRef<'a>]) -> Result<Vec<ClubGroup<'a>>, ScrapeError> {
    let mut groups = Vec::new();
    let mut current: Option<ClubGroup> = None;

    let mut i = 0;
    while i < rows.len() {
        let row = rows[i];
        if is_group_boundary(&row) {
            if let Some(group) = current.take() {
                groups.push(group);
            }
            let header_row = *rows.get(i + 1).ok_or_else(|| {
                ScrapeError::PageStructure(
                    "club links row at end of table, club header row missing".to_string(),
                )
            })?;
            current = Some(ClubGroup {
                metadata_row: row,
                header_row,
                runner_rows: Vec::new(),
            });
            i += 2;
        } else {
            let group = current.as_mut().ok_or_else(|| {
                ScrapeError::PageStructure(
                    "runner row found before any club links row".to_string(),
                )
            })?;
            group.runner_rows.push(row);
            i += 1;
        }
    }

    // A club with zero runners is still a club.
    if let Some(group) = current.take() {
        groups.push(group);
    }

    Ok(groups)
}

fn expand_club_group(group: &ClubGroup, event_id: &str) -> Result<Vec<RunnerEntry>, ScrapeError> {
    let header = group
        .header_row
        .select(&BOLD)
        .next()
        .ok_or_else(|| {
            ScrapeError::PageStructure("club header row without bolded club name".to_string())
        })?
        .text()
        .collect::<String>();

    let (_club_name, club_code) = split_club_name(header.trim());
    let club_entries_link = club_entries_link(group.metadata_row, event_id)?;
    debug!("Club {} -> {}", club_code, club_entries_link);

    let mut entries = Vec::with_capacity(group.runner_rows.len());
    for row in &group.runner_rows {
        let runner_name = row
            .select(&CELL)
            .next()
            .ok_or_else(|| {
                ScrapeError::PageStructure("runner row without a name cell".to_string())
            })?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        entries.push(RunnerEntry {
            club_entries_link: club_entries_link.clone(),
            club_code: club_code.clone(),
            runner_name,
        });
    }
    Ok(entries)
}

/// Split a club header like `"[1208] Clube de Orientação do Minho - COMinho /
/// COMinho"` into display name and code.
///
/// The site separates the name block from the nick block with `" / "` and
/// prefixes the name block with a bracketed license id. Inside the name block
/// name and code are separated by `" - "`; clubs with `" - "` embedded in
/// their own name are resolved by taking the back half of the hyphen-split
/// parts as the code. That midpoint split is a heuristic and can misread
/// exotic names, the page offers nothing better to anchor on.
pub fn split_club_name(header: &str) -> (String, String) {
    let name_block = header.split(" / ").next().unwrap_or(header).trim();
    let name_block = match name_block.find(']') {
        Some(idx) => name_block[idx + 1..].trim(),
        None => name_block,
    };

    let parts: Vec<&str> = name_block.split(" - ").collect();
    if parts.len() == 2 {
        return (parts[0].to_string(), parts[1].to_string());
    }

    let split_at = (parts.len() + 1) / 2;
    (
        parts[..split_at].join(" - "),
        parts[split_at..].join(" - "),
    )
}

/// Build the club's entries link from its pay link.
///
/// The links row holds two anchors: the first goes back to the full club
/// list, the second is the club's pay link and embeds its club id.
fn club_entries_link(metadata_row: ElementRef, event_id: &str) -> Result<String, ScrapeError> {
    let pay_link = metadata_row.select(&ANCHOR).nth(1).ok_or_else(|| {
        ScrapeError::PageStructure("club links row without a second (pay) link".to_string())
    })?;
    let href = pay_link.value().attr("href").ok_or_else(|| {
        ScrapeError::PageStructure("club pay link without an href".to_string())
    })?;

    let (_, club_id) = regex_captures!(r"clubid=(-?\d+)", href).ok_or_else(|| {
        ScrapeError::PageStructure(format!("club id not found in pay link: {}", href))
    })?;

    Ok(format!(
        "{}?action=club_class&eventid={}&clubid={}#et",
        OASIS_ENTRIES_URL, event_id, club_id
    ))
}
