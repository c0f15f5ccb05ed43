mod data;
mod extract;

pub use data::RunnerEntry;
pub use extract::{extract_runner_entries, split_club_name};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duplicates::find_duplicates;
    use pretty_assertions::assert_eq;
    use scraper::Html;
    use std::fs;

    fn entry(club_id: &str, club_code: &str, runner_name: &str) -> RunnerEntry {
        RunnerEntry {
            club_entries_link: format!(
                "https://www.orioasis.pt/oasis/entries.php?action=club_class&eventid=414&clubid={}#et",
                club_id
            ),
            club_code: club_code.to_string(),
            runner_name: runner_name.to_string(),
        }
    }

    #[test]
    fn test_extracting_entries_per_club_page() {
        let html = fs::read_to_string("tests/htmls/entries_per_club.html")
            .expect("Invalid file url");
        let doc = Html::parse_document(&html);

        let entries = extract_runner_entries(&doc, "414").unwrap();

        assert_eq!(
            entries,
            vec![
                entry("2216", "COMinho", "João Pereira"),
                entry("2216", "COMinho", "Ana Martins"),
                entry("2216", "COMinho", "Rui Costa"),
                entry("3407", "EON-S", "Ana Martins"),
                entry("3407", "EON-S", "Pedro Silva"),
            ]
        );
    }

    #[test]
    fn test_duplicates_across_clubs_on_fixture_page() {
        let html = fs::read_to_string("tests/htmls/entries_per_club.html")
            .expect("Invalid file url");
        let doc = Html::parse_document(&html);

        let entries = extract_runner_entries(&doc, "414").unwrap();
        let duplicates = find_duplicates(entries, &[]);

        assert_eq!(
            duplicates,
            vec![
                entry("2216", "COMinho", "Ana Martins"),
                entry("3407", "EON-S", "Ana Martins"),
            ]
        );
    }
}
