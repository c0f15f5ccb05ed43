use crate::RunnerEntry;
use itertools::Itertools;

/// Find every entry involved in a duplicate-name collision, skipping names
/// from the ignore list.
///
/// Entries are stable-sorted by runner name and scanned pairwise, so the
/// output is grouped by name rather than input order, and a name registered
/// k times yields 2(k-1) records with the interior ones repeated.
pub fn find_duplicates(mut entries: Vec<RunnerEntry>, ignored_names: &[String]) -> Vec<RunnerEntry> {
    entries.sort_by(|a, b| a.runner_name.cmp(&b.runner_name));

    let mut duplicates = Vec::new();
    for (previous, current) in entries.iter().tuple_windows() {
        if previous.runner_name == current.runner_name
            && !ignored_names.contains(&current.runner_name)
        {
            duplicates.push(previous.clone());
            duplicates.push(current.clone());
        }
    }
    duplicates
}
