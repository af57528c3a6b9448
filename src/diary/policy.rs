use super::entry::DiaryEntry;

/// Selects the entries the diary screen should render.
///
/// With `show_all` every entry is returned in creation order. Otherwise only
/// the most recent entry is returned, or nothing when the diary is empty.
pub fn visible_entries(entries: &[DiaryEntry], show_all: bool) -> &[DiaryEntry] {
    if show_all {
        return entries;
    }
    let start = entries.len().saturating_sub(1);
    &entries[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(texts: &[&str]) -> Vec<DiaryEntry> {
        texts
            .iter()
            .enumerate()
            .map(|(id, text)| DiaryEntry::new(id as u64, *text))
            .collect()
    }

    #[test]
    fn collapsed_empty_is_empty() {
        assert!(visible_entries(&[], false).is_empty());
    }

    #[test]
    fn expanded_empty_is_empty() {
        assert!(visible_entries(&[], true).is_empty());
    }

    #[test]
    fn collapsed_shows_only_latest() {
        let all = entries(&["A", "B", "C"]);
        assert_eq!(visible_entries(&all, false), &[DiaryEntry::new(2, "C")]);
    }

    #[test]
    fn expanded_keeps_creation_order() {
        let all = entries(&["A", "B", "C"]);
        assert_eq!(
            visible_entries(&all, true),
            &[
                DiaryEntry::new(0, "A"),
                DiaryEntry::new(1, "B"),
                DiaryEntry::new(2, "C"),
            ]
        );
    }

    #[test]
    fn repeated_calls_agree() {
        let all = entries(&["first", "second"]);
        assert_eq!(visible_entries(&all, false), visible_entries(&all, false));
        assert_eq!(visible_entries(&all, true), visible_entries(&all, true));
    }
}
