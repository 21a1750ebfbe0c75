//! Client-side filtering for the blog, FAQ, product and careers listings.

pub const ALL_CATEGORIES: &str = "All";

pub trait Searchable {
    fn category(&self) -> &str;

    /// Text the search box matches against, e.g. title and excerpt.
    fn search_text(&self) -> [&str; 2];
}

/// Case-insensitive substring match against any of `fields`.
/// An empty query matches everything.
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn matches_category(item_category: &str, selected: &str) -> bool {
    selected == ALL_CATEGORIES || item_category == selected
}

pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str, category: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches_category(item.category(), category))
        .filter(|item| matches_query(&item.search_text(), query))
        .collect()
}

/// `All` followed by each distinct category in first-seen order.
pub fn categories<T: Searchable>(items: &[T]) -> Vec<&str> {
    let mut out = vec![ALL_CATEGORIES];
    for item in items {
        if !out.contains(&item.category()) {
            out.push(item.category());
        }
    }
    out
}

/// Accordion state for listings where one entry is open at a time.
/// Clicking the open entry closes it; clicking another switches to it.
pub fn toggle_open<T: PartialEq>(current: Option<T>, clicked: T) -> Option<T> {
    if current.as_ref() == Some(&clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        title: &'static str,
        body: &'static str,
        category: &'static str,
    }

    impl Searchable for Item {
        fn category(&self) -> &str {
            self.category
        }

        fn search_text(&self) -> [&str; 2] {
            [self.title, self.body]
        }
    }

    static ITEMS: [Item; 3] = [
        Item { title: "Cloud Migration", body: "Moving to AWS", category: "Cloud" },
        Item { title: "Zero Trust", body: "Security for the cloud era", category: "Security" },
        Item { title: "Dashboards", body: "Charts and KPIs", category: "Analytics" },
    ];

    fn titles(found: Vec<&Item>) -> Vec<&str> {
        found.into_iter().map(|item| item.title).collect()
    }

    #[test]
    fn empty_query_returns_everything() {
        assert_eq!(filter(&ITEMS, "", ALL_CATEGORIES).len(), 3);
    }

    #[test]
    fn whitespace_in_query_is_matched_literally() {
        assert!(filter(&ITEMS, "aws ", ALL_CATEGORIES).is_empty());
        assert!(filter(&ITEMS, "   ", ALL_CATEGORIES).is_empty());
        assert_eq!(titles(filter(&ITEMS, "to aws", ALL_CATEGORIES)), vec!["Cloud Migration"]);
    }

    #[test]
    fn query_matches_title_or_body_ignoring_case() {
        assert_eq!(
            titles(filter(&ITEMS, "CLOUD", ALL_CATEGORIES)),
            vec!["Cloud Migration", "Zero Trust"]
        );
        assert_eq!(titles(filter(&ITEMS, "kpi", ALL_CATEGORIES)), vec!["Dashboards"]);
    }

    #[test]
    fn category_still_applies_with_empty_query() {
        assert_eq!(titles(filter(&ITEMS, "", "Security")), vec!["Zero Trust"]);
    }

    #[test]
    fn category_and_query_combine() {
        assert!(filter(&ITEMS, "charts", "Cloud").is_empty());
        assert_eq!(titles(filter(&ITEMS, "cloud", "Cloud")), vec!["Cloud Migration"]);
    }

    #[test]
    fn categories_start_with_all_and_are_unique() {
        assert_eq!(
            categories(&ITEMS),
            vec!["All", "Cloud", "Security", "Analytics"]
        );
    }

    #[test]
    fn only_one_entry_is_open() {
        let open = toggle_open(None, "sd-001");
        assert_eq!(open, Some("sd-001"));
        let open = toggle_open(open, "da-001");
        assert_eq!(open, Some("da-001"));
        assert_eq!(toggle_open(open, "da-001"), None);
    }
}
