use std::collections::BTreeSet;

use crate::location::{CategoryMap, Location};

/// Search text and selected tags shared by the sidebar and the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search: String,
    tags: BTreeSet<String>,
}

/// The only ways a [`FilterState`] changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetSearch(String),
    ClearSearch,
    ToggleTag(String),
    ClearTags,
    ClearAll,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    #[must_use]
    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    #[must_use]
    pub fn selected_tag_count(&self) -> usize {
        self.tags.len()
    }

    /// `true` if either a search term or a tag is set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.tags.is_empty()
    }

    pub fn dispatch(&mut self, action: FilterAction) {
        log::debug!("Filter action: {action:?}");
        match action {
            FilterAction::SetSearch(search) => self.search = search,
            FilterAction::ClearSearch => self.search.clear(),
            FilterAction::ToggleTag(tag) => {
                if !self.tags.remove(&tag) {
                    self.tags.insert(tag);
                }
            }
            FilterAction::ClearTags => self.tags.clear(),
            FilterAction::ClearAll => {
                self.search.clear();
                self.tags.clear();
            }
        }
    }

    #[must_use]
    pub fn apply(&self, data: &CategoryMap) -> CategoryMap {
        apply_filter(data, &self.search, &self.tags)
    }
}

fn matches_search(location: &Location, needle: &str) -> bool {
    needle.is_empty()
        || location.name.to_lowercase().contains(needle)
        || location
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}

fn matches_tags(location: &Location, tags: &BTreeSet<String>) -> bool {
    tags.is_empty() || location.tags.iter().any(|tag| tags.contains(tag))
}

/// Visible locations per category.
///
/// A location passes if the search term is a case-insensitive substring of
/// its name or description AND it carries at least one of the selected tags.
/// Empty criteria always pass. Categories without any remaining location are
/// dropped.
#[must_use]
pub fn apply_filter(data: &CategoryMap, search: &str, tags: &BTreeSet<String>) -> CategoryMap {
    let needle = search.to_lowercase();
    data.iter()
        .filter_map(|(category, locations)| {
            let visible: Vec<_> = locations
                .iter()
                .filter(|l| matches_search(l, &needle) && matches_tags(l, tags))
                .cloned()
                .collect();
            (!visible.is_empty()).then(|| (category.clone(), visible))
        })
        .collect()
}

/// Union of all tags, sorted.
#[must_use]
pub fn all_tags(data: &CategoryMap) -> Vec<String> {
    data.locations()
        .flat_map(|l| l.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// What sidebar rows show besides the name. Does not affect filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub show_descriptions: bool,
    pub show_tags: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_descriptions: true,
            show_tags: true,
        }
    }
}

/// The category dropdown of the sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelection {
    #[default]
    All,
    Only(String),
}

impl CategorySelection {
    /// Parses the value of the dropdown, where `""` means all categories.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    #[must_use]
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => "",
            Self::Only(category) => category,
        }
    }

    #[must_use]
    pub fn is_available_in(&self, data: &CategoryMap) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => data.contains_category(category),
        }
    }

    /// Falls back to [`CategorySelection::All`] when the selected category
    /// vanished from `data`.
    pub fn reconcile(&mut self, data: &CategoryMap) {
        if !self.is_available_in(data) {
            log::debug!("Category {:?} is gone, showing all", self.as_value());
            *self = Self::All;
        }
    }
}

/// Rows of one category as listed in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryRows<'a> {
    /// Position of the category within the (filtered) map.
    pub index: usize,
    pub category: &'a str,
    pub locations: &'a [Location],
}

#[must_use]
pub fn restrict_to_category<'a>(
    data: &'a CategoryMap,
    selection: &CategorySelection,
) -> Vec<CategoryRows<'a>> {
    data.iter()
        .enumerate()
        .filter(|(_, (category, _))| match selection {
            CategorySelection::All => true,
            CategorySelection::Only(selected) => *category == selected,
        })
        .map(|(index, (category, locations))| CategoryRows {
            index,
            category,
            locations,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::tests::location;

    fn sample() -> CategoryMap {
        let mut queer_space = location(3, "Rainbow Hall", 52.3, 13.3, &["cafe", "bar"]);
        queer_space.description = Some("A Queer Space for everyone".to_string());
        [
            (
                "Bars".to_string(),
                vec![
                    location(1, "A", 52.0, 13.0, &["lgbt"]),
                    location(4, "Nightcap", 52.4, 13.4, &["bar", "late"]),
                ],
            ),
            ("Cafes".to_string(), vec![location(2, "B", 52.1, 13.2, &[])]),
            ("Community".to_string(), vec![queer_space]),
        ]
        .into_iter()
        .collect()
    }

    fn tags(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(ToString::to_string).collect()
    }

    fn ids(data: &CategoryMap) -> BTreeSet<u64> {
        data.locations().map(|l| l.id).collect()
    }

    #[test]
    fn identity_without_criteria() {
        let data = sample();
        assert_eq!(apply_filter(&data, "", &BTreeSet::new()), data);
    }

    #[test]
    fn idempotent() {
        let data = sample();
        let selected = tags(&["bar"]);
        let once = apply_filter(&data, "n", &selected);
        let twice = apply_filter(&once, "n", &selected);
        assert_eq!(once, twice);
    }

    #[test]
    fn tag_intersection_decides() {
        let data = sample();
        let with_bar = apply_filter(&data, "", &tags(&["bar"]));
        assert!(ids(&with_bar).contains(&3));
        let with_club = apply_filter(&data, "", &tags(&["club"]));
        assert!(with_club.is_empty());
    }

    #[test]
    fn more_tags_never_remove_matches() {
        let data = sample();
        let t1 = tags(&["lgbt"]);
        let t2 = tags(&["lgbt", "cafe"]);
        let r1 = ids(&apply_filter(&data, "", &t1));
        let r2 = ids(&apply_filter(&data, "", &t2));
        assert!(r1.is_subset(&r2));
        assert_eq!(r2.len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_on_description() {
        let data = sample();
        let found = apply_filter(&data, "queer", &BTreeSet::new());
        assert_eq!(ids(&found), [3].into());
        let found = apply_filter(&data, "NIGHT", &BTreeSet::new());
        assert_eq!(ids(&found), [4].into());
    }

    #[test]
    fn search_matches_name_without_description() {
        let data = sample();
        assert_eq!(data.find(4).unwrap().description, None);
        let found = apply_filter(&data, "nightcap", &BTreeSet::new());
        assert_eq!(ids(&found), [4].into());
        assert!(found.get("Community").is_none());
    }

    #[test]
    fn search_and_tags_are_combined() {
        let data = sample();
        let found = apply_filter(&data, "rainbow", &tags(&["late"]));
        assert!(found.is_empty());
        let found = apply_filter(&data, "rainbow", &tags(&["cafe"]));
        assert_eq!(ids(&found), [3].into());
    }

    #[test]
    fn drop_empty_categories() {
        let data = sample();
        let found = apply_filter(&data, "", &tags(&["lgbt"]));
        assert_eq!(found.categories().collect::<Vec<_>>(), ["Bars"]);
        assert_eq!(found.get("Bars").unwrap().len(), 1);
        assert_eq!(found.get("Bars").unwrap()[0].name, "A");
    }

    #[test]
    fn collect_sorted_unique_tags() {
        assert_eq!(all_tags(&sample()), ["bar", "cafe", "late", "lgbt"]);
        assert!(all_tags(&CategoryMap::new()).is_empty());
    }

    #[test]
    fn dispatch_filter_actions() {
        let mut state = FilterState::new();
        assert!(!state.is_active());
        state.dispatch(FilterAction::ToggleTag("bar".into()));
        state.dispatch(FilterAction::ToggleTag("cafe".into()));
        assert_eq!(state.selected_tag_count(), 2);
        state.dispatch(FilterAction::ToggleTag("bar".into()));
        assert!(!state.is_tag_selected("bar"));
        assert!(state.is_tag_selected("cafe"));
        state.dispatch(FilterAction::SetSearch("Queer".into()));
        assert_eq!(state.search(), "Queer");
        assert_eq!(ids(&state.apply(&sample())), [3].into());
        state.dispatch(FilterAction::ClearTags);
        assert!(state.tags().is_empty());
        assert!(state.is_active());
        state.dispatch(FilterAction::ClearAll);
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn clear_search_keeps_tags() {
        let mut state = FilterState::new();
        state.dispatch(FilterAction::SetSearch("hall".into()));
        state.dispatch(FilterAction::ToggleTag("cafe".into()));
        state.dispatch(FilterAction::ClearSearch);
        assert_eq!(state.search(), "");
        assert!(state.is_tag_selected("cafe"));
        assert!(state.is_active());
        assert_eq!(ids(&state.apply(&sample())), [3].into());
    }

    #[test]
    fn filter_keeps_category_order() {
        let data: CategoryMap = [
            ("Zeta".to_string(), vec![location(1, "Z", 52.0, 13.0, &["bar"])]),
            ("Alpha".to_string(), vec![location(2, "A", 52.1, 13.1, &["bar"])]),
        ]
        .into_iter()
        .collect();
        let found = apply_filter(&data, "", &tags(&["bar"]));
        assert_eq!(found.categories().collect::<Vec<_>>(), ["Zeta", "Alpha"]);
        let rows = restrict_to_category(&found, &CategorySelection::Only("Alpha".into()));
        assert_eq!(rows[0].index, 1);
    }

    #[test]
    fn reset_vanished_category() {
        let data = sample();
        let mut selection = CategorySelection::from_value("Cafes");
        selection.reconcile(&data);
        assert_eq!(selection, CategorySelection::Only("Cafes".into()));

        let filtered = apply_filter(&data, "", &tags(&["lgbt"]));
        assert!(!selection.is_available_in(&filtered));
        selection.reconcile(&filtered);
        assert_eq!(selection, CategorySelection::All);
        assert_eq!(selection.as_value(), "");
    }

    #[test]
    fn show_everything_by_default() {
        let settings = DisplaySettings::default();
        assert!(settings.show_descriptions);
        assert!(settings.show_tags);
    }

    #[test]
    fn restrict_rows_to_selected_category() {
        let data = sample();
        let rows = restrict_to_category(&data, &CategorySelection::All);
        assert_eq!(rows.len(), 3);
        let rows = restrict_to_category(&data, &CategorySelection::Only("Community".into()));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].index, 2);
        assert_eq!(rows[0].locations[0].id, 3);
    }
}
