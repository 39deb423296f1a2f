pub const FILTER_ALL: &str = "all";

#[derive(Clone, Debug, PartialEq)]
pub struct CardState {
    pub category: String,
    pub visible: bool,
    pub transition_delay_secs: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    pub visible_count: usize,
}

pub fn matches(filter: &str, category: &str) -> bool {
    filter == FILTER_ALL || category.contains(filter)
}

/// Exclusive project filter. Starts on the first filter with every card
/// shown.
#[derive(Clone, Debug)]
pub struct ProjectFilter {
    filters: Vec<String>,
    active: usize,
    cards: Vec<CardState>,
}

impl ProjectFilter {
    pub fn new(filters: Vec<String>, categories: Vec<String>) -> Self {
        let cards = categories
            .into_iter()
            .map(|category| CardState {
                category,
                visible: true,
                transition_delay_secs: 0.0,
            })
            .collect();

        Self {
            filters,
            active: 0,
            cards,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.filters.get(self.active).map(String::as_str)
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn is_card_visible(&self, index: usize) -> bool {
        self.cards.get(index).is_some_and(|card| card.visible)
    }

    pub fn no_results(&self) -> bool {
        !self.cards.iter().any(|card| card.visible)
    }

    /// Unknown filters are ignored. Shown cards get an index-proportional
    /// transition delay so they fade in one after another.
    pub fn select(&mut self, filter: &str, stagger_secs: f64) -> Option<FilterOutcome> {
        self.active = self.filters.iter().position(|known| known == filter)?;

        let mut visible_count = 0;
        for (index, card) in self.cards.iter_mut().enumerate() {
            card.visible = matches(filter, &card.category);
            card.transition_delay_secs = if card.visible {
                visible_count += 1;
                index as f64 * stagger_secs
            } else {
                0.0
            };
        }

        Some(FilterOutcome { visible_count })
    }

    pub fn clear_transition_delays(&mut self) {
        for card in &mut self.cards {
            card.transition_delay_secs = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> ProjectFilter {
        ProjectFilter::new(
            ["all", "analysis", "ml", "web"].iter().map(|f| f.to_string()).collect(),
            ["analysis visualization", "ml", "analysis ml"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        )
    }

    #[test]
    fn all_cards_start_visible() {
        let filter = filter();

        assert_eq!(filter.active(), Some("all"));
        assert!(filter.cards().iter().all(|card| card.visible));
        assert!(!filter.no_results());
    }

    #[test]
    fn category_substring_decides_visibility() {
        let mut filter = filter();
        let outcome = filter.select("ml", 0.05).expect("known filter");

        assert_eq!(outcome.visible_count, 2);
        assert!(!filter.is_card_visible(0));
        assert!(filter.is_card_visible(1));
        assert!(filter.is_card_visible(2));
        assert!((filter.cards()[2].transition_delay_secs - 0.1).abs() < 1e-9);
        assert_eq!(filter.cards()[0].transition_delay_secs, 0.0);
    }

    #[test]
    fn empty_match_sets_no_results() {
        let mut filter = filter();
        filter.select("web", 0.05);

        assert!(filter.no_results());
        filter.clear_transition_delays();
        assert!(filter.cards().iter().all(|card| card.transition_delay_secs == 0.0));
    }

    #[test]
    fn unknown_filter_is_a_no_op() {
        let mut filter = filter();
        filter.select("analysis", 0.05);

        assert_eq!(filter.select("games", 0.05), None);
        assert_eq!(filter.active(), Some("analysis"));
        assert!(!filter.is_card_visible(1));
    }
}
