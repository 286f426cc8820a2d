//! Session-scoped list of submitted topics

use serde::{Deserialize, Serialize};

use crate::value_objects::ResearchQuery;

/// Topics submitted during a session, stored in submission order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchHistory {
    topics: Vec<ResearchQuery>,
}

impl ResearchHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, query: ResearchQuery) {
        self.topics.push(query);
    }

    /// Topics with the most recent first
    pub fn newest_first(&self) -> impl Iterator<Item = &ResearchQuery> {
        self.topics.iter().rev()
    }

    pub fn clear(&mut self) {
        self.topics.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(text: &str) -> ResearchQuery {
        ResearchQuery::new(text).unwrap()
    }

    #[test]
    fn lists_most_recent_first() {
        let mut history = ResearchHistory::new();
        history.record(query("first"));
        history.record(query("second"));
        history.record(query("third"));

        let topics: Vec<_> = history.newest_first().map(ResearchQuery::as_str).collect();
        assert_eq!(topics, vec!["third", "second", "first"]);
    }

    #[test]
    fn keeps_repeated_topics() {
        let mut history = ResearchHistory::new();
        history.record(query("same"));
        history.record(query("same"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn clear_empties_history() {
        let mut history = ResearchHistory::new();
        history.record(query("topic"));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.newest_first().count(), 0);
    }
}
