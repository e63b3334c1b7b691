//! Widget identifier generation.

use smartgrid_core::{IdStrategy, WidgetType};

/// Source of widget identifiers for one generated layout.
///
/// Implementations must not repeat an identifier within one layout.
pub trait IdGenerator {
    /// Produce the identifier for the next placed widget.
    fn next_id(&mut self, widget: &WidgetType) -> String;
}

impl<F> IdGenerator for F
where
    F: FnMut(&WidgetType) -> String,
{
    fn next_id(&mut self, widget: &WidgetType) -> String {
        self(widget)
    }
}

/// Deterministic `{type}-{n}` identifiers, `n` counting from 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Start a new sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, widget: &WidgetType) -> String {
        let id = format!("{widget}-{}", self.next);
        self.next += 1;
        id
    }
}

/// `{type}-{uuid v4}` identifiers, unique across calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self, widget: &WidgetType) -> String {
        format!("{widget}-{}", uuid::Uuid::new_v4())
    }
}

/// Generator for a configured strategy.
#[must_use]
pub fn id_generator(strategy: IdStrategy) -> Box<dyn IdGenerator> {
    match strategy {
        IdStrategy::Sequential => Box::new(SequentialIds::new()),
        IdStrategy::Random => Box::new(RandomIds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new();
        let news = WidgetType::from("news");
        assert_eq!(ids.next_id(&news), "news-1");
        assert_eq!(ids.next_id(&news), "news-2");
        assert_eq!(ids.next_id(&WidgetType::from("heatmap")), "heatmap-3");
    }

    #[test]
    fn test_sequential_ids_restart() {
        let news = WidgetType::from("news");
        assert_eq!(SequentialIds::new().next_id(&news), SequentialIds::new().next_id(&news));
    }

    #[test]
    fn test_random_ids_unique() {
        let mut ids = RandomIds;
        let news = WidgetType::from("news");
        let seen: HashSet<_> = (0..100).map(|_| ids.next_id(&news)).collect();
        assert_eq!(seen.len(), 100);
        assert!(seen.iter().all(|id| id.starts_with("news-")));
    }

    #[test]
    fn test_closure_generator() {
        let mut n = 0;
        let mut ids = |w: &WidgetType| {
            n += 10;
            format!("{}#{n}", w.as_str())
        };
        assert_eq!(ids.next_id(&WidgetType::from("news")), "news#10");
    }

    #[test]
    fn test_id_generator_strategy() {
        let news = WidgetType::from("news");
        assert_eq!(id_generator(IdStrategy::Sequential).next_id(&news), "news-1");
        assert_ne!(id_generator(IdStrategy::Random).next_id(&news), "news-1");
    }
}
