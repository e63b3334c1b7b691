//! Placement order: priority tier, then category tier.

use smartgrid_core::{WidgetCatalog, WidgetType};

/// Sort key of a widget type: `(priority rank, category rank)`.
///
/// Unknown types resolve to medium priority and the chart category.
#[must_use]
pub fn order_key(catalog: &WidgetCatalog, widget: &WidgetType) -> (u8, u8) {
    let meta = catalog.resolve(widget);
    (meta.priority.rank(), meta.category.rank())
}

/// Return `selected` sorted by [`order_key`].
///
/// The sort is stable: equal keys keep their input order, which decides
/// which of them the first-fit packer sees first.
#[must_use]
pub fn priority_order(catalog: &WidgetCatalog, selected: &[WidgetType]) -> Vec<WidgetType> {
    let mut ordered = selected.to_vec();
    ordered.sort_by_key(|widget| order_key(catalog, widget));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn types(ids: &[&str]) -> Vec<WidgetType> {
        ids.iter().map(|&id| WidgetType::from(id)).collect()
    }

    #[test]
    fn test_high_before_medium() {
        let ordered = priority_order(
            WidgetCatalog::builtin(),
            &types(&["market_sentiment", "market_indices"]),
        );
        assert_eq!(ordered, types(&["market_indices", "market_sentiment"]));
    }

    #[test]
    fn test_category_breaks_priority_ties() {
        // All high: banner < card < table.
        let ordered = priority_order(
            WidgetCatalog::builtin(),
            &types(&["watchlist", "portfolio_summary", "market_indices"]),
        );
        assert_eq!(
            ordered,
            types(&["market_indices", "portfolio_summary", "watchlist"])
        );
    }

    #[test]
    fn test_unknown_sorts_as_medium_chart() {
        // medium/card < unknown (medium/chart) < medium/table < low
        let ordered = priority_order(
            WidgetCatalog::builtin(),
            &types(&["forex_rates", "top_movers", "mystery", "market_sentiment"]),
        );
        assert_eq!(
            ordered,
            types(&["market_sentiment", "mystery", "top_movers", "forex_rates"])
        );
    }

    #[test]
    fn test_stable_for_equal_keys() {
        // economic_calendar, earnings_calendar and trending_stocks are all low/table.
        let input = types(&["earnings_calendar", "trending_stocks", "economic_calendar"]);
        let ordered = priority_order(WidgetCatalog::builtin(), &input);
        assert_eq!(ordered, input);

        let reversed: Vec<_> = input.iter().rev().cloned().collect();
        assert_eq!(priority_order(WidgetCatalog::builtin(), &reversed), reversed);
    }

    #[test]
    fn test_duplicates_kept() {
        let ordered = priority_order(WidgetCatalog::builtin(), &types(&["news", "news"]));
        assert_eq!(ordered.len(), 2);
    }

    #[test]
    fn test_empty() {
        assert!(priority_order(WidgetCatalog::builtin(), &[]).is_empty());
    }

    fn any_widget() -> impl Strategy<Value = WidgetType> {
        prop_oneof![
            proptest::sample::select(smartgrid_core::get_all_widget_types()),
            "[a-z]{3,8}".prop_map(WidgetType::from),
        ]
    }

    proptest! {
        #[test]
        fn prop_order_is_deterministic(input in proptest::collection::vec(any_widget(), 0..20)) {
            let catalog = WidgetCatalog::builtin();
            prop_assert_eq!(priority_order(catalog, &input), priority_order(catalog, &input));
        }

        #[test]
        fn prop_order_is_sorted_permutation(input in proptest::collection::vec(any_widget(), 0..20)) {
            let catalog = WidgetCatalog::builtin();
            let ordered = priority_order(catalog, &input);
            prop_assert_eq!(ordered.len(), input.len());
            for pair in ordered.windows(2) {
                prop_assert!(order_key(catalog, &pair[0]) <= order_key(catalog, &pair[1]));
            }
            for widget in &input {
                let want = input.iter().filter(|w| *w == widget).count();
                let got = ordered.iter().filter(|w| *w == widget).count();
                prop_assert_eq!(want, got);
            }
        }
    }
}
