//! Widget identifiers, ordering tiers and output records.

use crate::geometry::WidgetPosition;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Built-in dashboard widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WidgetKind {
    MarketIndices,
    PortfolioSummary,
    MarketSentiment,
    Watchlist,
    PriceChart,
    SectorPerformance,
    Heatmap,
    TopMovers,
    TrendingStocks,
    CryptoPrices,
    ForexRates,
    EconomicCalendar,
    EarningsCalendar,
    News,
}

impl WidgetKind {
    /// Get all built-in kinds in catalog order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::MarketIndices,
            Self::PortfolioSummary,
            Self::MarketSentiment,
            Self::Watchlist,
            Self::PriceChart,
            Self::SectorPerformance,
            Self::Heatmap,
            Self::TopMovers,
            Self::TrendingStocks,
            Self::CryptoPrices,
            Self::ForexRates,
            Self::EconomicCalendar,
            Self::EarningsCalendar,
            Self::News,
        ]
    }

    /// Wire identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MarketIndices => "market_indices",
            Self::PortfolioSummary => "portfolio_summary",
            Self::MarketSentiment => "market_sentiment",
            Self::Watchlist => "watchlist",
            Self::PriceChart => "price_chart",
            Self::SectorPerformance => "sector_performance",
            Self::Heatmap => "heatmap",
            Self::TopMovers => "top_movers",
            Self::TrendingStocks => "trending_stocks",
            Self::CryptoPrices => "crypto_prices",
            Self::ForexRates => "forex_rates",
            Self::EconomicCalendar => "economic_calendar",
            Self::EarningsCalendar => "earnings_calendar",
            Self::News => "news",
        }
    }

    /// Look up a kind by its wire identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.as_str() == id)
    }
}

/// A widget type identifier.
///
/// Any string is accepted: identifiers outside the built-in set become
/// [`WidgetType::Custom`] and resolve to default metadata unless a custom
/// catalog describes them.
///
/// Equality and hashing go through the wire identifier, so a `Custom` value
/// spelling a built-in id is the same type as its `Known` form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WidgetType {
    /// One of the built-in widgets.
    Known(WidgetKind),
    /// Any other identifier.
    Custom(String),
}

impl WidgetType {
    /// Wire identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(kind) => kind.as_str(),
            Self::Custom(id) => id,
        }
    }

    /// The built-in kind this identifier names, if any.
    #[must_use]
    pub fn kind(&self) -> Option<WidgetKind> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Custom(id) => WidgetKind::from_id(id),
        }
    }

    /// Whether this is a built-in widget.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.kind().is_some()
    }
}

impl PartialEq for WidgetType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for WidgetType {}

impl Hash for WidgetType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<WidgetKind> for WidgetType {
    fn from(kind: WidgetKind) -> Self {
        Self::Known(kind)
    }
}

impl From<&str> for WidgetType {
    fn from(id: &str) -> Self {
        WidgetKind::from_id(id).map_or_else(|| Self::Custom(id.to_string()), Self::Known)
    }
}

impl From<String> for WidgetType {
    fn from(id: String) -> Self {
        match WidgetKind::from_id(&id) {
            Some(kind) => Self::Known(kind),
            None => Self::Custom(id),
        }
    }
}

impl From<WidgetType> for String {
    fn from(widget: WidgetType) -> Self {
        match widget {
            WidgetType::Known(kind) => kind.as_str().to_string(),
            WidgetType::Custom(id) => id,
        }
    }
}

impl FromStr for WidgetType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement priority tier. Only used as a sort key.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Sort rank (lower is placed first).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// Presentation category. Secondary sort key after [`Priority`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Banner,
    Card,
    #[default]
    Chart,
    Table,
    Stream,
}

impl Category {
    /// Sort rank (lower is placed first).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Banner => 0,
            Self::Card => 1,
            Self::Chart => 2,
            Self::Table => 3,
            Self::Stream => 4,
        }
    }
}

/// One placed widget in a generated layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Identifier, unique within one layout.
    pub id: String,
    /// Widget type.
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    /// Grid rectangle.
    pub position: WidgetPosition,
    /// Always `true` for generated layouts.
    pub enabled: bool,
}

impl WidgetConfig {
    /// Create an enabled widget record.
    #[must_use]
    pub fn new(id: impl Into<String>, widget_type: WidgetType, position: WidgetPosition) -> Self {
        Self {
            id: id.into(),
            widget_type,
            position,
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ids_round_trip() {
        for kind in WidgetKind::all() {
            assert_eq!(WidgetKind::from_id(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn test_kind_ids_unique() {
        let mut ids: Vec<_> = WidgetKind::all().iter().map(|k| k.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), WidgetKind::all().len());
    }

    #[test]
    fn test_widget_type_parse_known() {
        let t: WidgetType = "market_indices".parse().unwrap();
        assert_eq!(t, WidgetType::Known(WidgetKind::MarketIndices));
        assert!(t.is_known());
    }

    #[test]
    fn test_widget_type_parse_unknown() {
        let t = WidgetType::from("totally_unknown_widget");
        assert_eq!(t, WidgetType::Custom("totally_unknown_widget".to_string()));
        assert!(!t.is_known());
        assert_eq!(t.to_string(), "totally_unknown_widget");
    }

    #[test]
    fn test_widget_type_from_string_matches_from_str() {
        assert_eq!(
            WidgetType::from("news".to_string()),
            WidgetType::from("news")
        );
    }

    #[test]
    fn test_custom_spelling_of_builtin_is_same_type() {
        let custom = WidgetType::Custom("news".to_string());
        let known = WidgetType::Known(WidgetKind::News);
        assert_eq!(custom, known);
        assert!(custom.is_known());
        assert_eq!(custom.kind(), Some(WidgetKind::News));

        let set: std::collections::HashSet<_> = [custom, known].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_priority_ranks() {
        assert_eq!(Priority::High.rank(), 0);
        assert_eq!(Priority::Medium.rank(), 1);
        assert_eq!(Priority::Low.rank(), 2);
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_category_ranks() {
        let ranks: Vec<_> = [
            Category::Banner,
            Category::Card,
            Category::Chart,
            Category::Table,
            Category::Stream,
        ]
        .iter()
        .map(|c| c.rank())
        .collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
        assert_eq!(Category::default(), Category::Chart);
    }

    #[test]
    fn test_widget_config_json_shape() {
        let config = WidgetConfig::new(
            "news-1",
            WidgetType::from("news"),
            WidgetPosition::new(0, 0, 4, 6),
        );
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "news");
        assert_eq!(json["id"], "news-1");
        assert_eq!(json["enabled"], true);
        assert_eq!(json["position"]["w"], 4);
    }

    #[test]
    fn test_widget_config_deserialize_custom_type() {
        let json = r#"{"id":"a","type":"my_widget","position":{"x":0,"y":0,"w":6,"h":4},"enabled":true}"#;
        let config: WidgetConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.widget_type, WidgetType::Custom("my_widget".into()));
    }
}
