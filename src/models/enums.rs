//! Query-parameter enums with fixed wire mappings.
//!
//! Each enum maps to its lowercase wire-format string through an
//! exhaustive `match`, so an unsupported value is a compile-time
//! impossibility rather than a runtime argument error.

use std::fmt;

/// Reporting period for fundamentals endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Period {
    /// Annual reports (default).
    #[default]
    Annual,
    /// Quarterly reports.
    Quarter,
}

impl Period {
    /// The `period` query-parameter value.
    pub fn as_wire(self) -> &'static str {
        match self {
            Period::Annual => "annual",
            Period::Quarter => "quarter",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

/// Response sections selectable on batch endpoints via the `types`
/// query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatchType {
    /// Latest quote.
    Quote,
    /// Recent news items.
    News,
    /// Historical chart bars.
    Chart,
}

impl BatchType {
    /// The `types` list entry for this section.
    pub fn as_wire(self) -> &'static str {
        match self {
            BatchType::Quote => "quote",
            BatchType::News => "news",
            BatchType::Chart => "chart",
        }
    }

    /// Comma-join a set of batch types for the `types` parameter.
    pub(crate) fn join(types: &[BatchType]) -> String {
        types
            .iter()
            .map(|t| t.as_wire())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for BatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

/// Time range for chart and split history endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartRange {
    /// All available history.
    Max,
    /// Five years.
    FiveYears,
    /// Two years.
    TwoYears,
    /// One year.
    OneYear,
    /// Year to date.
    YearToDate,
    /// Six months.
    SixMonths,
    /// Three months.
    ThreeMonths,
    /// One month (default).
    #[default]
    OneMonth,
    /// One trading day, minute bars.
    OneDay,
}

impl ChartRange {
    /// The range path/query segment.
    pub fn as_wire(self) -> &'static str {
        match self {
            ChartRange::Max => "max",
            ChartRange::FiveYears => "5y",
            ChartRange::TwoYears => "2y",
            ChartRange::OneYear => "1y",
            ChartRange::YearToDate => "ytd",
            ChartRange::SixMonths => "6m",
            ChartRange::ThreeMonths => "3m",
            ChartRange::OneMonth => "1m",
            ChartRange::OneDay => "1d",
        }
    }
}

impl fmt::Display for ChartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

/// Time range for the dividends endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DividendRange {
    /// Five years.
    FiveYears,
    /// Two years.
    TwoYears,
    /// One year (default).
    #[default]
    OneYear,
    /// Year to date.
    YearToDate,
    /// Six months.
    SixMonths,
    /// Three months.
    ThreeMonths,
    /// One month.
    OneMonth,
    /// The next upcoming dividend only.
    Next,
}

impl DividendRange {
    /// The range path segment.
    pub fn as_wire(self) -> &'static str {
        match self {
            DividendRange::FiveYears => "5y",
            DividendRange::TwoYears => "2y",
            DividendRange::OneYear => "1y",
            DividendRange::YearToDate => "ytd",
            DividendRange::SixMonths => "6m",
            DividendRange::ThreeMonths => "3m",
            DividendRange::OneMonth => "1m",
            DividendRange::Next => "next",
        }
    }
}

impl fmt::Display for DividendRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

/// Grouping dimension for the collections endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionType {
    /// Quotes for all symbols in a sector.
    Sector,
    /// Quotes for all symbols carrying a tag.
    Tag,
    /// Quotes for a curated list.
    List,
}

impl CollectionType {
    /// The collection type path segment.
    pub fn as_wire(self) -> &'static str {
        match self {
            CollectionType::Sector => "sector",
            CollectionType::Tag => "tag",
            CollectionType::List => "list",
        }
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

/// Curated market mover lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListType {
    /// Most active by volume.
    MostActive,
    /// Largest percent gainers.
    Gainers,
    /// Largest percent losers.
    Losers,
    /// Highest IEX volume.
    IexVolume,
    /// Highest IEX market share.
    IexPercent,
}

impl ListType {
    /// The list path segment.
    pub fn as_wire(self) -> &'static str {
        match self {
            ListType::MostActive => "mostactive",
            ListType::Gainers => "gainers",
            ListType::Losers => "losers",
            ListType::IexVolume => "iexvolume",
            ListType::IexPercent => "iexpercent",
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_wire() {
        assert_eq!(Period::Annual.as_wire(), "annual");
        assert_eq!(Period::Quarter.as_wire(), "quarter");
    }

    #[test]
    fn test_batch_type_join() {
        assert_eq!(
            BatchType::join(&[BatchType::Quote, BatchType::News, BatchType::Chart]),
            "quote,news,chart"
        );
        assert_eq!(BatchType::join(&[BatchType::Chart]), "chart");
    }

    #[test]
    fn test_ranges_wire() {
        assert_eq!(ChartRange::FiveYears.as_wire(), "5y");
        assert_eq!(ChartRange::YearToDate.as_wire(), "ytd");
        assert_eq!(ChartRange::OneDay.as_wire(), "1d");
        assert_eq!(DividendRange::Next.as_wire(), "next");
        assert_eq!(DividendRange::default().as_wire(), "1y");
    }

    #[test]
    fn test_list_and_collection_wire() {
        assert_eq!(ListType::MostActive.as_wire(), "mostactive");
        assert_eq!(CollectionType::Sector.as_wire(), "sector");
        assert_eq!(CollectionType::Tag.to_string(), "tag");
    }
}
