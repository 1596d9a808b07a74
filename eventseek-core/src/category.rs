//! Event categories and the category filter axis.
//!
//! `Category` is the closed set a feed event must carry. `CategoryFilter`
//! adds the `all` sentinel used by the filter axis; it is a filter value,
//! never an event value.
//!
//! # Examples
//! ```
//! use eventseek_core::{Category, CategoryFilter};
//!
//! assert_eq!(Category::Music.as_str(), "music");
//! assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
//! assert_eq!(
//!     "tech".parse::<CategoryFilter>(),
//!     Ok(CategoryFilter::Only(Category::Tech)),
//! );
//! ```

use serde::{Deserialize, Serialize};

/// Fixed category assigned to every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Concerts and festivals.
    Music,
    /// Technology meetups and conferences.
    Tech,
    /// Sporting fixtures.
    Sports,
    /// Food and drink happenings.
    Food,
    /// Arts and culture shows.
    Arts,
}

impl Category {
    /// Return the category as its lowercase feed identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Music => "music",
            Self::Tech => "tech",
            Self::Sports => "sports",
            Self::Food => "food",
            Self::Arts => "arts",
        }
    }

    /// Human-readable label for badges and dropdowns.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Music => "Music",
            Self::Tech => "Technology",
            Self::Sports => "Sports",
            Self::Food => "Food & Drink",
            Self::Arts => "Arts & Culture",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "music" => Ok(Self::Music),
            "tech" => Ok(Self::Tech),
            "sports" => Ok(Self::Sports),
            "food" => Ok(Self::Food),
            "arts" => Ok(Self::Arts),
            _ => Err(format!("unknown category '{s}'")),
        }
    }
}

/// Category axis of the filter criteria: a concrete category or `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only events in the given category.
    Only(Category),
}

impl CategoryFilter {
    /// Return the filter as its lowercase identifier (`all` or a category).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One entry of the category reference table shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    /// Identifier accepted by the filter axis.
    pub value: &'static str,
    /// Display label.
    pub label: &'static str,
}

/// The category filter options, including the `all` sentinel.
pub const OPTIONS: &[CategoryOption] = &[
    CategoryOption {
        value: "all",
        label: "All Categories",
    },
    CategoryOption {
        value: "music",
        label: "Music",
    },
    CategoryOption {
        value: "tech",
        label: "Technology",
    },
    CategoryOption {
        value: "sports",
        label: "Sports",
    },
    CategoryOption {
        value: "food",
        label: "Food & Drink",
    },
    CategoryOption {
        value: "arts",
        label: "Arts & Culture",
    },
];
