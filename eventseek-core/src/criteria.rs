//! Filter criteria: the query state for one pipeline pass.
//!
//! Each axis defaults to "no restriction", so `FilterCriteria::default()`
//! passes every event through unchanged. Criteria serialize as a flat record
//! with defaulting fields, suitable for persistence by a host.
//!
//! # Examples
//! ```
//! use eventseek_core::{Category, CategoryFilter, DateWindow, FilterCriteria};
//!
//! let criteria = FilterCriteria::default()
//!     .with_search("festival")
//!     .with_category(CategoryFilter::Only(Category::Music))
//!     .with_date_window(DateWindow::Next7Days)
//!     .near("CHI");
//!
//! assert_eq!(criteria.focal_location.as_deref(), Some("CHI"));
//! ```

use serde::{Deserialize, Serialize};

use crate::CategoryFilter;

/// Date-window axis of the filter criteria.
///
/// Windows start at the beginning of the evaluation day and close at the end
/// of the final day, boundaries inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateWindow {
    /// No date restriction.
    #[default]
    All,
    /// The evaluation day only.
    Today,
    /// The evaluation day plus the following seven days.
    Next7Days,
    /// The evaluation day plus the following thirty days.
    Next30Days,
}

impl DateWindow {
    /// Number of days the window extends past the evaluation day, or `None`
    /// for the unrestricted window.
    #[must_use]
    pub fn horizon_days(self) -> Option<u64> {
        match self {
            Self::All => None,
            Self::Today => Some(0),
            Self::Next7Days => Some(7),
            Self::Next30Days => Some(30),
        }
    }

    /// Return the window as its lowercase identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Next7Days => "next7days",
            Self::Next30Days => "next30days",
        }
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DateWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "next7days" => Ok(Self::Next7Days),
            "next30days" => Ok(Self::Next30Days),
            _ => Err(format!("unknown date window '{s}'")),
        }
    }
}

/// The full set of active filter settings for one pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive substring filter; empty means unrestricted.
    pub search_text: String,
    /// Category restriction, `All` by default.
    pub category: CategoryFilter,
    /// Date-window restriction, `All` by default.
    pub date_window: DateWindow,
    /// Location id activating radius filtering and distance ranking.
    pub focal_location: Option<String>,
}

impl FilterCriteria {
    /// Set the free-text search axis.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search_text = search.into();
        self
    }

    /// Set the category axis.
    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the date-window axis.
    #[must_use]
    pub fn with_date_window(mut self, window: DateWindow) -> Self {
        self.date_window = window;
        self
    }

    /// Centre the radius filter on a named location.
    #[must_use]
    pub fn near(mut self, location_id: impl Into<String>) -> Self {
        self.focal_location = Some(location_id.into());
        self
    }
}
