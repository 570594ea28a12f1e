use std::fmt;

use crate::core::params::QueryPairs;

/// Adult-content filtering applied to news results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafeSearch {
    Off,
    Moderate,
    Strict,
}

impl SafeSearch {
    /// The spelling the provider expects in the `safeSearch` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Moderate => "Moderate",
            Self::Strict => "Strict",
        }
    }
}

impl fmt::Display for SafeSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for the category listing endpoint.
///
/// With no category the provider returns its top headlines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsCategoryParams {
    /// Category name such as `"Business"` or `"ScienceAndTechnology"`.
    pub category: Option<String>,
}

impl NewsCategoryParams {
    /// Headlines across all categories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to one category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub(crate) fn query_pairs(&self) -> QueryPairs {
        let mut qp = QueryPairs::default();
        qp.text("Category", self.category.as_deref());
        qp
    }
}

/// Parameters for a news keyword search.
///
/// `q` is always sent. `count` is sent when greater than zero, `offset` whenever it is
/// set, and the string fields when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsSearchParams {
    /// The search query.
    pub q: String,
    /// Number of articles to return.
    pub count: Option<u32>,
    /// Number of articles to skip.
    pub offset: Option<u32>,
    /// Market code, e.g. `"en-US"`.
    pub mkt: Option<String>,
    pub safe_search: Option<SafeSearch>,
}

impl NewsSearchParams {
    /// Creates parameters for the given query with everything else unset.
    #[must_use]
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }

    /// Sets the number of articles to return.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the number of articles to skip.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the market code.
    #[must_use]
    pub fn mkt(mut self, mkt: impl Into<String>) -> Self {
        self.mkt = Some(mkt.into());
        self
    }

    #[must_use]
    pub const fn safe_search(mut self, safe_search: SafeSearch) -> Self {
        self.safe_search = Some(safe_search);
        self
    }

    pub(crate) fn query_pairs(&self) -> QueryPairs {
        let mut qp = QueryPairs::default();
        qp.required("q", &self.q)
            .positive("count", self.count)
            .number("offset", self.offset)
            .text("mkt", self.mkt.as_deref())
            .text("safeSearch", self.safe_search.map(SafeSearch::as_str));
        qp
    }
}
