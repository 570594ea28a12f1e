use crate::core::params::QueryPairs;

/// Parameters for a video keyword search.
///
/// Follows the same rule as news search: `q` is always sent, `count` when greater than
/// zero, `offset` whenever set, `mkt` when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoSearchParams {
    pub q: String,
    pub count: Option<u32>,
    pub offset: Option<u32>,
    pub mkt: Option<String>,
}

impl VideoSearchParams {
    /// Creates parameters for the given query with everything else unset.
    #[must_use]
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn mkt(mut self, mkt: impl Into<String>) -> Self {
        self.mkt = Some(mkt.into());
        self
    }

    pub(crate) fn query_pairs(&self) -> QueryPairs {
        let mut qp = QueryPairs::default();
        qp.required("q", &self.q)
            .positive("count", self.count)
            .number("offset", self.offset)
            .text("mkt", self.mkt.as_deref());
        qp
    }
}
