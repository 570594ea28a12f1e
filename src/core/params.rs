use url::Url;

/// Accumulates query pairs, skipping values left at their "unset" sentinel.
#[derive(Debug, Default)]
pub(crate) struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    /// Always included, even when empty.
    pub(crate) fn required(&mut self, key: &'static str, value: &str) -> &mut Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Included when set and non-empty.
    pub(crate) fn text(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.pairs.push((key, v.to_string()));
        }
        self
    }

    /// Included when set and strictly positive.
    pub(crate) fn positive(&mut self, key: &'static str, value: Option<u32>) -> &mut Self {
        if let Some(n) = value.filter(|n| *n > 0) {
            self.pairs.push((key, n.to_string()));
        }
        self
    }

    /// Included whenever set, zero included.
    pub(crate) fn number(&mut self, key: &'static str, value: Option<u32>) -> &mut Self {
        if let Some(n) = value {
            self.pairs.push((key, n.to_string()));
        }
        self
    }

    /// Writes the pairs into `url`'s query string. Leaves the URL untouched when empty,
    /// so no dangling `?` is produced.
    pub(crate) fn apply(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            return;
        }
        url.query_pairs_mut()
            .extend_pairs(self.pairs.iter().map(|(k, v)| (*k, v.as_str())));
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}
