//! Token inspection results

/// The tokens the service produced for one piece of content
///
/// `token_ids[i]` and `tokens[i]` describe the same token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokensInfo {
    /// Role of the content the tokens came from, e.g. `user`
    pub role: String,
    /// Token ids
    pub token_ids: Vec<i64>,
    /// Raw token bytes
    pub tokens: Vec<Vec<u8>>,
}

impl TokensInfo {
    /// Pairs of (id, raw bytes); stops at the shorter list
    pub fn iter(&self) -> impl Iterator<Item = (i64, &[u8])> {
        self.token_ids
            .iter()
            .copied()
            .zip(self.tokens.iter().map(Vec::as_slice))
    }
}
