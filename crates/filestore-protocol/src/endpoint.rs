/// HTTP endpoint paths.
pub mod endpoints {
    pub const ADD: &str = "/add";
    pub const REMOVE: &str = "/remove";
    pub const UPDATE: &str = "/update";
    pub const LIST: &str = "/list";
    pub const GET: &str = "/get";
    pub const WORD_COUNT: &str = "/wc";
    pub const FREQ_WORDS: &str = "/freq-words";
    pub const HEALTH: &str = "/health";
}

/// Form and query field names.
pub mod fields {
    pub const FILENAME: &str = "filename";
    pub const CONTENT: &str = "content";
    pub const LIMIT: &str = "limit";
    pub const ORDER: &str = "order";
}

/// Number of words returned by `/freq-words` when `limit` is absent or unparsable.
pub const DEFAULT_LIMIT: i64 = 10;

/// Ordering used by `/freq-words` when `order` is absent.
pub const DEFAULT_ORDER: &str = "dsc";
