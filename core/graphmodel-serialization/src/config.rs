/// Settings for the JSON parse node and writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonConfig {
    /// Maximum nesting depth of objects and arrays. The root is depth 0.
    pub max_depth: usize,
    /// Read timestamps without an offset as UTC instead of rejecting them.
    pub assume_utc: bool,
    /// Indent encoded output.
    pub pretty: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            assume_utc: true,
            pretty: false,
        }
    }
}
