use crate::Session;

/// Result of loading the stored session - distinguishes "not found" from corruption.
#[derive(Debug)]
pub struct LoadResult {
    pub session: Option<Session>,
    /// Present if the file exists but could not be parsed
    pub corruption_error: Option<String>,
}
