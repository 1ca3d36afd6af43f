use serde::Deserialize;

/// `{ "data": ... }` wrapper used by every task endpoint. Missing or null data is `None`.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: Option<T>,
}
