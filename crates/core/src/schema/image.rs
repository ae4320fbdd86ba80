use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::DbId;

/// Reference to a stored image: everything a client needs to build the
/// image URL and its alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImageRef {
    pub alt: String,
    pub id: DbId,
}
