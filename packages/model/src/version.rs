use serde::{Deserialize, Serialize};

use crate::document::Newsletter;

/// An explicitly captured snapshot of the document at a point in time
///
/// Immutable once created. The persistence layer keeps these in a bounded
/// newest-first list (capacity 20, oldest evicted first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveVersion {
    pub id: String,
    /// Human label; defaults to "Version N — timestamp"
    pub label: String,
    pub saved_at: String,
    /// Full deep snapshot
    pub newsletter: Newsletter,
}
