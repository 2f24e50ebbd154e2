//! Flow-store search envelopes and hit flattening.
//!
//! The store answers list queries with `{"hits": {"hits": [...]}}`, where
//! each hit carries the document identifier in `_id` and the stored fields
//! in `_source`. The gateway exposes those hits as flat records
//! `{"id": <_id>, ...<_source>}`.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level search response. Missing levels decode as empty.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: SearchHits,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchHits {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

/// One stored document.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    /// Document identifier; `null` when the store omitted it.
    #[serde(rename = "_id", default)]
    pub id: Value,
    #[serde(rename = "_source", default)]
    pub source: Map<String, Value>,
}

impl SearchHit {
    /// Merge the identifier and the source fields into one record.
    ///
    /// A source field literally named `id` wins over the document id.
    pub fn flatten(self) -> Map<String, Value> {
        let mut record = Map::with_capacity(self.source.len() + 1);
        record.insert("id".to_string(), self.id);
        record.extend(self.source);
        record
    }
}

impl SearchResponse {
    /// Flatten every hit, preserving the store's ordering.
    pub fn into_flows(self) -> Vec<Map<String, Value>> {
        self.hits.hits.into_iter().map(SearchHit::flatten).collect()
    }
}
