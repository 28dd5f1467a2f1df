//! Batch request body.
//!
//! The SDK submits a batch as-is. Ordering, dependency resolution and
//! execution of the sub-operations belong to the remote service;
//! `depends_on_operation_ids` is not checked client-side.

use serde::{Deserialize, Serialize};

/// A bundle of sub-operations submitted in one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub operations: Vec<BatchOperation>,
}

impl BatchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operation(mut self, op: BatchOperation) -> Self {
        self.operations.push(op);
        self
    }
}

/// One sub-operation of a batch, addressed relative to the API root
/// (e.g. `/v1/offers`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOperation {
    pub operation_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on_operation_ids: Option<Vec<u32>>,
    pub method: String,
    pub relative_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<BatchHeader>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl BatchOperation {
    pub fn new(operation_id: u32, method: impl Into<String>, relative_url: impl Into<String>) -> Self {
        Self {
            operation_id,
            depends_on_operation_ids: None,
            method: method.into(),
            relative_url: relative_url.into(),
            headers: None,
            body: None,
        }
    }

    pub fn depends_on(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.depends_on_operation_ids = Some(ids.into_iter().collect());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.get_or_insert_with(Vec::new).push(BatchHeader {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchHeader {
    pub name: String,
    pub value: String,
}
