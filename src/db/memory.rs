use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use std::collections::HashMap;
use tokio::sync::RwLock;
use super::DocumentStore;
use crate::types::NrfResult;

/// In-process document store evaluating the same filter subset as MongoDB.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, collection: &str, document: Document) {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);
    }

    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get_one(&self, collection: &str, filter: Document) -> NrfResult<Option<Document>> {
        let found = {
            let collections = self.collections.read().await;
            collections
                .get(collection)
                .and_then(|docs| docs.iter().find(|doc| matches(doc, &filter)).cloned())
        };
        // Reads and writes never happen under one lock, like a remote store.
        tokio::task::yield_now().await;
        Ok(found)
    }

    async fn get_many(&self, collection: &str, filter: Document) -> NrfResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().filter(|doc| matches(doc, &filter)).cloned().collect())
            .unwrap_or_default())
    }

    async fn put_one(&self, collection: &str, filter: Document, document: Document) -> NrfResult<bool> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        match docs.iter_mut().find(|doc| matches(doc, &filter)) {
            Some(existing) => {
                *existing = document;
                Ok(true)
            }
            None => {
                docs.push(document);
                Ok(false)
            }
        }
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> NrfResult<bool> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };
        match docs.iter().position(|doc| matches(doc, &filter)) {
            Some(index) => {
                docs.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Evaluates a query filter against one document.
pub fn matches(document: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, condition)| match key.as_str() {
        "$and" => sub_filters(condition).all(|f| matches(document, f)),
        "$or" => sub_filters(condition).any(|f| matches(document, f)),
        path => field_matches(lookup(document, path), condition),
    })
}

fn sub_filters(condition: &Bson) -> impl Iterator<Item = &Document> {
    let items: &[Bson] = match condition {
        Bson::Array(items) => items,
        _ => &[],
    };
    items.iter().filter_map(Bson::as_document)
}

fn lookup<'a>(document: &'a Document, path: &str) -> Option<&'a Bson> {
    let mut segments = path.split('.');
    let mut current = document.get(segments.next()?)?;
    for segment in segments {
        current = current.as_document()?.get(segment)?;
    }
    Some(current)
}

fn field_matches(value: Option<&Bson>, condition: &Bson) -> bool {
    match condition {
        Bson::Document(ops) if is_operator_document(ops) => {
            ops.iter().all(|(op, arg)| apply_operator(value, op, arg))
        }
        _ => equals(value, condition),
    }
}

fn is_operator_document(document: &Document) -> bool {
    document.keys().next().is_some_and(|key| key.starts_with('$'))
}

fn apply_operator(value: Option<&Bson>, op: &str, arg: &Bson) -> bool {
    match op {
        "$eq" => equals(value, arg),
        "$in" => match arg {
            Bson::Array(candidates) => candidates.iter().any(|c| equals(value, c)),
            _ => false,
        },
        "$exists" => {
            let wanted = match arg {
                Bson::Boolean(b) => *b,
                other => as_i64(other).map_or(true, |v| v != 0),
            };
            value.is_some() == wanted
        }
        "$elemMatch" => match (value, arg) {
            (Some(Bson::Array(items)), Bson::Document(inner)) => items
                .iter()
                .any(|item| item.as_document().is_some_and(|doc| matches(doc, inner))),
            _ => false,
        },
        _ => {
            tracing::warn!("Unsupported query operator {}", op);
            false
        }
    }
}

/// Equality with MongoDB semantics: `null` matches a missing field and a
/// scalar matches an array containing it.
fn equals(value: Option<&Bson>, expected: &Bson) -> bool {
    match (value, expected) {
        (None, Bson::Null) => true,
        (None, _) => false,
        (Some(Bson::Array(items)), expected) if !matches!(expected, Bson::Array(_)) => {
            items.iter().any(|item| bson_eq(item, expected))
        }
        (Some(actual), expected) => bson_eq(actual, expected),
    }
}

fn bson_eq(a: &Bson, b: &Bson) -> bool {
    match (a, b) {
        (Bson::Document(x), Bson::Document(y)) => {
            x.len() == y.len() && x.iter().all(|(k, v)| y.get(k).is_some_and(|w| bson_eq(v, w)))
        }
        (Bson::Array(x), Bson::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(v, w)| bson_eq(v, w))
        }
        _ => match (as_i64(a), as_i64(b)) {
            (Some(x), Some(y)) => x == y,
            _ => match (as_f64(a), as_f64(b)) {
                (Some(x), Some(y)) => x == y,
                _ => a == b,
            },
        },
    }
}

fn as_i64(value: &Bson) -> Option<i64> {
    match value {
        Bson::Int32(v) => Some(i64::from(*v)),
        Bson::Int64(v) => Some(*v),
        _ => None,
    }
}

fn as_f64(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        Bson::Double(v) => Some(*v),
        _ => None,
    }
}
