use dashmap::DashMap;
use mongodb::bson::{self, doc};
use std::sync::Arc;
use tokio::sync::Mutex;
use crate::db::{DocumentStore, URI_LIST_COLLECTION};
use crate::types::{Link, Links, NfProfile, NfType, NrfError, NrfResult, UriList};

/// Per NF type registry of instance locations.
///
/// Updates of one type's list are serialized so that concurrent registrations
/// never overwrite each other's entries.
pub struct UriListRegistry {
    store: Arc<dyn DocumentStore>,
    sbi_uri: String,
    locks: DashMap<NfType, Arc<Mutex<()>>>,
}

impl UriListRegistry {
    pub fn new(store: Arc<dyn DocumentStore>, sbi_uri: String) -> Self {
        Self {
            store,
            sbi_uri,
            locks: DashMap::new(),
        }
    }

    pub fn nf_instance_uri(&self, nf_instance_id: &str) -> String {
        format!("{}/nnrf-nfm/v1/nf-instances/{}", self.sbi_uri, nf_instance_id)
    }

    /// Stored list for `nf_type`; a type never registered has an empty list.
    pub async fn fetch(&self, nf_type: &NfType) -> NrfResult<UriList> {
        let filter = doc! { "nfType": nf_type.as_str() };
        match self.store.get_one(URI_LIST_COLLECTION, filter).await? {
            Some(document) => Ok(bson::from_document(document)?),
            None => Ok(UriList {
                nf_type: Some(nf_type.clone()),
                link: Links::default(),
            }),
        }
    }

    /// Adds `uri` to the list of `nf_type` unless already present.
    /// Returns `true` when the list gained a new entry.
    pub async fn register_location(&self, nf_type: &NfType, uri: &str) -> NrfResult<bool> {
        let lock = self.lock_for(nf_type);
        let _guard = lock.lock().await;

        let mut list = self.fetch(nf_type).await?;
        if list.contains(uri) {
            tracing::debug!("{} already listed for {}", uri, nf_type);
            return Ok(false);
        }

        list.nf_type = Some(nf_type.clone());
        list.link.item.push(Link {
            href: uri.to_string(),
        });

        let document = bson::to_document(&list)?;
        self.store
            .put_one(URI_LIST_COLLECTION, doc! { "nfType": nf_type.as_str() }, document)
            .await?;

        tracing::info!("Registered location {} for {} ({} known)", uri, nf_type, list.len());
        Ok(true)
    }

    /// Registers the instance URI of `profile` and returns it with the
    /// new-entry flag.
    pub async fn set_location_header(&self, profile: &NfProfile) -> NrfResult<(String, bool)> {
        let nf_type = profile
            .nf_type
            .as_ref()
            .ok_or_else(|| NrfError::missing_field("NfType"))?;

        let location = self.nf_instance_uri(&profile.nf_instance_id);
        let is_new = self.register_location(nf_type, &location).await?;
        Ok((location, is_new))
    }

    fn lock_for(&self, nf_type: &NfType) -> Arc<Mutex<()>> {
        self.locks.entry(nf_type.clone()).or_default().clone()
    }
}

/// First `limit` entries of `list`, in stored order.
pub fn truncate(list: &UriList, limit: usize) -> UriList {
    if limit >= list.len() {
        return list.clone();
    }

    UriList {
        nf_type: list.nf_type.clone(),
        link: Links {
            item: list.link.item[..limit].to_vec(),
        },
    }
}
