pub mod memory;

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::Document;
use mongodb::{Client, Collection, Database};
use std::sync::Arc;
use crate::config::Config;
use crate::services::expiry_policy::ExpiryPolicy;
use crate::services::nf_management::NfManagement;
use crate::services::nrf_context;
use crate::services::nrf_info::NrfInfoBuilder;
use crate::services::plmn_source::{PlmnSource, StaticPlmnSource, WebconsolePlmnSource};
use crate::services::profile_merge::ProfileMerger;
use crate::types::{NfProfile, NrfResult};

pub use memory::MemoryStore;

pub const NF_PROFILE_COLLECTION: &str = "NfProfile";
pub const SUBSCRIPTIONS_COLLECTION: &str = "Subscriptions";
pub const URI_LIST_COLLECTION: &str = "urilist";

/// Document collection access used by the registry core.
///
/// Filters use the MongoDB query language restricted to dotted-path
/// equality, `$in`, `$elemMatch`, `$exists`, `$and` and `$or`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_one(&self, collection: &str, filter: Document) -> NrfResult<Option<Document>>;

    async fn get_many(&self, collection: &str, filter: Document) -> NrfResult<Vec<Document>>;

    /// Replaces the first document matching `filter`, inserting when none
    /// matches. Returns `true` when an existing document was replaced.
    async fn put_one(&self, collection: &str, filter: Document, document: Document) -> NrfResult<bool>;

    async fn delete_one(&self, collection: &str, filter: Document) -> NrfResult<bool>;
}

pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn get_one(&self, collection: &str, filter: Document) -> NrfResult<Option<Document>> {
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn get_many(&self, collection: &str, filter: Document) -> NrfResult<Vec<Document>> {
        let cursor = self.collection(collection).find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn put_one(&self, collection: &str, filter: Document, document: Document) -> NrfResult<bool> {
        let result = self
            .collection(collection)
            .replace_one(filter, document)
            .upsert(true)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> NrfResult<bool> {
        let result = self.collection(collection).delete_one(filter).await?;
        Ok(result.deleted_count > 0)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub management: Arc<NfManagement>,
    pub nrf_info: Arc<NrfInfoBuilder>,
    pub nrf_profile: Arc<NfProfile>,
}

pub async fn init(config: &Config) -> anyhow::Result<AppState> {
    let client = Client::with_uri_str(&config.mongodb_uri).await?;
    let db = client.database(&config.mongodb_name);

    tracing::info!("Connected to MongoDB");

    let store: Arc<dyn DocumentStore> = Arc::new(MongoStore::new(db));

    let plmn_source: Arc<dyn PlmnSource> = match &config.webconsole_uri {
        Some(uri) => Arc::new(WebconsolePlmnSource::new(uri.clone())?),
        None => {
            tracing::warn!("WEBCONSOLE_URI not configured, using PLMN_LIST as fallback PLMN source");
            Arc::new(StaticPlmnSource::new(config.plmn_list.clone()))
        }
    };

    let merger = ProfileMerger::new(Arc::new(ExpiryPolicy::from_config(config)), plmn_source);
    let management = Arc::new(NfManagement::new(store.clone(), merger, config.sbi.uri()));
    let nrf_info = Arc::new(NrfInfoBuilder::new(store.clone()));
    let nrf_profile = Arc::new(nrf_context::build_nrf_profile(config));

    tracing::info!(
        "NRF instance {} initialised with {} services",
        nrf_profile.nf_instance_id,
        nrf_profile.services().len()
    );

    Ok(AppState {
        management,
        nrf_info,
        nrf_profile,
    })
}
