use indexmap::IndexMap;
use mongodb::bson::{self, doc};
use std::sync::Arc;
use crate::db::{DocumentStore, NF_PROFILE_COLLECTION};
use crate::types::{
    NfProfile, NfType, NrfInfo, ServedAmfInfo, ServedAusfInfo, ServedBsfInfo, ServedChfInfo,
    ServedPcfInfo, ServedSmfInfo, ServedUdmInfo, ServedUdrInfo, ServedUpfInfo,
};

/// Builds the registry's summary of the NFs it serves.
pub struct NrfInfoBuilder {
    store: Arc<dyn DocumentStore>,
}

impl NrfInfoBuilder {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn build(&self) -> NrfInfo {
        NrfInfo {
            served_udr_info: Some(
                self.served(NfType::Udr, |p| {
                    p.udr_info.map(|info| ServedUdrInfo { udr_info: Some(info) })
                })
                .await,
            ),
            served_udm_info: Some(
                self.served(NfType::Udm, |p| {
                    p.udm_info.map(|info| ServedUdmInfo { udm_info: Some(info) })
                })
                .await,
            ),
            served_ausf_info: Some(
                self.served(NfType::Ausf, |p| {
                    p.ausf_info.map(|info| ServedAusfInfo { ausf_info: Some(info) })
                })
                .await,
            ),
            served_amf_info: Some(
                self.served(NfType::Amf, |p| {
                    p.amf_info.map(|info| ServedAmfInfo { amf_info: Some(info) })
                })
                .await,
            ),
            served_smf_info: Some(
                self.served(NfType::Smf, |p| {
                    p.smf_info.map(|info| ServedSmfInfo { smf_info: Some(info) })
                })
                .await,
            ),
            served_upf_info: Some(
                self.served(NfType::Upf, |p| {
                    p.upf_info.map(|info| ServedUpfInfo { upf_info: Some(info) })
                })
                .await,
            ),
            served_pcf_info: Some(
                self.served(NfType::Pcf, |p| {
                    p.pcf_info.map(|info| ServedPcfInfo { pcf_info: Some(info) })
                })
                .await,
            ),
            served_bsf_info: Some(
                self.served(NfType::Bsf, |p| {
                    p.bsf_info.map(|info| ServedBsfInfo { bsf_info: Some(info) })
                })
                .await,
            ),
            served_chf_info: Some(
                self.served(NfType::Chf, |p| {
                    p.chf_info.map(|info| ServedChfInfo { chf_info: Some(info) })
                })
                .await,
            ),
        }
    }

    /// Info of every stored profile of `nf_type`, keyed "0", "1", ... in
    /// store order. Profiles without the info are left out.
    async fn served<T>(&self, nf_type: NfType, info: impl Fn(NfProfile) -> Option<T>) -> IndexMap<String, T> {
        let mut served = IndexMap::new();

        let documents = match self
            .store
            .get_many(NF_PROFILE_COLLECTION, doc! { "nfType": nf_type.as_str() })
            .await
        {
            Ok(documents) => documents,
            Err(e) => {
                tracing::error!("Failed to load {} profiles: {}", nf_type, e);
                return served;
            }
        };

        for document in documents {
            let profile: NfProfile = match bson::from_document(document) {
                Ok(profile) => profile,
                Err(e) => {
                    tracing::warn!("Skipping undecodable {} profile: {}", nf_type, e);
                    continue;
                }
            };
            if let Some(info) = info(profile) {
                served.insert(served.len().to_string(), info);
            }
        }

        served
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mongodb::bson::Document;
    use serde_json::json;
    use crate::db::MemoryStore;
    use crate::types::{AmfInfo, NfStatus, NrfError, NrfResult, UdrInfo};

    async fn store_profile(store: &MemoryStore, profile: NfProfile) {
        store
            .insert(NF_PROFILE_COLLECTION, bson::to_document(&profile).unwrap())
            .await;
    }

    fn udr(id: &str, group: &str) -> NfProfile {
        NfProfile {
            nf_instance_id: id.to_string(),
            nf_type: Some(NfType::Udr),
            nf_status: Some(NfStatus::Registered),
            udr_info: Some(UdrInfo {
                group_id: Some(group.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_build_indexes_served_info() {
        let store = Arc::new(MemoryStore::new());
        store_profile(&store, udr("udr-1", "g1")).await;
        store_profile(&store, udr("udr-2", "g2")).await;
        store_profile(
            &store,
            NfProfile {
                nf_instance_id: "amf-1".to_string(),
                nf_type: Some(NfType::Amf),
                nf_status: Some(NfStatus::Registered),
                amf_info: Some(AmfInfo {
                    amf_set_id: Some("s1".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
        .await;

        let info = NrfInfoBuilder::new(store).build().await;

        let udrs = info.served_udr_info.unwrap();
        assert_eq!(udrs.len(), 2);
        assert_eq!(udrs["0"].udr_info.as_ref().unwrap().group_id.as_deref(), Some("g1"));
        assert_eq!(udrs["1"].udr_info.as_ref().unwrap().group_id.as_deref(), Some("g2"));

        let amfs = info.served_amf_info.unwrap();
        assert_eq!(amfs["0"].amf_info.as_ref().unwrap().amf_set_id.as_deref(), Some("s1"));

        assert!(info.served_smf_info.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_undecodable_profile_is_skipped() {
        let store = Arc::new(MemoryStore::new());
        store_profile(&store, udr("udr-1", "g1")).await;
        store
            .insert(NF_PROFILE_COLLECTION, doc! { "nfType": "UDR", "nfStatus": 42 })
            .await;
        store_profile(&store, udr("udr-3", "g3")).await;

        let udrs = NrfInfoBuilder::new(store).build().await.served_udr_info.unwrap();
        assert_eq!(udrs.len(), 2);
        assert_eq!(udrs["1"].udr_info.as_ref().unwrap().group_id.as_deref(), Some("g3"));
    }

    #[tokio::test]
    async fn test_profile_without_info_is_left_out() {
        let store = Arc::new(MemoryStore::new());
        store_profile(
            &store,
            NfProfile {
                udr_info: None,
                ..udr("udr-1", "g1")
            },
        )
        .await;
        store_profile(&store, udr("udr-2", "g2")).await;

        let udrs = NrfInfoBuilder::new(store).build().await.served_udr_info.unwrap();
        assert_eq!(udrs.len(), 1);
        assert_eq!(udrs["0"].udr_info.as_ref().unwrap().group_id.as_deref(), Some("g2"));
    }

    #[tokio::test]
    async fn test_served_info_wire_shape() {
        let store = Arc::new(MemoryStore::new());
        store_profile(&store, udr("udr-1", "g1")).await;

        let info = NrfInfoBuilder::new(store).build().await;
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["servedUdrInfo"], json!({ "0": { "udrInfo": { "groupId": "g1" } } }));
        assert_eq!(value["servedAmfInfo"], json!({}));
    }

    struct UdrQueryFails {
        inner: MemoryStore,
    }

    #[async_trait]
    impl DocumentStore for UdrQueryFails {
        async fn get_one(&self, collection: &str, filter: Document) -> NrfResult<Option<Document>> {
            self.inner.get_one(collection, filter).await
        }

        async fn get_many(&self, collection: &str, filter: Document) -> NrfResult<Vec<Document>> {
            if matches!(filter.get_str("nfType"), Ok("UDR")) {
                return Err(NrfError::StoreUnavailable("connection reset".to_string()));
            }
            self.inner.get_many(collection, filter).await
        }

        async fn put_one(&self, collection: &str, filter: Document, document: Document) -> NrfResult<bool> {
            self.inner.put_one(collection, filter, document).await
        }

        async fn delete_one(&self, collection: &str, filter: Document) -> NrfResult<bool> {
            self.inner.delete_one(collection, filter).await
        }
    }

    #[tokio::test]
    async fn test_store_error_yields_empty_map() {
        let inner = MemoryStore::new();
        store_profile(&inner, udr("udr-1", "g1")).await;
        store_profile(
            &inner,
            NfProfile {
                nf_instance_id: "amf-1".to_string(),
                nf_type: Some(NfType::Amf),
                nf_status: Some(NfStatus::Registered),
                amf_info: Some(AmfInfo {
                    amf_region_id: Some("r1".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
        .await;

        let info = NrfInfoBuilder::new(Arc::new(UdrQueryFails { inner })).build().await;
        assert_eq!(info.served_udr_info, Some(IndexMap::new()));
        assert_eq!(info.served_amf_info.unwrap().len(), 1);
    }
}
