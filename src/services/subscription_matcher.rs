use indexmap::IndexSet;
use mongodb::bson::{self, doc, Bson, Document};
use serde::Deserialize;
use std::sync::Arc;
use crate::db::{DocumentStore, SUBSCRIPTIONS_COLLECTION};
use crate::types::{AusfInfo, NfProfile, NfType, UdmInfo, UdrInfo};

/// The only part of a stored subscription the matcher needs. The rest of the
/// record was already used by the query and is not decoded.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotificationTarget {
    nf_status_notification_uri: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    NfType,
    NfInstanceId,
    ServiceName,
    Amf,
    GuamiList,
    NetworkSlice,
    NfGroup,
}

/// Info structure the group-id condition is evaluated against.
///
/// Only one is ever used. UDR info wins over UDM info, which wins over AUSF
/// info, whether or not the winner actually carries a group id.
#[derive(Debug, Clone, Copy)]
pub enum NfGroupSource<'a> {
    Udr(&'a UdrInfo),
    Udm(&'a UdmInfo),
    Ausf(&'a AusfInfo),
}

impl<'a> NfGroupSource<'a> {
    pub fn select(profile: &'a NfProfile) -> Option<Self> {
        if let Some(info) = &profile.udr_info {
            return Some(NfGroupSource::Udr(info));
        }
        if let Some(info) = &profile.udm_info {
            return Some(NfGroupSource::Udm(info));
        }
        profile.ausf_info.as_ref().map(NfGroupSource::Ausf)
    }

    pub fn group_id(&self) -> Option<&'a str> {
        let group_id = match self {
            NfGroupSource::Udr(info) => &info.group_id,
            NfGroupSource::Udm(info) => &info.group_id,
            NfGroupSource::Ausf(info) => &info.group_id,
        };
        group_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Finds the subscribers to notify when a profile changes.
pub struct SubscriptionMatcher {
    store: Arc<dyn DocumentStore>,
}

impl SubscriptionMatcher {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Callback URIs of every subscription whose condition matches `profile`,
    /// in first-seen order without duplicates.
    ///
    /// Each condition kind is queried on its own; a failing query only loses
    /// the matches of that kind.
    pub async fn notification_uris(&self, profile: &NfProfile) -> Vec<String> {
        let mut uris = IndexSet::new();

        for (kind, filter) in criteria(profile) {
            let documents = match self.store.get_many(SUBSCRIPTIONS_COLLECTION, filter).await {
                Ok(documents) => documents,
                Err(e) => {
                    tracing::error!("Failed to query {:?} subscriptions: {}", kind, e);
                    continue;
                }
            };

            for document in documents {
                match bson::from_document::<NotificationTarget>(document) {
                    Ok(target) => {
                        uris.insert(target.nf_status_notification_uri);
                    }
                    Err(e) => {
                        tracing::warn!("Skipping undecodable {:?} subscription: {}", kind, e);
                    }
                }
            }
        }

        tracing::debug!(
            "NF instance {} matches {} subscriber URIs",
            profile.nf_instance_id,
            uris.len()
        );

        uris.into_iter().collect()
    }
}

/// Query filters for every condition kind that applies to `profile`.
pub fn criteria(profile: &NfProfile) -> Vec<(MatchKind, Document)> {
    let mut criteria = Vec::new();
    let nf_type = profile.nf_type.as_ref().map(NfType::as_str);

    if let Some(nf_type) = nf_type {
        criteria.push((
            MatchKind::NfType,
            doc! {
                "subscrCond.nfType": nf_type,
                "subscrCond.nfGroupId": { "$exists": false },
            },
        ));
    }

    criteria.push((
        MatchKind::NfInstanceId,
        doc! { "subscrCond.nfInstanceId": profile.nf_instance_id.as_str() },
    ));

    let services = profile.services();
    if !services.is_empty() {
        criteria.push((
            MatchKind::ServiceName,
            doc! { "subscrCond.serviceName": { "$in": services.names() } },
        ));
    }

    if let Some(amf_info) = &profile.amf_info {
        if amf_info.amf_set_id.is_some() || amf_info.amf_region_id.is_some() {
            criteria.push((
                MatchKind::Amf,
                doc! {
                    "subscrCond.amfSetId": exact_or_absent(&amf_info.amf_set_id),
                    "subscrCond.amfRegionId": exact_or_absent(&amf_info.amf_region_id),
                },
            ));
        }

        let guamis = amf_info.guami_list.as_deref().unwrap_or_default();
        if !guamis.is_empty() {
            let any_guami: Vec<Document> = guamis
                .iter()
                .filter_map(|guami| element_match("subscrCond.guamiList", guami))
                .collect();
            criteria.push((MatchKind::GuamiList, doc! { "$or": any_guami }));
        }
    }

    let snssais = profile.s_nssais.as_deref().unwrap_or_default();
    if !snssais.is_empty() {
        let any_snssai: Vec<Document> = snssais
            .iter()
            .filter_map(|snssai| element_match("subscrCond.snssaiList", snssai))
            .collect();

        let nsis = profile.nsi_list.as_deref().unwrap_or_default();
        let filter = if nsis.is_empty() {
            doc! { "$or": any_snssai }
        } else {
            doc! {
                "$and": [
                    { "subscrCond.nsiList": { "$in": nsis.to_vec() } },
                    { "$or": any_snssai },
                ]
            }
        };
        criteria.push((MatchKind::NetworkSlice, filter));
    }

    let group_id = NfGroupSource::select(profile).and_then(|source| source.group_id());
    if let (Some(nf_type), Some(group_id)) = (nf_type, group_id) {
        criteria.push((
            MatchKind::NfGroup,
            doc! {
                "subscrCond.nfType": nf_type,
                "subscrCond.nfGroupId": group_id,
            },
        ));
    }

    criteria
}

fn exact_or_absent(value: &Option<String>) -> Bson {
    match value {
        Some(value) => Bson::String(value.clone()),
        None => Bson::Document(doc! { "$exists": false }),
    }
}

fn element_match<T: serde::Serialize>(path: &str, value: &T) -> Option<Document> {
    match bson::to_document(value) {
        Ok(element) => {
            let mut filter = Document::new();
            filter.insert(path, doc! { "$elemMatch": element });
            Some(filter)
        }
        Err(e) => {
            tracing::error!("Failed to encode {} element: {}", path, e);
            None
        }
    }
}
