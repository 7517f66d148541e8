use mongodb::bson::{self, doc};
use std::sync::Arc;
use crate::db::{DocumentStore, NF_PROFILE_COLLECTION};
use crate::services::profile_merge::ProfileMerger;
use crate::services::subscription_matcher::SubscriptionMatcher;
use crate::services::uri_list::{self, UriListRegistry};
use crate::types::{NfProfile, NfType, NrfResult, UriList};

/// Result of a registration or update.
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    pub profile: NfProfile,
    /// True when no profile with this instance id was stored before.
    pub created: bool,
    pub location: String,
    pub new_location: bool,
    pub notification_uris: Vec<String>,
}

pub struct NfManagement {
    store: Arc<dyn DocumentStore>,
    merger: ProfileMerger,
    uri_lists: UriListRegistry,
    matcher: SubscriptionMatcher,
}

impl NfManagement {
    pub fn new(store: Arc<dyn DocumentStore>, merger: ProfileMerger, sbi_uri: String) -> Self {
        Self {
            uri_lists: UriListRegistry::new(store.clone(), sbi_uri),
            matcher: SubscriptionMatcher::new(store.clone()),
            store,
            merger,
        }
    }

    pub fn uri_lists(&self) -> &UriListRegistry {
        &self.uri_lists
    }

    pub async fn profile(&self, nf_instance_id: &str) -> NrfResult<Option<NfProfile>> {
        let filter = doc! { "nfInstanceId": nf_instance_id };
        match self.store.get_one(NF_PROFILE_COLLECTION, filter).await? {
            Some(document) => Ok(Some(bson::from_document(document)?)),
            None => Ok(None),
        }
    }

    /// Merges `submitted` into the stored profile of the same instance and
    /// persists the result. Nothing is written when the merge is rejected.
    pub async fn register(&self, submitted: &NfProfile) -> NrfResult<RegistrationOutcome> {
        let existing = self.profile(&submitted.nf_instance_id).await?;
        let profile = self.merger.merge(existing.as_ref(), submitted).await?;

        let filter = doc! { "nfInstanceId": profile.nf_instance_id.as_str() };
        self.store
            .put_one(NF_PROFILE_COLLECTION, filter, bson::to_document(&profile)?)
            .await?;

        let (location, new_location) = self.uri_lists.set_location_header(&profile).await?;
        let notification_uris = self.matcher.notification_uris(&profile).await;

        tracing::info!(
            "NF instance {} {} ({} subscribers to notify)",
            profile.nf_instance_id,
            if existing.is_none() { "registered" } else { "updated" },
            notification_uris.len()
        );

        Ok(RegistrationOutcome {
            profile,
            created: existing.is_none(),
            location,
            new_location,
            notification_uris,
        })
    }

    /// Removes the profile and returns the subscribers to notify, or `None`
    /// when no such instance is registered.
    pub async fn deregister(&self, nf_instance_id: &str) -> NrfResult<Option<Vec<String>>> {
        let Some(profile) = self.profile(nf_instance_id).await? else {
            return Ok(None);
        };

        self.store
            .delete_one(NF_PROFILE_COLLECTION, doc! { "nfInstanceId": nf_instance_id })
            .await?;

        let notification_uris = self.matcher.notification_uris(&profile).await;
        tracing::info!(
            "NF instance {} deregistered ({} subscribers to notify)",
            nf_instance_id,
            notification_uris.len()
        );

        Ok(Some(notification_uris))
    }

    /// Known instance locations of `nf_type`, cut to `limit` entries.
    pub async fn instance_locations(&self, nf_type: &NfType, limit: Option<usize>) -> NrfResult<UriList> {
        let list = self.uri_lists.fetch(nf_type).await?;
        Ok(match limit {
            Some(limit) => uri_list::truncate(&list, limit),
            None => list,
        })
    }
}
