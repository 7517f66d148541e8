use std::ops::RangeInclusive;
use std::sync::Arc;
use crate::services::expiry_policy::ExpiryPolicy;
use crate::services::plmn_source::PlmnSource;
use crate::types::{
    AmfInfo, AusfInfo, BsfInfo, ChfInfo, Ipv4AddressRange, Ipv6PrefixRange, NfProfile,
    NfServices, NrfError, NrfResult, PcfInfo, PlmnId, SmfInfo, UdmInfo, UdrInfo, UpfInfo,
};
use crate::utils::{ipv4_bound_to_decimal, ipv6_bound_to_decimal};

const PRIORITY_RANGE: RangeInclusive<i32> = 1..=65535;
const CAPACITY_RANGE: RangeInclusive<i32> = 1..=65535;
const LOAD_RANGE: RangeInclusive<i32> = 1..=100;

/// Merges client submissions into the canonical stored profile.
pub struct ProfileMerger {
    expiry: Arc<ExpiryPolicy>,
    plmn_source: Arc<dyn PlmnSource>,
}

impl ProfileMerger {
    pub fn new(expiry: Arc<ExpiryPolicy>, plmn_source: Arc<dyn PlmnSource>) -> Self {
        Self {
            expiry,
            plmn_source,
        }
    }

    /// Produces the profile that results from applying `submitted` on top of
    /// `existing`. Fields the submission leaves empty keep their existing
    /// value; `existing` itself is never modified.
    pub async fn merge(&self, existing: Option<&NfProfile>, submitted: &NfProfile) -> NrfResult<NfProfile> {
        if submitted.nf_instance_id.is_empty() {
            return Err(NrfError::missing_field("NfInstanceId"));
        }
        let nf_type = submitted
            .nf_type
            .clone()
            .ok_or_else(|| NrfError::missing_field("NfType"))?;
        let nf_status = submitted
            .nf_status
            .clone()
            .ok_or_else(|| NrfError::missing_field("NfStatus"))?;

        let plmn_list = self.resolve_plmn_list(submitted.plmn_list.as_deref()).await?;
        let bsf_info = submitted.bsf_info.as_ref().map(bsf_info).transpose()?;

        let mut nf = existing.cloned().unwrap_or_default();
        nf.nf_instance_id = submitted.nf_instance_id.clone();
        nf.nf_type = Some(nf_type);
        nf.nf_status = Some(nf_status);
        nf.heart_beat_timer = Some(self.expiry.keep_alive_time());
        nf.plmn_list = Some(plmn_list);

        copy_addressing(&mut nf, submitted);
        copy_options(&mut nf, submitted);
        copy_type_info(&mut nf, submitted, bsf_info);
        reconcile_services(&mut nf, submitted);

        tracing::debug!(
            "Merged profile of NF instance {} (heartbeat {} sec)",
            nf.nf_instance_id,
            nf.heart_beat_timer.unwrap_or_default()
        );

        Ok(nf)
    }

    async fn resolve_plmn_list(&self, provided: Option<&[PlmnId]>) -> NrfResult<Vec<PlmnId>> {
        if let Some(plmns) = provided.filter(|plmns| !plmns.is_empty()) {
            return Ok(plmns.to_vec());
        }

        tracing::warn!("PLMN list not provided by NF, using supported PLMNs from fallback source");
        let plmns = self
            .plmn_source
            .fetch_plmn_config()
            .await
            .map_err(|e| NrfError::Validation(format!("no PLMN available: {}", e)))?;

        if plmns.is_empty() {
            return Err(NrfError::Validation(
                "no PLMN available: not provided by NF and no fallback PLMN configured".to_string(),
            ));
        }

        tracing::debug!("Using {} fallback PLMNs", plmns.len());
        Ok(plmns)
    }
}

fn copy_addressing(nf: &mut NfProfile, submitted: &NfProfile) {
    copy_str(&mut nf.fqdn, &submitted.fqdn);
    copy_str(&mut nf.inter_plmn_fqdn, &submitted.inter_plmn_fqdn);
    copy_vec(&mut nf.ipv4_addresses, &submitted.ipv4_addresses);
    copy_vec(&mut nf.ipv6_addresses, &submitted.ipv6_addresses);
}

fn copy_options(nf: &mut NfProfile, submitted: &NfProfile) {
    copy_vec(&mut nf.s_nssais, &submitted.s_nssais);
    copy_vec(&mut nf.nsi_list, &submitted.nsi_list);
    copy_vec(&mut nf.allowed_plmns, &submitted.allowed_plmns);
    copy_vec(&mut nf.allowed_nf_types, &submitted.allowed_nf_types);
    copy_vec(&mut nf.allowed_nf_domains, &submitted.allowed_nf_domains);
    copy_vec(&mut nf.allowed_nssais, &submitted.allowed_nssais);

    copy_bounded(&mut nf.priority, submitted.priority, PRIORITY_RANGE, "priority");
    copy_bounded(&mut nf.capacity, submitted.capacity, CAPACITY_RANGE, "capacity");
    copy_bounded(&mut nf.load, submitted.load, LOAD_RANGE, "load");

    copy_str(&mut nf.locality, &submitted.locality);

    if let Some(nrf_info) = &submitted.nrf_info {
        nf.nrf_info = Some(nrf_info.clone());
    }
    // Set by the NF itself on restart.
    if let Some(recovery_time) = submitted.recovery_time {
        nf.recovery_time = Some(recovery_time);
    }
    nf.nf_service_persistence = submitted.nf_service_persistence;
}

fn copy_type_info(nf: &mut NfProfile, submitted: &NfProfile, bsf_info: Option<BsfInfo>) {
    if let Some(info) = &submitted.udr_info {
        nf.udr_info = Some(udr_info(info));
    }
    if let Some(info) = &submitted.udm_info {
        nf.udm_info = Some(udm_info(info));
    }
    if let Some(info) = &submitted.ausf_info {
        nf.ausf_info = Some(ausf_info(info));
    }
    if let Some(info) = &submitted.amf_info {
        nf.amf_info = Some(amf_info(info));
    }
    if let Some(info) = &submitted.smf_info {
        nf.smf_info = Some(smf_info(info));
    }
    if let Some(info) = &submitted.upf_info {
        nf.upf_info = Some(upf_info(info));
    }
    if let Some(info) = &submitted.pcf_info {
        nf.pcf_info = Some(pcf_info(info));
    }
    if let Some(info) = bsf_info {
        nf.bsf_info = Some(info);
    }
    if let Some(info) = &submitted.chf_info {
        nf.chf_info = Some(chf_info(info));
    }
}

/// Fills whichever service representation the submission left out.
///
/// A map derived from a list keeps the last descriptor of a repeated id. A
/// list derived from a map is ordered by service-instance id. When both are
/// submitted they are stored as given.
fn reconcile_services(nf: &mut NfProfile, submitted: &NfProfile) {
    let list = submitted.nf_services.as_ref().filter(|list| !list.is_empty());
    let map = submitted.nf_service_list.as_ref().filter(|map| !map.is_empty());

    match (list, map) {
        (Some(list), None) => {
            tracing::debug!("nfServiceList not provided, deriving it from nfServices");
            nf.nf_services = Some(list.clone());
            nf.nf_service_list = Some(NfServices::from_list(list).to_map());
        }
        (None, Some(map)) => {
            tracing::debug!("nfServices not provided, deriving it from nfServiceList");
            nf.nf_services = Some(NfServices::from_map(map).to_list());
            nf.nf_service_list = Some(map.clone());
        }
        (Some(list), Some(map)) => {
            nf.nf_services = Some(list.clone());
            nf.nf_service_list = Some(map.clone());
        }
        (None, None) => {}
    }
}

fn udr_info(info: &UdrInfo) -> UdrInfo {
    UdrInfo {
        group_id: non_empty_str(&info.group_id),
        supi_ranges: non_empty_vec(&info.supi_ranges),
        gpsi_ranges: non_empty_vec(&info.gpsi_ranges),
        external_group_identifiers_ranges: non_empty_vec(&info.external_group_identifiers_ranges),
        supported_data_sets: non_empty_vec(&info.supported_data_sets),
    }
}

fn udm_info(info: &UdmInfo) -> UdmInfo {
    UdmInfo {
        group_id: non_empty_str(&info.group_id),
        supi_ranges: non_empty_vec(&info.supi_ranges),
        gpsi_ranges: non_empty_vec(&info.gpsi_ranges),
        external_group_identifiers_ranges: non_empty_vec(&info.external_group_identifiers_ranges),
        routing_indicators: non_empty_vec(&info.routing_indicators),
    }
}

fn ausf_info(info: &AusfInfo) -> AusfInfo {
    AusfInfo {
        group_id: non_empty_str(&info.group_id),
        supi_ranges: non_empty_vec(&info.supi_ranges),
        routing_indicators: non_empty_vec(&info.routing_indicators),
    }
}

fn amf_info(info: &AmfInfo) -> AmfInfo {
    AmfInfo {
        amf_set_id: non_empty_str(&info.amf_set_id),
        amf_region_id: non_empty_str(&info.amf_region_id),
        guami_list: non_empty_vec(&info.guami_list),
        tai_list: non_empty_vec(&info.tai_list),
        tai_range_list: non_empty_vec(&info.tai_range_list),
        backup_info_amf_failure: non_empty_vec(&info.backup_info_amf_failure),
        backup_info_amf_removal: non_empty_vec(&info.backup_info_amf_removal),
        n2_interface_amf_info: info.n2_interface_amf_info.clone(),
    }
}

fn smf_info(info: &SmfInfo) -> SmfInfo {
    SmfInfo {
        s_nssai_smf_info_list: non_empty_vec(&info.s_nssai_smf_info_list),
        tai_list: non_empty_vec(&info.tai_list),
        tai_range_list: non_empty_vec(&info.tai_range_list),
        pgw_fqdn: non_empty_str(&info.pgw_fqdn),
        access_type: non_empty_vec(&info.access_type),
    }
}

fn upf_info(info: &UpfInfo) -> UpfInfo {
    UpfInfo {
        s_nssai_upf_info_list: non_empty_vec(&info.s_nssai_upf_info_list),
        smf_serving_area: non_empty_vec(&info.smf_serving_area),
        interface_upf_info_list: non_empty_vec(&info.interface_upf_info_list),
        iwk_eps_ind: info.iwk_eps_ind,
    }
}

fn pcf_info(info: &PcfInfo) -> PcfInfo {
    PcfInfo {
        dnn_list: non_empty_vec(&info.dnn_list),
        supi_ranges: non_empty_vec(&info.supi_ranges),
        rx_diam_host: non_empty_str(&info.rx_diam_host),
        rx_diam_realm: non_empty_str(&info.rx_diam_realm),
    }
}

/// Address range bounds are stored in decimal integer form so they can be
/// compared numerically.
fn bsf_info(info: &BsfInfo) -> NrfResult<BsfInfo> {
    let ipv4_address_ranges = non_empty_vec(&info.ipv4_address_ranges)
        .map(|ranges| {
            ranges
                .iter()
                .map(|range| {
                    Ok(Ipv4AddressRange {
                        start: ipv4_bound(&range.start)?,
                        end: ipv4_bound(&range.end)?,
                    })
                })
                .collect::<NrfResult<Vec<_>>>()
        })
        .transpose()?;

    let ipv6_prefix_ranges = non_empty_vec(&info.ipv6_prefix_ranges)
        .map(|ranges| {
            ranges
                .iter()
                .map(|range| {
                    Ok(Ipv6PrefixRange {
                        start: ipv6_bound(&range.start)?,
                        end: ipv6_bound(&range.end)?,
                    })
                })
                .collect::<NrfResult<Vec<_>>>()
        })
        .transpose()?;

    Ok(BsfInfo {
        dnn_list: non_empty_vec(&info.dnn_list),
        ip_domain_list: non_empty_vec(&info.ip_domain_list),
        ipv4_address_ranges,
        ipv6_prefix_ranges,
    })
}

fn ipv4_bound(bound: &str) -> NrfResult<String> {
    ipv4_bound_to_decimal(bound)
        .map_err(|_| NrfError::Validation(format!("invalid IPv4 address range bound '{}'", bound)))
}

fn ipv6_bound(bound: &str) -> NrfResult<String> {
    ipv6_bound_to_decimal(bound)
        .map_err(|_| NrfError::Validation(format!("invalid IPv6 prefix range bound '{}'", bound)))
}

fn chf_info(info: &ChfInfo) -> ChfInfo {
    ChfInfo {
        supi_range_list: non_empty_vec(&info.supi_range_list),
        gpsi_range_list: non_empty_vec(&info.gpsi_range_list),
        plmn_range_list: non_empty_vec(&info.plmn_range_list),
    }
}

fn non_empty_str(source: &Option<String>) -> Option<String> {
    source.as_ref().filter(|value| !value.is_empty()).cloned()
}

fn non_empty_vec<T: Clone>(source: &Option<Vec<T>>) -> Option<Vec<T>> {
    source.as_ref().filter(|values| !values.is_empty()).cloned()
}

fn copy_str(target: &mut Option<String>, source: &Option<String>) {
    if let Some(value) = non_empty_str(source) {
        *target = Some(value);
    }
}

fn copy_vec<T: Clone>(target: &mut Option<Vec<T>>, source: &Option<Vec<T>>) {
    if let Some(values) = non_empty_vec(source) {
        *target = Some(values);
    }
}

fn copy_bounded(target: &mut Option<i32>, source: Option<i32>, range: RangeInclusive<i32>, field: &str) {
    match source {
        Some(value) if range.contains(&value) => *target = Some(value),
        Some(value) => tracing::debug!("Ignoring out-of-range {} value {}", field, value),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use indexmap::IndexMap;
    use crate::services::expiry_policy::{DEFAULT_KEEP_ALIVE_SECS, NO_EXPIRY_KEEP_ALIVE_SECS};
    use crate::services::plmn_source::StaticPlmnSource;
    use crate::types::{
        AccessType, Guami, IdentityRange, NfService, NfServiceStatus, NfServiceVersion, NfStatus,
        NfType, Snssai,
    };

    struct FailingPlmnSource;

    #[async_trait]
    impl PlmnSource for FailingPlmnSource {
        async fn fetch_plmn_config(&self) -> NrfResult<Vec<PlmnId>> {
            Err(NrfError::PlmnSource("webconsole unreachable".to_string()))
        }
    }

    fn plmn(mcc: &str, mnc: &str) -> PlmnId {
        PlmnId {
            mcc: mcc.to_string(),
            mnc: mnc.to_string(),
        }
    }

    fn merger_with(plmns: Vec<PlmnId>) -> ProfileMerger {
        ProfileMerger::new(
            Arc::new(ExpiryPolicy::new(true, 0)),
            Arc::new(StaticPlmnSource::new(plmns)),
        )
    }

    fn merger() -> ProfileMerger {
        merger_with(vec![plmn("001", "01")])
    }

    fn service(id: &str, name: &str) -> NfService {
        NfService {
            service_instance_id: id.to_string(),
            service_name: name.to_string(),
            versions: vec![NfServiceVersion {
                api_version_in_uri: "v1".to_string(),
                api_full_version: "1.0.0".to_string(),
            }],
            scheme: "http".to_string(),
            nf_service_status: NfServiceStatus::Registered,
            fqdn: None,
            ip_end_points: None,
            api_prefix: None,
            allowed_plmns: None,
            allowed_nf_types: None,
            allowed_nssais: None,
            priority: None,
            capacity: None,
            load: None,
            supported_features: None,
        }
    }

    fn submitted() -> NfProfile {
        NfProfile {
            nf_instance_id: "udr-1".to_string(),
            nf_type: Some(NfType::Udr),
            nf_status: Some(NfStatus::Registered),
            plmn_list: Some(vec![plmn("208", "93")]),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_missing_required_fields_are_rejected() {
        let existing = NfProfile {
            fqdn: Some("udr.example".to_string()),
            ..submitted()
        };
        let snapshot = existing.clone();

        let cases = [
            (NfProfile { nf_instance_id: String::new(), ..submitted() }, "NfInstanceId"),
            (NfProfile { nf_type: None, ..submitted() }, "NfType"),
            (NfProfile { nf_status: None, ..submitted() }, "NfStatus"),
        ];

        for (profile, field) in cases {
            let err = merger().merge(Some(&existing), &profile).await.unwrap_err();
            match err {
                NrfError::Validation(msg) => assert!(msg.contains(field), "{}", msg),
                other => panic!("unexpected error {:?}", other),
            }
        }
        assert_eq!(existing, snapshot);
    }

    #[tokio::test]
    async fn test_plmn_list_falls_back_to_source() {
        let profile = NfProfile {
            plmn_list: None,
            ..submitted()
        };

        let merged = merger().merge(None, &profile).await.unwrap();
        assert_eq!(merged.plmn_list, Some(vec![plmn("001", "01")]));

        let profile = NfProfile {
            plmn_list: Some(vec![]),
            ..submitted()
        };
        let merged = merger().merge(None, &profile).await.unwrap();
        assert_eq!(merged.plmn_list, Some(vec![plmn("001", "01")]));
    }

    #[tokio::test]
    async fn test_submitted_plmn_list_used_verbatim() {
        let merged = merger().merge(None, &submitted()).await.unwrap();
        assert_eq!(merged.plmn_list, Some(vec![plmn("208", "93")]));
    }

    #[tokio::test]
    async fn test_no_plmn_available_is_rejected() {
        let profile = NfProfile {
            plmn_list: None,
            ..submitted()
        };

        let err = merger_with(vec![]).merge(None, &profile).await.unwrap_err();
        assert!(matches!(err, NrfError::Validation(_)));

        let failing = ProfileMerger::new(
            Arc::new(ExpiryPolicy::new(true, 0)),
            Arc::new(FailingPlmnSource),
        );
        let err = failing.merge(None, &profile).await.unwrap_err();
        assert!(matches!(err, NrfError::Validation(_)));
    }

    #[tokio::test]
    async fn test_heartbeat_is_registry_controlled() {
        let profile = NfProfile {
            heart_beat_timer: Some(5),
            ..submitted()
        };

        let merged = merger().merge(None, &profile).await.unwrap();
        assert_eq!(merged.heart_beat_timer, Some(DEFAULT_KEEP_ALIVE_SECS));

        let no_expiry = ProfileMerger::new(
            Arc::new(ExpiryPolicy::new(false, 30)),
            Arc::new(StaticPlmnSource::new(vec![])),
        );
        let merged = no_expiry.merge(None, &profile).await.unwrap();
        assert_eq!(merged.heart_beat_timer, Some(NO_EXPIRY_KEEP_ALIVE_SECS));
    }

    #[tokio::test]
    async fn test_merge_is_idempotent() {
        let existing = NfProfile {
            fqdn: Some("old.example".to_string()),
            priority: Some(7),
            locality: Some("rack-1".to_string()),
            ..submitted()
        };
        let profile = NfProfile {
            nf_type: Some(NfType::Amf),
            plmn_list: None,
            fqdn: Some("amf.example".to_string()),
            ipv4_addresses: Some(vec!["10.0.0.1".to_string()]),
            s_nssais: Some(vec![Snssai { sst: 1, sd: Some("010203".to_string()) }]),
            priority: Some(70000),
            load: Some(50),
            amf_info: Some(AmfInfo {
                amf_set_id: Some("s1".to_string()),
                amf_region_id: Some("r1".to_string()),
                guami_list: Some(vec![Guami { plmn_id: plmn("001", "01"), amf_id: "cafe00".to_string() }]),
                ..Default::default()
            }),
            nf_services: Some(vec![service("1", "namf-comm"), service("2", "namf-evts")]),
            ..submitted()
        };

        let merger = merger();
        let once = merger.merge(Some(&existing), &profile).await.unwrap();
        let twice = merger.merge(Some(&once), &profile).await.unwrap();
        assert_eq!(once, twice);
        assert_eq!(once.locality.as_deref(), Some("rack-1"));
        assert_eq!(once.fqdn.as_deref(), Some("amf.example"));
    }

    #[tokio::test]
    async fn test_out_of_range_scalars_are_dropped() {
        let existing = NfProfile {
            priority: Some(10),
            capacity: Some(100),
            load: Some(20),
            ..submitted()
        };
        let profile = NfProfile {
            priority: Some(70000),
            capacity: Some(0),
            load: Some(101),
            ..submitted()
        };

        let merged = merger().merge(Some(&existing), &profile).await.unwrap();
        assert_eq!(merged.priority, Some(10));
        assert_eq!(merged.capacity, Some(100));
        assert_eq!(merged.load, Some(20));

        let profile = NfProfile {
            priority: Some(65535),
            capacity: Some(1),
            load: Some(100),
            ..submitted()
        };
        let merged = merger().merge(Some(&existing), &profile).await.unwrap();
        assert_eq!(merged.priority, Some(65535));
        assert_eq!(merged.capacity, Some(1));
        assert_eq!(merged.load, Some(100));
    }

    #[tokio::test]
    async fn test_empty_fields_keep_existing_values() {
        let existing = NfProfile {
            fqdn: Some("old.example".to_string()),
            ipv4_addresses: Some(vec!["10.0.0.1".to_string()]),
            nsi_list: Some(vec!["nsi-1".to_string()]),
            ..submitted()
        };
        let profile = NfProfile {
            fqdn: Some(String::new()),
            ipv4_addresses: Some(vec![]),
            ..submitted()
        };

        let merged = merger().merge(Some(&existing), &profile).await.unwrap();
        assert_eq!(merged.fqdn.as_deref(), Some("old.example"));
        assert_eq!(merged.ipv4_addresses, Some(vec!["10.0.0.1".to_string()]));
        assert_eq!(merged.nsi_list, Some(vec!["nsi-1".to_string()]));

        let profile = NfProfile {
            fqdn: Some("new.example".to_string()),
            ..submitted()
        };
        let merged = merger().merge(Some(&existing), &profile).await.unwrap();
        assert_eq!(merged.fqdn.as_deref(), Some("new.example"));
    }

    #[tokio::test]
    async fn test_service_list_derives_map() {
        let services = vec![service("svc-1", "nudr-dr"), service("svc-2", "nudr-group-id-map")];
        let profile = NfProfile {
            nf_services: Some(services.clone()),
            ..submitted()
        };

        let merged = merger().merge(None, &profile).await.unwrap();
        assert_eq!(merged.nf_services, Some(services.clone()));

        let map = merged.nf_service_list.unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("svc-1"), Some(&services[0]));
        assert_eq!(map.get("svc-2"), Some(&services[1]));
    }

    #[tokio::test]
    async fn test_service_map_derives_list_in_id_order() {
        let mut map = IndexMap::new();
        map.insert("svc-b".to_string(), service("svc-b", "nudr-group-id-map"));
        map.insert("svc-a".to_string(), service("svc-a", "nudr-dr"));
        let profile = NfProfile {
            nf_service_list: Some(map.clone()),
            ..submitted()
        };

        let merged = merger().merge(None, &profile).await.unwrap();
        assert_eq!(
            merged.nf_services,
            Some(vec![service("svc-a", "nudr-dr"), service("svc-b", "nudr-group-id-map")])
        );
        assert_eq!(merged.nf_service_list, Some(map));
    }

    #[tokio::test]
    async fn test_repeated_service_id_keeps_last_descriptor() {
        let services = vec![
            service("svc-1", "nudr-dr"),
            service("svc-2", "nudr-group-id-map"),
            service("svc-1", "nudr-dr-v2"),
        ];
        let profile = NfProfile {
            nf_services: Some(services.clone()),
            ..submitted()
        };

        let merged = merger().merge(None, &profile).await.unwrap();
        assert_eq!(merged.nf_services.unwrap().len(), 3);

        let map = merged.nf_service_list.unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["svc-1"].service_name, "nudr-dr-v2");
    }

    #[tokio::test]
    async fn test_both_service_representations_kept_as_given() {
        let mut map = IndexMap::new();
        map.insert("other".to_string(), service("other", "nudr-group-id-map"));
        let profile = NfProfile {
            nf_services: Some(vec![service("svc-1", "nudr-dr")]),
            nf_service_list: Some(map.clone()),
            ..submitted()
        };

        let merged = merger().merge(None, &profile).await.unwrap();
        assert_eq!(merged.nf_services, Some(vec![service("svc-1", "nudr-dr")]));
        assert_eq!(merged.nf_service_list, Some(map));
    }

    #[tokio::test]
    async fn test_services_absent_keep_existing() {
        let existing = merger()
            .merge(None, &NfProfile {
                nf_services: Some(vec![service("svc-1", "nudr-dr")]),
                ..submitted()
            })
            .await
            .unwrap();

        let merged = merger().merge(Some(&existing), &submitted()).await.unwrap();
        assert_eq!(merged.nf_services, existing.nf_services);
        assert_eq!(merged.nf_service_list, existing.nf_service_list);
    }

    #[tokio::test]
    async fn test_type_info_replaced_as_a_unit() {
        let existing = NfProfile {
            udr_info: Some(UdrInfo {
                group_id: Some("group-old".to_string()),
                supi_ranges: Some(vec![IdentityRange {
                    start: Some("001010000000000".to_string()),
                    end: Some("001019999999999".to_string()),
                    pattern: None,
                }]),
                ..Default::default()
            }),
            ..submitted()
        };
        let profile = NfProfile {
            udr_info: Some(UdrInfo {
                group_id: Some(String::new()),
                supported_data_sets: Some(vec!["SUBSCRIPTION".to_string()]),
                gpsi_ranges: Some(vec![]),
                ..Default::default()
            }),
            ..submitted()
        };

        let merged = merger().merge(Some(&existing), &profile).await.unwrap();
        assert_eq!(
            merged.udr_info,
            Some(UdrInfo {
                supported_data_sets: Some(vec!["SUBSCRIPTION".to_string()]),
                ..Default::default()
            })
        );
    }

    #[tokio::test]
    async fn test_empty_info_fields_are_pruned_per_type() {
        let range = IdentityRange {
            start: Some("001010000000000".to_string()),
            end: Some("001019999999999".to_string()),
            pattern: None,
        };
        let profile = NfProfile {
            udm_info: Some(UdmInfo {
                group_id: Some("udm-g".to_string()),
                routing_indicators: Some(vec![]),
                gpsi_ranges: Some(vec![range.clone()]),
                ..Default::default()
            }),
            ausf_info: Some(AusfInfo {
                group_id: Some(String::new()),
                routing_indicators: Some(vec!["0000".to_string()]),
                ..Default::default()
            }),
            smf_info: Some(SmfInfo {
                pgw_fqdn: Some(String::new()),
                tai_list: Some(vec![]),
                access_type: Some(vec![AccessType::ThreeGppAccess]),
                ..Default::default()
            }),
            upf_info: Some(UpfInfo {
                smf_serving_area: Some(vec![]),
                iwk_eps_ind: true,
                ..Default::default()
            }),
            pcf_info: Some(PcfInfo {
                dnn_list: Some(vec!["internet".to_string()]),
                rx_diam_host: Some(String::new()),
                rx_diam_realm: Some("epc.org".to_string()),
                ..Default::default()
            }),
            chf_info: Some(ChfInfo {
                supi_range_list: Some(vec![range.clone()]),
                gpsi_range_list: Some(vec![]),
                plmn_range_list: Some(vec![]),
            }),
            ..submitted()
        };

        let merged = merger().merge(None, &profile).await.unwrap();
        assert_eq!(
            merged.udm_info,
            Some(UdmInfo {
                group_id: Some("udm-g".to_string()),
                gpsi_ranges: Some(vec![range.clone()]),
                ..Default::default()
            })
        );
        assert_eq!(
            merged.ausf_info,
            Some(AusfInfo {
                routing_indicators: Some(vec!["0000".to_string()]),
                ..Default::default()
            })
        );
        assert_eq!(
            merged.smf_info,
            Some(SmfInfo {
                access_type: Some(vec![AccessType::ThreeGppAccess]),
                ..Default::default()
            })
        );
        assert_eq!(
            merged.upf_info,
            Some(UpfInfo {
                iwk_eps_ind: true,
                ..Default::default()
            })
        );
        assert_eq!(
            merged.pcf_info,
            Some(PcfInfo {
                dnn_list: Some(vec!["internet".to_string()]),
                rx_diam_realm: Some("epc.org".to_string()),
                ..Default::default()
            })
        );
        assert_eq!(
            merged.chf_info,
            Some(ChfInfo {
                supi_range_list: Some(vec![range]),
                ..Default::default()
            })
        );
        assert_eq!(merged.udr_info, None);
    }

    #[tokio::test]
    async fn test_bsf_address_ranges_are_normalized() {
        let profile = NfProfile {
            nf_type: Some(NfType::Bsf),
            bsf_info: Some(BsfInfo {
                dnn_list: Some(vec!["internet".to_string()]),
                ipv4_address_ranges: Some(vec![Ipv4AddressRange {
                    start: "10.0.0.1".to_string(),
                    end: "10.0.0.255".to_string(),
                }]),
                ipv6_prefix_ranges: Some(vec![Ipv6PrefixRange {
                    start: "2001:db8::".to_string(),
                    end: "2001:db8::ffff".to_string(),
                }]),
                ..Default::default()
            }),
            ..submitted()
        };

        let merged = merger().merge(None, &profile).await.unwrap();
        let bsf = merged.bsf_info.clone().unwrap();
        assert_eq!(
            bsf.ipv4_address_ranges,
            Some(vec![Ipv4AddressRange {
                start: "167772161".to_string(),
                end: "167772415".to_string(),
            }])
        );
        let base = 0x2001_0db8_u128 << 96;
        assert_eq!(
            bsf.ipv6_prefix_ranges,
            Some(vec![Ipv6PrefixRange {
                start: base.to_string(),
                end: (base + 0xffff).to_string(),
            }])
        );
        assert_eq!(bsf.dnn_list, Some(vec!["internet".to_string()]));

        let resubmitted = merger().merge(Some(&merged), &merged).await.unwrap();
        assert_eq!(resubmitted.bsf_info, merged.bsf_info);
    }

    #[tokio::test]
    async fn test_invalid_bsf_range_is_rejected() {
        let profile = NfProfile {
            nf_type: Some(NfType::Bsf),
            bsf_info: Some(BsfInfo {
                ipv4_address_ranges: Some(vec![Ipv4AddressRange {
                    start: "10.0.0.1".to_string(),
                    end: "10.0.0.300".to_string(),
                }]),
                ..Default::default()
            }),
            ..submitted()
        };

        let err = merger().merge(None, &profile).await.unwrap_err();
        match err {
            NrfError::Validation(msg) => assert!(msg.contains("10.0.0.300")),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
