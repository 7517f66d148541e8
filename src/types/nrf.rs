use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use super::{
    AmfInfo, AusfInfo, BsfInfo, ChfInfo, Guami, PcfInfo, PlmnId, SmfInfo, Snssai, UdmInfo,
    UdrInfo, UpfInfo,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NfType {
    Nrf,
    Udm,
    Amf,
    Smf,
    Ausf,
    Nef,
    Pcf,
    Smsf,
    Nssf,
    Udr,
    Lmf,
    Gmlc,
    #[serde(rename = "5G_EIR")]
    FiveGEir,
    Sepp,
    Upf,
    N3iwf,
    Af,
    Udsf,
    Bsf,
    Chf,
    Nwdaf,
}

impl NfType {
    /// Wire name, as used in stored documents and query filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            NfType::Nrf => "NRF",
            NfType::Udm => "UDM",
            NfType::Amf => "AMF",
            NfType::Smf => "SMF",
            NfType::Ausf => "AUSF",
            NfType::Nef => "NEF",
            NfType::Pcf => "PCF",
            NfType::Smsf => "SMSF",
            NfType::Nssf => "NSSF",
            NfType::Udr => "UDR",
            NfType::Lmf => "LMF",
            NfType::Gmlc => "GMLC",
            NfType::FiveGEir => "5G_EIR",
            NfType::Sepp => "SEPP",
            NfType::Upf => "UPF",
            NfType::N3iwf => "N3IWF",
            NfType::Af => "AF",
            NfType::Udsf => "UDSF",
            NfType::Bsf => "BSF",
            NfType::Chf => "CHF",
            NfType::Nwdaf => "NWDAF",
        }
    }
}

impl fmt::Display for NfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NfStatus {
    Registered,
    Suspended,
    Undiscoverable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NfServiceStatus {
    Registered,
    Suspended,
    Undiscoverable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportProtocol {
    Tcp,
}

/// Registered NF instance.
///
/// `nf_type` and `nf_status` are optional only so that an incomplete
/// submission can be decoded and rejected with a precise reason; a merged
/// profile always carries both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NfProfile {
    #[serde(default)]
    pub nf_instance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nf_type: Option<NfType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nf_status: Option<NfStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_beat_timer: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plmn_list: Option<Vec<PlmnId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_nssais: Option<Vec<Snssai>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsi_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inter_plmn_fqdn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_plmns: Option<Vec<PlmnId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_nf_types: Option<Vec<NfType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_nf_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_nssais: Option<Vec<Snssai>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udr_info: Option<UdrInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udm_info: Option<UdmInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ausf_info: Option<AusfInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amf_info: Option<AmfInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smf_info: Option<SmfInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upf_info: Option<UpfInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcf_info: Option<PcfInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bsf_info: Option<BsfInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chf_info: Option<ChfInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nrf_info: Option<NrfInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub nf_service_persistence: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nf_services: Option<Vec<NfService>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nf_service_list: Option<IndexMap<String, NfService>>,
}

impl NfProfile {
    /// Canonical view of the exposed services, preferring the ordered list
    /// when both representations are present.
    pub fn services(&self) -> NfServices {
        match (&self.nf_services, &self.nf_service_list) {
            (Some(list), _) => NfServices::from_list(list),
            (None, Some(map)) => NfServices::from_map(map),
            (None, None) => NfServices::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NfService {
    pub service_instance_id: String,
    pub service_name: String,
    pub versions: Vec<NfServiceVersion>,
    pub scheme: String,
    pub nf_service_status: NfServiceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_end_points: Option<Vec<IpEndPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_plmns: Option<Vec<PlmnId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_nf_types: Option<Vec<NfType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_nssais: Option<Vec<Snssai>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_features: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NfServiceVersion {
    pub api_version_in_uri: String,
    pub api_full_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpEndPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// Service descriptors keyed by service-instance id, in a defined order.
///
/// Built from a list, entries keep the position of the first occurrence of an
/// id and the value of the last one. Built from a map, entries are ordered by
/// service-instance id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NfServices(IndexMap<String, NfService>);

impl NfServices {
    pub fn from_list(list: &[NfService]) -> Self {
        let mut services = IndexMap::with_capacity(list.len());
        for service in list {
            services.insert(service.service_instance_id.clone(), service.clone());
        }
        Self(services)
    }

    pub fn from_map(map: &IndexMap<String, NfService>) -> Self {
        let mut services = map.clone();
        services.sort_keys();
        Self(services)
    }

    pub fn to_list(&self) -> Vec<NfService> {
        self.0.values().cloned().collect()
    }

    pub fn to_map(&self) -> IndexMap<String, NfService> {
        self.0.clone()
    }

    pub fn get(&self, service_instance_id: &str) -> Option<&NfService> {
        self.0.get(service_instance_id)
    }

    /// Distinct service names, in service order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for service in self.0.values() {
            if !names.contains(&service.service_name) {
                names.push(service.service_name.clone());
            }
        }
        names
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Capability summary of the registry: type-specific info of every served
/// NF, keyed by a positional index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NrfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub served_udr_info: Option<IndexMap<String, ServedUdrInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub served_udm_info: Option<IndexMap<String, ServedUdmInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub served_ausf_info: Option<IndexMap<String, ServedAusfInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub served_amf_info: Option<IndexMap<String, ServedAmfInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub served_smf_info: Option<IndexMap<String, ServedSmfInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub served_upf_info: Option<IndexMap<String, ServedUpfInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub served_pcf_info: Option<IndexMap<String, ServedPcfInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub served_bsf_info: Option<IndexMap<String, ServedBsfInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub served_chf_info: Option<IndexMap<String, ServedChfInfo>>,
}

/// Entry of a served-info map, wrapping one NF's type-specific info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServedUdrInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udr_info: Option<UdrInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServedUdmInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udm_info: Option<UdmInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServedAusfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ausf_info: Option<AusfInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServedAmfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amf_info: Option<AmfInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServedSmfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smf_info: Option<SmfInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServedUpfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upf_info: Option<UpfInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServedPcfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcf_info: Option<PcfInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServedBsfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bsf_info: Option<BsfInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServedChfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chf_info: Option<ChfInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionData {
    pub nf_status_notification_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub req_nf_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscr_cond: Option<SubscrCond>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub req_notif_events: Option<Vec<NotificationEventType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationEventType {
    NfRegistered,
    NfDeregistered,
    NfProfileChanged,
}

/// Condition of a subscription. The variants are mutually exclusive; each is
/// recognised by its exact field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubscrCond {
    NfInstanceId(NfInstanceIdCond),
    NfGroup(NfGroupCond),
    NfType(NfTypeCond),
    ServiceName(ServiceNameCond),
    Amf(AmfCond),
    GuamiList(GuamiListCond),
    NetworkSlice(NetworkSliceCond),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NfInstanceIdCond {
    pub nf_instance_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NfTypeCond {
    pub nf_type: NfType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceNameCond {
    pub service_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AmfCond {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amf_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amf_region_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GuamiListCond {
    pub guami_list: Vec<Guami>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NetworkSliceCond {
    pub snssai_list: Vec<Snssai>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsi_list: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NfGroupCond {
    pub nf_type: NfType,
    pub nf_group_id: String,
}

/// Known instance locations of one NF type, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UriList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nf_type: Option<NfType>,
    #[serde(rename = "_link", default)]
    pub link: Links,
}

impl UriList {
    pub fn contains(&self, href: &str) -> bool {
        self.link.item.iter().any(|link| link.href == href)
    }

    pub fn len(&self) -> usize {
        self.link.item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.link.item.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub item: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}
