use serde::{Deserialize, Serialize};
use super::{Guami, IdentityRange, PlmnRange, Snssai, SupiRange, Tai, TaiRange};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UdrInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supi_ranges: Option<Vec<SupiRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpsi_ranges: Option<Vec<IdentityRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_group_identifiers_ranges: Option<Vec<IdentityRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_data_sets: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UdmInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supi_ranges: Option<Vec<SupiRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpsi_ranges: Option<Vec<IdentityRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_group_identifiers_ranges: Option<Vec<IdentityRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_indicators: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AusfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supi_ranges: Option<Vec<SupiRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_indicators: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amf_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amf_region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guami_list: Option<Vec<Guami>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tai_list: Option<Vec<Tai>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tai_range_list: Option<Vec<TaiRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_info_amf_failure: Option<Vec<Guami>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_info_amf_removal: Option<Vec<Guami>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n2_interface_amf_info: Option<N2InterfaceAmfInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct N2InterfaceAmfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_endpoint_address: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_endpoint_address: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amf_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_nssai_smf_info_list: Option<Vec<SnssaiSmfInfoItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tai_list: Option<Vec<Tai>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tai_range_list: Option<Vec<TaiRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pgw_fqdn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_type: Option<Vec<AccessType>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnssaiSmfInfoItem {
    pub s_nssai: Snssai,
    pub dnn_smf_info_list: Vec<DnnSmfInfoItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnnSmfInfoItem {
    pub dnn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessType {
    #[serde(rename = "3GPP_ACCESS")]
    ThreeGppAccess,
    #[serde(rename = "NON_3GPP_ACCESS")]
    NonThreeGppAccess,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_nssai_upf_info_list: Option<Vec<SnssaiUpfInfoItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smf_serving_area: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_upf_info_list: Option<Vec<InterfaceUpfInfoItem>>,
    #[serde(default)]
    pub iwk_eps_ind: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnssaiUpfInfoItem {
    pub s_nssai: Snssai,
    pub dnn_upf_info_list: Vec<DnnUpfInfoItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnnUpfInfoItem {
    pub dnn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnai_list: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceUpfInfoItem {
    pub interface_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_endpoint_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_endpoint_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_fqdn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_instance: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PcfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnn_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supi_ranges: Option<Vec<SupiRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_diam_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_diam_realm: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BsfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnn_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_domain_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_address_ranges: Option<Vec<Ipv4AddressRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_prefix_ranges: Option<Vec<Ipv6PrefixRange>>,
}

/// Stored with both bounds rewritten to the decimal form of their `u32` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv4AddressRange {
    pub start: String,
    pub end: String,
}

/// Stored with both bounds rewritten to the decimal form of their `u128` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv6PrefixRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supi_range_list: Option<Vec<SupiRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpsi_range_list: Option<Vec<IdentityRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plmn_range_list: Option<Vec<PlmnRange>>,
}
