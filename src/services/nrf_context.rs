use crate::config::{Config, SbiConfig};
use crate::types::{
    IpEndPoint, NfProfile, NfService, NfServiceStatus, NfServiceVersion, NfStatus, NfType,
    TransportProtocol,
};
use crate::utils::new_instance_id;

/// Profile this registry advertises for itself. A fresh instance id is
/// generated on every start.
pub fn build_nrf_profile(config: &Config) -> NfProfile {
    let nf_services = init_nf_services(&config.service_name_list, &config.api_version, &config.sbi);

    NfProfile {
        nf_instance_id: new_instance_id(),
        nf_type: Some(NfType::Nrf),
        nf_status: Some(NfStatus::Registered),
        plmn_list: if config.plmn_list.is_empty() {
            None
        } else {
            Some(config.plmn_list.clone())
        },
        ipv4_addresses: Some(vec![config.sbi.register_ip.clone()]),
        nf_services: Some(nf_services),
        ..Default::default()
    }
}

/// One service descriptor per configured name, with instance ids "0", "1", ...
pub fn init_nf_services(service_names: &[String], api_version: &str, sbi: &SbiConfig) -> Vec<NfService> {
    // "1.0.0" is served under "v1"
    let major = api_version.split('.').next().unwrap_or(api_version);
    let version_uri = format!("v{}", major);
    let api_prefix = sbi.uri();

    service_names
        .iter()
        .enumerate()
        .map(|(index, name)| NfService {
            service_instance_id: index.to_string(),
            service_name: name.clone(),
            versions: vec![NfServiceVersion {
                api_version_in_uri: version_uri.clone(),
                api_full_version: api_version.to_string(),
            }],
            scheme: sbi.scheme.clone(),
            nf_service_status: NfServiceStatus::Registered,
            fqdn: None,
            ip_end_points: Some(vec![IpEndPoint {
                ipv4_address: Some(sbi.register_ip.clone()),
                ipv6_address: None,
                transport: Some(TransportProtocol::Tcp),
                port: Some(sbi.port),
            }]),
            api_prefix: Some(api_prefix.clone()),
            allowed_plmns: None,
            allowed_nf_types: None,
            allowed_nssais: None,
            priority: None,
            capacity: None,
            load: None,
            supported_features: None,
        })
        .collect()
}
