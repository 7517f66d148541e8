pub mod expiry_policy;
pub mod nf_management;
pub mod nrf_context;
pub mod nrf_info;
pub mod plmn_source;
pub mod profile_merge;
pub mod subscription_matcher;
pub mod uri_list;
