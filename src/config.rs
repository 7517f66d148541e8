use std::env;
use crate::types::PlmnId;

#[derive(Debug, Clone)]
pub struct SbiConfig {
    pub scheme: String,
    pub binding_ip: String,
    pub register_ip: String,
    pub port: u16,
}

impl SbiConfig {
    /// Base URI other NFs use to reach this registry.
    pub fn uri(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.register_ip, self.port)
    }
}

impl Default for SbiConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            binding_ip: "0.0.0.0".to_string(),
            register_ip: "127.0.0.1".to_string(),
            port: 29510,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub mongodb_name: String,
    pub sbi: SbiConfig,
    pub nf_profile_expiry_enable: bool,
    pub nf_keep_alive_time: u32,
    pub api_version: String,
    pub service_name_list: Vec<String>,
    pub webconsole_uri: Option<String>,
    pub plmn_list: Vec<PlmnId>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let mongodb_name = env::var("MONGODB_NAME")
            .unwrap_or_else(|_| "free5gc".to_string());

        let scheme = env::var("SBI_SCHEME")
            .unwrap_or_else(|_| "http".to_string());

        let binding_ip = env::var("SBI_BINDING_IP")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let register_ip = env::var("SBI_REGISTER_IP")
            .unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("SBI_PORT")
            .unwrap_or_else(|_| "29510".to_string())
            .parse()?;

        let nf_profile_expiry_enable = env::var("NF_PROFILE_EXPIRY_ENABLE")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        let nf_keep_alive_time = env::var("NF_KEEP_ALIVE_TIME")
            .unwrap_or_else(|_| "0".to_string())
            .parse()?;

        let api_version = env::var("NRF_API_VERSION")
            .unwrap_or_else(|_| "1.0.0".to_string());

        let service_name_list = env::var("NRF_SERVICE_NAME_LIST")
            .unwrap_or_else(|_| "nnrf-nfm,nnrf-disc".to_string())
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        let webconsole_uri = env::var("WEBCONSOLE_URI").ok();

        let plmn_list = parse_plmn_list(&env::var("PLMN_LIST").unwrap_or_default())?;

        Ok(Self {
            mongodb_uri,
            mongodb_name,
            sbi: SbiConfig {
                scheme,
                binding_ip,
                register_ip,
                port,
            },
            nf_profile_expiry_enable,
            nf_keep_alive_time,
            api_version,
            service_name_list,
            webconsole_uri,
            plmn_list,
        })
    }
}

/// Parses a comma separated `mcc-mnc` list such as `001-01,208-93`.
pub fn parse_plmn_list(raw: &str) -> anyhow::Result<Vec<PlmnId>> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|entry| {
            let (mcc, mnc) = entry
                .split_once('-')
                .ok_or_else(|| anyhow::anyhow!("Invalid PLMN entry '{}', expected mcc-mnc", entry))?;
            let valid_mcc = mcc.len() == 3 && mcc.chars().all(|c| c.is_ascii_digit());
            let valid_mnc = (2..=3).contains(&mnc.len()) && mnc.chars().all(|c| c.is_ascii_digit());
            if !valid_mcc || !valid_mnc {
                anyhow::bail!("Invalid PLMN entry '{}'", entry);
            }
            Ok(PlmnId {
                mcc: mcc.to_string(),
                mnc: mnc.to_string(),
            })
        })
        .collect()
}
