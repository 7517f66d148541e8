use std::sync::OnceLock;
use crate::config::Config;

/// Heartbeat timer handed out when profiles never expire (one day).
pub const NO_EXPIRY_KEEP_ALIVE_SECS: u32 = 24 * 60 * 60;

/// Heartbeat timer used when expiry is enabled but no keep-alive is configured.
pub const DEFAULT_KEEP_ALIVE_SECS: u32 = 60;

/// Resolves the heartbeat timer the registry imposes on every profile.
///
/// The configured values are fixed at construction; the effective keep-alive
/// is computed at most once and shared by every caller afterwards.
#[derive(Debug)]
pub struct ExpiryPolicy {
    expiry_enabled: bool,
    configured_keep_alive: u32,
    effective: OnceLock<u32>,
}

impl ExpiryPolicy {
    pub fn new(expiry_enabled: bool, configured_keep_alive: u32) -> Self {
        Self {
            expiry_enabled,
            configured_keep_alive,
            effective: OnceLock::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.nf_profile_expiry_enable, config.nf_keep_alive_time)
    }

    pub fn keep_alive_time(&self) -> u32 {
        *self.effective.get_or_init(|| {
            if !self.expiry_enabled {
                tracing::info!(
                    "NF profile expiry disabled, using keep-alive timer of {} sec",
                    NO_EXPIRY_KEEP_ALIVE_SECS
                );
                NO_EXPIRY_KEEP_ALIVE_SECS
            } else if self.configured_keep_alive == 0 {
                tracing::info!(
                    "NF profile expiry enabled but keep-alive time is 0, using default of {} sec",
                    DEFAULT_KEEP_ALIVE_SECS
                );
                DEFAULT_KEEP_ALIVE_SECS
            } else {
                self.configured_keep_alive
            }
        })
    }
}
