use anyhow::Error as StandardError;
use log::{error, info, warn};

// Selected by build.rs: secrets.rs from the crate root when present,
// secrets.sample.rs otherwise.
include!(concat!(env!("OUT_DIR"), "/secrets.rs"));

/// The secrets compiled into this build.
#[derive(Debug, Clone, Copy)]
pub struct Secrets {
    pub wifi_ssid: &'static str,
    pub wifi_pass: &'static str,
    pub webhook_token: &'static str,
}

impl Secrets {
    pub const fn active() -> Secrets {
        Secrets {
            wifi_ssid: WIFI_SSID,
            wifi_pass: WIFI_PASS,
            webhook_token: WEBHOOK_TOKEN,
        }
    }

    /// `None` when the token is empty, which disables webhook authentication.
    pub fn webhook_token(&self) -> Option<&'static str> {
        if self.webhook_token.is_empty() {
            None
        } else {
            Some(self.webhook_token)
        }
    }

    pub fn webhook_auth_enabled(&self) -> bool {
        self.webhook_token().is_some()
    }

    /// An empty password means an open network.
    pub fn is_open_network(&self) -> bool {
        self.wifi_pass.is_empty()
    }

    pub fn validate(&self) -> anyhow::Result<(), anyhow::Error> {
        if self.wifi_ssid.is_empty() {
            let message = format!("the WiFi SSID is empty");
            error!("{}", message);
            return Err(StandardError::msg(message));
        }
        Ok(())
    }

    /// Logs the active configuration without printing secret material.
    pub fn log_summary(&self) {
        info!("WiFi network: {}", self.wifi_ssid);
        if self.is_open_network() {
            warn!("WiFi password is empty, assuming an open network");
        }
        if self.webhook_auth_enabled() {
            info!("webhook authentication is enabled");
        } else {
            warn!("webhook token is empty, webhook authentication is disabled");
        }
    }
}
