//! Home Assistant light service client.
//!
//! # Responsibility
//! - POST `light/turn_on` or `light/turn_off` for one configured entity.
//! - Bound every request by the configured timeout.
//!
//! # Invariants
//! - The response body is never parsed; any 2xx/3xx outcome is success.
//! - HTTP 4xx/5xx map to `NotifyError::Status`.

use super::{HomeAssistantConfig, LightAction, Notifier, NotifyError, NotifyResult};
use log::{debug, warn};
use serde::Serialize;

/// JSON body of a light service call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightServiceBody<'a> {
    pub entity_id: &'a str,
}

/// Builds the service URL for `action` under `base_url`.
pub fn light_service_url(base_url: &str, action: LightAction) -> String {
    format!(
        "{}/api/services/light/{}",
        base_url.trim_end_matches('/'),
        action.service()
    )
}

/// Blocking Home Assistant client backed by a shared `ureq` agent.
pub struct HomeAssistantNotifier {
    config: HomeAssistantConfig,
    agent: ureq::Agent,
}

impl HomeAssistantNotifier {
    pub fn new(config: HomeAssistantConfig) -> Self {
        if !config.has_token() {
            warn!(
                "event=notifier_init module=notify status=warn reason=empty_token entity_id={}",
                config.entity_id
            );
        }
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Self { config, agent }
    }

    /// Sends one light service call.
    ///
    /// # Errors
    /// - `Encoding` when the body cannot be serialized.
    /// - `Status` when the server answers 4xx/5xx.
    /// - `Network` for any transport failure, timeout included.
    pub fn send(&self, action: LightAction) -> NotifyResult<()> {
        let url = light_service_url(&self.config.base_url, action);
        let body = serde_json::to_string(&LightServiceBody {
            entity_id: &self.config.entity_id,
        })?;

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.config.token))
            .set("Content-Type", "application/json")
            .send_string(&body);

        match result {
            Ok(response) => {
                debug!(
                    "event=notify_sent module=notify status=ok action={} http_status={}",
                    action,
                    response.status()
                );
                Ok(())
            }
            Err(ureq::Error::Status(code, _)) => Err(NotifyError::Status(code)),
            Err(ureq::Error::Transport(transport)) => {
                Err(NotifyError::Network(transport.to_string()))
            }
        }
    }
}

impl Notifier for HomeAssistantNotifier {
    fn set_media_active(&self, active: bool) -> NotifyResult<()> {
        self.send(LightAction::from_media_active(active))
    }
}

#[cfg(test)]
mod tests {
    use super::{light_service_url, LightServiceBody};
    use crate::notify::LightAction;

    #[test]
    fn url_selects_service_by_action() {
        assert_eq!(
            light_service_url("http://homeassistant.local:8123", LightAction::TurnOn),
            "http://homeassistant.local:8123/api/services/light/turn_on"
        );
        assert_eq!(
            light_service_url("http://ha/", LightAction::TurnOff),
            "http://ha/api/services/light/turn_off"
        );
    }

    #[test]
    fn body_names_entity() {
        let body = serde_json::to_string(&LightServiceBody {
            entity_id: "light.on_air_light",
        })
        .unwrap();
        assert_eq!(body, r#"{"entity_id":"light.on_air_light"}"#);
    }
}
