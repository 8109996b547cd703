use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::StatusPageSettings;

use super::error::StatusPageError;
use super::model::{Component, ComponentStatus, Incident, IncidentUpdate, NewIncident};


#[derive(Serialize)]
struct IncidentEnvelope<T> {
    incident: T,
}

#[derive(Serialize)]
struct ComponentEnvelope {
    component: ComponentPatch,
}

#[derive(Serialize)]
struct ComponentPatch {
    status: ComponentStatus,
}

/// Thin client over the page-scoped endpoints. Every request carries the same
/// `Authorization: OAuth <token>` header and the configured timeout.
#[derive(Clone)]
pub(crate) struct StatusPageClient {
    http: reqwest::Client,
    page_url: String,
    timeout_secs: u64,
}

impl StatusPageClient {
    pub(crate) fn new(
        settings: &StatusPageSettings,
        timeout_secs: u64,
    ) -> Result<Self, StatusPageError> {
        let mut authorization =
            HeaderValue::from_str(&format!("OAuth {}", settings.api_token.trim()))
                .map_err(|error| StatusPageError::Setup(error.to_string()))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(USER_AGENT, HeaderValue::from_static("statuspage-bot"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let timeout_secs = timeout_secs.max(1);
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|error| StatusPageError::Setup(error.to_string()))?;

        Ok(Self {
            http,
            page_url: format!(
                "{}/pages/{}",
                settings.api_base_url.trim().trim_end_matches('/'),
                settings.page_id.trim()
            ),
            timeout_secs,
        })
    }

    pub(crate) async fn list_incidents(&self) -> Result<Vec<Incident>, StatusPageError> {
        self.send(Method::GET, "/incidents.json", None::<&()>).await
    }

    pub(crate) async fn update_incident(
        &self,
        incident_id: &str,
        update: IncidentUpdate<'_>,
    ) -> Result<(), StatusPageError> {
        let path = format!("/incidents/{}.json", incident_id);
        self.send::<Value, _>(Method::PATCH, &path, Some(&IncidentEnvelope { incident: update }))
            .await
            .map(drop)
    }

    pub(crate) async fn create_incident(
        &self,
        incident: NewIncident<'_>,
    ) -> Result<(), StatusPageError> {
        self.send::<Value, _>(
            Method::POST,
            "/incidents.json",
            Some(&IncidentEnvelope { incident }),
        )
        .await
        .map(drop)
    }

    pub(crate) async fn list_components(&self) -> Result<Vec<Component>, StatusPageError> {
        self.send(Method::GET, "/components.json", None::<&()>).await
    }

    pub(crate) async fn update_component(
        &self,
        component_id: &str,
        status: ComponentStatus,
    ) -> Result<(), StatusPageError> {
        let path = format!("/components/{}.json", component_id);
        let body = ComponentEnvelope {
            component: ComponentPatch { status },
        };
        self.send::<Value, _>(Method::PATCH, &path, Some(&body))
            .await
            .map(drop)
    }

    async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, StatusPageError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        log::debug!("statuspage_request method={} path={}", method, path);
        let mut request: RequestBuilder = self
            .http
            .request(method.clone(), format!("{}{}", self.page_url, path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let result = self.execute(request).await;
        if let Err(error) = &result {
            log::warn!(
                "statuspage_request_failed method={} path={} code={} error={}",
                method,
                path,
                error.code(),
                error
            );
        }
        result
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, StatusPageError> {
        let response = request
            .send()
            .await
            .map_err(|error| self.transport_error(error))?;
        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|error| self.transport_error(error))?;

        let value = match serde_json::from_str::<Value>(&raw) {
            Ok(value) => value,
            Err(_) if !status.is_success() => {
                return Err(StatusPageError::Http {
                    status: status.as_u16(),
                })
            }
            Err(error) => return Err(StatusPageError::Decode(error)),
        };

        // Errors come back as an `error` field, usually with a 200 status.
        if let Some(message) = remote_error(&value) {
            return Err(StatusPageError::Remote(message));
        }
        if !status.is_success() {
            return Err(StatusPageError::Http {
                status: status.as_u16(),
            });
        }

        Ok(serde_json::from_value(value)?)
    }

    fn transport_error(&self, error: reqwest::Error) -> StatusPageError {
        if error.is_timeout() {
            StatusPageError::Timeout(self.timeout_secs)
        } else {
            StatusPageError::Transport(error)
        }
    }
}

fn remote_error(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        Value::Array(messages) => Some(
            messages
                .iter()
                .map(|message| match message {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join("; "),
        ),
        other => Some(other.to_string()),
    }
}
