use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{TranslateError, Translation, TranslationRequest, Translator};

/// Wire adapter for the menu translation endpoint: one POST per request,
/// JSON `{text, source, target}` in, `{translation}` or `{error}` out.
#[derive(Clone)]
pub struct MenuTranslator {
    client: reqwest::Client,
    endpoint: String,
    force_target: bool,
}

impl MenuTranslator {
    pub fn new(
        endpoint: String,
        timeout: Duration,
        force_target: bool,
    ) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            force_target,
        })
    }
}

#[async_trait::async_trait]
impl Translator for MenuTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<Translation, TranslateError> {
        let body = WireRequest {
            text: &request.text,
            source: &request.source,
            target: &request.target,
            force_target: self.force_target,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Error bodies sometimes carry a service-reported reason
            if let Ok(wire) = response.json::<WireResponse>().await
                && let Some(reason) = wire.error
            {
                return Err(TranslateError::Service(reason));
            }
            return Err(TranslateError::Http(status.as_u16()));
        }

        let wire: WireResponse = response
            .json()
            .await
            .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;

        let text = wire.into_translation()?;

        Ok(Translation {
            text,
            source: request.source.clone(),
            target: request.target.clone(),
        })
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Serialize)]
struct WireRequest<'a> {
    text: &'a str,
    source: &'a str,
    target: &'a str,
    /// Signals the service not to re-detect and override the target
    #[serde(rename = "forceTarget", skip_serializing_if = "is_false")]
    force_target: bool,
}

#[derive(Deserialize)]
struct WireResponse {
    #[serde(default)]
    translation: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl WireResponse {
    fn into_translation(self) -> Result<String, TranslateError> {
        if let Some(reason) = self.error {
            return Err(TranslateError::Service(reason));
        }

        match self.translation {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(TranslateError::EmptyTranslation),
        }
    }
}
