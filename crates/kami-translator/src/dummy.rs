use crate::{TranslateError, Translation, TranslationRequest, Translator};

/// Offline provider that echoes the input tagged with the target language.
/// Useful for exercising the fan-out without a reachable endpoint.
#[derive(Debug, Clone, Default)]
pub struct DummyTranslator;

#[async_trait::async_trait]
impl Translator for DummyTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<Translation, TranslateError> {
        Ok(Translation {
            text: format!("[{}] {}", request.target, request.text),
            source: request.source.clone(),
            target: request.target.clone(),
        })
    }
}
