use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use kami_translator::{TranslateError, Translation, TranslationRequest, Translator};

mod fanout_tests;

/// Scripted per-target provider: canned success/failure and an optional
/// artificial delay per target, recording every request it sees.
pub struct ScriptedTranslator {
    responses: HashMap<String, Result<String, String>>,
    delays: HashMap<String, Duration>,
    seen: Mutex<Vec<TranslationRequest>>,
}

impl ScriptedTranslator {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            delays: HashMap::new(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn ok(mut self, target: &str, text: &str) -> Self {
        self.responses
            .insert(target.to_string(), Ok(text.to_string()));
        self
    }

    pub fn fail(mut self, target: &str, reason: &str) -> Self {
        self.responses
            .insert(target.to_string(), Err(reason.to_string()));
        self
    }

    pub fn delay(mut self, target: &str, delay: Duration) -> Self {
        self.delays.insert(target.to_string(), delay);
        self
    }

    pub fn requests(&self) -> Vec<TranslationRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Translator for ScriptedTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<Translation, TranslateError> {
        self.seen.lock().unwrap().push(request.clone());

        if let Some(delay) = self.delays.get(&request.target) {
            tokio::time::sleep(*delay).await;
        }

        match self.responses.get(&request.target) {
            Some(Ok(text)) => Ok(Translation {
                text: text.clone(),
                source: request.source.clone(),
                target: request.target.clone(),
            }),
            Some(Err(reason)) => Err(TranslateError::Service(reason.clone())),
            None => Err(TranslateError::Http(500)),
        }
    }
}
