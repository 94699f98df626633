use std::sync::Arc;

use anyhow::Context;
use honyaku_config::Config;
use honyaku_core::Tokenizer;
use honyaku_embed::{Embedder, build_embedder};
use honyaku_lang_japanese::JapaneseTokenizer;
use honyaku_scoring::TranslationScorer;
use honyaku_store::JsonVectorStore;

pub struct AppState {
    pub config: Config,
    pub store: JsonVectorStore,
    pub embedder: Arc<dyn Embedder>,
    pub tokenizer: Arc<dyn Tokenizer>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = JsonVectorStore::open(&config.store.path)
            .with_context(|| format!("failed to open store at {}", config.store.path.display()))?;
        let embedder = build_embedder(&config.embedding, &store.texts());

        Ok(Self {
            config,
            store,
            embedder,
            tokenizer: Arc::new(JapaneseTokenizer::new()),
        })
    }

    pub fn scorer(&self) -> TranslationScorer {
        TranslationScorer::new(Arc::clone(&self.tokenizer), Arc::clone(&self.embedder))
            .with_weights(self.config.scoring.weights)
    }
}
