use std::fs;
use std::path::{Path, PathBuf};

use honyaku_core::{Corpus, Document};
use honyaku_embed::{Embedder, cosine_similarity};

use crate::types::{SearchHit, StoreError, StoredDocument};

/// File-backed document store with embeddings.
///
/// The whole JSON array is read at open and rewritten on every add; the
/// corpus is expected to stay in the low thousands.
pub struct JsonVectorStore {
    path: PathBuf,
    documents: Vec<StoredDocument>,
}

impl JsonVectorStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let documents = if path.exists() {
            let data = fs::read_to_string(&path)?;
            let documents: Vec<StoredDocument> =
                serde_json::from_str(&data).map_err(|source| StoreError::InvalidFormat {
                    path: path.display().to_string(),
                    source,
                })?;
            tracing::info!("Loaded {} documents from {}", documents.len(), path.display());
            documents
        } else {
            tracing::info!("Creating new vector store at {}", path.display());
            Vec::new()
        };

        Ok(Self { path, documents })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Raw texts, used to fit corpus-dependent embedders
    pub fn texts(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.text.clone()).collect()
    }

    /// Embed and append documents, then persist the full store.
    ///
    /// Documents with an empty id get a fresh UUID.
    pub async fn add_documents(
        &mut self,
        documents: Vec<Document>,
        embedder: &dyn Embedder,
    ) -> Result<usize, StoreError> {
        let mut added = Vec::with_capacity(documents.len());

        for doc in documents {
            let embedding = embedder.encode(&doc.text).await?;
            let id = if doc.id.is_empty() {
                uuid::Uuid::new_v4().to_string()
            } else {
                doc.id
            };

            added.push(StoredDocument {
                id,
                text: doc.text,
                metadata: doc.metadata,
                embedding,
            });
        }

        let count = added.len();
        let previous = self.documents.len();
        self.documents.extend(added);
        if let Err(e) = self.save() {
            self.documents.truncate(previous);
            return Err(e);
        }

        tracing::info!("Added {} documents", count);
        Ok(count)
    }

    /// Linear-scan nearest documents by cosine distance
    pub async fn search(
        &self,
        query: &str,
        n_results: usize,
        embedder: &dyn Embedder,
    ) -> Result<Vec<SearchHit>, StoreError> {
        if self.documents.is_empty() {
            return Ok(Vec::new());
        }

        let query_embedding = embedder.encode(query).await?;

        let mut hits = Vec::with_capacity(self.documents.len());
        for doc in &self.documents {
            match cosine_similarity(&query_embedding, &doc.embedding) {
                Ok(similarity) => hits.push(SearchHit {
                    document: doc.to_document(),
                    distance: 1.0 - similarity,
                }),
                Err(e) => {
                    tracing::warn!("Skipping document {} in search: {}", doc.id, e);
                }
            }
        }

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits.truncate(n_results);
        Ok(hits)
    }

    /// Drop every document and remove the backing file
    pub fn delete_collection(&mut self) -> Result<(), StoreError> {
        self.documents.clear();
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        tracing::info!("Deleted collection at {}", self.path.display());
        Ok(())
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.documents)?;
        fs::write(&self.path, json)?;
        tracing::debug!("Saved {} documents to {}", self.documents.len(), self.path.display());
        Ok(())
    }
}

impl Corpus for JsonVectorStore {
    fn all_documents(&self) -> Vec<Document> {
        self.documents.iter().map(StoredDocument::to_document).collect()
    }
}

#[cfg(test)]
mod tests {
    use honyaku_embed::HashEmbedder;

    use super::*;

    fn pair(id: &str, en: &str, jp: &str) -> Document {
        Document::new(id, format!("EN: {en}\nJP: {jp}")).with_source("test")
    }

    #[tokio::test]
    async fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonVectorStore::open(dir.path().join("store.json")).unwrap();
        assert!(store.is_empty());
        assert!(store.all_documents().is_empty());
    }

    #[tokio::test]
    async fn add_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");
        let embedder = HashEmbedder::new(32);

        let mut store = JsonVectorStore::open(&path).unwrap();
        let added = store
            .add_documents(
                vec![
                    pair("a", "Cats sleep.", "猫は寝る。"),
                    Document::new("", "Some prose without tags."),
                ],
                &embedder,
            )
            .await
            .unwrap();
        assert_eq!(added, 2);

        let reloaded = JsonVectorStore::open(&path).unwrap();
        let docs = reloaded.all_documents();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "a");
        assert_eq!(docs[0].source(), "test");
        assert!(!docs[1].id.is_empty());
        assert_eq!(docs[1].source(), "Unknown");

        // Non-ASCII is written as-is, not escaped
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("猫は寝る。"));
    }

    #[tokio::test]
    async fn search_orders_by_distance() {
        let dir = tempfile::tempdir().unwrap();
        let embedder = HashEmbedder::new(128);
        let mut store = JsonVectorStore::open(dir.path().join("s.json")).unwrap();
        store
            .add_documents(
                vec![
                    Document::new("far", "ロボット工学"),
                    Document::new("near", "自動化は手動タスクを削減します"),
                ],
                &embedder,
            )
            .await
            .unwrap();

        let hits = store.search("自動化は手動タスクを削減します", 5, &embedder).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].document.id, "near");
        assert!(hits[0].distance.abs() < 1e-9);
        assert!(hits[0].distance <= hits[1].distance);

        let top = store.search("自動化", 1, &embedder).await.unwrap();
        assert_eq!(top.len(), 1);
    }

    #[tokio::test]
    async fn delete_collection_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.json");
        let embedder = HashEmbedder::new(8);
        let mut store = JsonVectorStore::open(&path).unwrap();
        store
            .add_documents(vec![Document::new("x", "テキスト")], &embedder)
            .await
            .unwrap();
        assert!(path.exists());

        store.delete_collection().unwrap();
        assert!(store.is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn failed_save_keeps_earlier_documents_only() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        let embedder = HashEmbedder::new(8);
        let mut store = JsonVectorStore::open(sub.join("s.json")).unwrap();
        store
            .add_documents(vec![Document::new("kept", "テキスト")], &embedder)
            .await
            .unwrap();

        // A plain file where the parent directory should be
        std::fs::remove_dir_all(&sub).unwrap();
        std::fs::write(&sub, "").unwrap();

        let result = store
            .add_documents(vec![Document::new("lost", "別のテキスト")], &embedder)
            .await;
        assert!(matches!(result, Err(StoreError::IoError(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(store.all_documents()[0].id, "kept");
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            JsonVectorStore::open(&path),
            Err(StoreError::InvalidFormat { .. })
        ));
    }
}
