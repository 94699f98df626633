mod store;
pub mod types;

pub use store::JsonVectorStore;
pub use types::{SearchHit, StoreError, StoredDocument};
