mod vector_store;

pub use vector_store::InMemoryVectorStore;
