//! Blob store implementations.

mod atomic_file;
mod file_blob_store;
mod memory_blob_store;

pub use atomic_file::AtomicFile;
pub use file_blob_store::FileBlobStore;
pub use memory_blob_store::InMemoryBlobStore;
