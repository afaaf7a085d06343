mod library;
mod store;

pub use library::Library;
pub use store::LibraryManager;
pub use store::StoreError;
