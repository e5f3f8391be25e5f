pub mod bookmark;
pub mod store;

pub use bookmark::Bookmark;
pub use store::BookmarkStore;
