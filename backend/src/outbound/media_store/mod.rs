//! Filesystem-backed media storage.

mod fs_media_store;

pub use fs_media_store::FsMediaStore;
