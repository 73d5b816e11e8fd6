//! # Asset Reader
//!
//! `asset-reader` loads bundled resources as opaque bytes. A
//! [`ResourceReader`] pulls a named resource out of a
//! [`ResourceProvider`] (a directory, an in-memory table or, on Android,
//! the APK asset manager) through a small reusable chunk and hands back
//! the full contents, or nothing if the resource is unavailable.
//!
//! ```no_run
//! use asset_reader::{DirProvider, ResourceReader};
//!
//! let reader = ResourceReader::new(DirProvider::new("assets"));
//! if let Some(bytes) = reader.load("scene.json") {
//!     println!("{} bytes", bytes.len());
//! }
//! ```

mod bytes;
pub mod config;
mod errors;
pub mod memory;
pub mod provider;
pub mod reader;
pub mod sink;

#[cfg(target_os = "android")]
pub mod android;

pub use bytes::ResourceBytes;
pub use config::ReaderConfig;
pub use errors::{ReaderError, ResourceUnavailable, Result, Stage};
pub use memory::MemoryProvider;
pub use provider::{DirProvider, ResourceProvider};
pub use reader::ResourceReader;
pub use sink::{DiagnosticSink, LogSink, RecordingSink};

#[cfg(target_os = "android")]
pub use android::AndroidAssetProvider;

/// Capacity of the intermediate buffer used while copying a stream.
pub const CHUNK_SIZE: usize = 512;

/// Largest chunk a reader will allocate.
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;

/// Tag attached to every diagnostic line unless overridden.
pub const DEFAULT_TAG: &str = "Minko";
