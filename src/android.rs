use std::ffi::CString;
use std::io;

use ndk::asset::{Asset, AssetManager};

use crate::provider::ResourceProvider;

/// Assets packaged in the APK, read through the platform asset manager.
///
/// The manager handle is passed in explicitly, typically obtained from
/// the activity once at startup.
pub struct AndroidAssetProvider {
    manager: AssetManager,
}

impl AndroidAssetProvider {
    pub fn new(manager: AssetManager) -> Self {
        Self { manager }
    }
}

impl ResourceProvider for AndroidAssetProvider {
    type Stream = Asset;

    fn open(&self, name: &str) -> io::Result<Asset> {
        let c_name = CString::new(name)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        self.manager.open(&c_name).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("Asset {} not found", name),
            )
        })
    }
}
