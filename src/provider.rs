use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use walkdir::{DirEntry, WalkDir};

/// Maps a resource name to a readable byte stream.
///
/// This is the only way the reader reaches resources, so any bundle
/// (a directory, an in-memory table, the platform asset manager) can be
/// plugged in behind it.
pub trait ResourceProvider {
    type Stream: Read;

    /// Open a fresh stream positioned at the start of `name`.
    fn open(&self, name: &str) -> io::Result<Self::Stream>;
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for &P {
    type Stream = P::Stream;

    fn open(&self, name: &str) -> io::Result<Self::Stream> {
        (**self).open(name)
    }
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for Box<P> {
    type Stream = P::Stream;

    fn open(&self, name: &str) -> io::Result<Self::Stream> {
        (**self).open(name)
    }
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for Arc<P> {
    type Stream = P::Stream;

    fn open(&self, name: &str) -> io::Result<Self::Stream> {
        (**self).open(name)
    }
}

/// A directory on disk used as a resource bundle.
///
/// Names are resolved under `root` first, then under every include path
/// in the order they were added.
#[derive(Debug, Clone)]
pub struct DirProvider {
    root: PathBuf,
    include_paths: Vec<PathBuf>,
}

impl DirProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            include_paths: Vec::new(),
        }
    }

    pub fn with_include_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.include_paths.push(path.as_ref().to_path_buf());
        self
    }

    pub fn with_include_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.include_paths
            .extend(paths.into_iter().map(|p| p.as_ref().to_path_buf()));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn include_paths(&self) -> &[PathBuf] {
        &self.include_paths
    }

    fn search_dirs(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.root.as_path())
            .chain(self.include_paths.iter().map(PathBuf::as_path))
    }

    /// Path the given name resolves to, if any.
    pub fn resolve(&self, name: &str) -> io::Result<PathBuf> {
        let relative = bundle_relative(name)?;
        self.search_dirs()
            .map(|dir| dir.join(relative))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} is not in the bundle", name),
                )
            })
    }

    /// All resource names reachable through this provider, sorted.
    ///
    /// Hidden entries are skipped. A name present under several search
    /// directories is listed once.
    pub fn names(&self) -> io::Result<Vec<String>> {
        let mut names = BTreeSet::new();
        for dir in self.search_dirs().filter(|dir| dir.is_dir()) {
            let entries = WalkDir::new(dir)
                .min_depth(1)
                .into_iter()
                .filter_entry(|e| !is_hidden(e));
            for entry in entries {
                let entry = entry.map_err(io::Error::from)?;
                if !entry.file_type().is_file() {
                    continue;
                }
                if let Some(name) = to_name(dir, entry.path()) {
                    names.insert(name);
                }
            }
        }
        log::trace!("{} resources found", names.len());
        Ok(names.into_iter().collect())
    }
}

impl ResourceProvider for DirProvider {
    type Stream = File;

    fn open(&self, name: &str) -> io::Result<File> {
        let path = self.resolve(name)?;
        log::trace!("{} resolved to {}", name, path.display());
        File::open(path)
    }
}

/// Rejects names that would leave the bundle directory.
fn bundle_relative(name: &str) -> io::Result<&Path> {
    let path = Path::new(name);
    let escapes = path.components().any(|component| {
        !matches!(component, Component::Normal(_) | Component::CurDir)
    });
    if name.is_empty() || escapes {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("{} is not a bundle-relative name", name),
        ));
    }
    Ok(path)
}

fn to_name(dir: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(dir).ok()?;
    let parts = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}
