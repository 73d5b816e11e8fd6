use std::collections::BTreeMap;
use std::io::{self, Read};
use std::sync::Arc;

use crate::provider::ResourceProvider;

/// An in-memory bundle.
///
/// Streams hand out at most `max_read` bytes per `read` call, which makes
/// it possible to reproduce any chunking a real platform stream might use.
#[derive(Debug, Clone)]
pub struct MemoryProvider {
    resources: BTreeMap<String, Arc<[u8]>>,
    max_read: usize,
}

impl Default for MemoryProvider {
    fn default() -> Self {
        Self {
            resources: BTreeMap::new(),
            max_read: usize::MAX,
        }
    }
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit every read to `max_read` bytes (at least one).
    pub fn with_max_read(mut self, max_read: usize) -> Self {
        self.max_read = max_read.max(1);
        self
    }

    pub fn with_resource<N, B>(mut self, name: N, bytes: B) -> Self
    where
        N: Into<String>,
        B: AsRef<[u8]>,
    {
        self.insert(name, bytes);
        self
    }

    pub fn insert<N, B>(&mut self, name: N, bytes: B)
    where
        N: Into<String>,
        B: AsRef<[u8]>,
    {
        self.resources.insert(name.into(), Arc::from(bytes.as_ref()));
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.resources.remove(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }
}

impl ResourceProvider for MemoryProvider {
    type Stream = MemoryStream;

    fn open(&self, name: &str) -> io::Result<MemoryStream> {
        let data = self.resources.get(name).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not in the bundle", name),
            )
        })?;
        Ok(MemoryStream {
            data,
            position: 0,
            max_read: self.max_read,
        })
    }
}

#[derive(Debug)]
pub struct MemoryStream {
    data: Arc<[u8]>,
    position: usize,
    max_read: usize,
}

impl Read for MemoryStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.data[self.position..];
        let count = remaining.len().min(buf.len()).min(self.max_read);
        buf[..count].copy_from_slice(&remaining[..count]);
        self.position += count;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_are_capped() {
        let provider = MemoryProvider::new()
            .with_max_read(3)
            .with_resource("a.txt", b"abcdefgh");
        let mut stream = provider.open("a.txt").unwrap();
        let mut buf = [0u8; 16];

        assert_eq!(stream.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], b"abc");
        assert_eq!(stream.read(&mut buf).unwrap(), 3);
        assert_eq!(stream.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"gh");
        assert_eq!(stream.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn streams_are_independent() {
        let provider = MemoryProvider::new().with_resource("a.txt", b"abc");
        let mut first = provider.open("a.txt").unwrap();
        let mut second = provider.open("a.txt").unwrap();

        let mut content = String::new();
        first.read_to_string(&mut content).unwrap();
        assert_eq!(content, "abc");
        content.clear();
        second.read_to_string(&mut content).unwrap();
        assert_eq!(content, "abc");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let mut provider = MemoryProvider::new().with_resource("a.txt", b"");
        assert!(provider.remove("a.txt"));
        assert_eq!(provider.names().count(), 0);

        let err = provider.open("a.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
