use std::io::{self, Read};

use log::Level;

use crate::bytes::ResourceBytes;
use crate::errors::{ResourceUnavailable, Stage};
use crate::provider::ResourceProvider;
use crate::sink::{DiagnosticSink, LogSink};
use crate::{CHUNK_SIZE, DEFAULT_TAG, MAX_CHUNK_SIZE};

/// Copies whole resources out of a [`ResourceProvider`].
///
/// Every load is a single synchronous attempt: the stream is opened,
/// drained through a fixed-size chunk and dropped before returning,
/// whatever the outcome. The reader keeps no state between loads, so one
/// instance can serve any number of threads at once.
pub struct ResourceReader<P, S = LogSink> {
    provider: P,
    sink: S,
    tag: String,
    chunk_size: usize,
}

impl<P: ResourceProvider> ResourceReader<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            sink: LogSink,
            tag: DEFAULT_TAG.to_owned(),
            chunk_size: CHUNK_SIZE,
        }
    }
}

impl<P: ResourceProvider, S: DiagnosticSink> ResourceReader<P, S> {
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> ResourceReader<P, T> {
        ResourceReader {
            provider: self.provider,
            sink,
            tag: self.tag,
            chunk_size: self.chunk_size,
        }
    }

    pub fn with_tag<T: Into<String>>(mut self, tag: T) -> Self {
        self.tag = tag.into();
        self
    }

    /// Size of the intermediate chunk, clamped to `1..=MAX_CHUNK_SIZE`.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.clamp(1, MAX_CHUNK_SIZE);
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Load the whole resource, or `None` if it is unavailable for any
    /// reason. The cause is reported to the sink.
    pub fn load(&self, name: &str) -> Option<ResourceBytes> {
        self.try_load(name).ok()
    }

    pub fn try_load(
        &self,
        name: &str,
    ) -> Result<ResourceBytes, ResourceUnavailable> {
        self.try_load_with_progress(name, |_| {})
    }

    /// Like [`try_load`](Self::try_load), calling `progress` with the
    /// running byte total after each chunk is appended.
    pub fn try_load_with_progress<F>(
        &self,
        name: &str,
        progress: F,
    ) -> Result<ResourceBytes, ResourceUnavailable>
    where
        F: FnMut(usize),
    {
        self.sink
            .record(Level::Debug, &self.tag, &format!("Reading {}", name));

        self.copy(name, progress).map_err(|err| {
            self.sink.record(Level::Error, &self.tag, &err.to_string());
            err
        })
    }

    fn copy<F>(
        &self,
        name: &str,
        mut progress: F,
    ) -> Result<ResourceBytes, ResourceUnavailable>
    where
        F: FnMut(usize),
    {
        let mut stream = self
            .provider
            .open(name)
            .map_err(|e| ResourceUnavailable::new(name, Stage::Open, e))?;

        let mut buffer = Vec::new();
        let mut chunk = vec![0u8; self.chunk_size];
        loop {
            let count = match stream.read(&mut chunk) {
                Ok(0) => break,
                Ok(count) => count,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(ResourceUnavailable::new(name, Stage::Read, e))
                }
            };
            buffer.extend_from_slice(&chunk[..count]);
            progress(buffer.len());
        }

        log::trace!("{} bytes of {} have been read", buffer.len(), name);
        Ok(ResourceBytes::from(buffer))
    }
}
