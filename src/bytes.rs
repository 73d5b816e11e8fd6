use std::ops::Deref;
use std::string::FromUtf8Error;

/// Full contents of a loaded resource. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ResourceBytes(Vec<u8>);

impl ResourceBytes {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn into_string(self) -> Result<String, FromUtf8Error> {
        String::from_utf8(self.0)
    }
}

impl From<Vec<u8>> for ResourceBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<ResourceBytes> for Vec<u8> {
    fn from(bytes: ResourceBytes) -> Self {
        bytes.0
    }
}

impl Deref for ResourceBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ResourceBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<[u8]> for ResourceBytes {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<&[u8]> for ResourceBytes {
    fn eq(&self, other: &&[u8]) -> bool {
        self.0 == *other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for ResourceBytes {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.0 == *other
    }
}
