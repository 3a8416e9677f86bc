//! Request body stream.

use std::fmt;
use std::io::{self, Cursor, Read};

/// A request body: any byte stream that can be read once.
///
/// The stream itself carries no rewind capability. Readers that need to
/// leave the body intact for later consumers must buffer it and install
/// a replacement with [`Body::from_bytes`].
pub struct Body {
    reader: Box<dyn Read + Send>,
}

impl Body {
    /// Wrap an arbitrary reader.
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self {
            reader: Box::new(reader),
        }
    }

    /// A body over an in-memory buffer, readable from the start.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::from_reader(Cursor::new(bytes.into()))
    }

    /// A present but zero-length body.
    pub fn empty() -> Self {
        Self::from_bytes(Vec::new())
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body").finish_non_exhaustive()
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Self::from_bytes(s.into_bytes())
    }
}

impl From<&str> for Body {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes().to_vec())
    }
}
