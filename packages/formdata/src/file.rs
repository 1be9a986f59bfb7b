use std::io::{self, Cursor, Read};

use mime::Mime;
use tempfile::NamedTempFile;

/// Where the bytes of an uploaded file live.
#[derive(Debug)]
pub enum FileContent {
    Memory(Vec<u8>),
    /// Spilled to disk; the file is removed when the handle is dropped.
    Disk(NamedTempFile),
}

/// A single file attachment submitted under a field name.
#[derive(Debug)]
pub struct FileHandle {
    filename: String,
    content_type: Option<Mime>,
    size: u64,
    content: FileContent,
}

impl FileHandle {
    pub fn in_memory(filename: impl Into<String>, content_type: Option<Mime>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            size: bytes.len() as u64,
            content: FileContent::Memory(bytes),
        }
    }

    pub fn on_disk(
        filename: impl Into<String>,
        content_type: Option<Mime>,
        file: NamedTempFile,
        size: u64,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            size,
            content: FileContent::Disk(file),
        }
    }

    /// The filename sent by the client, without directory components.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> Option<&Mime> {
        self.content_type.as_ref()
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn is_on_disk(&self) -> bool {
        matches!(self.content, FileContent::Disk(_))
    }

    /// Opens a reader positioned at the start of the content. Each call
    /// returns an independent reader.
    pub fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        match &self.content {
            FileContent::Memory(bytes) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
            FileContent::Disk(file) => Ok(Box::new(file.reopen()?)),
        }
    }

    pub fn read_to_vec(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.open()?.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// Read-only view over the files submitted under one field name.
///
/// Out-of-range access returns `None` instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormFile<'a>(&'a [FileHandle]);

impl<'a> FormFile<'a> {
    pub fn new(files: &'a [FileHandle]) -> Self {
        Self(files)
    }

    pub fn at(&self, index: isize) -> Option<&'a FileHandle> {
        usize::try_from(index).ok().and_then(|i| self.0.get(i))
    }

    pub fn first(&self) -> Option<&'a FileHandle> {
        self.at(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a FileHandle> + 'a {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &'a [FileHandle] {
        self.0
    }
}
