use std::collections::HashMap;
use std::io::Write;

use actix_multipart::{Field, Multipart};
use actix_web::error::PayloadError;
use actix_web::http::header::{self, HeaderMap};
use actix_web::web::Bytes;
use formdata::{FileHandle, FormData};
use futures_util::{Stream, StreamExt};
use mime::Mime;
use tempfile::NamedTempFile;

use crate::config::IngressConfig;
use crate::error::IngressError;

/// Decodes a multipart/form-data body with [`IngressConfig::default`].
pub async fn parse<S>(headers: &HeaderMap, payload: S) -> Result<FormData, IngressError>
where
    S: Stream<Item = Result<Bytes, PayloadError>> + 'static,
{
    parse_with(headers, payload, &IngressConfig::default()).await
}

/// Decodes a multipart/form-data body into a [`FormData`].
///
/// Parts carrying a non-empty filename become file handles, every other part
/// a UTF-8 value. Up to `max_memory` bytes of file content stay in memory; the rest
/// is written to temporary files that live as long as the returned form.
pub async fn parse_with<S>(
    headers: &HeaderMap,
    payload: S,
    config: &IngressConfig,
) -> Result<FormData, IngressError>
where
    S: Stream<Item = Result<Bytes, PayloadError>> + 'static,
{
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if !content_type.starts_with("multipart/form-data") {
        tracing::warn!(content_type, "rejecting request that is not multipart/form-data");
        return Err(IngressError::NotMultipart);
    }

    let mut multipart = Multipart::new(headers, payload);
    let mut decoder = Decoder::new(config);

    while let Some(field) = multipart.next().await {
        decoder.read_field(field?).await?;
    }

    Ok(decoder.finish())
}

/// Last path component of a client-supplied filename, so `../../etc/passwd`
/// and `C:\Users\me\cv.pdf` keep only `passwd` and `cv.pdf`.
fn base_name(filename: &str) -> &str {
    let is_separator = |c: char| c == '/' || c == '\\';
    filename
        .trim_end_matches(is_separator)
        .rsplit(is_separator)
        .next()
        .unwrap_or_default()
}

struct Decoder<'c> {
    config: &'c IngressConfig,
    values: HashMap<String, Vec<String>>,
    files: HashMap<String, Vec<FileHandle>>,
    body_read: usize,
    memory_used: usize,
}

impl<'c> Decoder<'c> {
    fn new(config: &'c IngressConfig) -> Self {
        Self {
            config,
            values: HashMap::new(),
            files: HashMap::new(),
            body_read: 0,
            memory_used: 0,
        }
    }

    fn account(&mut self, len: usize) -> Result<(), IngressError> {
        self.body_read += len;
        if self.body_read > self.config.max_body_size {
            return Err(IngressError::Decode(format!(
                "body exceeds {} bytes",
                self.config.max_body_size
            )));
        }
        Ok(())
    }

    async fn read_field(&mut self, mut field: Field) -> Result<(), IngressError> {
        let disposition = field.content_disposition();
        let name = disposition
            .and_then(|cd| cd.get_name())
            .map(str::to_owned)
            .ok_or_else(|| IngressError::Decode("part without a field name".to_string()))?;
        let filename = disposition
            .and_then(|cd| cd.get_filename())
            .map(base_name)
            .filter(|f| !f.is_empty())
            .map(str::to_owned);

        match filename {
            Some(filename) => {
                let content_type = field.content_type().cloned();
                let handle = self.read_file(&mut field, filename, content_type).await?;
                tracing::debug!(
                    field = %name,
                    filename = handle.filename(),
                    size = handle.size(),
                    on_disk = handle.is_on_disk(),
                    "decoded file part"
                );
                self.files.entry(name).or_default().push(handle);
            }
            None => {
                let mut buf = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk?;
                    self.account(chunk.len())?;
                    buf.extend_from_slice(&chunk);
                }
                let value = String::from_utf8(buf).map_err(|_| {
                    IngressError::Decode(format!("field '{name}' is not valid UTF-8"))
                })?;
                tracing::debug!(field = %name, len = value.len(), "decoded value part");
                self.values.entry(name).or_default().push(value);
            }
        }
        Ok(())
    }

    async fn read_file(
        &mut self,
        field: &mut Field,
        filename: String,
        content_type: Option<Mime>,
    ) -> Result<FileHandle, IngressError> {
        let mut buf: Vec<u8> = Vec::new();
        let mut spill: Option<NamedTempFile> = None;
        let mut size: u64 = 0;

        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            self.account(chunk.len())?;
            size += chunk.len() as u64;

            if let Some(file) = spill.as_mut() {
                file.write_all(&chunk)?;
                continue;
            }

            if self.memory_used + buf.len() + chunk.len() > self.config.max_memory {
                let mut file = NamedTempFile::new()?;
                tracing::debug!(
                    filename = %filename,
                    path = %file.path().display(),
                    "spilling file part to disk"
                );
                file.write_all(&buf)?;
                file.write_all(&chunk)?;
                buf = Vec::new();
                spill = Some(file);
            } else {
                buf.extend_from_slice(&chunk);
            }
        }

        match spill {
            Some(mut file) => {
                file.flush()?;
                Ok(FileHandle::on_disk(filename, content_type, file, size))
            }
            None => {
                self.memory_used += buf.len();
                Ok(FileHandle::in_memory(filename, content_type, buf))
            }
        }
    }

    fn finish(self) -> FormData {
        tracing::info!(
            values = self.values.len(),
            files = self.files.len(),
            bytes = self.body_read,
            "decoded multipart form"
        );
        FormData::new(self.values, self.files)
    }
}
