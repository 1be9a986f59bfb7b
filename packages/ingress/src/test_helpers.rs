use actix_web::error::PayloadError;
use actix_web::http::header::{self, HeaderMap, HeaderValue};
use actix_web::web::Bytes;
use futures_util::{stream, Stream};

pub const BOUNDARY: &str = "formcheck-test-boundary";

pub struct Part {
    name: String,
    filename: Option<String>,
    content: Vec<u8>,
}

impl Part {
    pub fn value(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            filename: None,
            content: value.as_bytes().to_vec(),
        }
    }

    pub fn file(name: &str, filename: &str, content: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            filename: Some(filename.to_string()),
            content: content.to_vec(),
        }
    }

    pub fn encode(parts: &[Part]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match &part.filename {
                Some(filename) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                             Content-Type: application/octet-stream\r\n\r\n",
                            part.name, filename
                        )
                        .as_bytes(),
                    );
                }
                None => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                            part.name
                        )
                        .as_bytes(),
                    );
                }
            }
            body.extend_from_slice(&part.content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }
}

pub fn multipart_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("multipart/form-data; boundary=formcheck-test-boundary"),
    );
    headers
}

pub fn body_stream(body: Vec<u8>) -> impl Stream<Item = Result<Bytes, PayloadError>> + 'static {
    stream::once(async move { Ok::<_, PayloadError>(Bytes::from(body)) })
}

pub fn chunked_stream(
    body: Vec<u8>,
    chunk_size: usize,
) -> impl Stream<Item = Result<Bytes, PayloadError>> + 'static {
    let chunks: Vec<Result<Bytes, PayloadError>> = body
        .chunks(chunk_size)
        .map(|chunk| Ok(Bytes::copy_from_slice(chunk)))
        .collect();
    stream::iter(chunks)
}
