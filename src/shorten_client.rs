use crate::config::ServiceConfig;
use crate::submission::{CreateRequest, CreateResponse, ShortenTransport, TransportError};
use curl::Error as CurlError;
use curl::easy::{Easy2, Handler, List, WriteError};
use url::Url;

/// Responses are capped well above anything the service legitimately sends.
const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Default)]
struct BodyBuffer {
    data: Vec<u8>,
    limit: usize,
    truncated: bool,
}

impl BodyBuffer {
    fn reset(&mut self, limit: usize) {
        self.data.clear();
        self.limit = limit;
        self.truncated = false;
    }
}

impl Handler for BodyBuffer {
    fn write(&mut self, data: &[u8]) -> Result<usize, WriteError> {
        let remaining = self.limit.saturating_sub(self.data.len());
        let take = data.len().min(remaining);
        self.data.extend_from_slice(&data[..take]);
        if take < data.len() {
            self.truncated = true;
        }
        Ok(data.len())
    }
}

/// curl-backed transport for the shortening service. One handle per worker;
/// options are re-applied per request after a reset.
pub struct ShortenClient {
    easy: Easy2<BodyBuffer>,
    config: ServiceConfig,
}

impl ShortenClient {
    pub fn new(config: ServiceConfig) -> Result<Self, CurlError> {
        let mut easy = Easy2::new(BodyBuffer::default());
        easy.follow_location(false)?;
        easy.accept_encoding("")?;
        Ok(Self { easy, config })
    }

    fn prepare(&mut self, url: &str) -> Result<(), CurlError> {
        self.easy.reset();
        self.easy.get_mut().reset(MAX_BODY_BYTES);
        self.easy.follow_location(false)?;
        self.easy.accept_encoding("")?;
        self.easy.url(url)?;
        self.easy.timeout(self.config.timeout)?;
        Ok(())
    }

    fn send_create(&mut self, url: &str, body: &[u8]) -> Result<u16, CurlError> {
        self.prepare(url)?;
        self.easy.post(true)?;
        let mut headers = List::new();
        headers.append("Content-Type: application/json")?;
        self.easy.http_headers(headers)?;
        self.easy.post_fields_copy(body)?;
        self.easy.perform()?;
        Ok(self.easy.response_code()? as u16)
    }

    fn send_read(&mut self, url: &str) -> Result<u16, CurlError> {
        self.prepare(url)?;
        self.easy.get(true)?;
        self.easy.perform()?;
        Ok(self.easy.response_code()? as u16)
    }
}

impl ShortenTransport for ShortenClient {
    fn create(&mut self, long_url: &Url) -> Result<CreateResponse, TransportError> {
        let body = serde_json::to_vec(&CreateRequest {
            long_url: long_url.as_str(),
        })
        .map_err(|err| TransportError::Malformed(err.to_string()))?;

        let url = self.config.create_url();
        let status = self
            .send_create(&url, &body)
            .map_err(|err| map_curl_error(&err))?;

        // A non-success HTTP status is a classification input, not a thrown
        // error; the payload sentinel check downstream turns it into the
        // generic request failure.
        if status >= 400 {
            return Ok(CreateResponse {
                code: status,
                shortened_url: None,
            });
        }

        if self.easy.get_ref().truncated {
            return Err(TransportError::Malformed("response body truncated".to_string()));
        }
        serde_json::from_slice(&self.easy.get_ref().data)
            .map_err(|err| TransportError::Malformed(err.to_string()))
    }

    fn read(&mut self, alias: &str) -> Result<String, TransportError> {
        let url = self.config.read_url(alias);
        let status = self.send_read(&url).map_err(|err| map_curl_error(&err))?;

        if status >= 400 {
            return Err(TransportError::Protocol(format!("HTTP status {status}")));
        }

        if self.easy.get_ref().truncated {
            return Err(TransportError::Malformed("response body truncated".to_string()));
        }
        let body = String::from_utf8(self.easy.get_ref().data.clone())
            .map_err(|err| TransportError::Malformed(err.to_string()))?;
        Ok(body.trim().to_string())
    }
}

fn map_curl_error(err: &CurlError) -> TransportError {
    if err.is_operation_timedout() {
        return TransportError::Timeout;
    }

    let message = err.to_string();
    if err.is_couldnt_resolve_host() || err.is_couldnt_resolve_proxy() || err.is_couldnt_connect()
    {
        TransportError::Connect(message)
    } else if message.is_empty() {
        TransportError::Unknown
    } else {
        TransportError::Protocol(message)
    }
}
