use core::future::Future;

use bytes::Bytes;
use course_assignment_frontend::drag::AjaxRequest;
use http_body_util::{BodyExt as _, Full};
use hyper::header::{CONTENT_TYPE, HOST};
use hyper::{Request, StatusCode, Uri};
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;
use tracing::{debug, error};

use crate::error::ClientError;

pub const HX_REQUEST: &str = "HX-Request";
pub const HX_TARGET: &str = "HX-Target";
const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AjaxResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Carries an [`AjaxRequest`] to the server and returns the markup it
/// answered with.
pub trait AssignmentTransport {
    fn send(
        &self,
        request: &AjaxRequest,
    ) -> impl Future<Output = Result<AjaxResponse, ClientError>> + Send;
}

/// Plain HTTP/1.1, one connection per request.
#[derive(Debug, Clone)]
pub struct HyperTransport {
    host: String,
    port: u16,
    authority: String,
    path_prefix: String,
}

impl HyperTransport {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base: Uri = base_url.parse()?;
        let host = base
            .host()
            .ok_or_else(|| ClientError::MissingHost(base_url.to_owned()))?
            .to_owned();
        match base.scheme_str() {
            None | Some("http") => {}
            Some(scheme) => return Err(ClientError::UnsupportedScheme(scheme.to_owned())),
        }
        let port = base.port_u16().unwrap_or(80);
        let authority = base
            .authority()
            .map_or_else(|| host.clone(), |authority| authority.as_str().to_owned());
        let path_prefix = base.path().trim_end_matches('/').to_owned();

        Ok(Self {
            host,
            port,
            authority,
            path_prefix,
        })
    }

    fn path_for(&self, path: &str) -> String {
        format!("{}{path}", self.path_prefix)
    }
}

impl AssignmentTransport for HyperTransport {
    async fn send(&self, request: &AjaxRequest) -> Result<AjaxResponse, ClientError> {
        let body = request.values.encode()?;
        let path = self.path_for(&request.path);
        debug!(method = %request.method, path = %path, body = %body, "sending");

        let stream = TcpStream::connect((self.host.as_str(), self.port)).await?;
        let io = TokioIo::new(stream);

        let (mut sender, conn) = hyper::client::conn::http1::handshake(io).await?;
        tokio::task::spawn(async move {
            if let Err(err) = conn.await {
                error!("connection failed: {err:#}");
            }
        });

        let hyper_request = Request::builder()
            .method(request.method.clone())
            .uri(path)
            .header(HOST, self.authority.as_str())
            .header(CONTENT_TYPE, FORM_URLENCODED)
            .header(HX_REQUEST, "true")
            .header(HX_TARGET, request.target.trim_start_matches('#'))
            .body(Full::new(Bytes::from(body)))?;

        let response = sender.send_request(hyper_request).await?;
        let status = response.status();
        let body = response.into_body().collect().await?.to_bytes();

        Ok(AjaxResponse {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}
