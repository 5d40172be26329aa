use course_assignment_frontend::drag::AjaxRequest;
use course_assignment_frontend::page::Page;
use hyper::StatusCode;
use tracing::{debug, error, warn};

use crate::transport::{AjaxResponse, AssignmentTransport};

/// Sends requests and swaps successful responses into the page. Failures are
/// logged and otherwise ignored, the page keeps its previous markup.
#[derive(Debug, Clone)]
pub struct Dispatcher<T> {
    transport: T,
}

impl<T: AssignmentTransport> Dispatcher<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn dispatch(&self, page: &mut Page, request: &AjaxRequest) {
        match self.transport.send(request).await {
            Ok(response) => {
                apply_response(page, request, response);
            }
            Err(err) => {
                error!(region = %request.target, "assignment request failed: {err}");
            }
        }
    }
}

/// Returns whether the page changed.
pub fn apply_response(page: &mut Page, request: &AjaxRequest, response: AjaxResponse) -> bool {
    if response.status == StatusCode::NO_CONTENT {
        debug!(region = %request.target, "no content, nothing to swap");
        return false;
    }
    if !response.status.is_success() {
        warn!(
            region = %request.target,
            status = %response.status,
            "server rejected assignment"
        );
        return false;
    }
    page.swap(&request.target, response.body, request.swap)
}
