//! Sends the requests produced by the assignment page and swaps the
//! server's markup back into the page.

pub mod dispatch;
pub mod error;
pub mod telemetry;
pub mod transport;

pub use dispatch::Dispatcher;
pub use error::ClientError;
pub use transport::{AjaxResponse, AssignmentTransport, HyperTransport};
