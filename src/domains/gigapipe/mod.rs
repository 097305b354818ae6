//! Gigapipe query pipeline.
//!
//! Every tool invocation goes through the same stages:
//!
//! 1. `backend` - resolve host and credentials, pick http or https
//! 2. `request` - validate arguments and build the upstream URL
//! 3. `client` - send the request with a timeout and cancellation
//! 4. `codec` - decode the JSON object body and re-encode it
//!
//! `dispatch` ties the stages together for any [`OperationSpec`].

pub mod backend;
pub mod client;
pub mod codec;
pub mod dispatch;
mod error;
pub mod operation;
pub mod request;

pub use backend::{BackendConfig, Credentials, Scheme};
pub use client::{HttpExecutor, REQUEST_TIMEOUT, Upstream};
pub use dispatch::{ConfigSource, Dispatcher};
pub use error::{ErrorKind, QueryError, QueryResult};
pub use operation::{ArgSpec, Arguments, Backend, OperationSpec};
pub use request::UpstreamRequest;
