//! Descriptor-driven operation dispatch
//!
//! Instead of one hand-written command per API call, every operation is a
//! row in [`registry`] and runs through [`dispatcher::dispatch`]:
//! [`builder`] → [`invoker`] → [`projector`].

pub mod builder;
pub mod context;
pub mod descriptor;
pub mod dispatcher;
pub mod invoker;
pub mod path_extractor;
pub mod projector;
pub mod registry;

pub use builder::{build_request, PreparedRequest};
pub use context::{InvocationContext, ParamValue};
pub use descriptor::{HttpMethod, Location, OperationDescriptor, ParamKind, ParamSpec};
pub use dispatcher::dispatch;
pub use invoker::{invoke, ServiceClient};
pub use projector::{project, Selector};
pub use registry::{find_operation, operations};

/// Result of an invocation that may be cancelled
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Completed(T),
    Cancelled,
}
