mod caller;
mod client;
mod config;
mod connect;
mod errors;
mod locator;
mod retriever;
pub mod types;
pub use self::caller::Caller;
pub use self::client::HttpClient;
pub use self::config::{ConnectionConfig, Credentials};
pub use self::connect::{ConnectedTc, RemoteTc};
pub use self::errors::Error;
pub use self::locator::{
    BuildHaving, BuildInclude, CountBuilder, Having, Locator, ParameterHaving, ParameterValues,
    ProjectHaving, QueueHaving,
};
pub use self::retriever::{builds_path, BuildsRetriever, ProjectPropertySetter};
