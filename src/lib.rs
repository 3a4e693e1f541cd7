pub mod http;
pub mod models;
pub mod util;

pub use crate::http::{
    BasicHeaderDecorator, ClientConfig, CredentialProvider, HttpError, OpenChatClient,
    SessionCredentials,
};
pub use crate::models::{LinkId, OpenSearchType, PostId};
