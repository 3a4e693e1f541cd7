//! HTTP client module for the open-chat web API.
//!
//! This module contains the full request/response pipeline used to talk to
//! the platform's open-chat endpoints:
//!
//! - [`OpenChatClient`] - high-level client exposing one method per endpoint
//! - [`HttpError`] - error taxonomy for HTTP operations
//! - Header decoration ([`BasicHeaderDecorator`], [`SessionHeaderDecorator`],
//!   [`FallbackHeaderChain`]) deciding what authentication headers each
//!   outgoing request carries
//! - Response types ([`OpenStruct`], [`OpenSearchStruct`], [`OpenPostListStruct`],
//!   and friends) for deserializing endpoint responses
//!
//! # Authentication
//!
//! The API surface is a mix of public (browsable) and session-gated
//! operations. Rather than branching per endpoint, every request first tries
//! to attach session headers and silently degrades to baseline
//! client-identification headers when no usable session exists. See
//! [`FallbackHeaderChain`] for the exact semantics.
//!
//! # Example
//!
//! ```rust,no_run
//! use openchat_client::OpenChatClient;
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! // Anonymous client: public endpoints only get baseline headers.
//! let client = OpenChatClient::new_anonymous()?;
//!
//! let results = client.search_all("rust", None, 1, false, 30).await?;
//! for item in results.items {
//!     println!("{} ({} members)", item.link_name, item.member_count);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod headers;
mod http_client;
mod open_chat_client;
mod types;
mod utils;

pub use error::{AuthError, HttpError};
pub use headers::{
    BasicHeaderDecorator, CredentialProvider, FallbackHeaderChain, HeaderDecorator,
    SessionCredentials, SessionHeaderDecorator,
};
pub use open_chat_client::{ClientConfig, OpenChatClient};
pub use types::{
    OpenPostListStruct, OpenPostReactStruct, OpenPostSearchStruct, OpenPostStruct,
    OpenPresetStruct, OpenRecommendStruct, OpenSearchLink, OpenSearchStruct, OpenStruct,
    RecommendedLink, STATUS_SUCCESS,
};
