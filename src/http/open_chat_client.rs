//! High-level client for the open-chat web API.
//!
//! [`OpenChatClient`] exposes one method per endpoint, grouped into the
//! `c/` (channel) and `profile/` namespaces. All methods go through the same
//! dispatcher: headers are decorated with session-or-basic fallback, the
//! request is sent, and the JSON response is either returned verbatim or
//! mapped into a typed structure.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::Method;
use url::Url;

use crate::models::{LinkId, LinkReactionType, OpenSearchType, PostId};
use crate::util::stringify_lossless;

use super::error::HttpError;
use super::headers::{
    BasicHeaderDecorator, CredentialProvider, FallbackHeaderChain, HeaderDecorator,
    SessionHeaderDecorator,
};
use super::http_client::{FormBody, HttpClient};
use super::types::{
    OpenPostListStruct, OpenPostReactStruct, OpenPostSearchStruct, OpenPresetStruct,
    OpenRecommendStruct, OpenSearchStruct, OpenStruct,
};
use super::utils::{channel_api_path, encode_component, profile_api_path};

/// The platform's open-chat API endpoint.
const OPEN_CHAT_API_BASE: &str = "https://open.kakao.com";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration.
///
/// The basic header decorator lives here as a plain value: it is stateless,
/// so one instance serves every request the client ever makes.
pub struct ClientConfig {
    /// Base URL of the API. Overridable for testing against a local server.
    pub base_url: Url,
    /// Transport timeout per request.
    pub timeout: Duration,
    /// Transport-level retries for transient failures; 0 disables them.
    pub max_retries: u32,
    /// Baseline client-identification headers.
    pub basic_headers: BasicHeaderDecorator,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(OPEN_CHAT_API_BASE).expect("base url constant is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: 0,
            basic_headers: BasicHeaderDecorator::default(),
        }
    }
}

/// Typed client for channel discovery, post management, reactions and search.
///
/// Each method performs a single request-response exchange; there is no
/// retry loop or shared mutable state, so one client can serve any number of
/// concurrent tasks.
///
/// # Example
///
/// ```rust,no_run
/// use openchat_client::{LinkId, OpenChatClient};
///
/// # async fn example() -> Result<(), anyhow::Error> {
/// let client = OpenChatClient::new_anonymous()?;
/// let posts = client.request_post_list(LinkId(18316233771549826)).await?;
/// println!("{} posts", posts.posts.len());
/// # Ok(())
/// # }
/// ```
pub struct OpenChatClient {
    http_client: HttpClient,
}

impl OpenChatClient {
    /// Creates a client that authenticates through `provider`, degrading to
    /// basic headers whenever the provider fails.
    pub fn new(provider: Arc<dyn CredentialProvider>) -> Result<Self, anyhow::Error> {
        Self::with_config(ClientConfig::default(), Some(provider))
    }

    /// Creates a client without a session; every request carries baseline
    /// headers only. Session-gated endpoints will report failure statuses.
    pub fn new_anonymous() -> Result<Self, anyhow::Error> {
        Self::with_config(ClientConfig::default(), None)
    }

    /// Creates a client with explicit configuration.
    pub fn with_config(
        config: ClientConfig,
        provider: Option<Arc<dyn CredentialProvider>>,
    ) -> Result<Self, anyhow::Error> {
        let basic = config.basic_headers;
        let primary: Box<dyn HeaderDecorator> = match provider {
            Some(provider) => Box::new(SessionHeaderDecorator::new(basic.clone(), provider)),
            None => Box::new(basic.clone()),
        };
        let headers = FallbackHeaderChain::new(primary, Box::new(basic));

        let http_client =
            HttpClient::with_config(config.base_url, headers, config.max_retries, config.timeout)?;
        Ok(Self { http_client })
    }

    /// Returns the configured API address.
    pub fn get_address(&self) -> String {
        self.http_client.base_url().to_string()
    }

    /// Fetches the cover image presets offered for new channels.
    pub async fn get_cover_preset(&self) -> Result<OpenPresetStruct, HttpError> {
        self.http_client
            .request_mapped(Method::GET, &channel_api_path("link/image/preset"), None)
            .await
    }

    /// Fetches the recommended channel listing.
    pub async fn request_recommend(&self) -> Result<OpenRecommendStruct, HttpError> {
        self.http_client
            .request_mapped(Method::GET, &channel_api_path("recommend"), None)
            .await
    }

    /// Fetches the recommended post feed, undecoded.
    pub async fn request_recommend_post_list(&self) -> Result<serde_json::Value, HttpError> {
        self.http_client
            .request(Method::GET, &profile_api_path("recommend"), None)
            .await
    }

    /// Fetches the new-reaction markers for the session user, undecoded.
    pub async fn request_new_reaction_list(&self) -> Result<serde_json::Value, HttpError> {
        self.http_client
            .request(Method::GET, &profile_api_path("reacts/newMark"), None)
            .await
    }

    /// Marks a channel as recommendable in search.
    pub async fn set_recommend(&self, link_id: LinkId) -> Result<OpenStruct, HttpError> {
        let path = channel_api_path(&format!(
            "search/recommend?li={}",
            encode_component(&link_id.to_string())
        ));
        self.http_client.request_mapped(Method::GET, &path, None).await
    }

    /// Excludes a channel from search recommendations.
    pub async fn exclude_recommend(&self, link_id: LinkId) -> Result<OpenStruct, HttpError> {
        let path = channel_api_path(&format!(
            "search/exclude?li={}",
            encode_component(&link_id.to_string())
        ));
        self.http_client.request_mapped(Method::GET, &path, None).await
    }

    /// Fetches every post of a channel's feed.
    pub async fn request_post_list(&self, link_id: LinkId) -> Result<OpenPostListStruct, HttpError> {
        let path = profile_api_path(&format!(
            "{}/posts/all",
            encode_component(&link_id.to_string())
        ));
        self.http_client.request_mapped(Method::GET, &path, None).await
    }

    /// Fetches a single post by ID, undecoded.
    pub async fn get_post_from_id(
        &self,
        link_id: LinkId,
        post_id: PostId,
        user_link_id: LinkId,
    ) -> Result<serde_json::Value, HttpError> {
        let path = profile_api_path(&format!(
            "{}/posts/{}?actorLinkId={}",
            encode_component(&link_id.to_string()),
            encode_component(&post_id.to_string()),
            encode_component(&user_link_id.to_string())
        ));
        self.http_client.request(Method::GET, &path, None).await
    }

    /// Fetches a single post by its share URL, undecoded.
    pub async fn get_post_from_url(
        &self,
        post_url: &str,
        user_link_id: LinkId,
    ) -> Result<serde_json::Value, HttpError> {
        let path = profile_api_path(&format!(
            "post?postUrl={}&actorLinkId={}",
            encode_component(post_url),
            encode_component(&user_link_id.to_string())
        ));
        self.http_client.request(Method::GET, &path, None).await
    }

    /// Creates a post on the user's profile link.
    ///
    /// `post_data_list`, `scrap_data` and `share_channel_list` are embedded
    /// into the form as lossless JSON strings, matching the platform's
    /// convention for structured form fields.
    pub async fn create_post(
        &self,
        user_link_id: LinkId,
        description: &str,
        post_data_list: &[serde_json::Value],
        scrap_data: &serde_json::Value,
        share_channel_list: &[LinkId],
    ) -> Result<serde_json::Value, HttpError> {
        debug!(user_link_id:% = user_link_id; "HTTP: Creating post");

        let form: FormBody = vec![
            ("description", description.to_string()),
            ("postDatas", stringify_lossless(post_data_list)?),
            ("scrapData", stringify_lossless(scrap_data)?),
            ("chatIds", stringify_lossless(share_channel_list)?),
        ];

        let path = profile_api_path(&format!(
            "{}/posts",
            encode_component(&user_link_id.to_string())
        ));
        self.http_client.request(Method::POST, &path, Some(&form)).await
    }

    /// Updates a post's description and scrap metadata.
    pub async fn update_post(
        &self,
        user_link_id: LinkId,
        post_id: PostId,
        description: &str,
        scrap_data: &serde_json::Value,
    ) -> Result<serde_json::Value, HttpError> {
        debug!(user_link_id:% = user_link_id, post_id:% = post_id; "HTTP: Updating post");

        let form: FormBody = vec![
            ("description", description.to_string()),
            ("scrapData", stringify_lossless(scrap_data)?),
        ];

        let path = profile_api_path(&format!(
            "{}/posts/{}",
            encode_component(&user_link_id.to_string()),
            encode_component(&post_id.to_string())
        ));
        self.http_client.request(Method::PUT, &path, Some(&form)).await
    }

    /// Deletes a post from the user's profile link.
    pub async fn delete_post(
        &self,
        user_link_id: LinkId,
        post_id: PostId,
    ) -> Result<serde_json::Value, HttpError> {
        debug!(user_link_id:% = user_link_id, post_id:% = post_id; "HTTP: Deleting post");

        let path = profile_api_path(&format!(
            "{}/posts/{}",
            encode_component(&user_link_id.to_string()),
            encode_component(&post_id.to_string())
        ));
        self.http_client.request(Method::DELETE, &path, None).await
    }

    /// Adds a normal reaction to a post.
    pub async fn react_to_post(
        &self,
        link_id: LinkId,
        post_id: PostId,
        user_link_id: LinkId,
    ) -> Result<OpenPostReactStruct, HttpError> {
        let path = profile_api_path(&format!(
            "{}/reacts/{}?type={}&actorLinkId={}",
            encode_component(&link_id.to_string()),
            encode_component(&post_id.to_string()),
            LinkReactionType::Normal.as_query(),
            encode_component(&user_link_id.to_string())
        ));
        self.http_client.request_mapped(Method::POST, &path, None).await
    }

    /// Removes the user's reaction from a post.
    pub async fn unreact_post(
        &self,
        link_id: LinkId,
        post_id: PostId,
        user_link_id: LinkId,
    ) -> Result<OpenStruct, HttpError> {
        let path = profile_api_path(&format!(
            "{}/reacts/{}?actorLinkId={}",
            encode_component(&link_id.to_string()),
            encode_component(&post_id.to_string()),
            encode_component(&user_link_id.to_string())
        ));
        self.http_client.request_mapped(Method::DELETE, &path, None).await
    }

    /// Runs a unified channel search.
    ///
    /// `search_type` of `None` omits the `resultType` parameter entirely, in
    /// which case the platform returns all result kinds.
    pub async fn search_all(
        &self,
        query: &str,
        search_type: Option<OpenSearchType>,
        page: u32,
        except_lock: bool,
        count: u32,
    ) -> Result<OpenSearchStruct, HttpError> {
        let mut queries = format!(
            "q={}&s=l&p={}&c={}&exceptLock={}",
            encode_component(query),
            page,
            count,
            if except_lock { "Y" } else { "N" }
        );
        if let Some(search_type) = search_type {
            queries.push_str(&format!("&resultType={search_type}"));
        }

        debug!(query = query; "HTTP: Unified search");

        let path = channel_api_path(&format!("search/unified?{queries}"));
        self.http_client.request_mapped(Method::GET, &path, None).await
    }

    /// Runs a post search.
    pub async fn search_post(
        &self,
        query: &str,
        page: u32,
        count: u32,
    ) -> Result<OpenPostSearchStruct, HttpError> {
        let path = channel_api_path(&format!(
            "search/post?q={}&p={}&c={}",
            encode_component(query),
            page,
            count
        ));
        self.http_client.request_mapped(Method::GET, &path, None).await
    }
}
