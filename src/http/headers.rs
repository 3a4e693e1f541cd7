//! Header decoration for outgoing open-chat API requests.
//!
//! Every request gets its headers from a [`FallbackHeaderChain`]: the
//! session decorator is tried first and any failure degrades to the basic
//! decorator, so endpoint methods never need to know whether a session is
//! active.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use super::error::AuthError;

/// Platform identification header carried on every request.
const HEADER_AGENT: HeaderName = HeaderName::from_static("a");

const DEFAULT_AGENT: &str = "win32/3.2.3/ko";
const DEFAULT_USER_AGENT: &str = "KT/3.2.3 Wd/10.0 ko";
const DEFAULT_LANGUAGE: &str = "ko";

/// Fills a request header map prior to dispatch.
///
/// Implementations are stateless with respect to individual requests and may
/// be shared by any number of in-flight requests.
pub trait HeaderDecorator: Send + Sync {
    /// Populates `headers` in place. Partial fills on failure are permitted;
    /// callers combining decorators are responsible for discarding them.
    fn fill_header(&self, headers: &mut HeaderMap) -> Result<(), AuthError>;
}

/// Session credential material used to build the `Authorization` header.
#[derive(Debug, Clone)]
pub struct SessionCredentials {
    pub access_token: String,
    pub device_uuid: String,
}

/// Supplies session credentials for authenticated requests.
///
/// The session subsystem owns login and token refresh; this client only asks
/// it for the current credentials at dispatch time. Fails with [`AuthError`]
/// when no usable session context exists.
pub trait CredentialProvider: Send + Sync {
    fn credentials(&self) -> Result<SessionCredentials, AuthError>;
}

/// Stateless decorator filling baseline client-identification headers.
///
/// Carries no authentication claim, so filling never fails. One value is
/// constructed per client and shared across requests.
#[derive(Debug, Clone)]
pub struct BasicHeaderDecorator {
    agent: HeaderValue,
    user_agent: HeaderValue,
    language: HeaderValue,
}

impl Default for BasicHeaderDecorator {
    fn default() -> Self {
        Self {
            agent: HeaderValue::from_static(DEFAULT_AGENT),
            user_agent: HeaderValue::from_static(DEFAULT_USER_AGENT),
            language: HeaderValue::from_static(DEFAULT_LANGUAGE),
        }
    }
}

impl BasicHeaderDecorator {
    /// Creates a decorator with custom client identification values.
    ///
    /// # Errors
    ///
    /// Returns an error if any value contains characters that are not valid
    /// in an HTTP header.
    pub fn new(agent: &str, user_agent: &str, language: &str) -> Result<Self, anyhow::Error> {
        Ok(Self {
            agent: HeaderValue::from_str(agent)?,
            user_agent: HeaderValue::from_str(user_agent)?,
            language: HeaderValue::from_str(language)?,
        })
    }

    /// Fills baseline headers. Unlike [`HeaderDecorator::fill_header`] this
    /// cannot fail.
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(HEADER_AGENT, self.agent.clone());
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(ACCEPT_LANGUAGE, self.language.clone());
    }
}

impl HeaderDecorator for BasicHeaderDecorator {
    fn fill_header(&self, headers: &mut HeaderMap) -> Result<(), AuthError> {
        self.apply(headers);
        Ok(())
    }
}

/// Decorator filling baseline headers plus the session `Authorization`
/// header obtained from a [`CredentialProvider`].
pub struct SessionHeaderDecorator {
    basic: BasicHeaderDecorator,
    provider: Arc<dyn CredentialProvider>,
}

impl SessionHeaderDecorator {
    pub fn new(basic: BasicHeaderDecorator, provider: Arc<dyn CredentialProvider>) -> Self {
        Self { basic, provider }
    }
}

impl HeaderDecorator for SessionHeaderDecorator {
    fn fill_header(&self, headers: &mut HeaderMap) -> Result<(), AuthError> {
        self.basic.apply(headers);

        let credentials = self.provider.credentials()?;
        let authorization = format!("{}-{}", credentials.access_token, credentials.device_uuid);
        let value = HeaderValue::from_str(&authorization)
            .map_err(|e| AuthError::InvalidCredentials(e.to_string()))?;
        headers.insert(AUTHORIZATION, value);

        Ok(())
    }
}

/// Combines a primary and a fallback decorator.
///
/// The primary decorator is tried first. If it fails for any reason, the
/// header map is reset and the fallback fills it from scratch, so the result
/// is exactly what the fallback alone would produce; there is no partial
/// merge of a failed primary attempt. When the primary succeeds the fallback
/// is never invoked.
pub struct FallbackHeaderChain {
    primary: Box<dyn HeaderDecorator>,
    fallback: Box<dyn HeaderDecorator>,
}

impl FallbackHeaderChain {
    pub fn new(primary: Box<dyn HeaderDecorator>, fallback: Box<dyn HeaderDecorator>) -> Self {
        Self { primary, fallback }
    }

    /// Fills `headers` using the primary decorator, degrading to the
    /// fallback on any primary failure. The fallback in this client is the
    /// basic decorator, which cannot fail, so the chain itself never does.
    pub fn fill_header(&self, headers: &mut HeaderMap) {
        if let Err(e) = self.primary.fill_header(headers) {
            debug!(reason:% = e; "session headers unavailable, using basic headers");
            headers.clear();
            if let Err(e) = self.fallback.fill_header(headers) {
                warn!(error:% = e; "fallback header fill failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct StaticProvider {
        token: &'static str,
        uuid: &'static str,
    }

    impl CredentialProvider for StaticProvider {
        fn credentials(&self) -> Result<SessionCredentials, AuthError> {
            Ok(SessionCredentials {
                access_token: self.token.to_string(),
                device_uuid: self.uuid.to_string(),
            })
        }
    }

    struct NoSessionProvider;

    impl CredentialProvider for NoSessionProvider {
        fn credentials(&self) -> Result<SessionCredentials, AuthError> {
            Err(AuthError::NoSession)
        }
    }

    /// Inserts a marker header, then fails.
    struct PartialFillDecorator;

    impl HeaderDecorator for PartialFillDecorator {
        fn fill_header(&self, headers: &mut HeaderMap) -> Result<(), AuthError> {
            headers.insert(HeaderName::from_static("x-partial"), HeaderValue::from_static("1"));
            Err(AuthError::NoSession)
        }
    }

    #[derive(Default)]
    struct CountingDecorator {
        calls: AtomicUsize,
    }

    impl HeaderDecorator for &CountingDecorator {
        fn fill_header(&self, headers: &mut HeaderMap) -> Result<(), AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            BasicHeaderDecorator::default().apply(headers);
            Ok(())
        }
    }

    fn session_chain(provider: impl CredentialProvider + 'static) -> FallbackHeaderChain {
        let basic = BasicHeaderDecorator::default();
        FallbackHeaderChain::new(
            Box::new(SessionHeaderDecorator::new(basic.clone(), Arc::new(provider))),
            Box::new(basic),
        )
    }

    #[test]
    fn primary_success_fills_authorization() {
        let chain = session_chain(StaticProvider {
            token: "token123",
            uuid: "device456",
        });

        let mut headers = HeaderMap::new();
        chain.fill_header(&mut headers);

        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "token123-device456");
        assert!(headers.contains_key(USER_AGENT));
        assert!(headers.contains_key(HEADER_AGENT));
    }

    #[test]
    fn primary_failure_yields_exactly_basic_headers() {
        let chain = session_chain(NoSessionProvider);

        let mut headers = HeaderMap::new();
        chain.fill_header(&mut headers);

        let mut expected = HeaderMap::new();
        BasicHeaderDecorator::default().apply(&mut expected);

        assert_eq!(headers, expected);
        assert!(!headers.contains_key(AUTHORIZATION));
        assert!(!headers.is_empty());
    }

    #[test]
    fn partial_primary_fill_is_discarded() {
        let basic = BasicHeaderDecorator::default();
        let chain = FallbackHeaderChain::new(Box::new(PartialFillDecorator), Box::new(basic.clone()));

        let mut headers = HeaderMap::new();
        chain.fill_header(&mut headers);

        let mut expected = HeaderMap::new();
        basic.apply(&mut expected);

        assert_eq!(headers, expected);
        assert!(!headers.contains_key("x-partial"));
    }

    #[test]
    fn fallback_not_invoked_when_primary_succeeds() {
        let counting: &'static CountingDecorator = Box::leak(Box::new(CountingDecorator::default()));
        let chain = FallbackHeaderChain::new(
            Box::new(BasicHeaderDecorator::default()),
            Box::new(counting),
        );

        let mut headers = HeaderMap::new();
        chain.fill_header(&mut headers);

        assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unencodable_credentials_fall_back() {
        let chain = session_chain(StaticProvider {
            token: "bad\ntoken",
            uuid: "device",
        });

        let mut headers = HeaderMap::new();
        chain.fill_header(&mut headers);

        assert!(!headers.contains_key(AUTHORIZATION));
        assert!(headers.contains_key(USER_AGENT));
    }
}
