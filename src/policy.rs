//! Access policy seam for download authorization
//!
//! The interceptor never assumes some earlier hook already validated the
//! request; it asks an explicit policy before opening any file. Hosts embed
//! their own implementation (session lookups, ACLs, signed tokens);
//! standalone deployments use [`AllowAll`].

use crate::types::FileId;
use async_trait::async_trait;

/// Trait for authorizing file downloads
///
/// Implementations decide, per request, whether the given file may be served.
/// Denial is reported to the client as `403 Forbidden` and no file bytes are
/// emitted.
///
/// # Examples
///
/// ```
/// use filegate::policy::AccessPolicy;
/// use filegate::types::FileId;
/// use async_trait::async_trait;
///
/// /// Only even file IDs may be downloaded
/// struct EvenOnly;
///
/// #[async_trait]
/// impl AccessPolicy for EvenOnly {
///     async fn allow_download(&self, id: FileId) -> bool {
///         id.get() % 2 == 0
///     }
/// }
/// ```
#[async_trait]
pub trait AccessPolicy: Send + Sync {
    /// Whether the file with the given ID may be downloaded
    async fn allow_download(&self, id: FileId) -> bool;
}

/// Policy that permits every download
///
/// The default for standalone deployments where the surrounding network
/// boundary (or the API-key middleware) is the only access control.
pub struct AllowAll;

#[async_trait]
impl AccessPolicy for AllowAll {
    async fn allow_download(&self, _id: FileId) -> bool {
        true
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn allow_all_permits_any_id() {
        let policy = AllowAll;
        assert!(policy.allow_download(FileId(1)).await);
        assert!(policy.allow_download(FileId(i64::MAX)).await);
        assert!(policy.allow_download(FileId(-1)).await);
    }

    #[tokio::test]
    async fn custom_policies_can_deny() {
        struct DenyAll;

        #[async_trait]
        impl AccessPolicy for DenyAll {
            async fn allow_download(&self, _id: FileId) -> bool {
                false
            }
        }

        let policy: Box<dyn AccessPolicy> = Box::new(DenyAll);
        assert!(!policy.allow_download(FileId(1)).await);
    }
}
