//! The authorization engine: decides ALLOW/DENY for one inbound request.
//!
//! Given verified claims and the request's method and path, the engine
//! resolves the caller's level (a deep read including every privilege edge
//! and its form), matches the path's resource key against each form's
//! `PathApi` aliases, and checks the read or write flag appropriate to the
//! method. There is no caching: every request re-resolves, so privilege
//! edits take effect on the next request.

use std::sync::Arc;

use tracing::debug;

use coreadmin_entity::store::LevelStore;

use crate::jwt::Claims;

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The request may proceed to its use case.
    Allowed,
    /// The request terminates with a 403-equivalent response.
    Denied(DenyReason),
}

/// Machine-distinguishable denial reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The claim's level could not be resolved: unknown or deleted level,
    /// or a store failure. Lookup errors are hard authorization failures,
    /// never 500s.
    LevelNotFound,
    /// The level exists but no privilege edge grants this method on this
    /// resource.
    NoMatchingGrant,
}

impl DenyReason {
    /// Stable reason code surfaced to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::LevelNotFound => "01",
            Self::NoMatchingGrant => "02",
        }
    }

    /// The denial payload message, e.g. `01 - Access denied`.
    pub fn message(&self) -> String {
        format!("{} - Access denied", self.code())
    }
}

/// Decides whether an access level grants a request.
#[derive(Clone)]
pub struct AuthorizationEngine {
    /// Level deep reads.
    levels: Arc<dyn LevelStore>,
    /// Fixed routing prefix stripped before resource-key extraction,
    /// without leading or trailing slashes (e.g. `api/v1`).
    prefix: String,
}

impl AuthorizationEngine {
    /// Create an engine over the given level store and routing prefix.
    pub fn new(levels: Arc<dyn LevelStore>, prefix: impl Into<String>) -> Self {
        Self {
            levels,
            prefix: prefix.into().trim_matches('/').to_string(),
        }
    }

    /// Extract the resource key: the first path segment after the prefix.
    ///
    /// Handles both full paths (`/api/v1/users/1`) and prefix-stripped
    /// paths as seen inside a nested router (`/users/1`). A bare-prefix
    /// path has no resource key.
    pub fn resource_key<'a>(&self, path: &'a str) -> Option<&'a str> {
        let mut rest = path.trim_start_matches('/');
        if let Some(stripped) = rest.strip_prefix(self.prefix.as_str()) {
            // Only treat it as the prefix when a segment boundary follows.
            if stripped.is_empty() {
                return None;
            }
            if let Some(stripped) = stripped.strip_prefix('/') {
                rest = stripped;
            }
        }

        let key = rest.split('/').next().unwrap_or("");
        if key.is_empty() { None } else { Some(key) }
    }

    /// Decide ALLOW/DENY for a single request.
    ///
    /// `method` is the uppercase HTTP method name. GET is governed by the
    /// read flag; POST, PUT, and DELETE by the write flag; any other method
    /// never matches a grant.
    pub async fn authorize(&self, claims: &Claims, method: &str, path: &str) -> AccessDecision {
        let Some(key) = self.resource_key(path) else {
            return AccessDecision::Denied(DenyReason::NoMatchingGrant);
        };

        let detail = match self.levels.find_detail(claims.level_id).await {
            Ok(Some(detail)) => detail,
            Ok(None) => return AccessDecision::Denied(DenyReason::LevelNotFound),
            Err(err) => {
                debug!(level_id = %claims.level_id, error = %err, "level lookup failed");
                return AccessDecision::Denied(DenyReason::LevelNotFound);
            }
        };

        for grant in &detail.privileges {
            if !grant.form.path_api.matches(key) {
                continue;
            }
            // First match wins; multiple matching edges need not be unique.
            match method {
                "GET" if grant.read => return AccessDecision::Allowed,
                "POST" | "PUT" | "DELETE" if grant.write => return AccessDecision::Allowed,
                _ => {}
            }
        }

        AccessDecision::Denied(DenyReason::NoMatchingGrant)
    }
}

impl std::fmt::Debug for AuthorizationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationEngine")
            .field("prefix", &self.prefix)
            .finish()
    }
}
