//! Session-stored identity.
//!
//! Only the signed-in user's ID lives in the session; the user record itself
//! is loaded per request by [`crate::middleware::RequestContext`].

/// Session keys.
pub mod keys {
    /// Key for the signed-in user's ID.
    pub const USER_ID: &str = "user_id";
}
