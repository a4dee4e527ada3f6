//! HTTP middleware stack.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (recorded on the trace span, echoed in the response)
//! 4. Session layer (tower-sessions with `PostgreSQL` store)
//!
//! The signed-in user is not middleware: handlers take a
//! [`RequestContext`] extractor, which loads the user for that request only.

pub mod context;
pub mod request_id;
pub mod session;

pub use context::{CurrentUser, RequestContext};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
