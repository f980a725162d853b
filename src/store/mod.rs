//! Reducer store with subscriptions and middleware.
//!
//! - `dispatcher.rs` - `Store<R>`: state slot, dispatch queue, notification fan-out
//! - `subscription.rs` - Listener registry and unsubscribe handles
//! - `middleware.rs` - Dispatch hooks (logging, persistence)
//! - `reporter.rs` - Where listener panics are reported

mod dispatcher;
mod middleware;
mod reporter;
mod subscription;

pub use dispatcher::Store;
pub use middleware::{LoggerMiddleware, Middleware, PersistMiddleware};
pub use reporter::{ErrorReporter, TracingReporter};
pub use subscription::{Listener, Subscription};
