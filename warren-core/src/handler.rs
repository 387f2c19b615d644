//! # Handlers
//!
//! A handler is the terminal endpoint of the dispatch pipeline: it receives
//! the decoded [`Body`] and a read-only [`DispatchContext`] and performs the
//! business logic. No return value is consumed; only an error is.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|body, ctx| async move { ... }`
//! 2. **Struct implementation**: `impl Handler for MyHandler`
//! 3. **Interpreter method**: an `async fn read_*` inside an `#[interpreter]` impl block
//!
//! Interpreters hand handlers to the dispatcher as [`ReadHandler`]s, a
//! one-shot callable that owns the context for the duration of the call.

use crate::{body::Body, context::DispatchContext, error::BoxError};
use futures::future::BoxFuture;
use std::future::Future;

/// Converts a handler's output into the outcome the dispatcher understands.
///
/// # Default Implementations
///
/// - `()` → success
/// - `Result<(), E>` → success, or the error boxed unchanged
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid handler output",
    label = "missing `IntoOutcome` implementation",
    note = "Handlers must return `()` or `Result<(), E>` where `E: Into<BoxError>`."
)]
pub trait IntoOutcome {
    /// Convert the output.
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E> IntoOutcome for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}

/// The terminal endpoint for one routing key.
///
/// This trait uses native `async fn` for zero-cost static dispatch.
/// For dynamic dispatch (e.g. in a handler table), use [`DynHandler`].
///
/// # Example
///
/// ```rust
/// use warren_core::{Body, DispatchContext, Handler};
///
/// struct AuditHandler;
///
/// impl Handler for AuditHandler {
///     type Output = ();
///
///     async fn call(&self, body: Body, ctx: &DispatchContext) {
///         println!("{} on {}: {}", ctx.routing_key, ctx.exchange, body);
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a message handler",
    label = "missing `Handler` implementation",
    note = "Handlers must implement `call(&self, Body, &DispatchContext)`."
)]
pub trait Handler: Send + Sync + 'static {
    /// The output type of the handler, usually `()` or `Result<(), E>`.
    type Output: IntoOutcome;

    /// Executes the handler logic.
    fn call(
        &self,
        body: Body,
        ctx: &DispatchContext,
    ) -> impl Future<Output = Self::Output> + Send;
}

// Closures receive an owned context.
impl<F, Fut> Handler for F
where
    F: Fn(Body, DispatchContext) -> Fut + Send + Sync + 'static,
    Fut: Future + Send,
    Fut::Output: IntoOutcome,
{
    type Output = Fut::Output;

    fn call(
        &self,
        body: Body,
        ctx: &DispatchContext,
    ) -> impl Future<Output = Self::Output> + Send {
        (self)(body, ctx.clone())
    }
}

/// Object-safe version of [`Handler`].
pub trait DynHandler: Send + Sync + 'static {
    /// Executes the handler and converts its output.
    fn call_dyn<'a>(
        &'a self,
        body: Body,
        ctx: &'a DispatchContext,
    ) -> BoxFuture<'a, Result<(), BoxError>>;
}

// Blanket implementation: Any type implementing Handler implements DynHandler automatically.
impl<H: Handler> DynHandler for H {
    fn call_dyn<'a>(
        &'a self,
        body: Body,
        ctx: &'a DispatchContext,
    ) -> BoxFuture<'a, Result<(), BoxError>> {
        Box::pin(async move { self.call(body, ctx).await.into_outcome() })
    }
}

/// A handler located on an interpreter, ready to be invoked once.
///
/// Returned by [`Interpreter::handler`](crate::Interpreter::handler). The
/// context is moved into the call so the handler can borrow it for as long
/// as its future runs.
pub struct ReadHandler<'a> {
    call: Box<
        dyn FnOnce(Body, DispatchContext) -> BoxFuture<'a, Result<(), BoxError>> + Send + 'a,
    >,
}

impl<'a> ReadHandler<'a> {
    /// Wrap a one-shot callable.
    pub fn new<F, Fut>(call: F) -> Self
    where
        F: FnOnce(Body, DispatchContext) -> Fut + Send + 'a,
        Fut: Future<Output = Result<(), BoxError>> + Send + 'a,
    {
        Self {
            call: Box::new(move |body, ctx| Box::pin(call(body, ctx))),
        }
    }

    /// Borrow a [`DynHandler`] for a single call.
    pub fn from_handler<H>(handler: &'a H) -> Self
    where
        H: DynHandler + ?Sized,
    {
        Self::new(move |body, ctx| async move { handler.call_dyn(body, &ctx).await })
    }

    /// Invoke the handler.
    pub async fn invoke(self, body: Body, ctx: DispatchContext) -> Result<(), BoxError> {
        (self.call)(body, ctx).await
    }
}

impl std::fmt::Debug for ReadHandler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadHandler").finish_non_exhaustive()
    }
}
