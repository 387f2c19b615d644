//! Procedural macros for Warren.
//!
//! - `#[interpreter]` - Turns an inherent impl block into an `Interpreter`

use proc_macro::TokenStream;

mod interpreter;

/// Implement `Interpreter` for a type from the `read_*` methods of an impl block.
///
/// Every `async fn read_*(&self, body: Body, ctx: &DispatchContext)` becomes the
/// handler for the method name obtained by camel-casing the function name
/// (`read_order_created` → `readOrderCreated`, which is what the routing key
/// `order.created` maps to). A handler may return `()` or `Result<(), E>`.
///
/// Routing keys whose segments carry upper-case letters can't be spelled as a
/// snake-case function name; mark such a method with `#[routing_key("...")]`
/// to key it by the routing key instead of its name.
///
/// An inherent `fn log(&self, message: &str, severity: Severity)` in the same
/// block replaces the default `tracing` logging.
///
/// # Arguments
///
/// - `name = "..."`: Also register the type under this identifier with
///   `inventory`, so bindings can refer to it. Requires `Default` and the
///   `inventory` feature of `warren`.
///
/// # Example
///
/// ```rust,ignore
/// use warren::{Body, DispatchContext, interpreter};
///
/// #[derive(Default)]
/// struct Orders;
///
/// #[interpreter(name = "Orders")]
/// impl Orders {
///     async fn read_order_created(&self, body: Body, ctx: &DispatchContext) {
///         println!("{} on {}: {}", ctx.routing_key, ctx.exchange, body);
///     }
///
///     #[routing_key("order.reCreated")]
///     async fn recreated(&self, _body: Body, _ctx: &DispatchContext) -> Result<(), std::io::Error> {
///         Ok(())
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn interpreter(attr: TokenStream, item: TokenStream) -> TokenStream {
    interpreter::interpreter_impl(attr, item)
}
