//! Dispatcher layers around the standard dispatcher.

mod common;

use common::{dispatcher, message};
use std::sync::Arc;
use warren::{
    Bindings, Body, DispatchContext, Dispatcher, Factories, TableInterpreter, layers::Traced,
};

fn slow_orders(delay: std::time::Duration) -> warren::InterpreterDispatcher {
    let table = TableInterpreter::builder()
        .on("order.created", move |_body: Body, _ctx: DispatchContext| async move {
            tokio::time::sleep(delay).await;
        })
        .unwrap()
        .build();
    let mut factories = Factories::new();
    factories.register_shared("Orders", Arc::new(table)).unwrap();
    dispatcher(Bindings::new().bind("orders", "Orders").unwrap(), factories)
}

#[tokio::test]
async fn test_traced_is_transparent() {
    let traced = Traced::new(slow_orders(std::time::Duration::ZERO), "orders-consumer");

    let invoked = traced
        .dispatch(&message("orders", "order.created", "{}"))
        .await
        .unwrap();
    assert!(invoked.is_invoked());

    let logged = traced
        .dispatch(&message("orders", "order.deleted", "{}"))
        .await
        .unwrap();
    assert!(!logged.is_invoked());

    assert!(traced.inner().registry().resolve("orders").is_ok());
}

#[cfg(feature = "timeout")]
#[tokio::test]
async fn test_timeout_around_slow_handler() {
    use std::time::Duration;
    use warren::{DispatchError, layers::Timeout};

    let deadline = Duration::from_millis(20);
    let layered = Traced::new(
        Timeout::new(slow_orders(Duration::from_secs(5)), deadline),
        "orders-consumer",
    );

    let err = layered
        .dispatch(&message("orders", "order.created", "{}"))
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::Timeout(d) if d == deadline));

    // Unknown keys never reach the handler and finish in time.
    let outcome = layered
        .dispatch(&message("orders", "order.deleted", "{}"))
        .await
        .unwrap();
    assert!(!outcome.is_invoked());
}
