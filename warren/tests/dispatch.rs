//! End-to-end dispatch through the standard dispatcher.

mod common;

use common::{PaymentDeclined, dispatcher, logs, message, seen};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use warren::{
    Bindings, Body, BodyError, DispatchContext, DispatchError, DispatchOutcome, Dispatcher,
    DynDispatcher, Factories, Severity, TableInterpreter,
};

fn orders_dispatcher(table: TableInterpreter) -> warren::InterpreterDispatcher {
    let mut factories = Factories::new();
    factories.register_shared("Orders", Arc::new(table)).unwrap();
    dispatcher(Bindings::new().bind("orders", "Orders").unwrap(), factories)
}

#[tokio::test]
async fn test_json_body_reaches_handler() {
    let seen = seen();
    let sink = seen.clone();
    let table = TableInterpreter::builder()
        .on("order.created", move |body: Body, _ctx: DispatchContext| {
            let sink = sink.clone();
            async move { sink.lock().unwrap().push(body) }
        })
        .unwrap()
        .build();
    let dispatcher = orders_dispatcher(table);

    let outcome = dispatcher
        .dispatch(&message("orders", "order.created", r#"{"id": 7, "items": [1, 2]}"#))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        DispatchOutcome::Invoked {
            method: "readOrderCreated".into()
        }
    );
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        [Body::Json(json!({"id": 7, "items": [1, 2]}))]
    );
}

#[tokio::test]
async fn test_undecodable_body_falls_back_to_raw() {
    let seen = seen();
    let sink = seen.clone();
    let table = TableInterpreter::builder()
        .on("order.created", move |body: Body, _ctx: DispatchContext| {
            let sink = sink.clone();
            async move { sink.lock().unwrap().push(body) }
        })
        .unwrap()
        .build();
    let dispatcher = orders_dispatcher(table);

    for payload in ["not json", "{\"id\":", ""] {
        dispatcher
            .dispatch(&message("orders", "order.created", payload))
            .await
            .unwrap();
    }

    assert_eq!(
        seen.lock().unwrap().as_slice(),
        [
            Body::Raw("not json".into()),
            Body::Raw("{\"id\":".into()),
            Body::Json(serde_json::Value::Null),
        ]
    );
}

#[tokio::test]
async fn test_binary_body_reaches_handler_unchanged() {
    let seen = seen();
    let sink = seen.clone();
    let table = TableInterpreter::builder()
        .on("order.snapshot", move |body: Body, _ctx: DispatchContext| {
            let sink = sink.clone();
            async move { sink.lock().unwrap().push(body) }
        })
        .unwrap()
        .build();
    let dispatcher = orders_dispatcher(table);
    let payload: Vec<u8> = vec![0x08, 0x96, 0x01, 0xff, 0x00];

    dispatcher
        .dispatch(&warren::InboundMessage::new(
            "orders",
            "order.snapshot",
            payload.clone(),
        ))
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].as_raw(), Some(payload.as_slice()));
}

#[derive(Debug, Deserialize, PartialEq)]
struct OrderCreated {
    id: u64,
    customer: String,
}

#[tokio::test]
async fn test_typed_body_in_handler() {
    let captured = Arc::new(std::sync::Mutex::new(None));
    let sink = captured.clone();
    let table = TableInterpreter::builder()
        .on("order.created", move |body: Body, _ctx: DispatchContext| {
            let sink = sink.clone();
            async move {
                let order: OrderCreated = body.deserialize()?;
                *sink.lock().unwrap() = Some(order);
                Ok::<(), BodyError>(())
            }
        })
        .unwrap()
        .build();
    let dispatcher = orders_dispatcher(table);

    dispatcher
        .dispatch(&message("orders", "order.created", r#"{"id": 3, "customer": "ada"}"#))
        .await
        .unwrap();
    assert_eq!(
        *captured.lock().unwrap(),
        Some(OrderCreated {
            id: 3,
            customer: "ada".into()
        })
    );

    // A shape mismatch is the handler's own error.
    let err = dispatcher
        .dispatch(&message("orders", "order.created", "plain"))
        .await
        .unwrap_err();
    let source = err.into_handler_error().unwrap();
    assert!(matches!(
        source.downcast_ref::<BodyError>(),
        Some(BodyError::NotStructured)
    ));
}

#[tokio::test]
async fn test_handler_error_propagates_unchanged() {
    let table = TableInterpreter::builder()
        .on("payment.captured", |_body: Body, _ctx: DispatchContext| async {
            Err::<(), _>(PaymentDeclined { order_id: 7 })
        })
        .unwrap()
        .build();
    let dispatcher = orders_dispatcher(table);

    let err = dispatcher
        .dispatch(&message("orders", "payment.captured", "{}"))
        .await
        .unwrap_err();

    assert!(!err.is_config());
    assert_eq!(err.to_string(), "payment declined for order 7");
    let source = err.into_handler_error().unwrap();
    assert_eq!(
        *source.downcast::<PaymentDeclined>().unwrap(),
        PaymentDeclined { order_id: 7 }
    );
}

#[tokio::test]
async fn test_unknown_routing_key_is_logged() {
    let logs = logs();
    let sink = logs.clone();
    let table = TableInterpreter::builder()
        .on("order.created", |_body: Body, _ctx: DispatchContext| async {})
        .unwrap()
        .with_logger(move |message, severity| {
            sink.lock().unwrap().push((message.to_owned(), severity));
        })
        .build();
    let dispatcher = orders_dispatcher(table);

    let outcome = dispatcher
        .dispatch(&message("orders", "order.cancelled", "not json"))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        DispatchOutcome::Logged {
            method: "readOrderCancelled".into()
        }
    );
    assert_eq!(
        logs.lock().unwrap().as_slice(),
        [
            (
                "Unknown routing key 'order.cancelled' for exchange 'orders'.".to_owned(),
                Severity::Error
            ),
            ("not json".to_owned(), Severity::Info),
        ]
    );
}

#[tokio::test]
async fn test_context_carries_delivery_metadata() {
    let contexts = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = contexts.clone();
    let table = TableInterpreter::builder()
        .on("order.created", move |_body: Body, ctx: DispatchContext| {
            let sink = sink.clone();
            async move { sink.lock().unwrap().push(ctx) }
        })
        .unwrap()
        .build();
    let dispatcher = orders_dispatcher(table);

    let delivered = message("orders", "order.created", "{}")
        .with_reply_to("amq.rabbitmq.reply-to")
        .with_delivery_tag(42);
    dispatcher.dispatch(&delivered).await.unwrap();

    let contexts = contexts.lock().unwrap();
    assert_eq!(contexts.len(), 1);
    assert_eq!(contexts[0].exchange, "orders");
    assert_eq!(contexts[0].routing_key, "order.created");
    assert_eq!(contexts[0].reply_to(), Some("amq.rabbitmq.reply-to"));
    assert_eq!(contexts[0].delivery_tag, 42);
}

#[tokio::test]
async fn test_dynamic_dispatcher_processes_messages_in_order() {
    let seen = seen();
    let sink = seen.clone();
    let table = TableInterpreter::builder()
        .on("order.created", move |body: Body, _ctx: DispatchContext| {
            let sink = sink.clone();
            async move { sink.lock().unwrap().push(body) }
        })
        .unwrap()
        .build();
    let dispatcher: Box<dyn DynDispatcher> = Box::new(orders_dispatcher(table));

    for id in 1..=3 {
        let body = format!(r#"{{"id": {id}}}"#);
        let outcome = dispatcher
            .dispatch_dyn(&message("orders", "order.created", &body))
            .await;
        assert!(matches!(outcome, Ok(DispatchOutcome::Invoked { .. })));
    }

    let ids: Vec<_> = seen
        .lock()
        .unwrap()
        .iter()
        .map(|body| body.as_json().unwrap()["id"].clone())
        .collect();
    assert_eq!(ids, [json!(1), json!(2), json!(3)]);
}

#[tokio::test]
async fn test_config_error_is_not_a_handler_error() {
    let dispatcher = dispatcher(
        Bindings::new().bind("orders", "Missing").unwrap(),
        Factories::new(),
    );

    let err = dispatcher
        .dispatch(&message("orders", "order.created", "{}"))
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::Config(_)));
    assert_eq!(
        err.to_string(),
        "configuration error: interpreter 'Missing' was not found"
    );
}
