//! Dispatch over an in-memory transport, without sockets.

use std::sync::Mutex;

use assert2::{check, let_assert};
use bytes::Bytes;
use payrest::{
    ApiClient, Entity, Error, ErrorTranslator, Method, PayClient, PathTemplate, Request,
    Response, Result, Transport, TransportErrorKind,
};
use serde_json::{Value, json};

/// Replies with a canned response and records what it was sent.
struct Canned {
    reply: std::result::Result<(u16, Value), TransportErrorKind>,
    seen: Mutex<Vec<Request<Bytes>>>,
}

impl Canned {
    fn ok(body: Value) -> Self {
        Self::status(200, body)
    }

    fn status(status: u16, body: Value) -> Self {
        Self {
            reply: Ok((status, body)),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing(kind: TransportErrorKind) -> Self {
        Self {
            reply: Err(kind),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn last(&self) -> Request<Bytes> {
        self.seen
            .lock()
            .expect("lock")
            .last()
            .cloned()
            .expect("a request")
    }
}

impl Transport for Canned {
    async fn execute(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
        self.seen.lock().expect("lock").push(request);
        match &self.reply {
            Ok((status, body)) => Ok(Response::new(
                *status,
                Default::default(),
                Bytes::from(body.to_string()),
            )),
            Err(kind) => Err(Error::transport(*kind, "canned failure")),
        }
    }
}

fn api(transport: &Canned) -> ApiClient<&Canned> {
    ApiClient::new(transport, "https://api.example.com/v1/").expect("base URL")
}

#[tokio::test]
async fn get_request_shape() {
    let transport = Canned::ok(json!({"entity": "invoice", "id": "inv_1"}));

    api(&transport)
        .fetch_one("invoices/inv_1", Some(&json!({"expand": "payments"})))
        .await
        .expect("record");

    let request = transport.last();
    check!(request.method() == Method::Get);
    check!(request.url().as_str() == "https://api.example.com/v1/invoices/inv_1?expand=payments");
    check!(request.header("Accept") == Some("application/json"));
    check!(request.body().is_none());
}

#[tokio::test]
async fn post_request_shape() {
    let transport = Canned::ok(json!({"entity": "order", "id": "order_1"}));

    api(&transport)
        .submit("/orders", Some(&json!({"amount": 100})))
        .await
        .expect("record");

    let request = transport.last();
    check!(request.method() == Method::Post);
    check!(request.url().path() == "/v1/orders");
    check!(request.header("Content-Type") == Some("application/json"));
    let body: Value = serde_json::from_slice(request.body().expect("body")).expect("json");
    check!(body == json!({"amount": 100}));
}

#[tokio::test]
async fn facade_routes_travel_with_the_request() {
    let transport = Canned::ok(json!({"entity": "payment", "id": "pay_1"}));
    let client = PayClient::from_api(api(&transport));

    client.payments().fetch("pay_1").await.expect("payment");

    let request = transport.last();
    check!(
        request.extensions().get::<PathTemplate>().map(PathTemplate::as_str)
            == Some("payments/{id}")
    );
    check!(request.url().path() == "/v1/payments/pay_1");
}

#[tokio::test]
async fn transport_failures_pass_through() {
    for kind in [
        TransportErrorKind::Connection,
        TransportErrorKind::Tls,
        TransportErrorKind::Timeout,
        TransportErrorKind::Body,
    ] {
        let transport = Canned::failing(kind);
        let result = api(&transport).fetch_many("refunds", None).await;

        let_assert!(Err(Error::Transport { kind: reported, .. }) = result);
        check!(reported == kind);
    }
}

#[tokio::test]
async fn records_of_every_kind() {
    let cases = [
        (json!({"entity": "customer", "id": "cust_1"}), "customer"),
        (json!({"entity": "invoice", "id": "inv_1"}), "invoice"),
        (json!({"entity": "order", "id": "order_1"}), "order"),
        (json!({"entity": "payment", "id": "pay_1"}), "payment"),
        (json!({"entity": "refund", "id": "rfnd_1"}), "refund"),
    ];

    for (body, tag) in cases {
        let transport = Canned::ok(body);
        let entity = api(&transport).fetch_one("any", None).await.expect("record");
        check!(entity.entity() == tag);
    }
}

#[tokio::test]
async fn collection_on_record_endpoint() {
    let transport = Canned::ok(json!({"entity": "collection", "count": 0, "items": []}));
    let result = api(&transport).fetch_one("invoices", None).await;
    check!(matches!(result, Err(Error::UnparsableResponse(_))));
}

#[tokio::test]
async fn mixed_collection_fails_typed_listing() {
    let transport = Canned::ok(json!({
        "entity": "collection",
        "count": 2,
        "items": [
            {"entity": "refund", "id": "rfnd_1"},
            {"entity": "payment", "id": "pay_1"}
        ]
    }));

    let untyped = api(&transport).fetch_many("refunds", None).await.expect("entities");
    check!(matches!(untyped.as_slice(), [Entity::Refund(_), Entity::Payment(_)]));

    let typed = PayClient::from_api(api(&transport)).refunds().fetch_all(None).await;
    let_assert!(Err(Error::UnparsableResponse(message)) = typed);
    check!(message == "expected entity `refund`, found `payment`");
}

#[tokio::test]
async fn custom_translator() {
    struct Strict;

    impl ErrorTranslator for Strict {
        fn translate(&self, status: u16, _body: &Bytes) -> Error {
            Error::server(status, "redacted")
        }
    }

    let transport = Canned::status(
        401,
        json!({"error": {"code": "BAD_REQUEST_ERROR", "description": "Authentication failed"}}),
    );
    let result = api(&transport)
        .with_translator(Strict)
        .fetch_one("payments/pay_1", None)
        .await;

    let_assert!(Err(err) = result);
    check!(err.to_string() == "Status Code: 401\nServer response: redacted");
}

#[tokio::test]
async fn dot_ids_never_reach_the_transport() {
    let transport = Canned::ok(json!({"entity": "refund", "id": "rfnd_1"}));
    let client = PayClient::from_api(api(&transport));

    for id in ["", ".", ".."] {
        let result = client.payments().refund(id, None).await;
        check!(matches!(result, Err(Error::InvalidRequest(_))), "accepted {id:?}");
    }
    check!(transport.seen.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn foreign_hosts_never_reach_the_transport() {
    let transport = Canned::ok(json!({"entity": "invoice", "id": "inv_1"}));

    let result = api(&transport)
        .submit("https://collector.example.net/invoices", None)
        .await;

    check!(matches!(result, Err(Error::InvalidRequest(_))));
    check!(transport.seen.lock().expect("lock").is_empty());
}
