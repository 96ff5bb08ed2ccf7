//! Unit tests for the proxy dispatch contract

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::oneshot;

use sweph::prelude::*;

type Outcome = std::result::Result<Value, Value>;

/// Recording port that completes every invocation with a canned outcome.
struct RecordingPort {
    invocations: Mutex<Vec<Invocation>>,
    outcome: Outcome,
}

impl RecordingPort {
    fn resolving(payload: Value) -> Arc<Self> {
        Arc::new(Self {
            invocations: Mutex::new(Vec::new()),
            outcome: Ok(payload),
        })
    }

    fn rejecting(payload: Value) -> Arc<Self> {
        Arc::new(Self {
            invocations: Mutex::new(Vec::new()),
            outcome: Err(payload),
        })
    }

    fn seen(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl DispatchPort for RecordingPort {
    async fn invoke(&self, invocation: Invocation, callbacks: CallbackPair) {
        self.invocations.lock().unwrap().push(invocation);
        match self.outcome.clone() {
            Ok(payload) => callbacks.resolve(payload),
            Err(payload) => callbacks.reject(payload),
        }
    }
}

/// Continuation pair feeding a oneshot, tracking how often each side fires.
fn probed_pair() -> (
    Box<dyn FnOnce(Value) + Send>,
    Box<dyn FnOnce(Value) + Send>,
    oneshot::Receiver<Outcome>,
    Arc<Mutex<(usize, usize)>>,
) {
    let (tx, rx) = oneshot::channel();
    let tx = Arc::new(Mutex::new(Some(tx)));
    let tx_err = Arc::clone(&tx);
    let counts = Arc::new(Mutex::new((0usize, 0usize)));
    let counts_ok = Arc::clone(&counts);
    let counts_err = Arc::clone(&counts);

    let on_success = Box::new(move |payload: Value| {
        counts_ok.lock().unwrap().0 += 1;
        if let Some(tx) = tx.lock().unwrap().take() {
            let _ = tx.send(Ok(payload));
        }
    });
    let on_error = Box::new(move |payload: Value| {
        counts_err.lock().unwrap().1 += 1;
        if let Some(tx) = tx_err.lock().unwrap().take() {
            let _ = tx.send(Err(payload));
        }
    });

    (on_success, on_error, rx, counts)
}

#[tokio::test]
async fn test_greet_issues_exactly_one_dispatch() {
    let port = RecordingPort::resolving(json!("hello Ada"));
    let proxy = SwissEphProxy::new(port.clone());

    let (ok, err, rx, _) = probed_pair();
    proxy.greet("Ada", ok, err).await;
    rx.await.unwrap().unwrap();

    let seen = port.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].service, "SwissEph");
    assert_eq!(seen[0].method, "greet");
    assert_eq!(seen[0].args, vec![json!("Ada")]);
}

#[tokio::test]
async fn test_compute_chart_issues_exactly_one_dispatch() {
    let port = RecordingPort::resolving(json!("chart"));
    let proxy = SwissEphProxy::new(port.clone());

    let (ok, err, rx, _) = probed_pair();
    proxy.compute_chart("/data/ephe", ok, err).await;
    rx.await.unwrap().unwrap();

    let seen = port.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].service, "SwissEph");
    assert_eq!(seen[0].method, "computeChart");
    assert_eq!(seen[0].args, vec![json!("/data/ephe")]);
}

#[tokio::test]
async fn test_success_fires_exactly_one_continuation() {
    let port = RecordingPort::resolving(json!("hello Ada"));
    let proxy = SwissEphProxy::new(port);

    let (ok, err, rx, counts) = probed_pair();
    proxy.greet("Ada", ok, err).await;

    assert_eq!(rx.await.unwrap(), Ok(json!("hello Ada")));
    assert_eq!(*counts.lock().unwrap(), (1, 0));
}

#[tokio::test]
async fn test_error_payload_arrives_unmodified() {
    let payload = json!({"code": 1, "message": "bad path"});
    let port = RecordingPort::rejecting(payload.clone());
    let proxy = SwissEphProxy::new(port);

    let (ok, err, rx, counts) = probed_pair();
    proxy.compute_chart("/data/ephe", ok, err).await;

    assert_eq!(rx.await.unwrap(), Err(payload));
    assert_eq!(*counts.lock().unwrap(), (0, 1));
}

#[tokio::test]
async fn test_no_cross_call_state() {
    let port = RecordingPort::resolving(json!("ok"));
    let proxy = SwissEphProxy::new(port.clone());

    for name in ["Ada", "Grace", "Edsger"] {
        let (ok, err, rx, _) = probed_pair();
        proxy.greet(name, ok, err).await;
        rx.await.unwrap().unwrap();
    }

    let seen = port.seen();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].args, vec![json!("Ada")]);
    assert_eq!(seen[1].args, vec![json!("Grace")]);
    assert_eq!(seen[2].args, vec![json!("Edsger")]);
}

#[tokio::test]
async fn test_future_form_maps_outcomes() {
    let proxy = SwissEphProxy::new(RecordingPort::resolving(json!("hello Ada")));
    assert_eq!(proxy.greet_async("Ada").await.unwrap(), json!("hello Ada"));

    let payload = json!({"code": 1, "message": "bad path"});
    let proxy = SwissEphProxy::new(RecordingPort::rejecting(payload.clone()));
    match proxy.compute_chart_async("/data/ephe").await.unwrap_err() {
        DispatchError::Failure(got) => assert_eq!(got, payload),
        other => panic!("expected Failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_builder_round_trip() {
    let port = RecordingPort::resolving(json!("hello Ada"));
    let proxy = BridgeBuilder::new().port(port.clone()).build().unwrap();

    proxy.greet_async("Ada").await.unwrap();
    assert_eq!(port.seen().len(), 1);
}
