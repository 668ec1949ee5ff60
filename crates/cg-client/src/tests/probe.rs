use crate::{CandidateRoutes, ClientError, probe};

use std::sync::Mutex;

use googletest::assert_that;
use googletest::prelude::*;
use serde_json::{Value, json};

const ROUTES: CandidateRoutes = CandidateRoutes::new("widgets", &["/a", "/b", "/c"]);

fn miss(status: u16) -> ClientError {
    ClientError::api(status, "miss", Value::Null)
}

#[tokio::test]
async fn given_first_two_missing_when_probed_then_third_used_and_order_kept() {
    let calls = Mutex::new(Vec::new());

    let result = probe(&ROUTES, |path| {
        calls.lock().unwrap().push(path);
        async move {
            match path {
                "/a" => Err(miss(404)),
                "/b" => Err(miss(405)),
                _ => Ok(json!({ "from": path })),
            }
        }
    })
    .await
    .unwrap();

    assert_eq!(result, json!({ "from": "/c" }));
    assert_eq!(*calls.lock().unwrap(), vec!["/a", "/b", "/c"]);
}

#[tokio::test]
async fn given_success_on_first_when_probed_then_rest_not_called() {
    let calls = Mutex::new(0);

    let result = probe(&ROUTES, |_| {
        *calls.lock().unwrap() += 1;
        async { Ok::<_, ClientError>(1) }
    })
    .await;

    assert_that!(result, ok(eq(&1)));
    assert_that!(*calls.lock().unwrap(), eq(1));
}

#[tokio::test]
async fn given_server_error_when_probed_then_propagated_without_fallthrough() {
    let calls = Mutex::new(Vec::new());

    let result: Result<Value, _> = probe(&ROUTES, |path| {
        calls.lock().unwrap().push(path);
        async { Err(ClientError::api(500, "boom", Value::Null)) }
    })
    .await;

    assert_that!(result.as_ref().err().and_then(ClientError::status), some(eq(500)));
    assert_eq!(*calls.lock().unwrap(), vec!["/a"]);
}

#[tokio::test]
async fn given_all_missing_when_probed_then_last_miss_returned() {
    let result: Result<Value, _> = probe(&ROUTES, |path| async move {
        if path == "/c" {
            Err(miss(405))
        } else {
            Err(miss(404))
        }
    })
    .await;

    assert_that!(result.err().and_then(|e| e.status()), some(eq(405)));
}

#[tokio::test]
async fn given_no_candidates_when_probed_then_generic_not_found() {
    let empty = CandidateRoutes::new("nothing", &[]);

    let result: Result<Value, _> = probe(&empty, |_| async { Ok::<_, ClientError>(Value::Null) }).await;

    let err = result.unwrap_err();
    assert_that!(err.status(), some(eq(404)));
    assert!(err.display_message().contains("nothing"));
}
