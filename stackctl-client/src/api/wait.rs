use crate::{error::Result, StackCtlClient, StackCtlClientError, WaitOptions};
use stackctl::types::GenericResponse;
use tokio::time::{sleep, Instant};
use tracing::{debug, instrument};

impl StackCtlClient {
    /// Poll an async action of a stack until it finishes.
    ///
    /// The action is checked every `options.check_frequency`. Once
    /// `options.timeout` has elapsed without the action finishing,
    /// [`StackCtlClientError::TimedOut`] is returned. The server-side action
    /// keeps running either way.
    #[instrument(skip(self, options))]
    pub async fn wait_stack_async_action(
        &self,
        action_id: i64,
        stack_uid: &str,
        options: WaitOptions,
        result_required: bool,
    ) -> Result<GenericResponse> {
        let deadline = Instant::now() + options.timeout;

        loop {
            if Instant::now() >= deadline {
                return Err(StackCtlClientError::TimedOut(options.timeout));
            }

            let action = self.stack_async_action(action_id, stack_uid).await?;
            if action.is_complete() {
                return Ok(action.into_generic_response(result_required)?);
            }

            debug!(
                "Async action {} still running, checking again in {:?}",
                action_id, options.check_frequency
            );
            sleep(options.check_frequency).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{api::tests::client_for, StackCtlClientError, WaitOptions};
    use httpmock::{Method::GET, MockServer};
    use serde_json::json;
    use std::time::Duration;

    const ACTION_PATH: &str = "/stacks/stk1/actions/4012.json";

    fn fast_wait(timeout: Duration) -> WaitOptions {
        WaitOptions {
            check_frequency: Duration::from_millis(10),
            timeout,
        }
    }

    fn pending() -> serde_json::Value {
        json!({"response": {"id": 4012, "action": "server_set", "finished_at": null}})
    }

    #[tokio::test]
    async fn finished_action_returns_immediately() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path(ACTION_PATH);
                then.status(200).json_body(json!({"response": {
                    "id": 4012,
                    "finished_at": "2023-03-01T10:02:13Z",
                    "finished_success": true,
                    "finished_message": "server.name updated"
                }}));
            })
            .await;

        let response = client_for(&server)
            .wait_stack_async_action(4012, "stk1", fast_wait(Duration::from_secs(5)), true)
            .await
            .unwrap();

        assert_eq!(mock.hits_async().await, 1);
        assert_eq!(response.to_string(), "Success: server.name updated");
    }

    #[tokio::test]
    async fn polls_until_action_finishes() {
        let server = MockServer::start_async().await;
        let mut running = server
            .mock_async(|when, then| {
                when.method(GET).path(ACTION_PATH);
                then.status(200).json_body(pending());
            })
            .await;

        let client = client_for(&server);
        let waiter = tokio::spawn(async move {
            client
                .wait_stack_async_action(4012, "stk1", fast_wait(Duration::from_secs(10)), true)
                .await
        });

        while running.hits_async().await < 3 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        // Mocks match in creation order, so the finished answer only takes
        // over once the running one is gone.
        let _finished = server
            .mock_async(|when, then| {
                when.method(GET).path(ACTION_PATH);
                then.status(200).json_body(json!({"response": {
                    "id": 4012,
                    "finished_at": "2023-03-01T10:02:13Z",
                    "finished_success": false,
                    "finished_message": "server is locked"
                }}));
            })
            .await;
        running.delete_async().await;

        let response = waiter.await.unwrap().unwrap();
        assert!(!response.status);
        assert_eq!(response.to_string(), "Failed: server is locked");
    }

    #[tokio::test]
    async fn gives_up_after_timeout() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path(ACTION_PATH);
                then.status(200).json_body(pending());
            })
            .await;

        let result = client_for(&server)
            .wait_stack_async_action(4012, "stk1", fast_wait(Duration::from_millis(60)), true)
            .await;

        match result {
            Err(StackCtlClientError::TimedOut(timeout)) => {
                assert_eq!(timeout, Duration::from_millis(60))
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(mock.hits_async().await >= 2);
    }

    #[tokio::test]
    async fn poll_errors_are_returned() {
        let server = MockServer::start_async().await;
        let _mock = server
            .mock_async(|when, then| {
                when.method(GET).path(ACTION_PATH);
                then.status(500).body("boom");
            })
            .await;

        let result = client_for(&server)
            .wait_stack_async_action(4012, "stk1", fast_wait(Duration::from_secs(5)), true)
            .await;

        assert!(matches!(
            result,
            Err(StackCtlClientError::Api { ref message, .. }) if message == "boom"
        ));
    }
}
