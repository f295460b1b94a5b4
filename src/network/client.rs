//! HTTP client wrapper - executes lottery calls and decodes replies

use std::time::{Duration, Instant};

use anyhow::Context;

use crate::messages::NetworkResponse;
use crate::models::{HttpMethod, LotteryAction};
use crate::network::decode::{decode_reply, ActionError};

/// Join the base URL and the endpoint path for `action`
pub fn endpoint_url(base_url: &str, action: LotteryAction) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), action.path())
}

/// Build the request for `action`. No body, auth or idempotency key is sent.
fn build_request(
    client: &reqwest::Client,
    base_url: &str,
    action: LotteryAction,
) -> reqwest::RequestBuilder {
    let url = endpoint_url(base_url, action);

    let req_builder = match action.method() {
        HttpMethod::GET => client.get(&url),
        HttpMethod::POST => client.post(&url),
    };

    req_builder.header("Accept", "application/json")
}

/// Execute the call behind `action`. Always yields a response, never panics
/// or leaves the caller waiting on a rejected future.
pub async fn execute_action(
    client: &reqwest::Client,
    base_url: &str,
    action: LotteryAction,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();
    let result = match build_request(client, base_url, action).send().await {
        Ok(resp) => {
            let status = resp.status().as_u16();
            match resp.text().await {
                Ok(body) => decode_reply(action, status, &body),
                Err(e) => Err(ActionError::Transport(format!("error reading body: {}", e))),
            }
        }
        Err(e) => Err(ActionError::Transport(describe_error(&e))),
    };
    let elapsed = start.elapsed().as_millis() as u64;

    NetworkResponse::from_result(request_id, action, result, elapsed)
}

fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        e.to_string()
    }
}

/// Create an HTTP client with the given request timeout
pub fn create_client(timeout: Duration) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("building HTTP client")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::network::decode::ActionOutcome;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve one canned HTTP reply. Resolves the receiver with the request line.
    pub(crate) async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (line_tx, line_rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let first_line = request.lines().next().unwrap_or_default().to_string();
            let _ = line_tx.send(first_line);

            let reply = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        (format!("http://{}", addr), line_rx)
    }

    fn client() -> reqwest::Client {
        create_client(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_url_joins_cleanly() {
        assert_eq!(
            endpoint_url("http://localhost:3000/", LotteryAction::PurchaseTicket),
            "http://localhost:3000/api/purchase-ticket"
        );
        assert_eq!(
            endpoint_url("http://localhost:3000", LotteryAction::RefreshState),
            "http://localhost:3000/api/lottery-state"
        );
    }

    #[tokio::test]
    async fn test_configured_timeout_applies() {
        // Accept the connection but never answer
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let client = create_client(Duration::from_millis(200)).unwrap();
        let response = execute_action(
            &client,
            &format!("http://{}", addr),
            LotteryAction::PurchaseTicket,
            4,
        )
        .await;

        assert_eq!(
            response.into_result(),
            Err(ActionError::Transport("request timed out".into()))
        );
    }

    #[tokio::test]
    async fn test_purchase_posts_and_decodes() {
        let (base, line_rx) =
            serve_once("200 OK", r#"{"success":true,"ticketId":"T1"}"#).await;

        let response = execute_action(&client(), &base, LotteryAction::PurchaseTicket, 7).await;

        assert_eq!(response.id(), 7);
        assert_eq!(
            response.into_result(),
            Ok(ActionOutcome::TicketPurchased {
                ticket_id: "T1".into()
            })
        );
        let line = line_rx.await.unwrap();
        assert!(line.starts_with("POST /api/purchase-ticket "), "{}", line);
    }

    #[tokio::test]
    async fn test_state_uses_get() {
        let (base, line_rx) = serve_once("200 OK", r#"{"state":"Open"}"#).await;

        let response = execute_action(&client(), &base, LotteryAction::RefreshState, 1).await;

        assert!(matches!(
            response.into_result(),
            Ok(ActionOutcome::StateLoaded(_))
        ));
        assert!(line_rx.await.unwrap().starts_with("GET /api/lottery-state "));
    }

    #[tokio::test]
    async fn test_server_error_without_shape() {
        let (base, _line_rx) = serve_once("500 Internal Server Error", "oops").await;

        let response = execute_action(&client(), &base, LotteryAction::CloseLottery, 2).await;

        assert_eq!(
            response.into_result(),
            Err(ActionError::Http {
                status: 500,
                body: "oops".into()
            })
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let response = execute_action(
            &client(),
            &format!("http://{}", addr),
            LotteryAction::ClaimPrize,
            3,
        )
        .await;

        assert_eq!(response.action(), LotteryAction::ClaimPrize);
        assert!(matches!(
            response.into_result(),
            Err(ActionError::Transport(_))
        ));
    }
}
