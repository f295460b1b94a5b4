//! Network actor - runs lottery calls in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_action};

/// Network actor that turns commands into HTTP calls
pub struct NetworkActor {
    client: reqwest::Client,
    base_url: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(
        config: &Config,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> anyhow::Result<Self> {
        Ok(NetworkActor {
            client: create_client(config.request_timeout())?,
            base_url: config.base_url.clone(),
            response_tx,
            active_requests: JoinSet::new(),
        })
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Execute { id, action }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let base_url = self.base_url.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, ?action, path = action.path(), "executing request");
                                let result = execute_action(&client, &base_url, action, id).await;
                                tracing::info!(id, time_ms = result.time_ms(), "request completed");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) => {
                            self.active_requests.abort_all();
                            break;
                        }

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LotteryAction;
    use crate::network::client::tests::serve_once;
    use crate::network::decode::ActionOutcome;

    #[tokio::test]
    async fn test_execute_and_reply() {
        let (base, _line_rx) = serve_once("200 OK", r#"{"message":"no prize"}"#).await;
        let config = Config {
            base_url: base,
            ..Config::default()
        };

        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(NetworkActor::new(&config, resp_tx).unwrap().run(cmd_rx));

        cmd_tx
            .send(NetworkCommand::Execute {
                id: 11,
                action: LotteryAction::ClaimPrize,
            })
            .unwrap();

        let response = resp_rx.recv().await.unwrap();
        assert_eq!(response.id(), 11);
        assert_eq!(
            response.into_result(),
            Ok(ActionOutcome::PrizeClaim {
                message: "no prize".into()
            })
        );

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_stops_when_channel_closes() {
        let (resp_tx, _resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
        let handle = tokio::spawn(NetworkActor::new(&Config::default(), resp_tx).unwrap().run(cmd_rx));

        drop(cmd_tx);
        handle.await.unwrap();
    }
}
