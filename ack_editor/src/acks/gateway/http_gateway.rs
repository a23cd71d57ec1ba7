// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use reqwest::{Client, Response, Url};
use test_ack_schema::{AckKey, AcknowledgmentRecord};

use crate::{DEBUG_GATEWAY_MOD, GatewayConfig, GatewayError, GatewayResult,
            PersistenceGateway, WriteAccess};

/// Talks to the dashboard's REST resource. No timeouts, retries, or cancellation: a
/// call settles when the server (or the network stack) says so.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    /// # Errors
    ///
    /// Returns an error if the HTTP client can't be built (eg: TLS backend
    /// initialization fails) or the configured URL is invalid.
    pub fn try_new(config: GatewayConfig) -> miette::Result<Self> {
        // Fail at mount time rather than on the first save.
        config.collection_url()?;
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .into_diagnostic()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &GatewayConfig { &self.config }
}

impl PersistenceGateway for HttpGateway {
    async fn save(
        &self,
        _access: WriteAccess,
        record: AcknowledgmentRecord,
    ) -> GatewayResult<AckKey> {
        let url = self.config.collection_url()?;
        let response = self.client.post(url.clone()).json(&record).send().await?;
        let response = check_status("POST", &url, response)?;
        let body = response.text().await?;
        AckKey::try_from_response_body(&body).ok_or(GatewayError::MissingKey)
    }

    async fn delete(&self, _access: WriteAccess, key: AckKey) -> GatewayResult<()> {
        let url = self.config.item_url(&key)?;
        let response = self.client.delete(url.clone()).send().await?;
        check_status("DELETE", &url, response)?;
        Ok(())
    }
}

/// Any non 2xx status is a failure.
fn check_status(
    method: &'static str,
    url: &Url,
    response: Response,
) -> GatewayResult<Response> {
    let status = response.status();
    if status.is_success() {
        // % is Display, ? is Debug.
        DEBUG_GATEWAY_MOD.then(|| {
            tracing::debug!(
                message = "request succeeded",
                method = method,
                url = %url,
                status = %status
            );
        });
        Ok(response)
    } else {
        tracing::error!(
            message = "request failed",
            method = method,
            url = %url,
            status = %status
        );
        Err(GatewayError::HttpStatus {
            method,
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use tokio::{io::{AsyncReadExt, AsyncWriteExt},
                net::TcpListener,
                task::JoinHandle};

    use super::*;
    use crate::{Capabilities, assert_eq2};

    /// Serves exactly one request with `status_line` and `body`, and hands back the raw
    /// request it received.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0_u8; 1024];
            loop {
                let read = stream.read(&mut buf).await.unwrap();
                raw.extend_from_slice(&buf[..read]);
                if read == 0 || is_complete_request(&raw) {
                    break;
                }
            }
            let response = format!(
                "{status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            String::from_utf8_lossy(&raw).to_string()
        });

        (base_url, handle)
    }

    fn is_complete_request(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        body.len() >= content_length
    }

    fn gateway(base_url: &str) -> HttpGateway {
        HttpGateway::try_new(GatewayConfig::new(base_url)).unwrap()
    }

    fn access() -> WriteAccess { Capabilities::writable().write_access().unwrap() }

    #[tokio::test]
    async fn save_posts_json_and_reads_key() {
        let (base_url, server) = serve_once("HTTP/1.1 200 OK", "\"k42\"").await;
        let record = AcknowledgmentRecord {
            branches: vec!["alpha".into(), "beta".into()],
            ..AcknowledgmentRecord::new_draft("T")
        };

        let key = gateway(&base_url).save(access(), record).await.unwrap();
        assert_eq2!(key, AckKey::new("k42"));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/test_acknowledgments HTTP/1.1"));
        assert!(request.contains(r#""branches":["alpha","beta"]"#));
        assert!(request.contains(r#""key":null"#));
    }

    #[tokio::test]
    async fn save_with_empty_body_is_missing_key() {
        let (base_url, _server) = serve_once("HTTP/1.1 200 OK", "").await;
        let result = gateway(&base_url)
            .save(access(), AcknowledgmentRecord::new_draft("T"))
            .await;
        assert!(matches!(result, Err(GatewayError::MissingKey)));
    }

    #[tokio::test]
    async fn delete_non_2xx_is_failure() {
        let (base_url, server) =
            serve_once("HTTP/1.1 500 Internal Server Error", "").await;
        let result = gateway(&base_url).delete(access(), AckKey::new("k1")).await;
        assert!(matches!(
            result,
            Err(GatewayError::HttpStatus {
                method: "DELETE",
                status: 500,
                ..
            })
        ));
        let request = server.await.unwrap();
        assert!(request.starts_with("DELETE /api/test_acknowledgments/k1 HTTP/1.1"));
    }

    #[tokio::test]
    async fn delete_success() {
        let (base_url, _server) = serve_once("HTTP/1.1 200 OK", "").await;
        gateway(&base_url)
            .delete(access(), AckKey::new("k1"))
            .await
            .unwrap();
    }

    #[test]
    fn invalid_base_url_fails_at_construction() {
        assert!(HttpGateway::try_new(GatewayConfig::new("not a url")).is_err());
    }
}
