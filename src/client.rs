use reqwest::Client;

use crate::error::Result;

/// Issue one GET for `url` and read the response body to completion.
///
/// Draining the body hands the underlying connection back to the client's
/// pool; on the error paths the response is dropped, which releases it just
/// the same. A non-2xx status counts as a request failure.
///
/// # Returns
///
/// The number of body bytes read.
pub(crate) async fn fetch_asset(client: &Client, url: &str) -> Result<usize> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.bytes().await?;
    Ok(body.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchmarkError;

    #[tokio::test]
    async fn test_fetch_asset_success() {
        let client = Client::new();
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/index.html")
            .with_status(200)
            .with_body("<html></html>")
            .create_async()
            .await;

        let result = fetch_asset(&client, &format!("{}/index.html", server.url())).await;
        assert_eq!(result.unwrap(), "<html></html>".len());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_asset_not_found() {
        let client = Client::new();
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/missing.css")
            .with_status(404)
            .create_async()
            .await;

        let result = fetch_asset(&client, &format!("{}/missing.css", server.url())).await;
        match result {
            Err(FetchmarkError::Http(err)) => assert!(err.is_status()),
            other => panic!("expected an HTTP status error, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_asset_server_error() {
        let client = Client::new();
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/assets/js/main.js")
            .with_status(500)
            .create_async()
            .await;

        let result = fetch_asset(&client, &format!("{}/assets/js/main.js", server.url())).await;
        match result {
            Err(FetchmarkError::Http(err)) => assert!(err.is_status()),
            other => panic!("expected an HTTP status error, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_asset_connection_refused() {
        let client = Client::new();

        let result = fetch_asset(&client, "http://127.0.0.1:1/index.html").await;
        match result {
            Err(FetchmarkError::Http(err)) => assert!(err.is_connect() || err.is_request()),
            other => panic!("expected a connection error, got {:?}", other),
        }
    }
}
