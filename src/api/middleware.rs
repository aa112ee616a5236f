use std::time::Instant;

use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

/// Logs one line per API request: method, path, status and latency.
pub struct RequestLogger;

impl<E: Endpoint> Middleware<E> for RequestLogger {
    type Output = RequestLoggerEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RequestLoggerEndpoint { inner: ep }
    }
}

pub struct RequestLoggerEndpoint<E> {
    inner: E,
}

impl<E: Endpoint> Endpoint for RequestLoggerEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let start = Instant::now();

        match self.inner.call(req).await {
            Ok(resp) => {
                let resp = resp.into_response();
                tracing::info!(
                    "{} {} {} in {}ms",
                    method,
                    path,
                    resp.status().as_u16(),
                    start.elapsed().as_millis()
                );
                Ok(resp)
            }
            Err(err) => {
                tracing::info!(
                    "{} {} failed in {}ms: {}",
                    method,
                    path,
                    start.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}
