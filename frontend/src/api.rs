use gloo_net::http::Request;
use trainingdiary::{DiaryError, DiaryResult, HttpClient, HttpRequest, HttpResponse};
use trainingdiary_shared::protocol::HttpMethod;

/// 基于浏览器 fetch 的 HTTP 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> DiaryResult<HttpResponse> {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
            HttpMethod::Patch => Request::patch(&req.url),
        };
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| DiaryError::network(e.to_string()).in_op_with("fetch.build", &req.url))?;

        let res = request.send().await.map_err(|e| {
            DiaryError::network(e.to_string()).in_op_with("fetch.send", &req.url)
        })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            DiaryError::network(e.to_string()).in_op_with("fetch.read", &req.url)
        })?;

        Ok(HttpResponse { status, body })
    }
}
