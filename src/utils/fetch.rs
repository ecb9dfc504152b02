//! Fetch API transport for the core API client.

use js_sys::Uint8Array;
use privafile_core::TransportError;
use privafile_core::api::{HttpRequest, HttpResponse, Transport};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use super::dom;

/// [`Transport`] backed by `window.fetch`.
///
/// Non-2xx responses are returned as-is; the API client decides what
/// counts as success. No timeout is applied.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let window = dom::window().ok_or(TransportError::NoWindow)?;

        let headers = Headers::new().map_err(|_| TransportError::RequestCreationFailed)?;
        for (name, value) in &request.headers {
            headers
                .set(name, value)
                .map_err(|_| TransportError::RequestCreationFailed)?;
        }

        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());
        opts.set_mode(RequestMode::Cors);
        opts.set_headers(&headers);
        if let Some(body) = &request.body {
            opts.set_body(&Uint8Array::from(body.as_slice()));
        }

        let fetch_request = Request::new_with_str_and_init(&request.url, &opts)
            .map_err(|_| TransportError::RequestCreationFailed)?;

        let result = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(|e| TransportError::Network(dom::js_error_message(&e)))?;
        let resp: Response = result
            .dyn_into()
            .map_err(|_| TransportError::ResponseReadFailed)?;

        let buffer = JsFuture::from(
            resp.array_buffer()
                .map_err(|_| TransportError::ResponseReadFailed)?,
        )
        .await
        .map_err(|_| TransportError::ResponseReadFailed)?;

        Ok(HttpResponse::new(
            resp.status(),
            Uint8Array::new(&buffer).to_vec(),
        ))
    }
}
