//! Reading picked or dropped files into upload payloads.

use js_sys::Uint8Array;
use privafile_core::{TransportError, UploadPayload};
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use super::dom;

/// Read the full contents of a browser `File`.
pub async fn read_file(file: &File) -> Result<UploadPayload, TransportError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| TransportError::FileReadFailed(dom::js_error_message(&e)))?;
    let mime = file.type_();
    Ok(UploadPayload::new(
        file.name(),
        (!mime.is_empty()).then_some(mime),
        Uint8Array::new(&buffer).to_vec(),
    ))
}
