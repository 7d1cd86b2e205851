//! Creator draft persistence in localStorage.
//!
//! The draft (including the picked image as a `data:` URL) is written on
//! every change so an accidental reload does not lose the user's input.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use js_sys::Uint8Array;
use oke_core::{CreatorState, FileRef, MAX_FILE_BYTES};
use tracing::warn;
use wasm_bindgen_futures::JsFuture;

use crate::config::CREATOR_STORAGE_KEY;
use crate::core::error::StorageError;
use crate::utils::dom;

/// Load the saved draft, if any.
///
/// A draft that no longer parses is discarded.
pub fn load() -> Option<CreatorState> {
    let storage = dom::local_storage()?;
    let json = storage.get_item(CREATOR_STORAGE_KEY).ok()??;
    match serde_json::from_str(&json) {
        Ok(state) => Some(state),
        Err(e) => {
            warn!(%e, "discarding unreadable creator draft");
            let _ = storage.remove_item(CREATOR_STORAGE_KEY);
            None
        }
    }
}

/// Save the draft.
pub fn save(state: &CreatorState) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    let json = serde_json::to_string(state).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage
        .set_item(CREATOR_STORAGE_KEY, &json)
        .map_err(|_| StorageError::WriteFailed)
}

/// Remove the saved draft.
pub fn clear() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(CREATOR_STORAGE_KEY);
    }
}

/// Read a picked file into a [`FileRef`].
///
/// Files over [`MAX_FILE_BYTES`] are not read; validation reports them.
pub async fn read_file(file: web_sys::File) -> Result<FileRef, StorageError> {
    let size = file.size() as usize;
    let mime = file.type_();
    let name = file.name();

    let data_url = if size > MAX_FILE_BYTES {
        String::new()
    } else {
        let buffer = JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| StorageError::ReadFile(format!("{:?}", e)))?;
        let bytes = Uint8Array::new(&buffer).to_vec();
        data_url(&mime, &bytes)
    };

    Ok(FileRef {
        name,
        mime,
        size,
        data_url,
    })
}

/// `data:` URL for `bytes`.
fn data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn saved_draft_survives_reload() {
        let draft = CreatorState {
            transcript: "keep me".to_string(),
            options_checked: true,
            ..CreatorState::default()
        };
        save(&draft).unwrap();
        assert_eq!(load(), Some(draft));

        clear();
        assert_eq!(load(), None);
    }

    #[wasm_bindgen_test]
    fn corrupt_draft_is_discarded() {
        let storage = dom::local_storage().unwrap();
        storage.set_item(CREATOR_STORAGE_KEY, "{not json").unwrap();
        assert_eq!(load(), None);
        assert_eq!(storage.get_item(CREATOR_STORAGE_KEY).unwrap(), None);
    }
}
