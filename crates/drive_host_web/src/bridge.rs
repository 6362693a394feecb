//! HTTP bridge for the drive API.
//!
//! This module contains the WASM/JS `fetch` interop layer and a non-WASM fallback shim.

use drive_host::{AccountInfo, FileEntry};

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::*;
    use drive_host::RenameRequest;
    use js_sys::Promise;
    use serde::de::DeserializeOwned;
    use serde_wasm_bindgen::{from_value, to_value};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;

    #[wasm_bindgen(inline_js = r#"
async function request(method, url, body) {
  const init = { method, credentials: 'same-origin', headers: {} };
  if (body !== undefined) {
    init.headers['Content-Type'] = 'application/json';
    init.body = JSON.stringify(body);
  }
  const res = await fetch(url, init);
  if (!res.ok) {
    throw new Error(`${method} ${url} failed with status ${res.status}`);
  }
  const text = await res.text();
  return text ? JSON.parse(text) : null;
}

export function jsDriveListFiles(apiBase, parent, account) {
  const params = new URLSearchParams({ parent });
  if (account) {
    params.set('account', account);
  }
  return request('GET', `${apiBase}/files?${params.toString()}`);
}

export function jsDriveListAccounts(apiBase) {
  return request('GET', `${apiBase}/accounts`);
}

export function jsDriveRemoveAccount(apiBase, email) {
  return request('DELETE', `${apiBase}/accounts/${encodeURIComponent(email)}`);
}

export function jsDriveRenameFile(apiBase, fileId, body) {
  return request('POST', `${apiBase}/files/${encodeURIComponent(fileId)}/rename`, body);
}

export function jsDriveDeleteFile(apiBase, fileId) {
  return request('DELETE', `${apiBase}/files/${encodeURIComponent(fileId)}`);
}
"#)]
    extern "C" {
        #[wasm_bindgen(js_name = jsDriveListFiles)]
        fn js_drive_list_files(api_base: &str, parent: &str, account: &str) -> Promise;
        #[wasm_bindgen(js_name = jsDriveListAccounts)]
        fn js_drive_list_accounts(api_base: &str) -> Promise;
        #[wasm_bindgen(js_name = jsDriveRemoveAccount)]
        fn js_drive_remove_account(api_base: &str, email: &str) -> Promise;
        #[wasm_bindgen(js_name = jsDriveRenameFile)]
        fn js_drive_rename_file(api_base: &str, file_id: &str, body: JsValue) -> Promise;
        #[wasm_bindgen(js_name = jsDriveDeleteFile)]
        fn js_drive_delete_file(api_base: &str, file_id: &str) -> Promise;
    }

    async fn await_promise(promise: Promise) -> Result<JsValue, String> {
        JsFuture::from(promise).await.map_err(js_error_to_string)
    }

    pub(crate) fn js_error_to_string(err: JsValue) -> String {
        if let Some(text) = err.as_string() {
            return text;
        }
        if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
            if let Some(text) = message.as_string() {
                return text;
            }
        }
        format!("{err:?}")
    }

    async fn promise_to_json<T: DeserializeOwned>(promise: Promise) -> Result<T, String> {
        let value = await_promise(promise).await?;
        from_value(value).map_err(|e| e.to_string())
    }

    pub async fn list_files(
        api_base: &str,
        parent_id: &str,
        account: Option<&str>,
    ) -> Result<Vec<FileEntry>, String> {
        promise_to_json(js_drive_list_files(
            api_base,
            parent_id,
            account.unwrap_or_default(),
        ))
        .await
    }

    pub async fn list_accounts(api_base: &str) -> Result<Vec<AccountInfo>, String> {
        promise_to_json(js_drive_list_accounts(api_base)).await
    }

    pub async fn remove_account(api_base: &str, email: &str) -> Result<(), String> {
        let _ = await_promise(js_drive_remove_account(api_base, email)).await?;
        Ok(())
    }

    pub async fn rename_file(api_base: &str, file_id: &str, new_name: &str) -> Result<(), String> {
        let body = to_value(&RenameRequest::new(new_name)).map_err(|e| e.to_string())?;
        let _ = await_promise(js_drive_rename_file(api_base, file_id, body)).await?;
        Ok(())
    }

    pub async fn delete_file(api_base: &str, file_id: &str) -> Result<(), String> {
        let _ = await_promise(js_drive_delete_file(api_base, file_id)).await?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::*;

    fn unsupported() -> String {
        "Browser fetch APIs are only available when compiled for wasm32".to_string()
    }

    pub async fn list_files(
        _api_base: &str,
        _parent_id: &str,
        _account: Option<&str>,
    ) -> Result<Vec<FileEntry>, String> {
        Err(unsupported())
    }

    pub async fn list_accounts(_api_base: &str) -> Result<Vec<AccountInfo>, String> {
        Err(unsupported())
    }

    pub async fn remove_account(_api_base: &str, _email: &str) -> Result<(), String> {
        Err(unsupported())
    }

    pub async fn rename_file(
        _api_base: &str,
        _file_id: &str,
        _new_name: &str,
    ) -> Result<(), String> {
        Err(unsupported())
    }

    pub async fn delete_file(_api_base: &str, _file_id: &str) -> Result<(), String> {
        Err(unsupported())
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use imp::js_error_to_string;

pub async fn list_files(
    api_base: &str,
    parent_id: &str,
    account: Option<&str>,
) -> Result<Vec<FileEntry>, String> {
    imp::list_files(api_base, parent_id, account).await
}

pub async fn list_accounts(api_base: &str) -> Result<Vec<AccountInfo>, String> {
    imp::list_accounts(api_base).await
}

pub async fn remove_account(api_base: &str, email: &str) -> Result<(), String> {
    imp::remove_account(api_base, email).await
}

pub async fn rename_file(api_base: &str, file_id: &str, new_name: &str) -> Result<(), String> {
    imp::rename_file(api_base, file_id, new_name).await
}

pub async fn delete_file(api_base: &str, file_id: &str) -> Result<(), String> {
    imp::delete_file(api_base, file_id).await
}
