//! Wallet connection logic using web-sys.
//!
//! Provides MetaMask (EIP-1193) wallet connectivity through
//! direct JavaScript interop via Reflect API.

use js_sys::{Array, Function, Object, Promise, Reflect};
use oke_core::abi::parse_quantity;
use oke_core::{Address, ProviderHandle, WalletSession};
use serde::Serialize;
use tracing::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::JsFuture;

use crate::config::{WALLET_SESSION_KEY, WALLET_TIMEOUT_MS};
use crate::core::error::WalletError;
use crate::utils::{RaceResult, dom, race_with_timeout};

/// Get the window.ethereum object injected by the wallet extension.
fn get_ethereum() -> Result<Object, WalletError> {
    let window = dom::window().ok_or(WalletError::NoWindow)?;
    Reflect::get(&window, &"ethereum".into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(WalletError::NotInstalled)
}

/// Build the `ethereum.request({ method, params })` promise.
fn request_promise(method: &str, params: Option<&JsValue>) -> Result<Promise, WalletError> {
    let ethereum = get_ethereum()?;

    let args = Object::new();
    Reflect::set(&args, &"method".into(), &method.into())
        .map_err(|_| WalletError::RequestCreationFailed)?;
    if let Some(params) = params {
        Reflect::set(&args, &"params".into(), params)
            .map_err(|_| WalletError::RequestCreationFailed)?;
    }

    let request = Reflect::get(&ethereum, &"request".into())
        .map_err(|_| WalletError::RequestCreationFailed)?
        .dyn_into::<Function>()
        .map_err(|_| WalletError::RequestCreationFailed)?;

    Ok(request
        .call1(&ethereum, &args)
        .map_err(|_| WalletError::RequestCreationFailed)?
        .into())
}

/// Call an EIP-1193 method with JSON-serializable params.
pub async fn request<P: Serialize>(method: &str, params: &P) -> Result<JsValue, WalletError> {
    let params = params
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|_| WalletError::RequestCreationFailed)?;
    debug!(method, "wallet request");
    JsFuture::from(request_promise(method, Some(&params))?)
        .await
        .map_err(|e| WalletError::RequestRejected(js_error_message(&e)))
}

/// Call an EIP-1193 method without params.
async fn request_no_params(method: &str) -> Result<JsValue, WalletError> {
    JsFuture::from(request_promise(method, None)?)
        .await
        .map_err(|e| WalletError::RequestRejected(js_error_message(&e)))
}

/// Human readable message of a rejected wallet promise.
///
/// EIP-1193 errors are objects with `code` and `message`.
fn js_error_message(error: &JsValue) -> String {
    Reflect::get(error, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}

/// Check if MetaMask (or compatible wallet) is installed
pub fn is_available() -> bool {
    get_ethereum().is_ok()
}

/// Name of the injected provider.
pub fn provider_name() -> String {
    let is_metamask = get_ethereum()
        .ok()
        .and_then(|eth| Reflect::get(&eth, &"isMetaMask".into()).ok())
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if is_metamask {
        "MetaMask".to_string()
    } else {
        "Injected wallet".to_string()
    }
}

/// Get current chain ID
pub async fn get_chain_id() -> Result<u64, WalletError> {
    let result = request_no_params("eth_chainId").await?;
    result
        .as_string()
        .as_deref()
        .and_then(parse_quantity)
        .ok_or(WalletError::InvalidResponse("eth_chainId"))
}

fn parse_account(value: &JsValue) -> Option<Address> {
    Array::from(value).get(0).as_string()?.parse().ok()
}

/// Request wallet connection (shows the wallet popup) and open a session.
pub async fn connect() -> Result<WalletSession, WalletError> {
    let accounts = request_no_params("eth_requestAccounts").await?;
    let address = parse_account(&accounts).ok_or(WalletError::NoAccount)?;
    let chain_id = get_chain_id().await?;
    info!(%address, chain_id, "wallet connected");
    Ok(WalletSession::new(
        address,
        chain_id,
        ProviderHandle::new(provider_name()),
    ))
}

/// Reopen a previous session without a popup.
///
/// Returns `None` when the wallet no longer exposes an account or does not
/// answer within `WALLET_TIMEOUT_MS`.
pub async fn restore() -> Option<WalletSession> {
    let promise = request_promise("eth_accounts", None).ok()?;

    let address = match race_with_timeout(promise, WALLET_TIMEOUT_MS).await {
        RaceResult::Completed(result) => parse_account(&result)?,
        RaceResult::TimedOut | RaceResult::Error(_) => return None,
    };
    let chain_id = get_chain_id().await.ok()?;
    info!(%address, chain_id, "wallet session restored");
    Some(WalletSession::new(
        address,
        chain_id,
        ProviderHandle::new(provider_name()),
    ))
}

/// Check if user has previously connected (localStorage flag).
pub fn has_session() -> bool {
    dom::local_storage()
        .and_then(|s| s.get_item(WALLET_SESSION_KEY).ok().flatten())
        .is_some()
}

/// Save login session to localStorage.
pub fn save_session() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(WALLET_SESSION_KEY, "1");
    }
}

/// Clear login session from localStorage.
pub fn clear_session() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(WALLET_SESSION_KEY);
    }
}

// ============================================================================
// Event Listeners
// ============================================================================

/// Subscribe to a provider event with `ethereum.on(event, closure)`.
///
/// The closure is leaked with `forget()`; listeners live as long as the page.
fn subscribe(event: &str, handler: impl Fn(JsValue) + 'static) -> Result<(), WalletError> {
    let ethereum = get_ethereum()?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn(JsValue)>);

    let on_fn = Reflect::get(&ethereum, &"on".into())
        .map_err(|_| WalletError::RequestCreationFailed)?
        .dyn_into::<Function>()
        .map_err(|_| WalletError::RequestCreationFailed)?;

    on_fn
        .call2(&ethereum, &event.into(), closure.as_ref())
        .map_err(|_| WalletError::RequestCreationFailed)?;

    closure.forget();
    Ok(())
}

/// Register a callback for when the connected account changes.
///
/// The callback receives `Some(address)` for the new active account,
/// or `None` when every account was disconnected.
pub fn on_accounts_changed(
    callback: impl Fn(Option<Address>) + 'static,
) -> Result<(), WalletError> {
    subscribe("accountsChanged", move |accounts| {
        callback(parse_account(&accounts));
    })
}

/// Register a callback for when the connected chain changes.
///
/// The provider reports the chain as a hex quantity ("0xaa36a7").
pub fn on_chain_changed(callback: impl Fn(u64) + 'static) -> Result<(), WalletError> {
    subscribe("chainChanged", move |chain_id| {
        if let Some(id) = chain_id.as_string().as_deref().and_then(parse_quantity) {
            callback(id);
        }
    })
}

/// Register a callback for when the provider loses its connection to the chain.
pub fn on_disconnect(callback: impl Fn(String) + 'static) -> Result<(), WalletError> {
    subscribe("disconnect", move |error| {
        callback(js_error_message(&error));
    })
}
