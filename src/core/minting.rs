//! Minting through the injected wallet.
//!
//! Sends the `mint` transaction with `eth_sendTransaction`, then polls for the
//! receipt and reads the minted token id from its `Transfer` event.

use gloo_timers::future::TimeoutFuture;
use oke_core::abi::{self, TransactionReceipt};
use oke_core::{Address, Item, MintDraft, TxHash, WalletSession};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::receipt;
use crate::core::error::{MintError, WalletError};
use crate::core::wallet;

#[derive(Serialize)]
struct TransactionRequest {
    from: String,
    to: String,
    data: String,
}

/// Mint `draft` to the session's account on `contract`.
///
/// `on_submitted` runs once the wallet returns the transaction hash.
pub async fn submit(
    draft: &MintDraft,
    session: &WalletSession,
    contract: Address,
    on_submitted: impl FnOnce(TxHash),
) -> Result<Item, MintError> {
    let token_uri = abi::token_uri(draft);
    let calldata = abi::encode_mint_call(session.address(), &token_uri, draft.is_sbt);

    let tx = TransactionRequest {
        from: session.signer().address().to_string(),
        to: contract.to_string(),
        data: abi::to_hex(&calldata),
    };
    let hash = wallet::request("eth_sendTransaction", &[tx])
        .await?
        .as_string()
        .ok_or(WalletError::InvalidResponse("eth_sendTransaction"))?;
    let tx_hash = abi::parse_hash(&hash, "transaction hash")?;
    info!(%tx_hash, "mint submitted");
    on_submitted(tx_hash);

    let receipt = wait_for_receipt(tx_hash).await?;
    let token_id = receipt.minted_token_id(contract)?;
    info!(%tx_hash, token_id, "mint confirmed");

    Ok(Item::from_mint(draft, token_id, contract))
}

/// Poll `eth_getTransactionReceipt` until the transaction is mined.
async fn wait_for_receipt(tx_hash: TxHash) -> Result<TransactionReceipt, MintError> {
    let hash = tx_hash.to_string();
    for attempt in 1..=receipt::MAX_ATTEMPTS {
        TimeoutFuture::new(receipt::POLL_INTERVAL_MS).await;

        let value = match wallet::request("eth_getTransactionReceipt", &[&hash]).await {
            Ok(value) => value,
            // Some providers reject while the node catches up; keep polling.
            Err(e) => {
                warn!(%e, attempt, "receipt lookup failed");
                continue;
            }
        };
        if value.is_null() || value.is_undefined() {
            debug!(attempt, "receipt not available yet");
            continue;
        }

        return serde_wasm_bindgen::from_value(value)
            .map_err(|_| WalletError::InvalidResponse("eth_getTransactionReceipt").into());
    }

    Err(MintError::Timeout {
        attempts: receipt::MAX_ATTEMPTS,
    })
}
