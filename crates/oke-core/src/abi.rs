//! Minting contract call encoding and receipt decoding.
//!
//! The contract exposes `mint(address to, string tokenURI, bool soulbound)`
//! and emits the standard ERC-721 `Transfer(address,address,uint256)` event.
//! Token metadata is inlined into the token URI as base64 JSON.

use alloy_primitives::{keccak256, Address, B256, U256};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use serde_json::json;

use crate::creator::MintDraft;
use crate::error::AbiError;

/// Signature of the mint entry point.
pub const MINT_SIGNATURE: &str = "mint(address,string,bool)";

/// Signature of the ERC-721 transfer event.
pub const TRANSFER_EVENT: &str = "Transfer(address,address,uint256)";

const WORD: usize = 32;

/// First four bytes of the keccak hash of a function signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Token metadata as a `data:application/json;base64,` URI.
pub fn token_uri(draft: &MintDraft) -> String {
    let metadata = json!({
        "name": draft.name,
        "description": draft.description,
        "image": draft.image,
        "external_url": draft.external_url,
        "attributes": [
            { "trait_type": "transcript", "value": draft.transcript },
            { "trait_type": "soulbound", "value": draft.is_sbt },
        ],
    });
    format!(
        "data:application/json;base64,{}",
        STANDARD.encode(metadata.to_string())
    )
}

/// Calldata for `mint(to, tokenURI, soulbound)`.
pub fn encode_mint_call(to: Address, token_uri: &str, soulbound: bool) -> Vec<u8> {
    let uri = token_uri.as_bytes();
    let padded_len = uri.len().div_ceil(WORD) * WORD;
    let mut data = Vec::with_capacity(4 + WORD * 4 + padded_len);

    data.extend_from_slice(&selector(MINT_SIGNATURE));
    data.extend_from_slice(&to.into_word().0);
    // Offset of the dynamic string, counted from the start of the arguments.
    data.extend_from_slice(&U256::from(3 * WORD).to_be_bytes::<WORD>());
    data.extend_from_slice(&U256::from(u8::from(soulbound)).to_be_bytes::<WORD>());
    data.extend_from_slice(&U256::from(uri.len()).to_be_bytes::<WORD>());
    data.extend_from_slice(uri);
    data.resize(data.len() + (padded_len - uri.len()), 0);
    data
}

/// `0x`-prefixed lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse a JSON-RPC quantity (`"0xaa36a7"`).
pub fn parse_quantity(value: &str) -> Option<u64> {
    let digits = value.trim().strip_prefix("0x")?;
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

/// Log entry of a transaction receipt.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ReceiptLog {
    pub address: Address,
    pub topics: Vec<B256>,
}

/// The subset of `eth_getTransactionReceipt` the app reads.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: B256,
    /// `0x1` on success, `0x0` when reverted. Absent before Byzantium.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub logs: Vec<ReceiptLog>,
}

impl TransactionReceipt {
    pub fn succeeded(&self) -> bool {
        self.status.as_deref().and_then(parse_quantity) != Some(0)
    }

    /// Token id minted by `contract` in this transaction.
    pub fn minted_token_id(&self, contract: Address) -> Result<u64, AbiError> {
        if !self.succeeded() {
            return Err(AbiError::Reverted);
        }

        let transfer = keccak256(TRANSFER_EVENT.as_bytes());
        let log = self
            .logs
            .iter()
            .find(|log| {
                log.address == contract
                    && log.topics.len() == 4
                    && log.topics[0] == transfer
                    && log.topics[1] == B256::ZERO
            })
            .ok_or_else(|| AbiError::MissingTransfer(contract.to_string()))?;

        let token_id = U256::from_be_bytes(log.topics[3].0);
        u64::try_from(token_id).map_err(|_| AbiError::TokenIdOverflow)
    }
}

/// Parse a hex string field from a JSON-RPC response.
pub fn parse_hash(value: &str, field: &'static str) -> Result<B256, AbiError> {
    value
        .parse::<B256>()
        .map_err(|_| AbiError::InvalidHex { field })
}
