//! Token entries displayed by the collection and detail screens.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::creator::MintDraft;

/// A minted token with its display metadata.
///
/// Field names on the wire match the collection index format
/// (`tokenId`, `contractAddress`, `isSbt`, `external_url`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub image: String,
    pub name: String,
    pub description: String,
    pub transcript: String,
    #[serde(rename = "tokenId")]
    pub token_id: u64,
    #[serde(rename = "contractAddress")]
    pub contract_address: Address,
    /// Soulbound (non-transferable) token.
    #[serde(rename = "isSbt")]
    pub is_sbt: bool,
    #[serde(default)]
    pub external_url: String,
}

impl Item {
    /// Build the item for a freshly minted token.
    pub fn from_mint(draft: &MintDraft, token_id: u64, contract: Address) -> Self {
        Self {
            id: Self::make_id(contract, token_id),
            image: draft.image.clone(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            transcript: draft.transcript.clone(),
            token_id,
            contract_address: contract,
            is_sbt: draft.is_sbt,
            external_url: draft.external_url.clone(),
        }
    }

    /// Stable identifier derived from contract and token id.
    pub fn make_id(contract: Address, token_id: u64) -> String {
        format!("{:#x}-{}", contract, token_id)
    }

    pub fn is_transferable(&self) -> bool {
        !self.is_sbt
    }

    /// Block explorer page for this token, if the chain has a known explorer.
    pub fn explorer_url(&self, chain_id: u64) -> Option<String> {
        let base = match chain_id {
            1 => "https://etherscan.io",
            11155111 => "https://sepolia.etherscan.io",
            137 => "https://polygonscan.com",
            80001 => "https://mumbai.polygonscan.com",
            _ => return None,
        };
        Some(format!(
            "{}/token/{}?a={}",
            base, self.contract_address, self.token_id
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn sample_json() -> &'static str {
        r#"{
            "id": "1",
            "image": "ipfs://bafy/1.png",
            "name": "First Oke",
            "description": "hello",
            "transcript": "spoken words",
            "tokenId": 7,
            "contractAddress": "0x5fbdb2315678afecb367f032d93f642f64180aa3",
            "isSbt": true,
            "external_url": "https://github.com/oke"
        }"#
    }

    #[test]
    fn test_deserialize_collection_entry() {
        let item: Item = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(item.id, "1");
        assert_eq!(item.token_id, 7);
        assert!(item.is_sbt);
        assert!(!item.is_transferable());
        assert_eq!(
            item.contract_address,
            address!("0x5fbdb2315678afecb367f032d93f642f64180aa3")
        );
    }

    #[test]
    fn test_missing_external_url_defaults_to_empty() {
        let json = r#"{
            "id": "2",
            "image": "",
            "name": "No link",
            "description": "",
            "transcript": "",
            "tokenId": 2,
            "contractAddress": "0x5fbdb2315678afecb367f032d93f642f64180aa3",
            "isSbt": false
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.external_url, "");
    }

    #[test]
    fn test_wire_names() {
        let item: Item = serde_json::from_str(sample_json()).unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("tokenId").is_some());
        assert!(value.get("contractAddress").is_some());
        assert!(value.get("isSbt").is_some());
        assert!(value.get("token_id").is_none());
    }

    #[test]
    fn test_explorer_url() {
        let item: Item = serde_json::from_str(sample_json()).unwrap();
        let url = item.explorer_url(11155111).unwrap();
        assert!(url.starts_with("https://sepolia.etherscan.io/token/0x"));
        assert!(url.ends_with("?a=7"));
        assert_eq!(item.explorer_url(31337), None);
    }

    #[test]
    fn test_make_id() {
        let contract = address!("0x5fbdb2315678afecb367f032d93f642f64180aa3");
        assert_eq!(
            Item::make_id(contract, 3),
            "0x5fbdb2315678afecb367f032d93f642f64180aa3-3"
        );
    }
}
