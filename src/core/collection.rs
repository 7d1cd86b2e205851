//! Collection index loading.

use oke_core::{Address, Item};
use tracing::info;

use crate::config::{COLLECTION_URL, cache};
use crate::core::error::FetchError;
use crate::utils::{self, fetch_json_cached};

/// Fetch the collection index (cached for the session).
pub async fn load() -> Result<Vec<Item>, FetchError> {
    let items: Vec<Item> = fetch_json_cached(COLLECTION_URL, cache::COLLECTION_KEY).await?;
    info!(count = items.len(), "collection loaded");
    Ok(items)
}

/// Drop the session copy and fetch the index again.
pub async fn reload() -> Result<Vec<Item>, FetchError> {
    utils::cache::remove(cache::COLLECTION_KEY);
    load().await
}

/// Items to show for the connected network.
///
/// When the network has a known contract only its tokens are listed;
/// otherwise everything is shown.
pub fn visible_items(items: &[Item], contract: Option<Address>) -> Vec<Item> {
    match contract {
        Some(contract) => items
            .iter()
            .filter(|item| item.contract_address == contract)
            .cloned()
            .collect(),
        None => items.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, contract: Address) -> Item {
        Item {
            id: id.to_string(),
            image: String::new(),
            name: id.to_string(),
            description: String::new(),
            transcript: String::new(),
            token_id: 1,
            contract_address: contract,
            is_sbt: false,
            external_url: String::new(),
        }
    }

    #[test]
    fn test_visible_items_filters_by_contract() {
        let a = Address::repeat_byte(0xaa);
        let b = Address::repeat_byte(0xbb);
        let items = vec![item("1", a), item("2", b), item("3", a)];

        let ids: Vec<String> = visible_items(&items, Some(a))
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(visible_items(&items, None).len(), 3);
    }
}
