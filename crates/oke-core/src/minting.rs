//! Minting overlay state.

use alloy_primitives::TxHash;

use crate::creator::MintDraft;
use crate::item::Item;

/// Progress of an in-flight mint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MintStage {
    /// Waiting for the user to sign in the wallet.
    AwaitingSignature,
    /// Transaction sent, waiting for a receipt.
    Pending { tx_hash: TxHash },
    Confirmed { item: Item },
    Failed { message: String },
}

impl MintStage {
    /// True once the mint can no longer change on its own.
    pub fn is_settled(&self) -> bool {
        matches!(self, MintStage::Confirmed { .. } | MintStage::Failed { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            MintStage::AwaitingSignature => "Confirm the transaction in your wallet",
            MintStage::Pending { .. } => "Minting...",
            MintStage::Confirmed { .. } => "Minted",
            MintStage::Failed { .. } => "Mint failed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintingDetails {
    pub draft: MintDraft,
    pub stage: MintStage,
}

/// State of the minting overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MintingData {
    pub is_open: bool,
    pub details: Option<MintingDetails>,
}

impl MintingData {
    /// Open the overlay for a new mint.
    pub fn start(draft: MintDraft) -> Self {
        Self {
            is_open: true,
            details: Some(MintingDetails {
                draft,
                stage: MintStage::AwaitingSignature,
            }),
        }
    }

    pub fn stage(&self) -> Option<&MintStage> {
        self.details.as_ref().map(|d| &d.stage)
    }

    /// A mint is running and has not settled yet.
    pub fn in_flight(&self) -> bool {
        self.is_open && self.stage().is_some_and(|s| !s.is_settled())
    }

    /// Move an unsettled mint to `stage`. Settled or absent mints are left alone.
    pub fn advance(&self, stage: MintStage) -> Self {
        match &self.details {
            Some(details) if self.is_open && !details.stage.is_settled() => Self {
                is_open: true,
                details: Some(MintingDetails {
                    draft: details.draft.clone(),
                    stage,
                }),
            },
            _ => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> MintDraft {
        MintDraft {
            name: "oke".to_string(),
            description: String::new(),
            image: String::new(),
            transcript: "oke".to_string(),
            is_sbt: false,
            external_url: String::new(),
        }
    }

    #[test]
    fn test_default_closed() {
        let data = MintingData::default();
        assert!(!data.is_open);
        assert!(data.stage().is_none());
        assert!(!data.in_flight());
    }

    #[test]
    fn test_start_awaits_signature() {
        let data = MintingData::start(draft());
        assert!(data.is_open);
        assert_eq!(data.stage(), Some(&MintStage::AwaitingSignature));
        assert!(data.in_flight());
    }

    #[test]
    fn test_advance_stops_at_settled() {
        let failed = MintingData::start(draft()).advance(MintStage::Failed {
            message: "rejected".to_string(),
        });
        assert!(!failed.in_flight());

        let again = failed.advance(MintStage::Pending {
            tx_hash: TxHash::ZERO,
        });
        assert_eq!(again, failed);
    }

    #[test]
    fn test_advance_without_mint_is_noop() {
        let closed = MintingData::default();
        assert_eq!(closed.advance(MintStage::AwaitingSignature), closed);
    }
}
