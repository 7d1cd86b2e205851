//! Creator flow input and its validation into a mint request.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::CreatorError;

/// Largest file accepted by the creator flow.
///
/// The file is kept as a `data:` URL in localStorage and inlined into the
/// token metadata, so it has to stay well under the storage quota.
pub const MAX_FILE_BYTES: usize = 1024 * 1024;

/// Maximum length of the generated token name (characters).
const NAME_LEN: usize = 32;

/// A file picked in the creator flow, kept as a `data:` URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub mime: String,
    /// Size of the original file in bytes.
    pub size: usize,
    pub data_url: String,
}

impl FileRef {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// In-progress creator input that survives a reload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorState {
    pub file: Option<FileRef>,
    pub transcript: String,
    /// The user acknowledged the minting options (SBT, metadata is public).
    #[serde(rename = "optionsChecked")]
    pub options_checked: bool,
    /// Mint as a non-transferable token.
    #[serde(default, rename = "isSbt")]
    pub is_sbt: bool,
}

impl CreatorState {
    /// True when nothing has been entered yet.
    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.transcript.trim().is_empty() && !self.options_checked
    }

    /// Validate the input and produce a mint request.
    pub fn validate(&self) -> Result<MintDraft, CreatorError> {
        let file = self.file.as_ref().ok_or(CreatorError::MissingFile)?;
        if !file.is_image() {
            return Err(CreatorError::UnsupportedType(file.mime.clone()));
        }
        if file.size > MAX_FILE_BYTES {
            return Err(CreatorError::FileTooLarge {
                size: file.size,
                limit: MAX_FILE_BYTES,
            });
        }

        let transcript = normalize_transcript(&self.transcript);
        if transcript.is_empty() {
            return Err(CreatorError::EmptyTranscript);
        }
        if !self.options_checked {
            return Err(CreatorError::OptionsNotAcknowledged);
        }

        Ok(MintDraft {
            name: draft_name(&transcript),
            description: format!("Minted from {}", file.name),
            image: file.data_url.clone(),
            transcript,
            is_sbt: self.is_sbt,
            external_url: String::new(),
        })
    }
}

/// A validated request to mint a new token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintDraft {
    pub name: String,
    pub description: String,
    pub image: String,
    pub transcript: String,
    pub is_sbt: bool,
    pub external_url: String,
}

/// NFC-normalize, trim, and collapse runs of blank lines.
fn normalize_transcript(raw: &str) -> String {
    let normalized: String = raw.nfc().collect();
    let mut out = String::with_capacity(normalized.len());
    let mut blank_run = 0;
    for line in normalized.trim().lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line);
    }
    out
}

/// Token name from the first line of the transcript.
fn draft_name(transcript: &str) -> String {
    let first = transcript.lines().next().unwrap_or_default().trim();
    if first.chars().count() <= NAME_LEN {
        first.to_string()
    } else {
        let cut: String = first.chars().take(NAME_LEN - 3).collect();
        format!("{}...", cut.trim_end())
    }
}
