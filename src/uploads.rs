//! Staged binary uploads and their client-side size limits.
//!
//! An image picked in the editor is held locally (bytes + preview) until the
//! section is saved; it never reaches the network on its own, and an oversize
//! pick is rejected before any request is made.

use crate::errors::SaveError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Asset kinds and byte limits
// ============================================================================

/// What an upload is for. Limits differ per asset: the favicon is kept small,
/// everything else shares the logo's cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    Logo,
    Favicon,
    SlideImage,
    TestimonialPhoto,
    BackgroundImage,
}

pub const LOGO_BYTE_LIMIT: usize = 2 * 1024 * 1024;
pub const FAVICON_BYTE_LIMIT: usize = 500 * 1024;

impl AssetKind {
    pub fn byte_limit(&self) -> usize {
        match self {
            AssetKind::Favicon => FAVICON_BYTE_LIMIT,
            _ => LOGO_BYTE_LIMIT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Logo => "logo",
            AssetKind::Favicon => "tab icon",
            AssetKind::SlideImage => "slide image",
            AssetKind::TestimonialPhoto => "testimonial photo",
            AssetKind::BackgroundImage => "background image",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// PendingUpload
// ============================================================================

/// A staged, not-yet-uploaded binary plus enough metadata to transmit it.
/// Cleared on successful save, discarded on cancel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingUpload {
    pub kind: AssetKind,
    pub filename: String,
    pub mime_type: String,
    bytes: Vec<u8>,
}

impl PendingUpload {
    /// Stage a binary for upload. Fails with `TooLarge` when the content
    /// exceeds the asset's byte limit; nothing oversize is ever held.
    pub fn stage(
        kind: AssetKind,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, SaveError> {
        let limit = kind.byte_limit();
        if bytes.len() > limit {
            return Err(SaveError::TooLarge {
                kind,
                size: bytes.len(),
                limit,
            });
        }
        Ok(Self {
            kind,
            filename: filename.into(),
            mime_type: mime_type.into(),
            bytes,
        })
    }

    /// Bypass the limit check. Records deserialized from edit files can hold
    /// oversize content this way, which is what the save-path re-check is
    /// for.
    #[cfg(test)]
    pub(crate) fn unchecked(
        kind: AssetKind,
        filename: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            kind,
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Base64 content as transmitted to the backend (no data-URL prefix).
    pub fn base64_content(&self) -> String {
        BASE64.encode(&self.bytes)
    }

    /// Local preview, same shape a FileReader data URL would have.
    pub fn preview_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64_content())
    }
}

// ============================================================================
// ImageField — hosted value plus optional staged replacement
// ============================================================================

/// An image-bearing record field: the URL the backend currently hosts, and
/// optionally a staged replacement. A present upload makes the owning record
/// dirty regardless of other fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageField {
    pub hosted_url: Option<String>,
    pub upload: Option<PendingUpload>,
}

impl ImageField {
    pub fn hosted(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            hosted_url: if url.is_empty() { None } else { Some(url) },
            upload: None,
        }
    }

    /// Stage a replacement image, subject to the asset's byte limit.
    pub fn stage(
        &mut self,
        kind: AssetKind,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<(), SaveError> {
        self.upload = Some(PendingUpload::stage(kind, filename, mime_type, bytes)?);
        Ok(())
    }

    pub fn discard_upload(&mut self) {
        self.upload = None;
    }

    pub fn has_upload(&self) -> bool {
        self.upload.is_some()
    }

    /// Promote the staged upload into the field's current value. Used on save
    /// success: the preview becomes the displayed image until a re-fetch
    /// returns the hosted URL.
    pub fn absorb_upload(&mut self) {
        if let Some(upload) = self.upload.take() {
            self.hosted_url = Some(upload.preview_data_url());
        }
    }

    /// Re-check the staged upload against its limit. Staging already enforces
    /// this; the save path checks again so a directly constructed record
    /// cannot smuggle an oversize asset to the network layer.
    pub fn oversize_error(&self) -> Option<SaveError> {
        let upload = self.upload.as_ref()?;
        let limit = upload.kind.byte_limit();
        if upload.size() > limit {
            Some(SaveError::TooLarge {
                kind: upload.kind,
                size: upload.size(),
                limit,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_within_limit_succeeds() {
        let upload =
            PendingUpload::stage(AssetKind::Logo, "om.png", "image/png", vec![1, 2, 3]).unwrap();
        assert_eq!(upload.size(), 3);
        assert_eq!(upload.base64_content(), "AQID");
        assert_eq!(upload.preview_data_url(), "data:image/png;base64,AQID");
    }

    #[test]
    fn stage_oversize_logo_rejected() {
        let bytes = vec![0u8; LOGO_BYTE_LIMIT + 1];
        let err = PendingUpload::stage(AssetKind::Logo, "big.png", "image/png", bytes).unwrap_err();
        assert_eq!(
            err,
            SaveError::TooLarge {
                kind: AssetKind::Logo,
                size: LOGO_BYTE_LIMIT + 1,
                limit: LOGO_BYTE_LIMIT,
            }
        );
    }

    #[test]
    fn favicon_limit_is_tighter_than_logo() {
        let bytes = vec![0u8; FAVICON_BYTE_LIMIT + 1];
        assert!(
            PendingUpload::stage(AssetKind::Favicon, "f.ico", "image/x-icon", bytes.clone())
                .is_err()
        );
        assert!(PendingUpload::stage(AssetKind::Logo, "l.png", "image/png", bytes).is_ok());
    }

    #[test]
    fn absorb_promotes_preview_to_hosted() {
        let mut field = ImageField::hosted("https://cdn.example.org/logo.png");
        field
            .stage(AssetKind::Logo, "new.png", "image/png", vec![9])
            .unwrap();
        assert!(field.has_upload());

        field.absorb_upload();
        assert!(!field.has_upload());
        assert_eq!(field.hosted_url.as_deref(), Some("data:image/png;base64,CQ=="));
    }

    #[test]
    fn discard_keeps_hosted_value() {
        let mut field = ImageField::hosted("https://cdn.example.org/logo.png");
        field
            .stage(AssetKind::Logo, "new.png", "image/png", vec![9])
            .unwrap();
        field.discard_upload();
        assert!(!field.has_upload());
        assert_eq!(
            field.hosted_url.as_deref(),
            Some("https://cdn.example.org/logo.png")
        );
    }

    #[test]
    fn blank_hosted_url_normalizes_to_none() {
        assert_eq!(ImageField::hosted("").hosted_url, None);
    }
}
