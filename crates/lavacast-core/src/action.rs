//! Context-menu gating for clicked elements.
//!
//! The host reports which element received the secondary-action gesture; an
//! action is offered only for `img` elements whose displayed source resolves
//! to a file in the vault. Everything else gets no menu entry and no side
//! effects.

use crate::vault::Vault;
use std::path::PathBuf;

/// Menu entry title shown to the user.
pub const ACTION_TITLE: &str = "Display in Lava VTT";

/// The element the user right-clicked, as reported by the host.
#[derive(Debug, Clone)]
pub struct ClickedElement {
    /// Element tag name, e.g. `img` or `a`.
    pub tag: String,
    /// The displayed source of the element (what the host rendered).
    pub source: String,
}

impl ClickedElement {
    pub fn new(tag: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            source: source.into(),
        }
    }
}

/// A context-menu action ready to run: the title to show and the resolved
/// file the upload-and-display operation will read.
#[derive(Debug, Clone)]
pub struct DisplayAction {
    pub title: &'static str,
    pub path: PathBuf,
}

/// Decides whether to offer the display action for a clicked element.
///
/// Returns `None` for non-image elements and for sources the vault cannot
/// resolve to a regular file.
pub fn context_action(vault: &Vault, element: &ClickedElement) -> Option<DisplayAction> {
    if !element.tag.eq_ignore_ascii_case("img") {
        return None;
    }
    let path = vault.resolve(&element.source)?;
    Some(DisplayAction {
        title: ACTION_TITLE,
        path,
    })
}
