//! Clipboard-backed share target for roll results.

use arboard::Clipboard;

/// Hands summary text to the system clipboard.
///
/// The dice store only produces the text; this is the whole of the
/// share mechanism.
pub struct ShareTarget {
    clipboard: Clipboard,
}

impl ShareTarget {
    /// Create a new share target. Fails on headless systems without a
    /// clipboard; callers treat that as a degraded mode, not an error.
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    /// Write the share text to the system clipboard.
    pub fn share(&mut self, text: &str) -> Result<(), String> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| format!("Failed to copy result: {}", e))
    }
}
