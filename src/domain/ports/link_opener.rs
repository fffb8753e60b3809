//! LinkOpener port - hands a URL (usually `mailto:`) to the desktop

use crate::error::FolioResult;

/// Opens links outside the process
///
/// Implementations:
/// - `SystemLinkOpener` - platform opener command
/// - recording openers in tests
pub trait LinkOpener {
    fn open(&self, link: &str) -> FolioResult<()>;
}
