//! Bookmark pagination
//!
//! Slices one page out of an ordered result set. The bookmark is simply
//! the key of the next unreturned result; an empty bookmark means "start
//! of the result set" on input and "no more results" on output.

use crate::scan::StateEntry;

/// Metadata returned alongside a paginated query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    /// Number of entries actually returned on this page
    pub fetched_count: usize,
    /// Key of the first excluded entry; empty at the end of the result set
    pub bookmark: String,
}

/// Takes up to `page_size` entries starting at the bookmark position.
///
/// A bookmark that matches no key yields an empty page and echoes the
/// stale bookmark back unchanged, so resuming with an outdated token
/// never silently restarts from the beginning.
pub(crate) fn paginate(
    ordered: Vec<StateEntry>,
    page_size: u32,
    bookmark: &str,
) -> (Vec<StateEntry>, PageMetadata) {
    let start = if bookmark.is_empty() {
        0
    } else {
        match ordered.iter().position(|entry| entry.key == bookmark) {
            Some(position) => position,
            None => {
                return (
                    Vec::new(),
                    PageMetadata {
                        fetched_count: 0,
                        bookmark: bookmark.to_string(),
                    },
                )
            }
        }
    };

    let end = ordered.len().min(start + page_size as usize);
    let next_bookmark = match ordered.get(end) {
        Some(entry) => entry.key.clone(),
        None => String::new(),
    };

    let page: Vec<StateEntry> = ordered[start..end].to_vec();
    let metadata = PageMetadata {
        fetched_count: page.len(),
        bookmark: next_bookmark,
    };
    (page, metadata)
}
