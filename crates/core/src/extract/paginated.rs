//! Paginated node extraction.

use tracing::warn;

use crate::model::PageNode;
use crate::provider::PageGeometryProvider;

/// Extracts structural nodes from every page of a paginated document.
///
/// Items whose trimmed text is empty carry no structural signal and are
/// skipped, but still consume an item index so node ids stay aligned with
/// the provider's raw item sequence across re-extraction.
///
/// A page the provider fails on is logged and skipped; nodes already
/// extracted from other pages are kept. A document where every page fails
/// (or that has no pages) extracts to an empty node list, which is a valid
/// terminal state rather than an error.
pub fn extract_pages(provider: &dyn PageGeometryProvider) -> Vec<PageNode> {
    let mut nodes = Vec::new();

    for page in 1..=provider.page_count() as u32 {
        let items = match provider.page_items(page) {
            Ok(items) => items,
            Err(err) => {
                warn!(page, error = %err, "skipping unreadable page");
                continue;
            }
        };

        for (index, item) in items.into_iter().enumerate() {
            if item.text.trim().is_empty() {
                continue;
            }
            // The glyph height doubles as the font size; page renderers do
            // not expose a separate metric.
            nodes.push(PageNode::new(
                page,
                index,
                item.x,
                item.y,
                item.height,
                item.text,
            ));
        }
    }

    nodes
}
