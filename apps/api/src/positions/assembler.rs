use std::collections::HashSet;

use crate::models::position::Position;

/// Catalog positions followed by the custom positions owned by
/// `current_user_id`, each group in its original order. Custom positions of
/// other users are never included, and a custom position whose id is also a
/// catalog id is dropped so every visible id is unique.
pub fn visible_positions(
    catalog: &[Position],
    custom: &[Position],
    current_user_id: &str,
) -> Vec<Position> {
    let catalog_ids: HashSet<&str> = catalog.iter().map(|p| p.id.as_str()).collect();

    catalog
        .iter()
        .chain(custom.iter().filter(|p| {
            p.user_id.as_deref() == Some(current_user_id)
                && !catalog_ids.contains(p.id.as_str())
        }))
        .cloned()
        .collect()
}

/// The focused subset of the positions visible to `current_user_id`.
///
/// Relative order from `visible_positions` is preserved. Focused ids that
/// match no visible position are dropped; an empty focus set yields an empty
/// result.
pub fn assemble(
    catalog: &[Position],
    custom: &[Position],
    current_user_id: &str,
    focused_ids: &HashSet<String>,
) -> Vec<Position> {
    if focused_ids.is_empty() {
        return Vec::new();
    }

    visible_positions(catalog, custom, current_user_id)
        .into_iter()
        .filter(|p| focused_ids.contains(&p.id))
        .collect()
}
