use crate::{
    model::{record::InventoryRecord, InventoryList, ListResult},
    Inventory,
};

pub fn selected_index(list: &InventoryList, products: &[InventoryRecord]) -> Option<usize> {
    list.filtered(products)
        .get(list.cursor)
        .map(|(index, _)| *index)
}

/// Hands the deletion of `index` to the inventory right away. There is no
/// confirmation and nothing to undo on this side.
pub fn delete(
    list: &mut InventoryList,
    inventory: &mut impl Inventory,
    index: usize,
) -> Vec<ListResult> {
    tracing::debug!("deleting product at index {}", index);

    inventory.on_delete(index);

    let len = list.filtered(inventory.products()).len();
    super::cursor::validate(list, len);

    vec![ListResult::Deleted(index)]
}
