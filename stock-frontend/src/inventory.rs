use stock_list::{model::record::InventoryRecord, Inventory};

/// Authoritative product collection. Lives for the whole session and is
/// never written back to the seed file.
#[derive(Debug, Default)]
pub struct InventoryStore {
    products: Vec<InventoryRecord>,
}

impl InventoryStore {
    pub fn new(products: Vec<InventoryRecord>) -> Self {
        Self { products }
    }
}

impl Inventory for InventoryStore {
    fn products(&self) -> &[InventoryRecord] {
        &self.products
    }

    #[tracing::instrument(skip(self))]
    fn on_delete(&mut self, index: usize) {
        if index < self.products.len() {
            let removed = self.products.remove(index);
            tracing::info!("removed product: {}", removed.summary());
        } else {
            tracing::warn!("delete index out of range: {}", index);
        }
    }

    #[tracing::instrument(skip(self, record))]
    fn on_edit(&mut self, index: usize, record: InventoryRecord) {
        match self.products.get_mut(index) {
            Some(product) => {
                tracing::info!("updated product: {}", record.summary());
                *product = record;
            }
            None => tracing::warn!("edit index out of range: {}", index),
        }
    }
}
