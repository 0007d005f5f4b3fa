use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::watch;

use crate::models::CartLine;
use crate::storage::{restore_or_default, Storage, CART_KEY};
use crate::Result;

/// Accumulates menu lines for one ordering session, before anything is
/// submitted to the server.
///
/// At most one line exists per menu item id - adding an item that is already
/// present merges the quantities instead of duplicating the line. Insertion
/// order is preserved because the cart drawer displays lines in the order
/// they were added; nothing else depends on it.
///
/// Every mutation synchronously rewrites the `dining_cart` storage entry with
/// the full line list, so the persisted copy is never stale. Totals are
/// derived on every read rather than cached.
pub struct CartStore {
    storage: Arc<dyn Storage>,
    lines: RwLock<Vec<CartLine>>,
    notifier: watch::Sender<Vec<CartLine>>,
}

impl CartStore {
    /// Reads the persisted cart at startup, degrading to an empty cart on a
    /// missing or malformed blob.
    #[tracing::instrument(skip(storage))]
    pub fn restore(storage: Arc<dyn Storage>) -> Self {
        let lines: Vec<CartLine> = restore_or_default(CART_KEY, storage.get(CART_KEY));
        let (notifier, _) = watch::channel(lines.clone());
        Self {
            storage,
            lines: RwLock::new(lines),
            notifier,
        }
    }

    /// Adds a line, merging quantities when the item is already in the cart
    #[tracing::instrument(skip(self, line), fields(menu_item_id = %line.menu_item_id))]
    pub fn add(&self, line: CartLine) -> Result<()> {
        let mut next = self.read().clone();
        match next.iter_mut().find(|l| l.menu_item_id == line.menu_item_id) {
            Some(existing) => *existing = existing.clone() + line,
            None => next.push(line),
        }
        self.commit(next)
    }

    /// Removes the whole line; a no-op when the item is not in the cart
    #[tracing::instrument(skip(self))]
    pub fn remove(&self, menu_item_id: &str) -> Result<()> {
        let mut next = self.read().clone();
        let before = next.len();
        next.retain(|l| l.menu_item_id != menu_item_id);
        if next.len() == before {
            return Ok(());
        }
        self.commit(next)
    }

    /// Replaces the quantity of an existing line. A quantity below one means
    /// the guest stepped the counter down to nothing, so the line is removed;
    /// an id not in the cart is a no-op.
    #[tracing::instrument(skip(self))]
    pub fn set_quantity(&self, menu_item_id: &str, quantity: u32) -> Result<()> {
        if quantity < 1 {
            return self.remove(menu_item_id);
        }
        let mut next = self.read().clone();
        match next.iter_mut().find(|l| l.menu_item_id == menu_item_id) {
            Some(line) => line.quantity = quantity,
            None => return Ok(()),
        }
        self.commit(next)
    }

    /// Empties the cart - called once an order has been accepted
    #[tracing::instrument(skip(self))]
    pub fn clear(&self) -> Result<()> {
        self.commit(Vec::new())
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.read().clone()
    }

    pub fn total_amount(&self) -> f64 {
        self.read().iter().map(CartLine::line_total).sum()
    }

    pub fn total_items(&self) -> u32 {
        self.read().iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<CartLine>> {
        self.notifier.subscribe()
    }

    fn commit(&self, next: Vec<CartLine>) -> Result<()> {
        *self.write() = next.clone();
        self.storage.set(CART_KEY, serde_json::to_string(&next)?)?;
        self.notifier.send_replace(next);
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<CartLine>> {
        self.lines
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<CartLine>> {
        self.lines
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
