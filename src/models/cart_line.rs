use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// One purchasable menu item held in the cart prior to order submission.
///
/// `name`, `price` and `image` are display/billing snapshots taken when the
/// line was added - they are not re-fetched if the menu changes afterwards.
/// Identity is the `menu_item_id` alone, which is what the equality and
/// hashing impls below encode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub menu_item_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl Hash for CartLine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.menu_item_id.hash(state);
    }
}

impl PartialEq for CartLine {
    fn eq(&self, other: &Self) -> bool {
        self.menu_item_id == other.menu_item_id
    }
}

impl Eq for CartLine {}

/// Merging two lines for the same item sums the quantities and keeps the
/// original line's snapshot fields
impl std::ops::Add for CartLine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            quantity: self.quantity + other.quantity,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, quantity: u32) -> CartLine {
        CartLine {
            menu_item_id: id.to_string(),
            name: "Masala Dosa".to_string(),
            price: 5.0,
            quantity,
            image: None,
            special_instructions: None,
        }
    }

    #[test]
    fn identity_is_the_menu_item_id() {
        assert_eq!(line("A", 1), line("A", 99));
        assert_ne!(line("A", 1), line("B", 1));
    }

    #[test]
    fn adding_lines_sums_quantities_and_keeps_the_snapshot() {
        let merged = line("A", 2) + line("A", 3);
        assert_eq!(merged.quantity, 5);
        assert_eq!(merged.name, "Masala Dosa");
        assert!((merged.line_total() - 25.0).abs() < f64::EPSILON);
    }
}
