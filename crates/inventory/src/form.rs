//! Form state: the three drafts ("nueva familia", "nuevo material",
//! "actualizar inventario") wired to the inventory state.
//!
//! Every submission is validate-then-apply. Invalid input is swallowed: the
//! state stays as it was and the draft is kept, mirroring a form that simply
//! does nothing when the button is pressed with bad input.

use chrono::Utc;

use almacen_core::{Aggregate, DomainError};
use almacen_events::Event;

use crate::item::{InventoryItem, StockDirection};
use crate::state::{AddCategory, AddItem, AdjustStock, InventoryCommand, InventoryState};
use crate::view::InventoryTable;

/// Result of pressing a submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The state was replaced. `affected` counts touched registry entries or rows.
    Applied { affected: usize },
    /// Nothing changed.
    Rejected(DomainError),
}

impl Submission {
    pub fn is_applied(&self) -> bool {
        matches!(self, Submission::Applied { .. })
    }

}

/// "Agregar Nuevo Material" draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub category: String,
    pub name: String,
    pub quantity: u64,
}

/// "Actualizar Inventario" draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockUpdateDraft {
    pub category: String,
    pub item: String,
    pub delta: u64,
}

/// Integer-prefix parse of a numeric text field.
///
/// Leading whitespace and a sign are accepted, trailing garbage is ignored.
/// Anything without leading digits, and any negative number, reads as zero.
pub fn parse_quantity(raw: &str) -> u64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..end];
    if negative || digits.is_empty() {
        return 0;
    }
    digits
        .bytes()
        .fold(0u64, |acc, b| acc.saturating_mul(10).saturating_add(u64::from(b - b'0')))
}

/// Single owner of the inventory state and its three drafts.
#[derive(Debug, Clone, Default)]
pub struct InventoryForm {
    state: InventoryState,
    new_category: String,
    new_item: ItemDraft,
    stock_update: StockUpdateDraft,
}

impl InventoryForm {
    pub fn new(state: InventoryState) -> Self {
        Self {
            state,
            new_category: String::new(),
            new_item: ItemDraft::default(),
            stock_update: StockUpdateDraft::default(),
        }
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    pub fn new_category_name(&self) -> &str {
        &self.new_category
    }

    pub fn item_draft(&self) -> &ItemDraft {
        &self.new_item
    }

    pub fn stock_update_draft(&self) -> &StockUpdateDraft {
        &self.stock_update
    }

    // --- Agregar Nueva Familia ---

    pub fn set_new_category_name(&mut self, name: impl Into<String>) {
        self.new_category = name.into();
    }

    pub fn submit_new_category(&mut self) -> Submission {
        let cmd = InventoryCommand::AddCategory(AddCategory {
            name: self.new_category.clone(),
            occurred_at: Utc::now(),
        });
        let submission = self.submit(&cmd);
        if submission.is_applied() {
            self.new_category.clear();
        }
        submission
    }

    // --- Agregar Nuevo Material ---

    pub fn set_item_category(&mut self, category: impl Into<String>) {
        self.new_item.category = category.into();
    }

    pub fn set_item_name(&mut self, name: impl Into<String>) {
        self.new_item.name = name.into();
    }

    pub fn set_item_quantity(&mut self, raw: &str) {
        self.new_item.quantity = parse_quantity(raw);
    }

    pub fn submit_new_item(&mut self) -> Submission {
        let cmd = InventoryCommand::AddItem(AddItem {
            item_id: self.state.next_item_id(),
            category: self.new_item.category.clone(),
            name: self.new_item.name.clone(),
            quantity: self.new_item.quantity,
            occurred_at: Utc::now(),
        });
        let submission = self.submit(&cmd);
        if submission.is_applied() {
            self.new_item = ItemDraft::default();
        }
        submission
    }

    // --- Actualizar Inventario ---

    /// The selected item is kept; it is matched against the new category on submit.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.stock_update.category = category.into();
    }

    pub fn select_item(&mut self, name: impl Into<String>) {
        self.stock_update.item = name.into();
    }

    pub fn set_delta(&mut self, raw: &str) {
        self.stock_update.delta = parse_quantity(raw);
    }

    /// Options for the item selector: rows of the selected category, in ledger order.
    pub fn item_options(&self) -> impl Iterator<Item = &InventoryItem> {
        self.state.ledger().items_in_category(&self.stock_update.category)
    }

    pub fn update_stock(&mut self, direction: StockDirection) -> Submission {
        let cmd = InventoryCommand::AdjustStock(AdjustStock {
            category: self.stock_update.category.clone(),
            name: self.stock_update.item.clone(),
            delta: self.stock_update.delta,
            direction,
            occurred_at: Utc::now(),
        });
        let submission = self.submit(&cmd);
        if submission.is_applied() {
            self.stock_update.item.clear();
            self.stock_update.delta = 0;
        }
        submission
    }

    // --- Inventario Actual ---

    pub fn table(&self) -> InventoryTable<'_> {
        InventoryTable::new(self.state.ledger().items())
    }

    fn submit(&mut self, cmd: &InventoryCommand) -> Submission {
        match self.state.transition(cmd) {
            Ok((next, events)) => {
                for event in &events {
                    tracing::info!(
                        event_type = event.event_type(),
                        affected = event.affected(),
                        version = next.version(),
                        "inventory updated"
                    );
                }
                self.state = next;
                Submission::Applied {
                    affected: events.iter().map(|e| e.affected()).sum(),
                }
            }
            Err(err) => {
                tracing::debug!(error = %err, "submission ignored");
                Submission::Rejected(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(form: &InventoryForm) -> Vec<String> {
        form.state()
            .categories()
            .iter()
            .map(|c| c.as_str().to_string())
            .collect()
    }

    fn add_item(
        form: &mut InventoryForm,
        category: &str,
        name: &str,
        quantity: &str,
    ) -> Submission {
        form.set_item_category(category);
        form.set_item_name(name);
        form.set_item_quantity(quantity);
        form.submit_new_item()
    }

    fn update(
        form: &mut InventoryForm,
        category: &str,
        item: &str,
        delta: &str,
        dir: StockDirection,
    ) -> Submission {
        form.select_category(category);
        form.select_item(item);
        form.set_delta(delta);
        form.update_stock(dir)
    }

    #[test]
    fn parse_quantity_coerces_like_a_number_field() {
        assert_eq!(parse_quantity("5"), 5);
        assert_eq!(parse_quantity("  12abc"), 12);
        assert_eq!(parse_quantity("+7"), 7);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("-3"), 0);
        assert_eq!(parse_quantity("3.9"), 3);
        assert_eq!(parse_quantity("99999999999999999999999"), u64::MAX);
    }

    #[test]
    fn new_category_clears_draft_only_on_success() {
        let mut form = InventoryForm::default();

        form.set_new_category_name("Cables");
        assert_eq!(form.submit_new_category(), Submission::Applied { affected: 1 });
        assert_eq!(form.new_category_name(), "");

        form.set_new_category_name("Cables");
        assert!(matches!(
            form.submit_new_category(),
            Submission::Rejected(DomainError::Conflict(_))
        ));
        assert_eq!(form.new_category_name(), "Cables");
        assert_eq!(names(&form).len(), 4);
    }

    #[test]
    fn empty_category_is_ignored() {
        let mut form = InventoryForm::default();
        let before = form.state().clone();

        assert!(!form.submit_new_category().is_applied());
        assert_eq!(form.state(), &before);
    }

    #[test]
    fn whitespace_names_are_accepted() {
        let mut form = InventoryForm::default();

        form.set_new_category_name(" ");
        assert_eq!(form.submit_new_category(), Submission::Applied { affected: 1 });
        assert_eq!(names(&form).len(), 4);
        assert_eq!(names(&form)[3], " ");

        assert!(add_item(&mut form, "Inversores", "  ", "3").is_applied());
        assert_eq!(form.state().ledger().items()[0].name().as_str(), "  ");
    }

    #[test]
    fn new_item_resets_draft() {
        let mut form = InventoryForm::default();
        assert!(add_item(&mut form, "Inversores", "Huawei 5kW", "2").is_applied());

        assert_eq!(form.item_draft(), &ItemDraft::default());
        assert_eq!(form.state().ledger().len(), 1);
    }

    #[test]
    fn non_numeric_quantity_is_rejected_and_draft_kept() {
        let mut form = InventoryForm::default();
        let submission = add_item(&mut form, "Inversores", "Huawei 5kW", "muchos");

        assert!(matches!(submission, Submission::Rejected(DomainError::Validation(_))));
        assert_eq!(form.item_draft().name, "Huawei 5kW");
        assert!(form.state().ledger().is_empty());
    }

    #[test]
    fn item_options_follow_selected_category() {
        let mut form = InventoryForm::default();
        add_item(&mut form, "Inversores", "Huawei 5kW", "2");
        add_item(&mut form, "Baterías", "Pylontech", "4");
        add_item(&mut form, "Inversores", "Fronius 3kW", "1");

        assert_eq!(form.item_options().count(), 0);

        form.select_category("Inversores");
        let options: Vec<&str> = form.item_options().map(|i| i.name().as_str()).collect();
        assert_eq!(options, vec!["Huawei 5kW", "Fronius 3kW"]);

        form.select_item("Fronius 3kW");
        form.select_category("Baterías");
        assert_eq!(form.stock_update_draft().item, "Fronius 3kW");
        let options: Vec<&str> = form.item_options().map(|i| i.name().as_str()).collect();
        assert_eq!(options, vec!["Pylontech"]);
    }

    #[test]
    fn update_stock_clears_item_and_delta_but_keeps_category() {
        let mut form = InventoryForm::default();
        add_item(&mut form, "Baterías", "Pylontech", "4");

        let submission = update(&mut form, "Baterías", "Pylontech", "6", StockDirection::Increase);
        assert_eq!(submission, Submission::Applied { affected: 1 });

        let draft = form.stock_update_draft();
        assert_eq!(draft.category, "Baterías");
        assert_eq!(draft.item, "");
        assert_eq!(draft.delta, 0);
        assert_eq!(form.state().ledger().items()[0].quantity().units(), 10);
    }

    #[test]
    fn switching_category_keeps_item_and_matches_new_category() {
        let mut form = InventoryForm::default();
        add_item(&mut form, "Inversores", "X", "1");
        add_item(&mut form, "Baterías", "X", "5");

        form.select_category("Inversores");
        form.select_item("X");
        form.select_category("Baterías");
        form.set_delta("2");

        assert_eq!(
            form.update_stock(StockDirection::Increase),
            Submission::Applied { affected: 1 }
        );
        let quantities: Vec<u64> = form
            .state()
            .ledger()
            .iter()
            .map(|i| i.quantity().units())
            .collect();
        assert_eq!(quantities, vec![1, 7]);
    }

    #[test]
    fn update_stock_without_selection_is_ignored() {
        let mut form = InventoryForm::default();
        add_item(&mut form, "Baterías", "Pylontech", "4");

        form.select_category("Baterías");
        form.set_delta("3");
        assert!(!form.update_stock(StockDirection::Decrease).is_applied());
        assert_eq!(form.stock_update_draft().delta, 3);
        assert_eq!(form.state().ledger().items()[0].quantity().units(), 4);
    }

    #[test]
    fn scenario_cables() {
        let mut form = InventoryForm::default();

        form.set_new_category_name("Cables");
        form.submit_new_category();
        let categories = names(&form);
        assert_eq!(categories.len(), 4);
        assert_eq!(categories.last().map(String::as_str), Some("Cables"));

        add_item(&mut form, "Cables", "Cable 10m", "5");
        let row = |form: &InventoryForm| {
            form.state()
                .ledger()
                .items_in_category("Cables")
                .map(|i| i.quantity().units())
                .collect::<Vec<_>>()
        };
        assert_eq!(row(&form), vec![5]);

        update(&mut form, "Cables", "Cable 10m", "3", StockDirection::Increase);
        assert_eq!(row(&form), vec![8]);

        update(&mut form, "Cables", "Cable 10m", "20", StockDirection::Decrease);
        assert_eq!(row(&form), vec![0]);
    }

    proptest! {
        /// Property: a duplicate or empty category submission leaves the registry unchanged.
        #[test]
        fn invalid_category_submissions_are_no_ops(idx in 0usize..4) {
            let mut form = InventoryForm::default();
            let before = form.state().clone();

            let raw = crate::DEFAULT_CATEGORIES.get(idx).copied().unwrap_or_default();
            form.set_new_category_name(raw);
            prop_assert!(!form.submit_new_category().is_applied());
            prop_assert_eq!(form.state(), &before);
        }
    }
}
