//! Session controller
//!
//! Owns everything that lives for one run of the program: the ledger store,
//! the budget table, the alert engine, its de-duplication state and the
//! notification channel.

use tracing::{info, warn};

use crate::alerts::{Alert, AlertEngine, AlertState};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{BudgetEntry, BudgetTable, Money, Transaction, TransactionInput};
use crate::notify::{self, Notifier};
use crate::reports::SummaryReport;
use crate::storage::LedgerStore;

/// One continuous run of the tracker
pub struct Session<S: LedgerStore> {
    store: S,
    budgets: BudgetTable,
    alert_state: AlertState,
    engine: AlertEngine,
    notifier: Box<dyn Notifier>,
}

impl<S: LedgerStore> Session<S> {
    /// Start a session, loading the saved budget table from the store
    pub fn open(store: S, engine: AlertEngine, notifier: Box<dyn Notifier>) -> FinanceResult<Self> {
        let budgets = store.load_budgets()?;
        info!(budgets = budgets.len(), channel = notifier.name(), "session started");

        Ok(Self {
            store,
            budgets,
            alert_state: AlertState::new(),
            engine,
            notifier,
        })
    }

    /// Validate and record a transaction, then check budgets
    ///
    /// Returns the stored transaction and any alerts it triggered. Once the
    /// transaction is stored, a failed alert check is logged rather than
    /// returned.
    pub fn add_transaction(
        &mut self,
        input: &TransactionInput,
    ) -> FinanceResult<(Transaction, Vec<Alert>)> {
        let txn = input.validate()?;
        self.store.append_transaction(txn.clone())?;
        info!(
            id = %txn.id(),
            kind = txn.kind().as_str(),
            category = txn.category(),
            amount = %txn.amount(),
            "transaction added"
        );

        let alerts = match self.check_alerts() {
            Ok(alerts) => alerts,
            Err(e) => {
                warn!(id = %txn.id(), error = %e, "transaction saved but alert check failed");
                Vec::new()
            }
        };
        Ok((txn, alerts))
    }

    /// Full history in insertion order
    pub fn transactions(&self) -> FinanceResult<Vec<Transaction>> {
        self.store.get_all_transactions()
    }

    /// Set or override a category budget from user input
    ///
    /// The table is only changed once the new limit has been persisted.
    pub fn set_budget(&mut self, category: &str, limit: &str) -> FinanceResult<BudgetEntry> {
        let limit = Money::parse(limit).map_err(|e| FinanceError::InvalidBudget(e.to_string()))?;

        let mut updated = self.budgets.clone();
        updated.set_budget(category, limit)?;
        self.store.save_budgets(&updated)?;
        self.budgets = updated;

        let entry = BudgetEntry {
            category: category.trim().to_string(),
            limit,
        };
        info!(category = %entry.category, limit = %entry.limit, "budget set");
        Ok(entry)
    }

    pub fn budgets(&self) -> &BudgetTable {
        &self.budgets
    }

    /// Remove every transaction. Irreversible.
    ///
    /// Alert state is re-evaluated against the empty ledger, so every
    /// category is re-armed.
    pub fn clear_transactions(&mut self) -> FinanceResult<()> {
        self.store.clear_transactions()?;
        warn!("all transactions cleared");
        self.engine.evaluate(&[], &self.budgets, &mut self.alert_state);
        Ok(())
    }

    /// Run the alert engine and hand new alerts to the notifier
    ///
    /// Delivery failures are logged; the returned alerts do not depend on
    /// them.
    pub fn check_alerts(&mut self) -> FinanceResult<Vec<Alert>> {
        let history = self.store.get_all_transactions()?;
        let alerts = self
            .engine
            .evaluate(&history, &self.budgets, &mut self.alert_state);

        if !alerts.is_empty() {
            notify::dispatch(self.notifier.as_ref(), &alerts);
        }
        Ok(alerts)
    }

    pub fn report(&self) -> FinanceResult<SummaryReport> {
        let history = self.store.get_all_transactions()?;
        Ok(SummaryReport::generate(&history, &self.budgets))
    }

    pub fn alert_state(&self) -> &AlertState {
        &self.alert_state
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::AlertLevel;
    use crate::notify::NullNotifier;
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Outbox {
        sent: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl Notifier for Outbox {
        fn name(&self) -> &str {
            "outbox"
        }

        fn send(&self, message: &str) -> FinanceResult<()> {
            if self.fail {
                return Err(FinanceError::Notify("unreachable".into()));
            }
            self.sent.borrow_mut().push(message.to_string());
            Ok(())
        }
    }

    struct UnreadableStore {
        inner: MemoryStore,
    }

    impl LedgerStore for UnreadableStore {
        fn append_transaction(&mut self, txn: Transaction) -> FinanceResult<()> {
            self.inner.append_transaction(txn)
        }

        fn get_all_transactions(&self) -> FinanceResult<Vec<Transaction>> {
            Err(FinanceError::Storage("disk unreadable".into()))
        }

        fn clear_transactions(&mut self) -> FinanceResult<()> {
            self.inner.clear_transactions()
        }

        fn load_budgets(&self) -> FinanceResult<BudgetTable> {
            self.inner.load_budgets()
        }

        fn save_budgets(&mut self, budgets: &BudgetTable) -> FinanceResult<()> {
            self.inner.save_budgets(budgets)
        }
    }

    fn session() -> Session<MemoryStore> {
        Session::open(MemoryStore::new(), AlertEngine::new(), Box::new(NullNotifier)).unwrap()
    }

    fn expense(amount: &str, category: &str) -> TransactionInput {
        TransactionInput::new(amount, category, "test", "expense")
    }

    #[test]
    fn test_food_scenario() {
        let outbox = Outbox::default();
        let mut session =
            Session::open(MemoryStore::new(), AlertEngine::new(), Box::new(outbox.clone())).unwrap();
        session.set_budget("food", "100.00").unwrap();

        let (_, alerts) = session.add_transaction(&expense("40", "food")).unwrap();
        assert!(alerts.is_empty());

        let (_, alerts) = session.add_transaction(&expense("70", "food")).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(
            alerts[0].to_string(),
            "ALERT: food spending (110.00) exceeds budget (100.00)"
        );

        assert!(session.check_alerts().unwrap().is_empty());
        assert_eq!(outbox.sent.borrow().len(), 1);
    }

    #[test]
    fn test_invalid_transaction_not_stored() {
        let mut session = session();

        let err = session.add_transaction(&expense("-3", "food")).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidAmount(_)));

        let err = session
            .add_transaction(&TransactionInput::new("3", "food", "x", "gift"))
            .unwrap_err();
        assert!(matches!(err, FinanceError::InvalidTransaction(_)));

        assert!(session.transactions().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_budget_leaves_table_unchanged() {
        let mut session = session();
        session.set_budget("rent", "900").unwrap();

        for bad in ["-5", "0", "lots", "$-5", "-$5", "abc10"] {
            let err = session.set_budget("rent", bad).unwrap_err();
            assert!(matches!(err, FinanceError::InvalidBudget(_)), "{}", bad);
        }
        let err = session.set_budget(" ", "10").unwrap_err();
        assert!(matches!(err, FinanceError::InvalidBudget(_)));

        assert_eq!(session.budgets().len(), 1);
        assert_eq!(session.budgets().get_limit("rent"), Some(Money::from_cents(90000)));
        assert_eq!(
            session.store().load_budgets().unwrap().get_limit("rent"),
            Some(Money::from_cents(90000))
        );
    }

    #[test]
    fn test_saved_transaction_survives_failed_alert_check() {
        let store = UnreadableStore {
            inner: MemoryStore::new(),
        };
        let mut session = Session::open(store, AlertEngine::new(), Box::new(NullNotifier)).unwrap();
        session.set_budget("food", "1").unwrap();

        let (txn, alerts) = session.add_transaction(&expense("5", "food")).unwrap();
        assert!(alerts.is_empty());
        assert_eq!(
            session.store().inner.get_all_transactions().unwrap(),
            vec![txn]
        );
        assert!(matches!(
            session.check_alerts(),
            Err(FinanceError::Storage(_))
        ));
    }

    #[test]
    fn test_budget_loaded_from_store() {
        let mut budgets = BudgetTable::new();
        budgets.set_budget("food", Money::from_cents(500)).unwrap();
        let mut session = Session::open(
            MemoryStore::with_budgets(budgets),
            AlertEngine::new(),
            Box::new(NullNotifier),
        )
        .unwrap();

        let (_, alerts) = session.add_transaction(&expense("6", "food")).unwrap();
        assert_eq!(alerts.len(), 1);
    }

    #[test]
    fn test_clear_rearms_alerts() {
        let mut session = session();
        session.set_budget("food", "10").unwrap();

        let (_, alerts) = session.add_transaction(&expense("11", "food")).unwrap();
        assert_eq!(alerts.len(), 1);
        assert!(session.alert_state().is_exceeded("food"));

        session.clear_transactions().unwrap();
        assert!(session.transactions().unwrap().is_empty());
        assert!(!session.alert_state().is_exceeded("food"));

        let (_, alerts) = session.add_transaction(&expense("12", "food")).unwrap();
        assert_eq!(alerts.len(), 1);
    }

    #[test]
    fn test_raising_budget_rearms_alert() {
        let mut session = session();
        session.set_budget("food", "10").unwrap();
        session.add_transaction(&expense("15", "food")).unwrap();

        session.set_budget("food", "20").unwrap();
        assert!(session.check_alerts().unwrap().is_empty());

        let (_, alerts) = session.add_transaction(&expense("10", "food")).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].spent, Money::from_cents(2500));
    }

    #[test]
    fn test_income_never_alerts() {
        let mut session = session();
        session.set_budget("salary", "1").unwrap();
        let (_, alerts) = session
            .add_transaction(&TransactionInput::new("5000", "salary", "pay", "INCOME"))
            .unwrap();
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_notifier_failure_does_not_change_alerts() {
        let outbox = Outbox {
            fail: true,
            ..Outbox::default()
        };
        let mut session =
            Session::open(MemoryStore::new(), AlertEngine::new(), Box::new(outbox.clone())).unwrap();
        session.set_budget("food", "1").unwrap();

        let (_, alerts) = session.add_transaction(&expense("2", "food")).unwrap();
        assert_eq!(alerts.len(), 1);
        assert!(outbox.sent.borrow().is_empty());
        assert!(session.alert_state().is_exceeded("food"));
    }

    #[test]
    fn test_warning_engine() {
        let mut session = Session::open(
            MemoryStore::new(),
            AlertEngine::with_warning_threshold(90).unwrap(),
            Box::new(NullNotifier),
        )
        .unwrap();
        session.set_budget("food", "100").unwrap();

        let (_, alerts) = session.add_transaction(&expense("95", "food")).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Warning);
    }

    #[test]
    fn test_report() {
        let mut session = session();
        session.set_budget("food", "100").unwrap();
        session.add_transaction(&expense("40", "food")).unwrap();
        session
            .add_transaction(&TransactionInput::new("1000", "salary", "pay", "income"))
            .unwrap();

        let report = session.report().unwrap();
        assert_eq!(report.total_income, Money::from_cents(100000));
        assert_eq!(report.total_expense, Money::from_cents(4000));
        assert_eq!(report.categories.len(), 2);
    }
}
