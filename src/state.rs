use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    ledger::InventoryLedger,
    notify::{Notifier, TracingNotifier},
};

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self {
            orm,
            notifier: Arc::new(TracingNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn ledger(&self) -> InventoryLedger {
        InventoryLedger::new(self.orm.clone())
    }
}
