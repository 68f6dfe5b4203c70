use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub vehicle_number: String,
    pub vehicle_type: String,
    pub toll_booth: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
    pub blockchain_hash: String,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Failed,
}

// In-memory transaction log, newest first. Lives for the process lifetime
// only; the append side is serialized through the mutex so readers never
// observe a partially built record.
#[derive(Clone, Default)]
pub struct TxRepository {
    log: Arc<Mutex<Vec<Transaction>>>,
}

impl TxRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepend(&self, transaction: Transaction) {
        let mut log = self.log.lock().unwrap();
        log.insert(0, transaction);
    }

    pub fn snapshot(&self) -> Vec<Transaction> {
        self.log.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.log.lock().unwrap().len()
    }
}
