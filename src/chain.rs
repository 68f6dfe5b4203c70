use async_trait::async_trait;
use rand::Rng;

use crate::db::tx::Transaction;

// Seam for the simulated blockchain so the probabilistic outcome can be
// swapped for a deterministic one in tests.
#[async_trait]
pub trait ChainVerifier: Send + Sync {
    /// Mint the opaque verification token attached to a new transaction.
    fn generate_hash(&self) -> String;

    /// Decide whether the chain accepts the transaction.
    async fn verify(&self, transaction: &Transaction) -> bool;
}

// Stand-in for a real chain client: the token is random hex and the
// verdict is a weighted coin flip.
pub struct SimulatedChain {
    success_rate: f64,
}

impl SimulatedChain {
    pub fn new(success_rate: f64) -> Self {
        Self { success_rate }
    }
}

#[async_trait]
impl ChainVerifier for SimulatedChain {
    fn generate_hash(&self) -> String {
        let mut rng = rand::thread_rng();
        let mut hash = String::with_capacity(54);
        hash.push_str("0x");
        for _ in 0..26 {
            hash.push_str(&format!("{:02x}", rng.gen::<u8>()));
        }
        hash
    }

    async fn verify(&self, _transaction: &Transaction) -> bool {
        rand::thread_rng().gen::<f64>() < self.success_rate
    }
}
