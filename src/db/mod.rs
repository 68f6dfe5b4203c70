pub mod fees;
pub mod tx;
