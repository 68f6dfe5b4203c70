use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chain::ChainVerifier;
use crate::db::tx::{Transaction, TransactionStatus, TxRepository};
use crate::error::PaymentError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub toll_booth: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct PaymentReceipt {
    pub success: bool,
    pub transaction: Transaction,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TransactionList {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

// Payment service
pub struct PaymentService {
    repo: TxRepository,
    chain: Arc<dyn ChainVerifier>,
    processing_delay: Duration,
}

impl PaymentService {
    pub fn new(repo: TxRepository, chain: Arc<dyn ChainVerifier>, processing_delay: Duration) -> Self {
        Self { repo, chain, processing_delay }
    }

    pub async fn submit_payment(&self, request: PaymentRequest) -> Result<Transaction, PaymentError> {
        let vehicle_number = require_field(request.vehicle_number)?;
        let vehicle_type = require_field(request.vehicle_type)?;
        let toll_booth = require_field(request.toll_booth)?;
        // a zero amount counts as missing, matching the original API
        let amount = request
            .amount
            .filter(|amount| !amount.is_zero())
            .ok_or(PaymentError::MissingFields)?;

        let mut transaction = Transaction {
            id: format!("tx_{}", Uuid::new_v4().simple()),
            vehicle_number,
            vehicle_type,
            toll_booth,
            amount,
            timestamp: Utc::now(),
            blockchain_hash: self.chain.generate_hash(),
            status: TransactionStatus::Pending,
        };
        tracing::info!("Submitting transaction {} for verification", transaction.id);

        // simulated consensus latency
        tokio::time::sleep(self.processing_delay).await;

        if self.chain.verify(&transaction).await {
            transaction.status = TransactionStatus::Confirmed;
            self.repo.prepend(transaction.clone());
            tracing::info!("Transaction confirmed with id: {}", transaction.id);
            Ok(transaction)
        } else {
            // failed records are returned to the caller as an error and
            // never enter the log
            transaction.status = TransactionStatus::Failed;
            tracing::warn!("Verification failed for transaction {}", transaction.id);
            Err(PaymentError::VerificationFailed)
        }
    }

    pub fn list_transactions(&self) -> Vec<Transaction> {
        self.repo.snapshot()
    }
}

fn require_field(value: Option<String>) -> Result<String, PaymentError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(PaymentError::MissingFields)
}

async fn list_transactions(State(service): State<Arc<PaymentService>>) -> impl IntoResponse {
    let transactions = service.list_transactions();
    (StatusCode::OK, Json(TransactionList { transactions }))
}

async fn create_transaction(
    State(service): State<Arc<PaymentService>>,
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    // a body that cannot be parsed at all lands on the generic 500 path,
    // with the cause kept to the server log
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let err = PaymentError::Internal(rejection.to_string());
            tracing::error!("Transaction processing error: {rejection}");
            return Err((err.status(), Json(ErrorBody { error: err.to_string() })));
        }
    };

    match service.submit_payment(request).await {
        Ok(transaction) => Ok((
            StatusCode::OK,
            Json(PaymentReceipt {
                success: true,
                transaction,
                message: "Transaction confirmed on blockchain",
            }),
        )),
        Err(err) => {
            match &err {
                PaymentError::MissingFields => {
                    tracing::warn!("Rejected transaction with missing fields")
                }
                PaymentError::VerificationFailed => {
                    tracing::warn!("Blockchain verification failed")
                }
                PaymentError::Internal(cause) => {
                    tracing::error!("Transaction processing error: {cause}")
                }
            }
            Err((err.status(), Json(ErrorBody { error: err.to_string() })))
        }
    }
}

pub fn tx_routes(service: Arc<PaymentService>) -> Router {
    Router::new()
        .route("/transactions", get(list_transactions).post(create_transaction))
        .with_state(service)
}
