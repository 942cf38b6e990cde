use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::blockchain::{Amount, Block, MiningOutcome, Transaction};

use super::state::AppState;

/// Data structure for the shared node state
pub type AppData = web::Data<AppState>;

/// Response for the chain endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ChainResponse {
    /// The blocks in the chain, genesis first
    pub chain: Vec<Block>,
}

/// Request for the transaction endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TransactionRequest {
    /// The sender's address
    pub sender_address: String,

    /// The recipient's address
    pub recipient_address: String,

    /// The amount to transfer
    pub value: f64,
}

/// Response for the transaction endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TransactionResponse {
    /// The message
    pub message: String,

    /// Number of transactions now waiting in the pool
    pub pending: usize,
}

/// Response for the mine endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MineResponse {
    /// The message
    pub message: String,

    /// The newly mined block
    pub block: Block,
}

/// Response for the cancel endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CancelResponse {
    /// Number of mining cycles that were signalled
    pub cancelled: usize,
}

/// Response for the amount endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AmountResponse {
    /// The queried address
    pub address: String,

    /// Confirmed balance of the address
    pub amount: f64,
}

/// Get the full blockchain
///
/// Returns every committed block, genesis first
#[utoipa::path(
    get,
    path = "/api/v1/chain",
    responses(
        (status = 200, description = "Blockchain retrieved successfully", body = ChainResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_chain(state: AppData) -> impl Responder {
    match state.blockchain().to_json() {
        Ok(json) => HttpResponse::Ok().json(json),
        Err(err) => {
            error!("Failed to encode chain: {}", err);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to encode chain: {}", err)
            }))
        }
    }
}

/// Get all pending transactions
///
/// Returns all transactions waiting to be included in a block
#[utoipa::path(
    get,
    path = "/api/v1/transactions/pending",
    responses(
        (
            status = 200,
            description = "Pending transactions retrieved successfully",
            body = Vec<Transaction>
        )
    )
)]
pub async fn get_pending_transactions(state: AppData) -> impl Responder {
    let transactions: Vec<Transaction> = state.blockchain().pending_transactions();
    HttpResponse::Ok().json(transactions)
}

/// Create a new transaction
///
/// Adds a new transaction to the pending pool
#[utoipa::path(
    post,
    path = "/api/v1/transactions",
    request_body = TransactionRequest,
    responses(
        (
            status = 201,
            description = "Transaction created successfully",
            body = TransactionResponse
        ),
        (status = 400, description = "Invalid transaction data")
    )
)]
pub async fn new_transaction(
    state: AppData,
    transaction_req: web::Json<TransactionRequest>,
) -> impl Responder {
    let value = match Amount::from_f64(transaction_req.value) {
        Ok(value) => value,
        Err(err) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": format!("Invalid value: {}", err)
            }));
        }
    };

    let blockchain = state.blockchain();
    blockchain.add_transaction(
        &transaction_req.sender_address,
        &transaction_req.recipient_address,
        value,
    );

    HttpResponse::Created().json(TransactionResponse {
        message: "Transaction will be added to the next block".to_string(),
        pending: blockchain.pending_transactions().len(),
    })
}

/// Mine a new block
///
/// Seals the pending pool plus a reward for this node's miner into a new block.
/// The proof of work search runs on a worker thread.
#[utoipa::path(
    post,
    path = "/api/v1/mine",
    responses(
        (status = 200, description = "Block mined successfully", body = MineResponse),
        (status = 409, description = "Mining was cancelled"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn mine_block(state: AppData) -> impl Responder {
    let registration = state.begin_mining();
    let blockchain = state.blockchain();
    let token = registration.token().clone();

    let result = web::block(move || blockchain.mine_with_cancel(&token)).await;
    drop(registration);

    match result {
        Ok(Ok(MiningOutcome::Mined(block))) => HttpResponse::Ok().json(MineResponse {
            message: "New Block Mined".to_string(),
            block,
        }),
        Ok(Ok(MiningOutcome::Cancelled)) => HttpResponse::Conflict().json(serde_json::json!({
            "error": "Mining was cancelled"
        })),
        Ok(Err(err)) => {
            error!("Mining failed: {}", err);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to mine block: {}", err)
            }))
        }
        Err(err) => {
            error!("Mining worker failed: {}", err);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Mining worker failed"
            }))
        }
    }
}

/// Cancel mining
///
/// Signals every running or queued mining cycle to stop
#[utoipa::path(
    post,
    path = "/api/v1/mine/cancel",
    responses(
        (status = 200, description = "Mining cycles signalled", body = CancelResponse)
    )
)]
pub async fn cancel_mining(state: AppData) -> impl Responder {
    HttpResponse::Ok().json(CancelResponse {
        cancelled: state.cancel_mining(),
    })
}

/// Get the confirmed amount held by an address
///
/// Only committed blocks are counted
#[utoipa::path(
    get,
    path = "/api/v1/amount/{address}",
    params(
        ("address" = String, Path, description = "Blockchain address")
    ),
    responses(
        (status = 200, description = "Amount retrieved successfully", body = AmountResponse),
        (status = 500, description = "Balance outside the representable range")
    )
)]
pub async fn get_amount(state: AppData, address: web::Path<String>) -> impl Responder {
    let address = address.into_inner();
    match state.blockchain().calculate_total_amount(&address) {
        Ok(amount) => HttpResponse::Ok().json(AmountResponse {
            address,
            amount: amount.to_f64(),
        }),
        Err(err) => {
            error!("Failed to total {}: {}", address, err);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to calculate amount: {}", err)
            }))
        }
    }
}

/// Check if the blockchain is valid
///
/// Validates hash linkage and proof of work of the entire chain
#[utoipa::path(
    get,
    path = "/api/v1/validate",
    responses(
        (status = 200, description = "Blockchain validation status", body = bool)
    )
)]
pub async fn validate_chain(state: AppData) -> impl Responder {
    HttpResponse::Ok().json(state.blockchain().is_valid())
}
