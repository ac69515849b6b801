use payment_tracker_engine::db_types::OrderId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderParams {
    pub amount: f64,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreatedResponse {
    pub id: OrderId,
}

/// The approval callback payload. `payment_id` is the payment platform's own identifier and is
/// only echoed back (and forwarded to the payment authority); `app_payment_id` is what gets
/// matched against the store's primary key. The two are deliberately kept as separate fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovePaymentParams {
    pub payment_id: Option<String>,
    pub app_payment_id: Option<OrderId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletePaymentParams {
    pub payment_id: Option<String>,
    pub txid: Option<String>,
    pub app_payment_id: Option<OrderId>,
}

/// Acknowledgement for approve calls. Echoes the inputs; whether a row was actually matched is
/// deliberately not reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAcknowledgement {
    pub ok: bool,
    pub payment_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionAcknowledgement {
    pub ok: bool,
    pub payment_id: Option<String>,
    pub txid: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTransactionParams {
    pub txid: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTransactionResponse {
    pub ok: bool,
    pub txid: String,
    pub verified: bool,
}
