//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause the
//! current worker to stop processing new requests:
//! ```nocompile
//!     fn my_handler() -> impl Responder {
//!         std::thread::sleep(Duration::from_secs(5)); // <-- Bad practice! Will cause the current worker thread to
//! hang!
//!     }
//! ```
//! For this reason, any long, non-cpu-bound operation (e.g. I/O, database operations, etc.) should be expressed as
//! futures or asynchronous functions. Async handlers get executed concurrently by worker threads and thus don't block
//! execution:
//!
//! ```nocompile
//!     async fn my_handler() -> impl Responder {
//!         tokio::time::sleep(Duration::from_secs(5)).await; // <-- Ok. Worker thread will handle other requests here
//!     }
//! ```
use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use log::*;
use payment_tracker_engine::{
    db_types::NewOrder,
    OrderFlowApi,
    OrderStoreDatabase,
    PaymentAuthority,
};

use crate::{
    data_objects::{
        ApprovePaymentParams,
        CompletePaymentParams,
        CompletionAcknowledgement,
        CreateOrderParams,
        OrderCreatedResponse,
        PaymentAcknowledgement,
        VerifyTransactionParams,
        VerifyTransactionResponse,
    },
    errors::ServerError,
};

/// The maximum (and default) number of orders returned by the admin listing.
const DEFAULT_ORDER_LIMIT: i64 = 200;

// Actix-web cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

// ---------------------------------------------   Admin page  --------------------------------------------------
#[get("/admin")]
pub async fn admin_page() -> impl Responder {
    trace!("💻️ Received admin page request");
    HttpResponse::Ok().content_type(ContentType::html()).body(include_str!("static/admin.html"))
}

//--------------------------------------------   Create order  -------------------------------------------------
route!(create_order => Post "/payments/create" impl OrderStoreDatabase, PaymentAuthority);
/// Route handler for the create endpoint.
///
/// Creates a new order with `created` status and returns its freshly generated id. The amount is
/// a pass-through value; it is not validated here or in the store.
pub async fn create_order<B, P>(
    body: web::Json<CreateOrderParams>,
    api: web::Data<OrderFlowApi<B, P>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderStoreDatabase,
    P: PaymentAuthority,
{
    let params = body.into_inner();
    trace!("💻️ Received create order request for amount {}", params.amount);
    let order = NewOrder { amount: params.amount, memo: params.memo };
    let order = api.create_order(order).await.map_err(|e| {
        debug!("💻️ Could not create order. {e}");
        ServerError::BackendError(e.to_string())
    })?;
    Ok(HttpResponse::Ok().json(OrderCreatedResponse { id: order.id }))
}

//-------------------------------------------   Approve payment  -----------------------------------------------
route!(approve_payment => Post "/payments/approve" impl OrderStoreDatabase, PaymentAuthority);
/// Route handler for the approve endpoint.
///
/// Called after the user approves the payment in their wallet. The payment authority is asked to
/// approve the platform payment id, then the order matching `appPaymentId` (if any) is marked as
/// approved. The acknowledgement echoes the payment id and does not report whether an order was
/// actually matched.
pub async fn approve_payment<B, P>(
    body: web::Json<ApprovePaymentParams>,
    api: web::Data<OrderFlowApi<B, P>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderStoreDatabase,
    P: PaymentAuthority,
{
    let params = body.into_inner();
    trace!("💻️ Received approve request for payment {:?}", params.payment_id);
    let matched = api.approve_order(params.payment_id.as_deref(), params.app_payment_id.as_ref()).await?;
    debug!("💻️ Approve request for payment {:?} matched an order: {matched}", params.payment_id);
    Ok(HttpResponse::Ok().json(PaymentAcknowledgement { ok: true, payment_id: params.payment_id }))
}

//-------------------------------------------   Complete payment  ----------------------------------------------
route!(complete_payment => Post "/payments/complete" impl OrderStoreDatabase, PaymentAuthority);
/// Route handler for the complete endpoint.
///
/// Called when a transaction id is available for the payment. The order matching `appPaymentId`
/// (if any) is marked as completed, the transaction id is stored against it and the completion
/// time is stamped. Same acknowledgement contract as the approve endpoint.
pub async fn complete_payment<B, P>(
    body: web::Json<CompletePaymentParams>,
    api: web::Data<OrderFlowApi<B, P>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderStoreDatabase,
    P: PaymentAuthority,
{
    let params = body.into_inner();
    trace!("💻️ Received complete request for payment {:?}", params.payment_id);
    let matched = api.complete_order(params.app_payment_id.as_ref(), params.txid.clone()).await?;
    debug!("💻️ Complete request for payment {:?} matched an order: {matched}", params.payment_id);
    Ok(HttpResponse::Ok().json(CompletionAcknowledgement {
        ok: true,
        payment_id: params.payment_id,
        txid: params.txid,
    }))
}

//---------------------------------------------   Admin orders  ------------------------------------------------
route!(admin_orders => Get "/admin/orders" impl OrderStoreDatabase, PaymentAuthority);
/// Lists the most recently created orders, newest first, up to 200 entries.
pub async fn admin_orders<B, P>(api: web::Data<OrderFlowApi<B, P>>) -> Result<HttpResponse, ServerError>
where
    B: OrderStoreDatabase,
    P: PaymentAuthority,
{
    debug!("💻️ GET admin orders");
    let orders = api.recent_orders(DEFAULT_ORDER_LIMIT).await?;
    Ok(HttpResponse::Ok().json(orders))
}

//--------------------------------------------   Verify transaction  -------------------------------------------
route!(verify_transaction => Post "/admin/verify-tx" impl OrderStoreDatabase, PaymentAuthority);
/// Checks a transaction id with the payment authority.
///
/// A missing or empty txid is a validation error. Otherwise the result comes straight from the
/// configured [`PaymentAuthority`]; with the default no-op authority this always reports
/// `verified = true`. Treat this as a documented stub, not a security control.
pub async fn verify_transaction<B, P>(
    body: web::Json<VerifyTransactionParams>,
    api: web::Data<OrderFlowApi<B, P>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderStoreDatabase,
    P: PaymentAuthority,
{
    let params = body.into_inner();
    let txid = match params.txid {
        Some(txid) if !txid.is_empty() => txid,
        _ => {
            debug!("💻️ Verify request without a txid");
            return Err(ServerError::InvalidRequestBody("txid required".to_string()));
        },
    };
    trace!("💻️ Received verify request for txid {txid}");
    let verified = api.verify_transaction(&txid).await?;
    Ok(HttpResponse::Ok().json(VerifyTransactionResponse { ok: true, txid, verified }))
}
