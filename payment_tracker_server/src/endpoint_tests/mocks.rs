use mockall::mock;
use payment_tracker_engine::{
    db_types::{NewOrder, Order, OrderId},
    traits::{OrderStoreDatabase, OrderStoreError, PaymentAuthority, PaymentAuthorityError},
};

mock! {
    pub OrderStore {}
    impl OrderStoreDatabase for OrderStore {
        fn url(&self) -> &str;
        async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderStoreError>;
        async fn fetch_order_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderStoreError>;
        async fn approve_order(&self, order_ref: &OrderId) -> Result<bool, OrderStoreError>;
        async fn complete_order(&self, order_ref: &OrderId, txid: Option<String>) -> Result<bool, OrderStoreError>;
        async fn recent_orders(&self, limit: i64) -> Result<Vec<Order>, OrderStoreError>;
    }
}

mock! {
    pub Authority {}
    impl PaymentAuthority for Authority {
        async fn approve_payment(&self, payment_id: &str) -> Result<(), PaymentAuthorityError>;
        async fn verify_transaction(&self, txid: &str) -> Result<bool, PaymentAuthorityError>;
    }
}
