use chrono::{DateTime, FixedOffset};
use mockall::mock;
use mshop_common::UsdAmount;
use mshop_engine::{
    db_types::{ItemPrice, NewOrder, Order, OrderId},
    traits::{
        CatalogManagement, OrderManagement, PaymentQr, PaymentQrGenerator, QrGenerationError, StorageError,
    },
};

mock! {
    pub ShopDb {}
    impl Clone for ShopDb {
        fn clone(&self) -> Self;
    }
    impl CatalogManagement for ShopDb {
        async fn seed_catalog(&self, items: &[ItemPrice]) -> Result<usize, StorageError>;
        async fn item_prices_for_game(&self, game: &str) -> Result<Vec<ItemPrice>, StorageError>;
        async fn fetch_item(&self, game: &str, item_id: &str) -> Result<Option<ItemPrice>, StorageError>;
        async fn is_reseller(&self, user_id: i64) -> Result<bool, StorageError>;
    }
    impl OrderManagement for ShopDb {
        async fn insert_order(&self, order: NewOrder) -> Result<Order, StorageError>;
        async fn fetch_order_by_order_id(&self, order_id: &OrderId) -> Result<Option<Order>, StorageError>;
        async fn orders_for_user(&self, user_id: i64) -> Result<Vec<Order>, StorageError>;
        async fn mark_paid_by_fingerprint(
            &self,
            fingerprint: &str,
            payment_response: &str,
            paid_at: DateTime<FixedOffset>,
        ) -> Result<Option<Order>, StorageError>;
    }
}

mock! {
    pub Qr {}
    impl Clone for Qr {
        fn clone(&self) -> Self;
    }
    impl PaymentQrGenerator for Qr {
        async fn generate_qr(&self, amount: UsdAmount) -> Result<PaymentQr, QrGenerationError>;
    }
}
