use solid_common::error::DeliveryError;

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, target: &str, message: &str) -> Result<(), DeliveryError>;
}

#[async_trait::async_trait]
impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    async fn notify(&self, target: &str, message: &str) -> Result<(), DeliveryError> {
        (**self).notify(target, message).await
    }
}
