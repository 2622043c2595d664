use async_trait::async_trait;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn display_name(&self, user_id: &str) -> anyhow::Result<Option<String>>;
}
