use crate::modules::bookings::adapters::outbound::users::UserDirectory;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUserDirectory {
    names: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn register(&self, user_id: impl Into<String>, display_name: impl Into<String>) {
        self.names
            .write()
            .await
            .insert(user_id.into(), display_name.into());
    }
}

#[async_trait::async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn display_name(&self, user_id: &str) -> anyhow::Result<Option<String>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("User directory offline"));
        }
        Ok(self.names.read().await.get(user_id).cloned())
    }
}
