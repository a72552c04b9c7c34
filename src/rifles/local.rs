//! In-memory rifle repository.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::repository::{RepositoryError, RepositoryResult, Rifle, RifleRepository};
use crate::calculator::RifleProfile;

/// In-memory rifle repository.
///
/// Nothing is persisted; contents live as long as the last clone.
#[derive(Clone, Default)]
pub struct LocalRifleRepository {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    rifles: HashMap<String, Rifle>,
    // Creation order for `list`
    order: Vec<String>,
}

impl LocalRifleRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RifleRepository for LocalRifleRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn create(&self, profile: RifleProfile) -> RepositoryResult<Rifle> {
        profile.validate()?;

        let rifle = Rifle {
            id: Uuid::new_v4().to_string(),
            profile,
        };

        {
            let mut data = self.data.write();
            data.order.push(rifle.id.clone());
            data.rifles.insert(rifle.id.clone(), rifle.clone());
        }

        info!(id = %rifle.id, name = %rifle.profile.name, "created rifle profile");
        Ok(rifle)
    }

    async fn list(&self) -> RepositoryResult<Vec<Rifle>> {
        let data = self.data.read();
        Ok(data
            .order
            .iter()
            .filter_map(|id| data.rifles.get(id).cloned())
            .collect())
    }

    async fn get(&self, id: &str) -> RepositoryResult<Rifle> {
        self.data
            .read()
            .rifles
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(id))
    }
}
