use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use userapi_core::{User, UserFields, UserId};

use super::r#trait::{StoreError, UserStore};

#[derive(Debug)]
struct Table {
    next_id: i64,
    rows: BTreeMap<UserId, UserFields>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// In-memory user table.
///
/// Intended for tests/dev. Ids are assigned from 1 upwards like a `BIGSERIAL`
/// column, and `find_all` returns rows in id order.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    table: RwLock<Table>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::Query("lock poisoned".to_string())
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: &UserFields) -> Result<UserId, StoreError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        let id = UserId::new(table.next_id);
        table.next_id += 1;
        table.rows.insert(id, user.clone());
        Ok(id)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table
            .rows
            .get(&id)
            .map(|fields| User::from_fields(id, fields.clone())))
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table
            .rows
            .iter()
            .map(|(id, fields)| User::from_fields(*id, fields.clone()))
            .collect())
    }

    async fn update(&self, id: UserId, user: &UserFields) -> Result<u64, StoreError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = user.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: UserId) -> Result<u64, StoreError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        Ok(u64::from(table.rows.remove(&id).is_some()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
