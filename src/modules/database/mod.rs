use crate::modules::error::{SukiError, SukiResult};
use crate::modules::status::entity::StatusCheck;
use crate::raise_error;
use itertools::Itertools;
use native_db::*;
use std::sync::{Arc, LazyLock};

use super::error::code::ErrorCode;
pub mod manager;

pub static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut adapter = ModelsAdapter::new();
    adapter.register_store_models();
    adapter.models
});

pub struct ModelsAdapter {
    pub models: Models,
}

impl ModelsAdapter {
    pub fn new() -> Self {
        ModelsAdapter {
            models: Models::new(),
        }
    }

    pub fn register_model<T: ToInput>(&mut self) {
        self.models.define::<T>().expect("failed to define model ");
    }

    pub fn register_store_models(&mut self) {
        self.register_model::<StatusCheck>();
    }
}

// Engine errors stay in the server log; callers only ever see the stable
// message and code.
fn store_failure<E: std::fmt::Debug>(error: E) -> SukiError {
    tracing::error!("Status store operation failed: {:#?}", error);
    raise_error!("Status store operation failed".into(), ErrorCode::StoreError)
}

pub async fn insert_impl<T: ToInput + Clone + Send + 'static>(
    database: &Arc<Database<'static>>,
    item: T,
) -> SukiResult<()> {
    let db = database.clone();
    tokio::task::spawn_blocking(move || {
        let rw_transaction = db.rw_transaction().map_err(store_failure)?;
        rw_transaction.insert(item).map_err(store_failure)?;
        rw_transaction.commit().map_err(store_failure)?;
        Ok(())
    })
    .await
    .map_err(store_failure)?
}

// Primary keys carry the creation timestamp up front, so dictionary order is
// insertion order and a reversed scan walks newest first.
pub async fn list_recent_impl<T: ToInput + Clone + Send + 'static>(
    database: &Arc<Database<'static>>,
    limit: usize,
) -> SukiResult<Vec<T>> {
    let db = database.clone();
    tokio::task::spawn_blocking(move || {
        let r_transaction = db.r_transaction().map_err(store_failure)?;
        let scan = r_transaction.scan().primary().map_err(store_failure)?;
        let iter = scan.all().map_err(store_failure)?;
        let mut entities: Vec<T> = iter.rev().take(limit).try_collect().map_err(store_failure)?;
        // Hand back the retained window in insertion order.
        entities.reverse();
        Ok(entities)
    })
    .await
    .map_err(store_failure)?
}
