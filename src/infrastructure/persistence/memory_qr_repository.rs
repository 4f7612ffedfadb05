//! Process-memory implementation of [`QrRepository`].

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{NewQrCode, QrCode, QrCodePatch};
use crate::domain::repositories::QrRepository;
use crate::error::AppError;

/// QR code table held in process memory.
///
/// All records are lost when the process exits. Each trait method takes the
/// lock exactly once, so a read-modify-write such as [`scan_if_active`] is
/// atomic with respect to concurrent updates and deletes.
///
/// [`scan_if_active`]: QrRepository::scan_if_active
#[derive(Debug, Default)]
pub struct MemoryQrRepository {
    table: RwLock<Table>,
}

#[derive(Debug, Default)]
struct Table {
    records: HashMap<String, Slot>,
    /// Insertion counter; orders records created within the same clock tick.
    next_seq: u64,
    /// Identifiers of deleted records, so a printed code never starts pointing
    /// at a new record. Only the key is kept, never the data; the set is never
    /// pruned and grows by one short string per delete for the process
    /// lifetime.
    retired: HashSet<String>,
}

#[derive(Debug)]
struct Slot {
    seq: u64,
    qr: QrCode,
}

impl MemoryQrRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QrRepository for MemoryQrRepository {
    async fn insert(&self, new_qr: NewQrCode) -> Result<QrCode, AppError> {
        let mut table = self.table.write().await;

        if table.records.contains_key(&new_qr.id) || table.retired.contains(&new_qr.id) {
            return Err(AppError::conflict(
                "QR code identifier already exists",
                json!({ "id": new_qr.id }),
            ));
        }

        let qr = QrCode::from_new(new_qr);
        let seq = table.next_seq;
        table.next_seq += 1;
        table
            .records
            .insert(qr.id.clone(), Slot { seq, qr: qr.clone() });
        Ok(qr)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<QrCode>, AppError> {
        Ok(self
            .table
            .read()
            .await
            .records
            .get(id)
            .map(|slot| slot.qr.clone()))
    }

    async fn list(&self) -> Result<Vec<QrCode>, AppError> {
        let table = self.table.read().await;
        let mut slots: Vec<&Slot> = table.records.values().collect();
        slots.sort_by(|a, b| {
            a.qr.created_at
                .cmp(&b.qr.created_at)
                .then_with(|| a.seq.cmp(&b.seq))
        });
        Ok(slots.into_iter().map(|slot| slot.qr.clone()).collect())
    }

    async fn update(&self, id: &str, patch: QrCodePatch) -> Result<QrCode, AppError> {
        let mut table = self.table.write().await;
        let slot = table
            .records
            .get_mut(id)
            .ok_or_else(|| AppError::qr_not_found(id))?;
        slot.qr.apply(patch);
        Ok(slot.qr.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut table = self.table.write().await;
        if table.records.remove(id).is_none() {
            return Ok(false);
        }
        table.retired.insert(id.to_string());
        Ok(true)
    }

    async fn scan_if_active(
        &self,
        id: &str,
        scanned_at: DateTime<Utc>,
    ) -> Result<Option<String>, AppError> {
        let mut table = self.table.write().await;
        match table.records.get_mut(id) {
            Some(slot) if slot.qr.is_active => {
                slot.qr.register_scan(scanned_at);
                Ok(Some(slot.qr.target_url.clone()))
            }
            _ => Ok(None),
        }
    }
}
