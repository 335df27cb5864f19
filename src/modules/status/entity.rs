// Copyright © 2025 sukiportfolio.com
// Licensed under Suki Portfolio License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::database::{insert_impl, list_recent_impl};
use crate::modules::error::SukiResult;
use crate::modules::metrics::SUKI_STATUS_CHECK_TOTAL;
use chrono::{SecondsFormat, Utc};
use native_db::*;
use native_model::{native_model, Model};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// How many of the most recent check-ins a listing returns.
pub const RECENT_WINDOW: usize = 1000;

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize, Object)]
#[native_model(id = 1, version = 1)]
#[native_db(primary_key(pk -> String))]
pub struct StatusCheck {
    /// Server-assigned identifier of this check-in.
    #[secondary_key(unique)]
    pub id: String,

    /// Name reported by the client that performed the check-in.
    pub client_name: String,

    /// Creation time in RFC 3339 format with millisecond precision (UTC).
    pub timestamp: String,
}

impl StatusCheck {
    // Timestamp first so the primary index sorts by creation time. The id
    // suffix keeps same-millisecond check-ins from colliding.
    fn pk(&self) -> String {
        format!("{}_{}", self.timestamp, self.id)
    }

    pub fn new(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Record a check-in and hand back the stored row.
    pub async fn create(
        database: &Arc<Database<'static>>,
        client_name: String,
    ) -> SukiResult<StatusCheck> {
        let entity = StatusCheck::new(client_name);
        insert_impl(database, entity.clone()).await?;
        SUKI_STATUS_CHECK_TOTAL.inc();
        Ok(entity)
    }

    /// The most recent check-ins, oldest first, capped at [`RECENT_WINDOW`].
    pub async fn list_recent(database: &Arc<Database<'static>>) -> SukiResult<Vec<StatusCheck>> {
        list_recent_impl(database, RECENT_WINDOW).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::database::MODELS;
    use native_db::Builder;
    use tempfile::tempdir;

    fn open_store(path: std::path::PathBuf) -> Arc<Database<'static>> {
        Arc::new(Builder::new().create(&MODELS, path).unwrap())
    }

    fn check(id: &str, client_name: &str, timestamp: &str) -> StatusCheck {
        StatusCheck {
            id: id.into(),
            client_name: client_name.into(),
            timestamp: timestamp.into(),
        }
    }

    #[test]
    fn test_pk_sorts_by_timestamp_then_id() {
        let older = check("b", "first", "2026-01-01T00:00:00.001Z");
        let newer = check("a", "second", "2026-01-01T00:00:00.002Z");
        assert!(older.pk() < newer.pk());

        let twin_a = check("a", "twin", "2026-01-01T00:00:00.005Z");
        let twin_b = check("b", "twin", "2026-01-01T00:00:00.005Z");
        assert_ne!(twin_a.pk(), twin_b.pk());
        assert!(twin_a.pk() < twin_b.pk());
    }

    #[test]
    fn test_new_assigns_id_and_millis_timestamp() {
        let entity = StatusCheck::new("monitor".into());
        assert!(!entity.id.is_empty());
        assert_eq!(entity.client_name, "monitor");
        assert!(entity.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&entity.timestamp).is_ok());
    }

    #[test]
    fn test_wire_shape() {
        let entity = check("abc-123", "monitor", "2026-01-01T00:00:00.001Z");
        let value = serde_json::to_value(&entity).unwrap();
        assert_eq!(value["id"], "abc-123");
        assert_eq!(value["client_name"], "monitor");
        assert_eq!(value["timestamp"], "2026-01-01T00:00:00.001Z");
    }

    #[tokio::test]
    async fn test_create_then_list_roundtrip() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path().join("status.db"));

        let created = StatusCheck::create(&store, "probe-1".into()).await.unwrap();
        let listed = StatusCheck::list_recent(&store).await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
    }

    #[tokio::test]
    async fn test_listing_keeps_insertion_order_and_caps_window() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path().join("status.db"));

        for i in 0..5 {
            let entity = check(
                &format!("id-{i}"),
                "probe",
                &format!("2026-01-01T00:00:00.00{i}Z"),
            );
            insert_impl(&store, entity).await.unwrap();
        }

        let window = list_recent_impl::<StatusCheck>(&store, 3).await.unwrap();
        let ids: Vec<&str> = window.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["id-2", "id-3", "id-4"]);

        let all = StatusCheck::list_recent(&store).await.unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].id, "id-0");
        assert_eq!(all[4].id, "id-4");
    }

    #[tokio::test]
    async fn test_same_millisecond_checkins_are_both_kept() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path().join("status.db"));

        insert_impl(&store, check("a", "twin", "2026-01-01T00:00:00.005Z"))
            .await
            .unwrap();
        insert_impl(&store, check("b", "twin", "2026-01-01T00:00:00.005Z"))
            .await
            .unwrap();

        let all = StatusCheck::list_recent(&store).await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
