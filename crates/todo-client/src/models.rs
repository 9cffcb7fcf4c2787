//! Client Models
//!
//! Wire structures matching the remote `/todos` API (camelCase JSON).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Todo item as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Server-assigned, unique within the collection
    pub id: String,
    pub text: String,
    /// Server-assigned, never changes; the only sort key
    #[serde(default)]
    pub created_at: CreatedAt,
    pub is_completed: bool,
}

/// Creation time as the server sent it.
///
/// Decoding never fails: an item whose timestamp cannot be read is still
/// listed, it just sorts after every item that has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatedAt {
    /// Epoch milliseconds
    Millis(i64),
    Text(String),
    Other(Value),
}

impl Default for CreatedAt {
    fn default() -> Self {
        CreatedAt::Other(Value::Null)
    }
}

impl From<DateTime<Utc>> for CreatedAt {
    fn from(at: DateTime<Utc>) -> Self {
        CreatedAt::Text(at.to_rfc3339())
    }
}

impl CreatedAt {
    /// RFC 3339, a bare date or an offset-less date-time (taken as UTC),
    /// or epoch milliseconds
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            CreatedAt::Millis(ms) => DateTime::from_timestamp_millis(*ms),
            CreatedAt::Text(raw) => parse_text(raw.trim()),
            CreatedAt::Other(Value::Number(n)) => n
                .as_f64()
                .filter(|ms| ms.is_finite())
                .and_then(|ms| DateTime::from_timestamp_millis(ms as i64)),
            CreatedAt::Other(_) => None,
        }
    }
}

fn parse_text(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Envelope for `GET /todos`
#[derive(Debug, Clone, Deserialize)]
pub struct ItemList {
    pub data: Vec<Item>,
}

/// Body for `POST /todos`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub text: String,
    pub is_completed: bool,
}

impl NewItem {
    /// New items always start incomplete
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_completed: false,
        }
    }
}

/// Partial body for `PATCH /todos/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl ItemPatch {
    /// Flip the completion flag relative to the last-known value
    pub fn toggle(item: &Item) -> Self {
        Self {
            is_completed: Some(!item.is_completed),
            ..Default::default()
        }
    }

    /// Replace the text
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

/// Sort a snapshot by ascending creation time.
///
/// Stable, so items sharing a timestamp keep server order. Unreadable
/// timestamps go last, in server order.
pub fn sort_by_created(items: &mut [Item]) {
    items.sort_by_key(|item| {
        let at = item.created_at.timestamp();
        (at.is_none(), at)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_decodes_camel_case() {
        let item: Item = serde_json::from_value(json!({
            "id": "a1",
            "text": "buy milk",
            "createdAt": "2024-03-01T10:00:00.000Z",
            "isCompleted": true
        }))
        .unwrap();

        assert_eq!(item.id, "a1");
        assert_eq!(item.text, "buy milk");
        assert!(item.is_completed);
        assert_eq!(
            item.created_at.timestamp().unwrap().to_rfc3339(),
            "2024-03-01T10:00:00+00:00"
        );
    }

    #[test]
    fn test_list_envelope() {
        let list: ItemList = serde_json::from_value(json!({ "data": [] })).unwrap();
        assert!(list.data.is_empty());
    }

    #[test]
    fn test_new_item_body() {
        let body = serde_json::to_value(NewItem::new("")).unwrap();
        assert_eq!(body, json!({ "text": "", "isCompleted": false }));
    }

    #[test]
    fn test_patch_bodies_are_partial() {
        let item = Item {
            id: "1".to_string(),
            text: "a".to_string(),
            created_at: CreatedAt::Text("2024-01-01T00:00:00Z".to_string()),
            is_completed: false,
        };

        let toggle = serde_json::to_value(ItemPatch::toggle(&item)).unwrap();
        assert_eq!(toggle, json!({ "isCompleted": true }));

        let edit = serde_json::to_value(ItemPatch::text("b")).unwrap();
        assert_eq!(edit, json!({ "text": "b" }));
    }

    #[test]
    fn test_sort_by_created_handles_offsets() {
        let mut items: Vec<Item> = serde_json::from_value(json!([
            { "id": "late", "text": "", "createdAt": "2024-01-01T12:00:00+02:00", "isCompleted": false },
            { "id": "early", "text": "", "createdAt": "2024-01-01T09:30:00Z", "isCompleted": false }
        ]))
        .unwrap();

        sort_by_created(&mut items);
        assert_eq!(items[0].id, "early");
        assert_eq!(items[1].id, "late");
    }

    fn listed(value: serde_json::Value) -> Vec<String> {
        let mut list: ItemList = serde_json::from_value(value).unwrap();
        sort_by_created(&mut list.data);
        list.data.into_iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_unreadable_timestamps_still_decode() {
        let ids = listed(json!({ "data": [
            { "id": "2", "text": "b", "createdAt": "t2", "isCompleted": false },
            { "id": "1", "text": "a", "createdAt": "t1", "isCompleted": false }
        ]}));
        // no readable times: server order is kept
        assert_eq!(ids, ["2", "1"]);
    }

    #[test]
    fn test_epoch_millis_and_mixed_formats() {
        let ids = listed(json!({ "data": [
            { "id": "junk", "text": "", "createdAt": "t0", "isCompleted": false },
            { "id": "missing", "text": "", "isCompleted": false },
            { "id": "date", "text": "", "createdAt": "2024-01-03", "isCompleted": false },
            { "id": "millis", "text": "", "createdAt": 1704067200000i64, "isCompleted": false },
            { "id": "float", "text": "", "createdAt": 1704153600000.0, "isCompleted": false },
            { "id": "null", "text": "", "createdAt": null, "isCompleted": false }
        ]}));
        assert_eq!(ids, ["millis", "float", "date", "junk", "missing", "null"]);
    }

    #[test]
    fn test_created_at_keeps_raw_value() {
        let item: Item = serde_json::from_value(json!({
            "id": "1", "text": "", "createdAt": 1704067200000i64, "isCompleted": false
        }))
        .unwrap();
        assert_eq!(item.created_at, CreatedAt::Millis(1_704_067_200_000));
        assert_eq!(
            item.created_at.timestamp().unwrap().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
        assert_eq!(serde_json::to_value(&item).unwrap()["createdAt"], json!(1704067200000i64));
    }
}
