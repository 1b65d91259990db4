use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a top-level category in the forum.
///
/// Categories are created once by the seeder and never change afterwards;
/// there is no endpoint that creates, updates or deletes them.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Represents a discussion thread within a category.
///
/// `replies` is a denormalized counter kept in sync by the service layer:
/// it counts the messages of the thread excluding the seed message.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: i64,
    pub category_id: i64,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub replies: i64,
}

/// Represents a single message within a thread.
///
/// The first message of a thread (the "seed message") is written together
/// with the thread itself and carries the same author and content.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub thread_id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
