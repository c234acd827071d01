use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;

/// One example sentence in a processed word entry
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ExampleSentence {
    pub en: String,
    pub zh: String,
}

/// A processed vocabulary word: phonetics, Chinese meaning, example sentences
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Word {
    pub word: String,
    pub phonetic: String,
    pub meaning: String,
    pub examples: Vec<ExampleSentence>,
}

/// Word list row returned from SELECT queries. The `words` column is the
/// JSONB array of [`Word`] documents exactly as saved.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct WordListRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub words: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Parameters for saving a word list
#[derive(Debug, Clone)]
pub struct SaveWordListParams {
    pub user_id: String,
    pub name: String,
    pub words: serde_json::Value,
}

/// Learning record row returned from SELECT queries
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct LearningRecordRow {
    pub id: String,
    pub user_id: String,
    pub word: String,
    pub review_count: i32,
    pub in_review_list: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Parameters for upserting a learning record
#[derive(Debug, Clone)]
pub struct UpsertLearningRecordParams {
    pub user_id: String,
    pub word: String,
    pub in_review_list: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_serialization() {
        let word = Word {
            word: "apple".to_string(),
            phonetic: "/ˈæp.əl/".to_string(),
            meaning: "苹果".to_string(),
            examples: vec![ExampleSentence {
                en: "I eat an **apple** every day.".to_string(),
                zh: "我每天吃一个苹果。".to_string(),
            }],
        };

        let json = serde_json::to_string(&word).unwrap();
        assert!(json.contains("apple"));
        assert!(json.contains("苹果"));

        let deserialized: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.word, word.word);
        assert_eq!(deserialized.examples.len(), 1);
    }

    #[test]
    fn test_word_list_row_uses_camel_case() {
        let row = WordListRow {
            id: "list-1".to_string(),
            user_id: "default-user".to_string(),
            name: "Unit 3".to_string(),
            words: serde_json::json!([]),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"userId\""));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_learning_record_row_round_trip() {
        let row = LearningRecordRow {
            id: "rec-1".to_string(),
            user_id: "default-user".to_string(),
            word: "banana".to_string(),
            review_count: 3,
            in_review_list: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&row).unwrap();
        let deserialized: LearningRecordRow = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.review_count, 3);
        assert!(deserialized.in_review_list);
    }
}
