//! Questions, creation payloads and search terms

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use sqlx::FromRow;

use super::ValidationError;

/// Question record as stored.
///
/// Serializes to the formatted shape `{id, question, answer, difficulty,
/// category}` with the category id rendered as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    #[serde(serialize_with = "category_as_string")]
    pub category: i32,
    pub difficulty: i32,
}

fn category_as_string<S: Serializer>(category: &i32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(category)
}

/// Validated body of `POST /questions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

impl NewQuestion {
    /// Build from a raw JSON object.
    ///
    /// All four keys must be present. Text fields accept strings (or numbers,
    /// rendered as text); integer fields accept numbers or numeric strings.
    /// Empty strings pass.
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let question = required(body, "question")?;
        let answer = required(body, "answer")?;
        let difficulty = required(body, "difficulty")?;
        let category = required(body, "category")?;

        Ok(Self {
            question: text(question, "question")?,
            answer: text(answer, "answer")?,
            difficulty: integer(difficulty, "difficulty")?,
            category: integer(category, "category")?,
        })
    }
}

fn required<'a>(body: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, ValidationError> {
    body.get(field).ok_or(ValidationError::Missing { field })
}

fn text(value: &Value, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(ValidationError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

/// Coerce a JSON number or numeric string into an `i32` id/score.
pub(crate) fn integer(value: &Value, field: &'static str) -> Result<i32, ValidationError> {
    let wrong = || ValidationError::WrongType {
        field,
        expected: "an integer",
    };
    let n = match value {
        Value::Number(n) => n.as_i64().ok_or_else(wrong)?,
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| wrong())?,
        _ => return Err(wrong()),
    };
    i32::try_from(n).map_err(|_| wrong())
}

/// A non-empty, case-insensitive substring to look for in question text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// `None` for an absent or empty term; neither is searchable.
    pub fn parse(raw: Option<String>) -> Option<Self> {
        raw.filter(|s| !s.is_empty()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ILIKE pattern with `%`, `_` and `\` escaped so the term matches literally.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }

    /// In-process equivalent of the ILIKE match.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test body must be an object"),
        }
    }

    #[test]
    fn formatted_question_renders_category_as_string() {
        let q = Question {
            id: 7,
            question: "Q?".into(),
            answer: "A".into(),
            category: 3,
            difficulty: 2,
        };
        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            json!({"id": 7, "question": "Q?", "answer": "A", "category": "3", "difficulty": 2})
        );
    }

    #[test]
    fn new_question_accepts_complete_body() {
        let q = NewQuestion::from_body(&body(json!({
            "question": "test question",
            "answer": "test answer",
            "difficulty": 1,
            "category": "4"
        })))
        .unwrap();
        assert_eq!(q.difficulty, 1);
        assert_eq!(q.category, 4);
    }

    #[test]
    fn new_question_allows_empty_text() {
        let q = NewQuestion::from_body(&body(json!({
            "question": "", "answer": "", "difficulty": 0, "category": 1
        })))
        .unwrap();
        assert!(q.question.is_empty());
    }

    #[test]
    fn new_question_rejects_each_missing_field() {
        for field in ["question", "answer", "difficulty", "category"] {
            let mut map = body(json!({
                "question": "q", "answer": "a", "difficulty": 1, "category": 1
            }));
            map.remove(field);
            assert_eq!(
                NewQuestion::from_body(&map).unwrap_err(),
                ValidationError::Missing { field }
            );
        }
    }

    #[test]
    fn new_question_rejects_bad_types() {
        let err = NewQuestion::from_body(&body(json!({
            "question": "q", "answer": null, "difficulty": 1, "category": 1
        })))
        .unwrap_err();
        assert!(matches!(err, ValidationError::WrongType { field: "answer", .. }));

        let err = NewQuestion::from_body(&body(json!({
            "question": "q", "answer": "a", "difficulty": "hard", "category": 1
        })))
        .unwrap_err();
        assert!(matches!(err, ValidationError::WrongType { field: "difficulty", .. }));

        let err = NewQuestion::from_body(&body(json!({
            "question": "q", "answer": "a", "difficulty": 1, "category": 1.5
        })))
        .unwrap_err();
        assert!(matches!(err, ValidationError::WrongType { field: "category", .. }));
    }

    #[test]
    fn empty_or_absent_search_term_is_not_searchable() {
        assert_eq!(SearchTerm::parse(None), None);
        assert_eq!(SearchTerm::parse(Some(String::new())), None);
        assert!(SearchTerm::parse(Some("title".into())).is_some());
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        let term = SearchTerm::parse(Some("50%_off\\".into())).unwrap();
        assert_eq!(term.like_pattern(), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let term = SearchTerm::parse(Some("TITLE".into())).unwrap();
        assert!(term.matches("What was the title of the 1990 fantasy"));
        assert!(term.matches("Whose autobiography is entitled"));
        assert!(!term.matches("Who discovered penicillin?"));
    }
}
