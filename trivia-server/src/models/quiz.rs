//! Quiz round requests

use serde::Deserialize;
use serde_json::Value;

use super::question::integer;
use super::ValidationError;

/// Category id quiz front-ends send for "all categories".
pub const ALL_CATEGORIES: i32 = 0;

/// Raw body of `POST /quizzes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<Value>>,
    #[serde(default)]
    pub quiz_category: Option<Value>,
}

/// Which questions a round may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(i32),
}

/// A validated quiz round: draw from `category`, skipping `previous` ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    pub category: CategoryFilter,
    pub previous: Vec<i32>,
}

impl TryFrom<QuizRequest> for QuizRound {
    type Error = ValidationError;

    fn try_from(req: QuizRequest) -> Result<Self, Self::Error> {
        let category = match req.quiz_category {
            Some(Value::Object(obj)) => {
                let id = obj
                    .get("id")
                    .ok_or(ValidationError::Missing { field: "quiz_category.id" })?;
                match integer(id, "quiz_category.id")? {
                    ALL_CATEGORIES => CategoryFilter::All,
                    id => CategoryFilter::Only(id),
                }
            }
            None | Some(Value::Null) => {
                return Err(ValidationError::Missing { field: "quiz_category" })
            }
            Some(_) => {
                return Err(ValidationError::WrongType {
                    field: "quiz_category",
                    expected: "an object",
                })
            }
        };

        let previous = req
            .previous_questions
            .unwrap_or_default()
            .iter()
            .map(|v| integer(v, "previous_questions"))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { category, previous })
    }
}
