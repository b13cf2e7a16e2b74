//! FAQ record type.

use serde::{Deserialize, Serialize};

/// A question/answer pair with an optional image, identified by an integer id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    /// Store-assigned id.
    pub id: u64,
    pub question: String,
    pub answer: String,
    /// Public path of the uploaded image, e.g. `/uploads/cat.png`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Fields supplied to an update. `None` or empty strings leave the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct FaqPatch {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub image: Option<String>,
}

impl FaqPatch {
    /// Overwrite the supplied, non-empty fields of `record`.
    pub(crate) fn apply(self, record: &mut FaqRecord) {
        if let Some(question) = self.question.filter(|q| !q.is_empty()) {
            record.question = question;
        }
        if let Some(answer) = self.answer.filter(|a| !a.is_empty()) {
            record.answer = answer;
        }
        if let Some(image) = self.image {
            record.image = Some(image);
        }
    }
}
