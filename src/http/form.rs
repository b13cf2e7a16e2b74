//! Form extraction for FAQ create/update requests.
//!
//! Accepts `multipart/form-data` (with an optional `image` file part) and
//! `application/x-www-form-urlencoded`. Any other body is read as an empty
//! form. The first occurrence of a repeated field wins.

use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};

use crate::http::error::ApiError;

/// An uploaded file held in memory until the handler decides to store it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Filename as sent by the client, unsanitized.
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Fields of a FAQ create/update form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqForm {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub image: Option<ImageUpload>,
}

impl FaqForm {
    /// The question, if present and non-empty.
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref().filter(|q| !q.is_empty())
    }

    fn set_text(&mut self, name: &str, value: String) {
        let slot = match name {
            "question" => &mut self.question,
            "answer" => &mut self.answer,
            _ => return,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = FaqForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::MalformedForm(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match field.file_name().map(str::to_string) {
                Some(filename) if name == "image" => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::MalformedForm(e.body_text()))?;
                    // An empty file input submits a part with no filename.
                    if form.image.is_none() && !filename.is_empty() {
                        form.image = Some(ImageUpload {
                            filename,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                Some(_) => {}
                None => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| ApiError::MalformedForm(e.body_text()))?;
                    form.set_text(&name, value);
                }
            }
        }

        Ok(form)
    }

    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = FaqForm::default();
        for (name, value) in pairs {
            form.set_text(&name, value);
        }
        form
    }
}

impl<S> FromRequest<S> for FaqForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::MalformedForm(e.body_text()))?;
            Self::from_multipart(multipart).await
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| ApiError::MalformedForm(e.body_text()))?;
            Ok(Self::from_pairs(pairs))
        } else {
            Ok(FaqForm::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    const BOUNDARY: &str = "XBOUNDARYX";

    fn multipart_request(body: String) -> Request {
        Request::builder()
            .method("POST")
            .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
            .body(Body::from(body))
            .unwrap()
    }

    fn text_part(name: &str, value: &str) -> String {
        format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
    }

    fn file_part(name: &str, filename: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: image/png\r\n\r\n{value}\r\n"
        )
    }

    #[tokio::test]
    async fn test_multipart_fields_and_image() {
        let body = format!(
            "{}{}{}--{BOUNDARY}--\r\n",
            text_part("question", "What is X?"),
            text_part("answer", "A letter."),
            file_part("image", "x.png", "PNGDATA"),
        );
        let form = FaqForm::from_request(multipart_request(body), &()).await.unwrap();

        assert_eq!(form.question(), Some("What is X?"));
        assert_eq!(form.answer.as_deref(), Some("A letter."));
        let image = form.image.unwrap();
        assert_eq!(image.filename, "x.png");
        assert_eq!(image.bytes, b"PNGDATA");
    }

    #[tokio::test]
    async fn test_multipart_first_value_wins_and_empty_file_ignored() {
        let body = format!(
            "{}{}{}--{BOUNDARY}--\r\n",
            text_part("question", "first"),
            text_part("question", "second"),
            file_part("image", "", ""),
        );
        let form = FaqForm::from_request(multipart_request(body), &()).await.unwrap();

        assert_eq!(form.question(), Some("first"));
        assert_eq!(form.image, None);
    }

    #[tokio::test]
    async fn test_urlencoded() {
        let req = Request::builder()
            .method("POST")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("question=What+is+X%3F&answer="))
            .unwrap();
        let form = FaqForm::from_request(req, &()).await.unwrap();

        assert_eq!(form.question(), Some("What is X?"));
        assert_eq!(form.answer.as_deref(), Some(""));
        assert_eq!(form.image, None);
    }

    #[tokio::test]
    async fn test_other_content_is_empty_form() {
        let req = Request::builder()
            .method("POST")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"question":"ignored"}"#))
            .unwrap();
        let form = FaqForm::from_request(req, &()).await.unwrap();
        assert_eq!(form, FaqForm::default());
    }

    #[tokio::test]
    async fn test_empty_question_counts_as_missing() {
        let req = Request::builder()
            .method("POST")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("question="))
            .unwrap();
        let form = FaqForm::from_request(req, &()).await.unwrap();
        assert_eq!(form.question(), None);
    }
}
