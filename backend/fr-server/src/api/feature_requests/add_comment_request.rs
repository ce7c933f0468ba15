use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    pub body: String,
}
