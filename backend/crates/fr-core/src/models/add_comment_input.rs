#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommentInput {
    pub body: String,
}
