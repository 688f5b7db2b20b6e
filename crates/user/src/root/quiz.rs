use validator::Validate;

use crate::repository;

#[derive(Validate)]
pub struct QuizAnswerInput {
    pub user_id: i64,
    #[validate(length(min = 1, max = 500, message = "Question is required"))]
    pub question: String,
    #[validate(length(min = 1, max = 200, message = "Answer is required"))]
    pub answer: String,
}

impl super::Command {
    #[tracing::instrument(skip_all, fields(user_id = input.user_id))]
    pub async fn answer_quiz(&self, input: QuizAnswerInput) -> moodmeet_shared::Result<()> {
        input.validate()?;

        repository::create_quiz_answer(&self.0, input.user_id, input.question, input.answer).await
    }
}
