use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAnswerRequest {
    pub user_id: i64,
    pub question: String,
    pub answer: String,
}

pub fn questions() -> Vec<QuizQuestion> {
    [
        (1, "Pick your vibe today", &["Calm", "Energetic", "Anxious"][..]),
        (
            2,
            "Choose a music genre you like",
            &["Lo-fi", "Indie", "Electronic", "Classical"][..],
        ),
        (
            3,
            "Do you prefer small meetups or big events?",
            &["Small", "Big"][..],
        ),
        (
            4,
            "Favorite time of day to hang out?",
            &["Morning", "Afternoon", "Night"][..],
        ),
    ]
    .into_iter()
    .map(|(id, question, options)| QuizQuestion {
        id,
        question: question.to_owned(),
        options: options.iter().map(|o| (*o).to_owned()).collect(),
    })
    .collect()
}
