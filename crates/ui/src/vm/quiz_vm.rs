use quiz_core::attempt::QuizAttempt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionTileVm {
    pub label: String,
    pub selected: bool,
}

/// Everything the quiz page draws for the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub heading: String,
    pub text: String,
    pub options: Vec<OptionTileVm>,
    pub can_go_previous: bool,
    pub can_advance: bool,
    pub is_last: bool,
}

impl From<&QuizAttempt> for QuestionVm {
    fn from(attempt: &QuizAttempt) -> Self {
        let question = attempt.current();
        let selected = attempt.selected_answer();
        Self {
            heading: attempt.position_label(),
            text: question.text.clone(),
            options: question
                .options
                .iter()
                .map(|option| OptionTileVm {
                    label: option.clone(),
                    selected: selected == Some(option.as_str()),
                })
                .collect(),
            can_go_previous: attempt.can_go_previous(),
            can_advance: attempt.can_advance(),
            is_last: attempt.is_last(),
        }
    }
}
