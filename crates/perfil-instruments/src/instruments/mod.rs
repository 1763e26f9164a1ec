pub mod fiction;
pub mod nonfiction;

use crate::scoring::{AnswerOption, Axis, Question};

fn axis(title: &str, short_title: &str, questions: Vec<Question>) -> Axis {
    Axis {
        title: title.to_string(),
        short_title: short_title.to_string(),
        questions,
    }
}

fn question(prompt: &str, options: &[(&str, u32)]) -> Question {
    Question {
        prompt: prompt.to_string(),
        options: options
            .iter()
            .map(|&(label, points)| AnswerOption {
                label: label.to_string(),
                points,
            })
            .collect(),
    }
}
