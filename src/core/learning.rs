use serde::Serialize;

/// One glossary card: a cash-flow term and its kid-friendly explanation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub explanation: &'static str,
}

static GLOSSARY: [GlossaryEntry; 6] = [
    GlossaryEntry {
        term: "Cash Inflows",
        explanation: "Money coming IN to your piggy bank! 💰",
    },
    GlossaryEntry {
        term: "Cash Outflows",
        explanation: "Money going OUT from your piggy bank! 💸",
    },
    GlossaryEntry {
        term: "Liquidity",
        explanation: "How quickly you can use your money - like having coins ready to buy ice cream! 🍦",
    },
    GlossaryEntry {
        term: "Operating Activities",
        explanation: "Everyday money movement - like getting allowance or buying snacks! 🍭",
    },
    GlossaryEntry {
        term: "Investing Activities",
        explanation: "Using money to get more money later - like buying seeds to grow plants to sell! 🌱",
    },
    GlossaryEntry {
        term: "Financing Activities",
        explanation: "Borrowing money or giving money back that you borrowed! 🏦",
    },
];

pub fn glossary() -> &'static [GlossaryEntry] {
    &GLOSSARY
}

/// A multiple-choice question. The answer index and the corrective feedback
/// are skipped during serialization so the quiz payload never leaks them.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub choices: [&'static str; 3],
    #[serde(skip)]
    answer: usize,
    #[serde(skip)]
    wrong_feedback: &'static str,
}

static QUESTIONS: [QuizQuestion; 2] = [
    QuizQuestion {
        prompt: "Money coming into your piggy bank is called:",
        choices: ["Cash Outflows", "Cash Inflows", "Liquidity"],
        answer: 1,
        wrong_feedback: "Not quite right. Money coming IN is called Cash Inflows!",
    },
    QuizQuestion {
        prompt: "Buying snacks or getting allowance are examples of:",
        choices: ["Operating Activities", "Investing Activities", "Financing Activities"],
        answer: 0,
        wrong_feedback: "Not quite right. Everyday money like allowance and snacks are Operating Activities!",
    },
];

pub fn quiz_questions() -> &'static [QuizQuestion] {
    &QUESTIONS
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub correct: bool,
    pub feedback: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizReport {
    pub score: u32,
    pub total: u32,
    pub results: Vec<QuestionResult>,
}

/// Grades chosen answer indexes against the quiz, in question order.
/// A missing answer counts as wrong; extra answers are ignored.
pub fn grade_quiz(answers: &[usize]) -> QuizReport {
    let mut score = 0;
    let results = QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let correct = answers.get(i) == Some(&question.answer);
            if correct {
                score += 1;
            }
            QuestionResult {
                correct,
                feedback: if correct { "Correct! 🎉" } else { question.wrong_feedback },
            }
        })
        .collect();

    QuizReport {
        score,
        total: QUESTIONS.len() as u32,
        results,
    }
}
