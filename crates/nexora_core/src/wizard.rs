//! Linear assessment wizard: name -> stream -> marks -> interests -> mood.

use thiserror::Error;

use crate::answers::{AssessmentAnswers, Dashboard, Marks, Mood, PartialAnswers, Stream};
use crate::chat::ChatMessage;

pub type SubmissionId = u64;

pub const WIZARD_GREETING: &str = "Hi! I'm your AI Career Assistant. I'll help you discover your perfect career path through a quick assessment. Let's start with your name!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerField {
    Name,
    Stream,
    Marks,
    Interests,
    Mood,
}

impl AnswerField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Stream => "academic stream",
            Self::Marks => "academic performance",
            Self::Interests => "career interests",
            Self::Mood => "mood",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    SingleLine,
    MultiLine,
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub field: AnswerField,
    pub prompt: &'static str,
    pub kind: InputKind,
    pub placeholder: Option<&'static str>,
}

impl Question {
    pub fn options(&self) -> &'static [&'static str] {
        match self.kind {
            InputKind::Choice(options) => options,
            InputKind::SingleLine | InputKind::MultiLine => &[],
        }
    }
}

pub static QUESTIONS: [Question; 5] = [
    Question {
        field: AnswerField::Name,
        prompt: "What's your name?",
        kind: InputKind::SingleLine,
        placeholder: Some("Enter your full name"),
    },
    Question {
        field: AnswerField::Stream,
        prompt: "What's your academic stream or field of study?",
        kind: InputKind::Choice(Stream::LABELS),
        placeholder: None,
    },
    Question {
        field: AnswerField::Marks,
        prompt: "What's your current academic performance?",
        kind: InputKind::Choice(Marks::LABELS),
        placeholder: None,
    },
    Question {
        field: AnswerField::Interests,
        prompt: "Tell me about your career interests and goals:",
        kind: InputKind::MultiLine,
        placeholder: Some("Describe what excites you professionally..."),
    },
    Question {
        field: AnswerField::Mood,
        prompt: "How are you feeling about your career journey right now?",
        kind: InputKind::Choice(Mood::LABELS),
        placeholder: None,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub enum WizardPhase {
    Asking(usize),
    Submitting { submission_id: SubmissionId },
    Dashboard(Dashboard),
    Error { message: String },
}

/// Outcome of a single answer that was accepted or ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStep {
    Advanced { step: usize },
    Completed {
        submission_id: SubmissionId,
        answers: AssessmentAnswers,
    },
    /// Not in an asking phase; nothing changed.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardRejection {
    #[error("please provide an answer before continuing")]
    Empty,
    #[error("'{value}' is not one of: {}", options.join(", "))]
    NotAnOption {
        value: String,
        options: &'static [&'static str],
    },
    #[error("your {} answer is missing, please answer it again", .0.label())]
    Missing(AnswerField),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    phase: WizardPhase,
    answers: PartialAnswers,
    transcript: Vec<ChatMessage>,
    next_submission_id: SubmissionId,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            phase: WizardPhase::Asking(0),
            answers: PartialAnswers::default(),
            transcript: vec![ChatMessage::bot(WIZARD_GREETING)],
            next_submission_id: 1,
        }
    }

    pub fn phase(&self) -> &WizardPhase {
        &self.phase
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match self.phase {
            WizardPhase::Asking(step) => QUESTIONS.get(step),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, WizardPhase::Submitting { .. })
    }

    /// Applies one answer to the current step.
    ///
    /// Rejections leave the wizard untouched, except [`WizardRejection::Missing`]
    /// which moves back to the question that still lacks an answer.
    pub fn answer(&mut self, raw: &str) -> Result<WizardStep, WizardRejection> {
        let WizardPhase::Asking(step) = self.phase else {
            return Ok(WizardStep::Ignored);
        };
        let question = &QUESTIONS[step];
        let value = raw.trim();
        if value.is_empty() {
            return Err(WizardRejection::Empty);
        }

        let shown = match question.field {
            AnswerField::Name => {
                self.answers.name = Some(value.to_string());
                value.to_string()
            }
            AnswerField::Interests => {
                self.answers.interests = Some(value.to_string());
                value.to_string()
            }
            AnswerField::Stream => {
                let choice = Stream::from_label(value).ok_or_else(|| not_an_option(value, question))?;
                self.answers.stream = Some(choice);
                choice.label().to_string()
            }
            AnswerField::Marks => {
                let choice = Marks::from_label(value).ok_or_else(|| not_an_option(value, question))?;
                self.answers.marks = Some(choice);
                choice.label().to_string()
            }
            AnswerField::Mood => {
                let choice = Mood::from_label(value).ok_or_else(|| not_an_option(value, question))?;
                self.answers.mood = Some(choice);
                choice.label().to_string()
            }
        };
        self.transcript.push(ChatMessage::user(shown));

        let next = step + 1;
        if next < QUESTIONS.len() {
            self.transcript.push(ChatMessage::bot(QUESTIONS[next].prompt));
            self.phase = WizardPhase::Asking(next);
            return Ok(WizardStep::Advanced { step: next });
        }

        let answers = match self.answers.complete() {
            Ok(answers) => answers,
            Err(missing) => {
                let step = QUESTIONS
                    .iter()
                    .position(|question| question.field == missing)
                    .unwrap_or(0);
                self.transcript.push(ChatMessage::bot(QUESTIONS[step].prompt));
                self.phase = WizardPhase::Asking(step);
                return Err(WizardRejection::Missing(missing));
            }
        };
        self.transcript.push(ChatMessage::bot(format!(
            "Perfect, {}! Based on your responses, I'm generating a personalized career roadmap for you. This might take a moment...",
            answers.name
        )));
        let submission_id = self.next_submission_id;
        self.next_submission_id += 1;
        self.phase = WizardPhase::Submitting { submission_id };
        Ok(WizardStep::Completed {
            submission_id,
            answers,
        })
    }

    /// Applies the result of a submission. Results for a submission that is
    /// no longer outstanding are dropped; returns whether it was applied.
    pub fn complete(&mut self, submission_id: SubmissionId, result: Result<Dashboard, String>) -> bool {
        match self.phase {
            WizardPhase::Submitting { submission_id: current } if current == submission_id => {}
            _ => return false,
        }
        self.phase = match result {
            Ok(dashboard) => WizardPhase::Dashboard(dashboard),
            Err(message) => WizardPhase::Error { message },
        };
        true
    }

    /// Back to the first question with an empty transcript and answers.
    /// Submission ids keep counting so late results stay detectable.
    pub fn reset(&mut self) {
        self.phase = WizardPhase::Asking(0);
        self.answers = PartialAnswers::default();
        self.transcript = vec![ChatMessage::bot(WIZARD_GREETING)];
    }
}

fn not_an_option(value: &str, question: &Question) -> WizardRejection {
    WizardRejection::NotAnOption {
        value: value.to_string(),
        options: question.options(),
    }
}
