use serde::{Deserialize, Serialize};

use crate::AnswerField;

/// Declares a fixed-choice answer enum whose serialized form is the label the
/// scoring endpoint expects.
macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Case-insensitive lookup by label; surrounding whitespace is ignored.
            pub fn from_label(raw: &str) -> Option<Self> {
                let raw = raw.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|choice| choice.label().eq_ignore_ascii_case(raw))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choice_enum!(
    /// Academic stream or field of study.
    Stream {
        ComputerScience => "Computer Science & IT",
        Engineering => "Engineering",
        Business => "Business & Management",
        Arts => "Arts & Humanities",
        Science => "Science & Research",
        Healthcare => "Healthcare & Medicine",
        Design => "Design & Creative Arts",
    }
);

choice_enum!(
    /// Current academic performance band.
    Marks {
        Top => "90-100%",
        High => "80-89%",
        Good => "70-79%",
        Fair => "60-69%",
        Below => "Below 60%",
    }
);

choice_enum!(
    /// How the user feels about their career journey.
    Mood {
        Excited => "Excited & Confident",
        Curious => "Curious & Open",
        Hopeful => "Uncertain but Hopeful",
        Overwhelmed => "Overwhelmed",
        Stressed => "Stressed",
    }
);

/// The fixed-shape record the scoring endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentAnswers {
    pub name: String,
    pub stream: Stream,
    pub marks: Marks,
    pub interests: String,
    pub mood: Mood,
}

/// Answers collected so far; one field is filled per wizard step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct PartialAnswers {
    pub name: Option<String>,
    pub stream: Option<Stream>,
    pub marks: Option<Marks>,
    pub interests: Option<String>,
    pub mood: Option<Mood>,
}

impl PartialAnswers {
    /// All five answers, or the first field still unanswered.
    pub fn complete(&self) -> Result<AssessmentAnswers, AnswerField> {
        Ok(AssessmentAnswers {
            name: self.name.clone().ok_or(AnswerField::Name)?,
            stream: self.stream.ok_or(AnswerField::Stream)?,
            marks: self.marks.ok_or(AnswerField::Marks)?,
            interests: self.interests.clone().ok_or(AnswerField::Interests)?,
            mood: self.mood.ok_or(AnswerField::Mood)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub greeting: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedCareer {
    pub title: String,
    pub confidence: f64,
}

/// The dashboard shape the scoring service currently returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDashboard {
    pub summary: DashboardSummary,
    #[serde(default)]
    pub suggested_careers: Vec<SuggestedCareer>,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

/// Assessment response. Anything that does not match the known shape is kept
/// as raw JSON and shown as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dashboard {
    Career(CareerDashboard),
    Opaque(serde_json::Value),
}

impl Dashboard {
    pub fn from_value(value: serde_json::Value) -> Self {
        match serde_json::from_value::<CareerDashboard>(value.clone()) {
            Ok(dashboard) => Dashboard::Career(dashboard),
            Err(_) => Dashboard::Opaque(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_case_insensitively() {
        assert_eq!(Stream::from_label("engineering"), Some(Stream::Engineering));
        assert_eq!(Marks::from_label(" below 60% "), Some(Marks::Below));
        assert_eq!(Mood::from_label("Happy"), None);
        assert_eq!(Stream::ALL.len(), 7);
        assert_eq!(Marks::ALL.len(), 5);
        assert_eq!(Mood::ALL.len(), 5);
    }

    #[test]
    fn answers_serialize_with_labels() {
        let answers = AssessmentAnswers {
            name: "Sam".into(),
            stream: Stream::Design,
            marks: Marks::High,
            interests: "illustration".into(),
            mood: Mood::Curious,
        };
        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Sam",
                "stream": "Design & Creative Arts",
                "marks": "80-89%",
                "interests": "illustration",
                "mood": "Curious & Open",
            })
        );
    }

    #[test]
    fn unknown_dashboard_shape_is_kept_opaque() {
        let known = serde_json::json!({
            "summary": {"greeting": "Hi", "recommendation": "Code"},
            "suggestedCareers": [{"title": "Software Engineer", "confidence": 0.86}],
            "nextSteps": ["Practice"],
        });
        assert!(matches!(Dashboard::from_value(known), Dashboard::Career(_)));

        let other = serde_json::json!({"score": 42});
        assert_eq!(
            Dashboard::from_value(other.clone()),
            Dashboard::Opaque(other)
        );
    }
}
