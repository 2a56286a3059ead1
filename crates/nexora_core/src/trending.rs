use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingCareer {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub growth: f64,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendingState {
    careers: Vec<TrendingCareer>,
    loading: bool,
    error: Option<String>,
}

impl TrendingState {
    pub fn careers(&self) -> &[TrendingCareer] {
        &self.careers
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Failures leave an empty list and an inline error.
    pub(crate) fn finish(&mut self, result: Result<Vec<TrendingCareer>, String>) {
        self.loading = false;
        match result {
            Ok(careers) => {
                self.careers = careers;
                self.error = None;
            }
            Err(reason) => {
                self.careers.clear();
                self.error = Some(format!("Failed to fetch trending careers: {reason}"));
            }
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_are_accepted() {
        let career: TrendingCareer = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Data Scientist",
            "growth": 22.5,
            "salary": "₹12-20 LPA",
            "skills": ["Python", "Statistics"],
        }))
        .unwrap();
        assert_eq!(career.id, "7");
        assert_eq!(career.skills.len(), 2);
    }
}
