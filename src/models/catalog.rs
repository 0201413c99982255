//! Content catalog models: test modules, series, and questions

use serde::{Deserialize, Serialize};

/// The four fixed TCF test sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleCode {
    /// Compréhension Écrite
    CE,
    /// Compréhension Orale
    CO,
    /// Expression Écrite
    EE,
    /// Expression Orale
    EO,
}

impl ModuleCode {
    pub fn all() -> [ModuleCode; 4] {
        [ModuleCode::CE, ModuleCode::CO, ModuleCode::EE, ModuleCode::EO]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleCode::CE => "CE",
            ModuleCode::CO => "CO",
            ModuleCode::EE => "EE",
            ModuleCode::EO => "EO",
        }
    }
}

impl std::fmt::Display for ModuleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModuleCode {
    type Err = crate::utils::errors::AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CE" => Ok(ModuleCode::CE),
            "CO" => Ok(ModuleCode::CO),
            "EE" => Ok(ModuleCode::EE),
            "EO" => Ok(ModuleCode::EO),
            other => Err(crate::utils::errors::AdminError::ModuleNotFound {
                code: other.to_string(),
            }),
        }
    }
}

/// Static catalog entry for one test section, never mutated at runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcfModule {
    pub id: String,
    pub name: String,
    pub code: ModuleCode,
    pub description: String,
    pub question_count: u32,
    pub duration_minutes: u32,
}

/// A named bundle of questions under one module.
///
/// Draft vs published is distinguished only by `is_active`, which gates
/// visibility on the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: String,
    pub module_id: ModuleCode,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub question_count: u32,
    pub is_premium: bool,
    pub is_active: bool,
    pub last_updated: String,
}

/// Primary question categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuestionType {
    Qcm,
    Audio,
    Image,
}

/// The fixed TCF scoring scale; every question is worth one of these values
pub const POINT_SCALE: [u8; 6] = [3, 9, 15, 21, 26, 33];

/// Difficulty bounds (NCLC-style levels)
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub module_id: ModuleCode,
    pub series_id: String,
    /// 1-6
    pub difficulty: u8,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub points: u8,
    pub choices: Vec<String>,
    pub correct_answer: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_code_round_trip() {
        for code in ModuleCode::all() {
            let parsed: ModuleCode = code.as_str().parse().unwrap();
            assert_eq!(parsed, code);
        }
        assert!("XX".parse::<ModuleCode>().is_err());
    }

    #[test]
    fn test_question_serde_field_names() {
        let question = Question {
            id: "q1".to_string(),
            text: "Quelle est l'intention de l'auteur ?".to_string(),
            module_id: ModuleCode::CE,
            series_id: "s1".to_string(),
            difficulty: 4,
            kind: QuestionType::Qcm,
            points: 15,
            choices: vec!["Informer".to_string(), "Convaincre".to_string()],
            correct_answer: 1,
            audio_url: None,
            image_url: None,
        };

        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "QCM");
        assert_eq!(json["seriesId"], "s1");
        assert_eq!(json["correctAnswer"], 1);
        assert!(json.get("audioUrl").is_none());
    }
}
