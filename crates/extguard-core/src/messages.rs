//! User-facing message catalog
//!
//! Every string the panel shows is keyed by a logical [`Message`]. The Korean
//! text is the reference wording; English is a straight translation with the
//! same parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Substrings that mark a backend error message as a duplicate-key rejection
pub const DUPLICATE_MARKERS: [&str; 3] = ["already exists", "이미 존재", "이미 등록"];

/// Backend error code for a duplicate custom extension
pub const DUPLICATE_CODE: &str = "DUPLICATE_EXTENSION";

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ko,
    #[default]
    En,
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" | "ko-kr" | "korean" => Ok(Self::Ko),
            "en" | "en-us" | "english" => Ok(Self::En),
            other => Err(Error::invalid_locale(other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ko => write!(f, "ko"),
            Self::En => write!(f, "en"),
        }
    }
}

/// Logical message identifiers with their parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    EmptyInput,
    TooLong { max: usize },
    InvalidFormat,
    CountExceeded { max: usize },
    Duplicate { extension: String },
    UpdateFailed,
    AddFailed,
    DeleteFailed,
    Blocked { name: String },
    Unblocked { name: String },
    ConfirmDelete { name: String },
}

impl Message {
    /// Render the message in the given locale
    pub fn render(&self, locale: Locale) -> String {
        match locale {
            Locale::Ko => self.render_ko(),
            Locale::En => self.render_en(),
        }
    }

    fn render_ko(&self) -> String {
        match self {
            Self::EmptyInput => "확장자를 입력해주세요".to_string(),
            Self::TooLong { max } => format!("확장자는 최대 {max}자까지 입력 가능합니다"),
            Self::InvalidFormat => "확장자는 영문자와 숫자만 입력 가능합니다".to_string(),
            Self::CountExceeded { max } => format!("최대 {max}개까지만 추가할 수 있습니다"),
            Self::Duplicate { extension } => format!("{extension} 확장자는 이미 차단되어 있습니다"),
            Self::UpdateFailed => "업데이트 실패".to_string(),
            Self::AddFailed => "추가 실패".to_string(),
            Self::DeleteFailed => "삭제 실패".to_string(),
            Self::Blocked { name } => format!("{name} 확장자 차단"),
            Self::Unblocked { name } => format!("{name} 확장자 차단 해제"),
            Self::ConfirmDelete { name } => format!("'{name}' 확장자 차단을 해제하시겠습니까?"),
        }
    }

    fn render_en(&self) -> String {
        match self {
            Self::EmptyInput => "Please enter an extension".to_string(),
            Self::TooLong { max } => format!("Extensions can be at most {max} characters"),
            Self::InvalidFormat => "Extensions may only contain letters and digits".to_string(),
            Self::CountExceeded { max } => format!("You can add at most {max} extensions"),
            Self::Duplicate { extension } => format!("{extension} is already blocked"),
            Self::UpdateFailed => "Update failed".to_string(),
            Self::AddFailed => "Add failed".to_string(),
            Self::DeleteFailed => "Delete failed".to_string(),
            Self::Blocked { name } => format!("{name} blocked"),
            Self::Unblocked { name } => format!("{name} unblocked"),
            Self::ConfirmDelete { name } => format!("Unblock the '{name}' extension?"),
        }
    }
}

/// Whether a backend error message reads as a duplicate-key rejection
pub fn is_duplicate_message(message: &str) -> bool {
    let lowered = message.to_lowercase();
    DUPLICATE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}
