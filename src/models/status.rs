use serde::Serialize;
use std::fmt;

/// Direction of a single stamp.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    In,
    Out,
}

impl Status {
    /// Lenient parser for user input ("IN", " out ").
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::In => "in",
            Status::Out => "out",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum (strict)
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(Status::In),
            "out" => Some(Status::Out),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status derived from the most recent stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrentStatus {
    #[default]
    Unknown,
    In,
    Out,
}

impl CurrentStatus {
    pub fn is_in(&self) -> bool {
        matches!(self, CurrentStatus::In)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrentStatus::Unknown => "",
            CurrentStatus::In => "in",
            CurrentStatus::Out => "out",
        }
    }
}

impl From<Status> for CurrentStatus {
    fn from(s: Status) -> Self {
        match s {
            Status::In => CurrentStatus::In,
            Status::Out => CurrentStatus::Out,
        }
    }
}

impl From<Option<Status>> for CurrentStatus {
    fn from(s: Option<Status>) -> Self {
        s.map(CurrentStatus::from).unwrap_or_default()
    }
}
