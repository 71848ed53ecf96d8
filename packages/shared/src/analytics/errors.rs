#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    InvalidMonth { year: i32, month: u32 },
}

impl std::fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyticsError::InvalidMonth { year, month } => {
                write!(f, "Invalid month: {}-{:02}", year, month)
            }
        }
    }
}

impl std::error::Error for AnalyticsError {}
