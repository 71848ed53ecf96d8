#[derive(Debug)]
pub enum PlayerDataRepositoryError {
    NotFound,
    UpstreamStatus(u16, String),
    Http(String),
    Deserialization(String),
}

impl std::fmt::Display for PlayerDataRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerDataRepositoryError::NotFound => write!(f, "Player not found"),
            PlayerDataRepositoryError::UpstreamStatus(status, body) => {
                write!(f, "Upstream returned {}: {}", status, body)
            }
            PlayerDataRepositoryError::Http(msg) => write!(f, "HTTP error: {}", msg),
            PlayerDataRepositoryError::Deserialization(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PlayerDataRepositoryError {}
