#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal input error: {0}")]
    Input(#[from] std::io::Error),
}
