use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("stirling table for n = {n} has no entries")]
    EmptyTable { n: u32 },
}
