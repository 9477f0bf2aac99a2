use super::errors::BenchError;

pub type BenchResult<T> = Result<T, BenchError>;
