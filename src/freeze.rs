use super::{
    errors::BenchError,
    result::BenchResult,
};
use tokio::time::Duration;


/// Тест метода на зависания и лаги: гонка подопытного с watchdog-таймером.
pub struct FreezeTest {
    subject: Box<dyn FnOnce() + Send + 'static>,
}

impl FreezeTest {
    pub fn new<F>(subject: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            subject: Box::new(subject),
        }
    }

    /// Запускает подопытного один раз и watchdog параллельно,
    /// ждёт первого финишировавшего.
    /// Если первым финишировал watchdog, возвращает FreezeDetected.
    /// Проигравший не снимается: зависший подопытный останется
    /// крутиться на blocking-пуле до возврата или остановки рантайма.
    pub async fn test(self, timeout: Duration) -> BenchResult<()> {
        if timeout.is_zero() {
            return Err(BenchError::InvalidTime);
        }
        let tested = tokio::task::spawn_blocking(self.subject);
        tokio::select! {
            res = tested => match res {
                Ok(()) => Ok(()),
                Err(err) if err.is_panic() => Err(BenchError::Panic(err.to_string())),
                Err(err) => Err(BenchError::JoinFailed(err.to_string())),
            },
            _ = tokio::time::sleep(timeout) => Err(BenchError::FreezeDetected),
        }
    }
}
