use tokio::{
    task::JoinHandle,
    time::Duration,
};
use tokio_util::sync::CancellationToken;


/// Действие под замером: замыкание без аргументов и без результата
pub type Action = Box<dyn FnMut() + Send + 'static>;

/// Счетный воркер: крутит действие в цикле, пока общий токен не отменён.
/// Токен опрашивается на границе итерации, действие в полёте не прерывается.
/// Счётчик принадлежит только этому воркеру и уходит наружу
/// единственным способом: как результат задачи после join.
/// Паника действия валит задачу и всплывает через JoinHandle как JoinError.
pub fn spawn_counting<F>(mut action: F, token: CancellationToken) -> JoinHandle<u64>
where
    F: FnMut() + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut ticks: u64 = 0;
        while !token.is_cancelled() {
            action();
            ticks += 1;
        }
        ticks
    })
}

/// Таймер-воркер: спит заданное окно и отменяет токен ровно один раз.
/// Единственный писатель сигнала отмены.
pub fn spawn_stopwatch(token: CancellationToken, window: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(window).await;
        token.cancel();
    })
}
