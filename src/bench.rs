use super::{
    errors::BenchError,
    model::RunMetrics,
    result::BenchResult,
    worker::{self, Action},
};
use futures::future;
use tokio::{
    task::{JoinError, JoinHandle},
    time::Duration,
};
use tokio_util::sync::CancellationToken;


/// Окно замера по умолчанию, секунды
pub const DEFAULT_TIME: f64 = 1.0;

fn check_time(time: f64) -> BenchResult<Duration> {
    if !time.is_finite() || time <= 0.0 {
        return Err(BenchError::InvalidTime);
    }
    Duration::try_from_secs_f64(time).map_err(|_| BenchError::InvalidTime)
}

fn join_error(err: JoinError) -> BenchError {
    if err.is_panic() {
        BenchError::Panic(err.to_string())
    } else {
        BenchError::JoinFailed(err.to_string())
    }
}

/// Полный join счетных воркеров, счётчики в порядке запуска.
/// Ждём всех даже при панике, наружу уходит первая ошибка.
async fn collect_ticks(counters: Vec<JoinHandle<u64>>) -> BenchResult<Vec<u64>> {
    let joined = future::join_all(counters).await;
    let mut ticks = Vec::with_capacity(joined.len());
    for res in joined {
        ticks.push(res.map_err(join_error)?);
    }
    Ok(ticks)
}

/// Сравнивает производительность двух действий,
/// возвращает прирост первого над вторым в процентах.
///
/// Несимметрично: compare(a, b) не равно -compare(b, a).
/// Если второе действие не успело выполниться ни разу,
/// возвращает ZeroBaseline: окно надо брать длиннее.
pub async fn compare<A, B>(test1: A, test2: B, time: f64) -> BenchResult<i64>
where
    A: FnMut() + Send + 'static,
    B: FnMut() + Send + 'static,
{
    let window = check_time(time)?;
    let token = CancellationToken::new();
    let counters = vec![
        worker::spawn_counting(test1, token.clone()),
        worker::spawn_counting(test2, token.clone()),
    ];
    let stopwatch = worker::spawn_stopwatch(token, window);

    let ticks = collect_ticks(counters).await;
    stopwatch.await.map_err(join_error)?;
    let ticks = ticks?;

    let m1 = RunMetrics { ticks: ticks[0], time };
    let m2 = RunMetrics { ticks: ticks[1], time };
    m1.gain_over(&m2).ok_or(BenchError::ZeroBaseline)
}

/// Максимальная однопоточная производительность действия,
/// операций в секунду.
pub async fn perf<F>(action: F, time: f64) -> BenchResult<i64>
where
    F: FnMut() + Send + 'static,
{
    let window = check_time(time)?;
    let token = CancellationToken::new();
    let counters = vec![worker::spawn_counting(action, token.clone())];
    let stopwatch = worker::spawn_stopwatch(token, window);

    let ticks = collect_ticks(counters).await;
    stopwatch.await.map_err(join_error)?;
    let ticks = ticks?;

    Ok(RunMetrics { ticks: ticks[0], time }.throughput())
}

/// Гонит все действия параллельно в циклах под общим токеном,
/// возвращает операции в секунду для каждого действия в исходном порядке.
/// Общее окно делает результаты сравнимыми между собой.
pub async fn race(time: f64, actions: Vec<Action>) -> BenchResult<Vec<i64>> {
    if actions.is_empty() {
        return Err(BenchError::NoActions);
    }
    let window = check_time(time)?;
    let token = CancellationToken::new();
    let counters: Vec<_> = actions
        .into_iter()
        .map(|action| worker::spawn_counting(action, token.clone()))
        .collect();
    let stopwatch = worker::spawn_stopwatch(token, window);

    let ticks = collect_ticks(counters).await;
    stopwatch.await.map_err(join_error)?;
    let ticks = ticks?;

    Ok(ticks
        .into_iter()
        .map(|t| RunMetrics { ticks: t, time }.throughput())
        .collect())
}
