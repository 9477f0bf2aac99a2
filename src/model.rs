/// Итог одного прогона счетного воркера: финальный счётчик
/// и номинальное окно замера в секундах.
#[derive(Debug, Clone, Copy)]
pub struct RunMetrics {
    pub ticks: u64,
    pub time: f64,
}

impl RunMetrics {
    #[inline]
    pub fn throughput(&self) -> i64 {
        (self.ticks as f64 / self.time).round() as i64
    }

    /// Прирост над базовым прогоном в процентах.
    /// None, если базовый счётчик нулевой: отношение не определено.
    pub fn gain_over(&self, base: &RunMetrics) -> Option<i64> {
        if base.ticks == 0 {
            return None;
        }
        Some((100.0 * (self.ticks as f64 / base.ticks as f64 - 1.0)).round() as i64)
    }
}
