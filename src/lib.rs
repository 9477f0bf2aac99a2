//! Измерительная обвязка для микробенчмарков и теста методов на зависание
//!
//! # Features
//! - Сравнение производительности двух действий в процентах
//! - Замер пропускной способности действия в операциях в секунду
//! - Параллельная гонка N действий под общим окном времени
//! - Детектор зависаний: гонка подопытного с watchdog-таймером
//! - Кооперативная отмена воркеров через общий CancellationToken
//! - Счётчики без разделяемой памяти: один владелец, чтение после join

pub mod bench;
pub mod errors;
pub mod freeze;
pub mod model;
pub mod result;
pub mod text;
pub mod worker;

pub use bench::{compare,perf,race,DEFAULT_TIME};
pub use freeze::FreezeTest;
