//! Contracts: платформенно-независимая доменная логика сайта.
//!
//! Всё, что здесь лежит, не знает о DOM и таймерах браузера. Frontend
//! передаёт события в редьюсеры и исполняет возвращённые команды.

pub mod domain;
pub mod shared;
