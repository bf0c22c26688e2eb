//! Общие типы и доменная логика формы выбора секторов.
//!
//! Крейт не зависит от wasm и собирается нативно, поэтому вся логика,
//! которую можно проверить без браузера, живёт здесь.

pub mod domain;
