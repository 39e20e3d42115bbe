//! Library half of the stackview CLI: output rendering shared by commands and tests

pub mod report;
