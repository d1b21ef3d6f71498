pub mod commands;
pub mod session;

use clap::ValueEnum;

/// How to answer the login prompt raised for restricted projects.
#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq, Default)]
pub enum PromptMode {
    #[default]
    Ask,
    Yes,
    No,
}
