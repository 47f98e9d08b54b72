// Shared prompt fragments.
// Each mode that needs LLM calls defines its own prompts.rs alongside it.
// This file contains the cross-cutting pieces.

use std::fmt;

/// Which workflow a prompt belongs to. Every prompt opens with `Mode: [TAG].`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Generator,
    Checker,
}

impl Mode {
    pub fn tag(self) -> &'static str {
        match self {
            Mode::Generator => "GENERATOR",
            Mode::Checker => "CHECKER",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mode: [{}].", self.tag())
    }
}
