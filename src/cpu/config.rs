//! CPU configuration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// What the dispatcher does with an opcode that has no table entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpcodePolicy {
    /// Fail the step with `CpuError::IllegalOpcode`; state is left untouched.
    Strict,
    /// Treat the byte as a 1-byte, 2-cycle NOP and log a warning.
    #[default]
    Permissive,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown opcode policy {0:?} (expected \"strict\" or \"permissive\")")]
pub struct ParsePolicyError(pub String);

impl FromStr for OpcodePolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(OpcodePolicy::Strict),
            "permissive" => Ok(OpcodePolicy::Permissive),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

impl fmt::Display for OpcodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpcodePolicy::Strict => f.write_str("strict"),
            OpcodePolicy::Permissive => f.write_str("permissive"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuConfig {
    pub opcode_policy: OpcodePolicy,
}

impl CpuConfig {
    pub fn with_opcode_policy(mut self, policy: OpcodePolicy) -> Self {
        self.opcode_policy = policy;
        self
    }
}
