//! Service catalogue rules and the symbolic icon set.
//!
//! The store keeps icons as plain names; the client maps each name to a glyph.
//! Names outside this set are rejected at the boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceIcon {
    Zap,
    ShieldCheck,
    PenTool,
    Hammer,
    Car,
    AlertTriangle,
}

impl ServiceIcon {
    pub const ALL: [ServiceIcon; 6] = [
        ServiceIcon::Zap,
        ServiceIcon::ShieldCheck,
        ServiceIcon::PenTool,
        ServiceIcon::Hammer,
        ServiceIcon::Car,
        ServiceIcon::AlertTriangle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceIcon::Zap => "Zap",
            ServiceIcon::ShieldCheck => "ShieldCheck",
            ServiceIcon::PenTool => "PenTool",
            ServiceIcon::Hammer => "Hammer",
            ServiceIcon::Car => "Car",
            ServiceIcon::AlertTriangle => "AlertTriangle",
        }
    }
}

impl fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceIcon {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceIcon::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown service icon: {s}")))
    }
}
