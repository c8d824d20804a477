//! Role-based access control.
//!
//! Every core operation is guarded by a closed [`Role`] enum and a
//! capability table mapping roles to the operations they may perform.
//! The check happens exactly once, at the entry of each operation, before
//! any data access.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// The closed set of user roles known to the system.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// HR staff: runs the payroll lifecycle.
    HrStaff,
    /// Manager: views cross-cutting reports.
    Manager,
    /// Raw-material intake staff.
    RmpStaff,
    /// Production staff.
    MpStaff,
}

impl Role {
    /// Returns true if this role may perform the given operation.
    pub fn permits(self, operation: Operation) -> bool {
        match operation {
            Operation::ProcessPayroll | Operation::FinalizePayroll => self == Role::HrStaff,
            Operation::ViewReports => self == Role::Manager,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::HrStaff => "hr_staff",
            Role::Manager => "manager",
            Role::RmpStaff => "rmp_staff",
            Role::MpStaff => "mp_staff",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Role {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hr_staff" => Ok(Role::HrStaff),
            "manager" => Ok(Role::Manager),
            "rmp_staff" => Ok(Role::RmpStaff),
            "mp_staff" => Ok(Role::MpStaff),
            other => Err(EngineError::Unauthorized {
                message: format!("unknown role '{}'", other),
            }),
        }
    }
}

/// The operations exposed by the engine core.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Operation {
    /// Run payroll computation for a pay period.
    ProcessPayroll,
    /// Lock a pay period and its records.
    FinalizePayroll,
    /// Read any of the aggregate reports.
    ViewReports,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::ProcessPayroll => "process_payroll",
            Operation::FinalizePayroll => "finalize_payroll",
            Operation::ViewReports => "view_reports",
        };
        write!(f, "{}", name)
    }
}

/// An authenticated caller, as handed over by the identity collaborator.
///
/// Token issuance and verification happen outside this crate; by the time
/// an `Identity` exists the caller has already been authenticated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// The caller's user id.
    pub user_id: i64,
    /// The caller's role.
    pub role: Role,
}

/// Checks that `identity` may perform `operation`.
///
/// Returns `Forbidden` when the role is known but lacks the capability.
/// Callers that cannot produce an `Identity` at all should reject with
/// `Unauthorized` before reaching this point.
pub fn authorize(identity: &Identity, operation: Operation) -> EngineResult<()> {
    if identity.role.permits(operation) {
        Ok(())
    } else {
        Err(EngineError::Forbidden {
            role: identity.role.to_string(),
            operation: operation.to_string(),
        })
    }
}
