//! Error codes for BakeOps API responses
//!
//! This module defines the structured error codes carried in the `code`
//! field of API response envelopes. Codes are grouped per subsystem:
//! 1xxxx general, 2xxxx resource/parameter, 24xxx edit-lock,
//! 25xxx order lifecycle, 30000 server error.

use serde::{Deserialize, Serialize};

/// Error code structure for API responses
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorCode<'a> {
    pub code: i32,
    pub message: &'a str,
}

// General success and error codes
pub const SUCCESS: ErrorCode<'static> = ErrorCode {
    code: 0,
    message: "success",
};

pub const PARAMETER_MISSING: ErrorCode<'static> = ErrorCode {
    code: 10000,
    message: "parameter missing",
};

pub const PARAMETER_VALIDATE_ERROR: ErrorCode<'static> = ErrorCode {
    code: 20002,
    message: "parameter validate error",
};

pub const RESOURCE_NOT_FOUND: ErrorCode<'static> = ErrorCode {
    code: 20004,
    message: "resource not found",
};

pub const RESOURCE_CONFLICT: ErrorCode<'static> = ErrorCode {
    code: 20005,
    message: "resource conflict",
};

// Edit-lock errors
pub const LOCK_CONFLICT: ErrorCode<'static> = ErrorCode {
    code: 24000,
    message: "resource is locked by another session",
};

pub const LOCK_NOT_OWNED: ErrorCode<'static> = ErrorCode {
    code: 24001,
    message: "lock is held by another session",
};

pub const LOCK_EXPIRED: ErrorCode<'static> = ErrorCode {
    code: 24002,
    message: "lock has expired",
};

pub const LOCK_NOT_FOUND: ErrorCode<'static> = ErrorCode {
    code: 24003,
    message: "no lock exists for this resource",
};

// Order lifecycle errors
pub const INVALID_TRANSITION: ErrorCode<'static> = ErrorCode {
    code: 25000,
    message: "illegal status transition",
};

pub const SCHEDULE_REQUIRED: ErrorCode<'static> = ErrorCode {
    code: 25001,
    message: "production date required to schedule order",
};

pub const UNKNOWN_STATUS: ErrorCode<'static> = ErrorCode {
    code: 25002,
    message: "unknown order status",
};

pub const SERVER_ERROR: ErrorCode<'static> = ErrorCode {
    code: 30000,
    message: "server error",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_constants() {
        assert_eq!(SUCCESS.code, 0);
        assert_eq!(SUCCESS.message, "success");
        assert_eq!(LOCK_CONFLICT.code, 24000);
        assert_eq!(INVALID_TRANSITION.code, 25000);
    }

    #[test]
    fn test_error_code_serialize() {
        let json = serde_json::to_string(&LOCK_EXPIRED).unwrap();
        assert!(json.contains("24002"));
        assert!(json.contains("lock has expired"));
    }
}
