//! Target SDK error codes.
//!
//! Every logical API operation owns exactly one error code, so callers can
//! branch on *which* call failed without parsing message text. A separate
//! code is reserved for session initialization failures.
//!
//! ## Example
//!
//! ```rust
//! use target_sdk::error_code::ErrorCode;
//!
//! let code = ErrorCode::GetAbActivityById;
//! assert_eq!(code.code(), "ERROR_GET_AB_ACTIVITY_BY_ID");
//! assert_eq!(code.sdk(), "TargetSDK");
//! assert_eq!(code.to_string(), "ERROR_GET_AB_ACTIVITY_BY_ID");
//! ```

use std::fmt;

use crate::catalog::Operation;

/// Component name carried by every error the SDK produces.
pub const SDK_NAME: &str = "TargetSDK";

/// Machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// One or more of tenant / apiKey / token was missing at initialization.
    SdkInitialization,
    GetActivities,
    CreateAbActivity,
    CreateXtActivity,
    GetAbActivityById,
    GetXtActivityById,
    UpdateAbActivity,
    UpdateXtActivity,
    SetActivityName,
    SetActivityState,
    SetActivityPriority,
    SetActivitySchedule,
    DeleteAbActivity,
    DeleteXtActivity,
    GetActivityChangelog,
    GetOffers,
    GetOfferById,
    CreateOffer,
    UpdateOffer,
    DeleteOffer,
    GetAudiences,
    CreateAudience,
    GetAudienceById,
    UpdateAudience,
    DeleteAudience,
    GetProperties,
    GetPropertyById,
    GetMboxes,
    GetMboxByName,
    GetMboxProfileAttributes,
    GetEnvironments,
    GetAbActivityPerformance,
    GetXtActivityPerformance,
    GetActivityPerformance,
    GetOrdersReport,
    ExecuteBatch,
}

impl ErrorCode {
    /// Returns the canonical code string (e.g. `"ERROR_GET_ACTIVITIES"`).
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::SdkInitialization => "ERROR_SDK_INITIALIZATION",
            Self::GetActivities => "ERROR_GET_ACTIVITIES",
            Self::CreateAbActivity => "ERROR_CREATE_AB_ACTIVITY",
            Self::CreateXtActivity => "ERROR_CREATE_XT_ACTIVITY",
            Self::GetAbActivityById => "ERROR_GET_AB_ACTIVITY_BY_ID",
            Self::GetXtActivityById => "ERROR_GET_XT_ACTIVITY_BY_ID",
            Self::UpdateAbActivity => "ERROR_UPDATE_AB_ACTIVITY",
            Self::UpdateXtActivity => "ERROR_UPDATE_XT_ACTIVITY",
            Self::SetActivityName => "ERROR_SET_ACTIVITY_NAME",
            Self::SetActivityState => "ERROR_SET_ACTIVITY_STATE",
            Self::SetActivityPriority => "ERROR_SET_ACTIVITY_PRIORITY",
            Self::SetActivitySchedule => "ERROR_SET_ACTIVITY_SCHEDULE",
            Self::DeleteAbActivity => "ERROR_DELETE_AB_ACTIVITY",
            Self::DeleteXtActivity => "ERROR_DELETE_XT_ACTIVITY",
            Self::GetActivityChangelog => "ERROR_GET_ACTIVITY_CHANGELOG",
            Self::GetOffers => "ERROR_GET_OFFERS",
            Self::GetOfferById => "ERROR_GET_OFFER_BY_ID",
            Self::CreateOffer => "ERROR_CREATE_OFFER",
            Self::UpdateOffer => "ERROR_UPDATE_OFFER",
            Self::DeleteOffer => "ERROR_DELETE_OFFER",
            Self::GetAudiences => "ERROR_GET_AUDIENCES",
            Self::CreateAudience => "ERROR_CREATE_AUDIENCE",
            Self::GetAudienceById => "ERROR_GET_AUDIENCE_BY_ID",
            Self::UpdateAudience => "ERROR_UPDATE_AUDIENCE",
            Self::DeleteAudience => "ERROR_DELETE_AUDIENCE",
            Self::GetProperties => "ERROR_GET_PROPERTIES",
            Self::GetPropertyById => "ERROR_GET_PROPERTY_BY_ID",
            Self::GetMboxes => "ERROR_GET_MBOXES",
            Self::GetMboxByName => "ERROR_GET_MBOX_BY_NAME",
            Self::GetMboxProfileAttributes => "ERROR_GET_MBOX_PROFILE_ATTRIBUTES",
            Self::GetEnvironments => "ERROR_GET_ENVIRONMENTS",
            Self::GetAbActivityPerformance => "ERROR_GET_AB_ACTIVITY_PERFORMANCE",
            Self::GetXtActivityPerformance => "ERROR_GET_XT_ACTIVITY_PERFORMANCE",
            Self::GetActivityPerformance => "ERROR_GET_ACTIVITY_PERFORMANCE",
            Self::GetOrdersReport => "ERROR_GET_ORDERS_REPORT",
            Self::ExecuteBatch => "ERROR_EXECUTE_BATCH",
        }
    }

    /// Name of the component that raised the error. Always [`SDK_NAME`].
    #[inline]
    pub fn sdk(&self) -> &'static str {
        SDK_NAME
    }

    /// Returns `true` for codes that belong to an API operation (everything
    /// except [`ErrorCode::SdkInitialization`]).
    #[inline]
    pub fn is_operation(&self) -> bool {
        !matches!(self, Self::SdkInitialization)
    }

    /// The operation this code belongs to, by its catalog name
    /// (e.g. `"getActivities"`). `None` for [`ErrorCode::SdkInitialization`].
    pub fn operation(&self) -> Option<&'static str> {
        Operation::ALL
            .iter()
            .find(|op| op.error_code() == *self)
            .map(|op| op.name())
    }

    /// Looks up a code by its canonical string.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }

    /// All codes, initialization first, then operations in API order.
    pub const ALL: [ErrorCode; 36] = [
        Self::SdkInitialization,
        Self::GetActivities,
        Self::CreateAbActivity,
        Self::CreateXtActivity,
        Self::GetAbActivityById,
        Self::GetXtActivityById,
        Self::UpdateAbActivity,
        Self::UpdateXtActivity,
        Self::SetActivityName,
        Self::SetActivityState,
        Self::SetActivityPriority,
        Self::SetActivitySchedule,
        Self::DeleteAbActivity,
        Self::DeleteXtActivity,
        Self::GetActivityChangelog,
        Self::GetOffers,
        Self::GetOfferById,
        Self::CreateOffer,
        Self::UpdateOffer,
        Self::DeleteOffer,
        Self::GetAudiences,
        Self::CreateAudience,
        Self::GetAudienceById,
        Self::UpdateAudience,
        Self::DeleteAudience,
        Self::GetProperties,
        Self::GetPropertyById,
        Self::GetMboxes,
        Self::GetMboxByName,
        Self::GetMboxProfileAttributes,
        Self::GetEnvironments,
        Self::GetAbActivityPerformance,
        Self::GetXtActivityPerformance,
        Self::GetActivityPerformance,
        Self::GetOrdersReport,
        Self::ExecuteBatch,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
