//! Operation identifiers and descriptors.

use serde::Deserialize;
use std::fmt;

use crate::error_code::ErrorCode;

/// HTTP verb of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether a request body is meaningful for this verb.
    pub fn allows_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Content-negotiation profile. Each resource is pinned to one API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaProfile {
    V1,
    V2,
    V3,
}

impl MediaProfile {
    /// Versioned vendor media type, e.g. `application/vnd.adobe.target.v3+json`.
    pub fn media_type(&self) -> &'static str {
        match self {
            Self::V1 => "application/vnd.adobe.target.v1+json",
            Self::V2 => "application/vnd.adobe.target.v2+json",
            Self::V3 => "application/vnd.adobe.target.v3+json",
        }
    }
}

/// Logical API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
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
    GetActivityChangeLog,
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

impl Operation {
    pub const ALL: [Operation; 35] = [
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
        Self::GetActivityChangeLog,
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

    /// Name used as the key in the catalog document.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetActivities => "getActivities",
            Self::CreateAbActivity => "createABActivity",
            Self::CreateXtActivity => "createXTActivity",
            Self::GetAbActivityById => "getABActivityById",
            Self::GetXtActivityById => "getXTActivityById",
            Self::UpdateAbActivity => "updateABActivity",
            Self::UpdateXtActivity => "updateXTActivity",
            Self::SetActivityName => "setActivityName",
            Self::SetActivityState => "setActivityState",
            Self::SetActivityPriority => "setActivityPriority",
            Self::SetActivitySchedule => "setActivitySchedule",
            Self::DeleteAbActivity => "deleteABActivity",
            Self::DeleteXtActivity => "deleteXTActivity",
            Self::GetActivityChangeLog => "getActivityChangeLog",
            Self::GetOffers => "getOffers",
            Self::GetOfferById => "getOfferById",
            Self::CreateOffer => "createOffer",
            Self::UpdateOffer => "updateOffer",
            Self::DeleteOffer => "deleteOffer",
            Self::GetAudiences => "getAudiences",
            Self::CreateAudience => "createAudience",
            Self::GetAudienceById => "getAudienceById",
            Self::UpdateAudience => "updateAudience",
            Self::DeleteAudience => "deleteAudience",
            Self::GetProperties => "getProperties",
            Self::GetPropertyById => "getPropertyById",
            Self::GetMboxes => "getMBoxes",
            Self::GetMboxByName => "getMBoxByName",
            Self::GetMboxProfileAttributes => "getMBoxProfileAttributes",
            Self::GetEnvironments => "getEnvironments",
            Self::GetAbActivityPerformance => "getABActivityPerformance",
            Self::GetXtActivityPerformance => "getXTActivityPerformance",
            Self::GetActivityPerformance => "getActivityPerformance",
            Self::GetOrdersReport => "getOrdersReport",
            Self::ExecuteBatch => "executeBatch",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.name() == name)
    }

    /// Error code raised when this operation fails.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::GetActivities => ErrorCode::GetActivities,
            Self::CreateAbActivity => ErrorCode::CreateAbActivity,
            Self::CreateXtActivity => ErrorCode::CreateXtActivity,
            Self::GetAbActivityById => ErrorCode::GetAbActivityById,
            Self::GetXtActivityById => ErrorCode::GetXtActivityById,
            Self::UpdateAbActivity => ErrorCode::UpdateAbActivity,
            Self::UpdateXtActivity => ErrorCode::UpdateXtActivity,
            Self::SetActivityName => ErrorCode::SetActivityName,
            Self::SetActivityState => ErrorCode::SetActivityState,
            Self::SetActivityPriority => ErrorCode::SetActivityPriority,
            Self::SetActivitySchedule => ErrorCode::SetActivitySchedule,
            Self::DeleteAbActivity => ErrorCode::DeleteAbActivity,
            Self::DeleteXtActivity => ErrorCode::DeleteXtActivity,
            Self::GetActivityChangeLog => ErrorCode::GetActivityChangelog,
            Self::GetOffers => ErrorCode::GetOffers,
            Self::GetOfferById => ErrorCode::GetOfferById,
            Self::CreateOffer => ErrorCode::CreateOffer,
            Self::UpdateOffer => ErrorCode::UpdateOffer,
            Self::DeleteOffer => ErrorCode::DeleteOffer,
            Self::GetAudiences => ErrorCode::GetAudiences,
            Self::CreateAudience => ErrorCode::CreateAudience,
            Self::GetAudienceById => ErrorCode::GetAudienceById,
            Self::UpdateAudience => ErrorCode::UpdateAudience,
            Self::DeleteAudience => ErrorCode::DeleteAudience,
            Self::GetProperties => ErrorCode::GetProperties,
            Self::GetPropertyById => ErrorCode::GetPropertyById,
            Self::GetMboxes => ErrorCode::GetMboxes,
            Self::GetMboxByName => ErrorCode::GetMboxByName,
            Self::GetMboxProfileAttributes => ErrorCode::GetMboxProfileAttributes,
            Self::GetEnvironments => ErrorCode::GetEnvironments,
            Self::GetAbActivityPerformance => ErrorCode::GetAbActivityPerformance,
            Self::GetXtActivityPerformance => ErrorCode::GetXtActivityPerformance,
            Self::GetActivityPerformance => ErrorCode::GetActivityPerformance,
            Self::GetOrdersReport => ErrorCode::GetOrdersReport,
            Self::ExecuteBatch => ErrorCode::ExecuteBatch,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything needed to build a request for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub operation: Operation,
    pub method: HttpMethod,
    /// Path relative to the server root, e.g. `/activities/ab/{id}`.
    pub path: String,
    pub profile: MediaProfile,
    /// Query parameter names bound from the call's parameters, in order.
    pub query: Vec<String>,
    /// Whether the operation sends a JSON body.
    pub body: bool,
    /// Placeholder names found in `path`, in order of appearance.
    pub path_params: Vec<String>,
}
