use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UploadStatus {
    Deleted,
    Failed,
    Processed,
    Rejected,
    Uploaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureReason {
    Codec,
    Conversion,
    EmptyFile,
    InvalidFile,
    TooSmall,
    UploadAborted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RejectionReason {
    Claim,
    Copyright,
    Duplicate,
    Inappropriate,
    Length,
    TermsOfUse,
    Trademark,
    UploaderAccountClosed,
    UploaderAccountSuspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrivacyStatus {
    Private,
    Public,
    Unlisted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum License {
    CreativeCommon,
    Youtube,
}

/// Service-controlled state of a video. Read-only: `update` never sends it.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#status>
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub upload_status: Option<UploadStatus>,
    pub failure_reason: Option<FailureReason>,
    pub rejection_reason: Option<RejectionReason>,
    pub privacy_status: Option<PrivacyStatus>,

    #[serde(default, deserialize_with = "time::serde::rfc3339::option::deserialize")]
    pub publish_at: Option<OffsetDateTime>,

    pub license: Option<License>,
    #[serde(default)]
    pub embeddable: bool,
    #[serde(default)]
    pub public_stats_viewable: bool,
}

impl Status {
    pub fn deleted(&self) -> bool {
        self.upload_status == Some(UploadStatus::Deleted)
    }

    pub fn failed(&self) -> bool {
        self.upload_status == Some(UploadStatus::Failed)
    }

    pub fn processed(&self) -> bool {
        self.upload_status == Some(UploadStatus::Processed)
    }

    pub fn rejected(&self) -> bool {
        self.upload_status == Some(UploadStatus::Rejected)
    }

    pub fn uploaded(&self) -> bool {
        self.upload_status == Some(UploadStatus::Uploaded)
    }

    fn failed_with(&self, reason: FailureReason) -> bool {
        self.failed() && self.failure_reason == Some(reason)
    }

    fn rejected_with(&self, reason: RejectionReason) -> bool {
        self.rejected() && self.rejection_reason == Some(reason)
    }

    pub fn uses_unsupported_codec(&self) -> bool {
        self.failed_with(FailureReason::Codec)
    }

    pub fn has_failed_conversion(&self) -> bool {
        self.failed_with(FailureReason::Conversion)
    }

    pub fn empty(&self) -> bool {
        self.failed_with(FailureReason::EmptyFile)
    }

    pub fn invalid(&self) -> bool {
        self.failed_with(FailureReason::InvalidFile)
    }

    pub fn too_small(&self) -> bool {
        self.failed_with(FailureReason::TooSmall)
    }

    pub fn aborted(&self) -> bool {
        self.failed_with(FailureReason::UploadAborted)
    }

    pub fn claimed(&self) -> bool {
        self.rejected_with(RejectionReason::Claim)
    }

    pub fn infringes_copyright(&self) -> bool {
        self.rejected_with(RejectionReason::Copyright)
    }

    pub fn duplicate(&self) -> bool {
        self.rejected_with(RejectionReason::Duplicate)
    }

    pub fn inappropriate(&self) -> bool {
        self.rejected_with(RejectionReason::Inappropriate)
    }

    pub fn too_long(&self) -> bool {
        self.rejected_with(RejectionReason::Length)
    }

    pub fn violates_terms_of_use(&self) -> bool {
        self.rejected_with(RejectionReason::TermsOfUse)
    }

    pub fn infringes_trademark(&self) -> bool {
        self.rejected_with(RejectionReason::Trademark)
    }

    pub fn belongs_to_closed_account(&self) -> bool {
        self.rejected_with(RejectionReason::UploaderAccountClosed)
    }

    pub fn belongs_to_suspended_account(&self) -> bool {
        self.rejected_with(RejectionReason::UploaderAccountSuspended)
    }

    pub fn public(&self) -> bool {
        self.privacy_status == Some(PrivacyStatus::Public)
    }

    pub fn private(&self) -> bool {
        self.privacy_status == Some(PrivacyStatus::Private)
    }

    pub fn unlisted(&self) -> bool {
        self.privacy_status == Some(PrivacyStatus::Unlisted)
    }

    /// A private video with a publish date is scheduled to go public then.
    pub fn scheduled(&self) -> bool {
        self.private() && self.publish_at.is_some()
    }

    pub fn scheduled_at(&self) -> Option<OffsetDateTime> {
        if self.scheduled() {
            self.publish_at
        } else {
            None
        }
    }

    pub fn licensed_as_creative_commons(&self) -> bool {
        self.license == Some(License::CreativeCommon)
    }

    pub fn licensed_as_standard_youtube(&self) -> bool {
        self.license == Some(License::Youtube)
    }

    pub fn embeddable(&self) -> bool {
        self.embeddable
    }

    pub fn public_stats_viewable(&self) -> bool {
        self.public_stats_viewable
    }
}
