//! Authorization predicates over a session record and a caller identity.
//!
//! Pure functions so the rules stay testable apart from any entity or
//! middleware; route layers translate a `false` into their own 403.

use super::domain::{CallerIdentity, UserRole};
use super::repository::SessionRecord;

/// The client, the assigned advisor, or a super-admin may read session
/// details, surveys, and reports.
pub fn can_view_details(record: &SessionRecord, caller: &CallerIdentity) -> bool {
    record.client == caller.user_id
        || record.advisor.as_ref() == Some(&caller.user_id)
        || caller.role == UserRole::SuperAdmin
}

/// Only the assigned advisor or a super-admin may modify counseling records.
pub fn can_modify_record(record: &SessionRecord, caller: &CallerIdentity) -> bool {
    caller.role == UserRole::SuperAdmin || record.advisor.as_ref() == Some(&caller.user_id)
}

/// The session's own client, any financial advisor, or a super-admin may
/// submit the survey. Report generation applies the same rule.
pub fn can_submit_survey(record: &SessionRecord, caller: &CallerIdentity) -> bool {
    record.client == caller.user_id
        || matches!(caller.role, UserRole::FinancialAdvisor | UserRole::SuperAdmin)
}
