use dtr_core::{UserAccount, UserStatus};

/// Narrows a full account listing down to the registration approval queue.
///
/// The backend's user listing returns every status; the queue only shows
/// accounts still awaiting a decision.
#[must_use]
pub fn pending_only(users: Vec<UserAccount>) -> Vec<UserAccount> {
    users
        .into_iter()
        .filter(|user| user.status == UserStatus::Pending)
        .collect()
}
