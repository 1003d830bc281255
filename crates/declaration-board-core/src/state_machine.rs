use crate::ports::PortError;

/// What the signature list area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// First load not resolved yet.
    Loading,
    Empty,
    Populated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Start,
    Succeed,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    /// A list response was applied or a load failed.
    Resolved { len: usize },
}

pub fn submit_transition(
    status: SubmitStatus,
    action: SubmitAction,
) -> Result<(SubmitStatus, &'static str), PortError> {
    use SubmitAction as A;
    use SubmitStatus as S;

    match (status, action) {
        (S::Idle, A::Start) => Ok((S::Submitting, "submit_started")),
        (S::Submitting, A::Succeed) => Ok((S::Idle, "submit_succeeded")),
        (S::Submitting, A::Fail) => Ok((S::Idle, "submit_failed")),
        _ => Err(PortError::Conflict(format!(
            "illegal submit transition: {status:?} + {action:?}"
        ))),
    }
}

/// `Loading` is only ever left, never re-entered: refreshes replace the list in place.
pub fn list_transition(status: ListStatus, action: ListAction) -> (ListStatus, &'static str) {
    let ListAction::Resolved { len } = action;
    let next = if len == 0 {
        ListStatus::Empty
    } else {
        ListStatus::Populated
    };
    let reason = match status {
        ListStatus::Loading => "initial_load_resolved",
        _ => "list_replaced",
    };
    (next, reason)
}
