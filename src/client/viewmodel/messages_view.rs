use std::cmp::Ordering;

use crate::client::models::entities::{MessageData, MessageStatus, Role, UserData};
use crate::client::services::api_client::{ApiError, ApiResult};
use crate::client::viewmodel::table::TableState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    /// Top-level fetch failed for a reason other than expiration; the literal
    /// reason is rendered in place of the table.
    Errored(String),
    /// The backend rejected the session token. Blocks the view until the
    /// user reauthenticates.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageColumn {
    Title,
    Date,
    Sender,
    Status,
}

/// In-memory state behind the message table: owns the fetched list, its
/// ordering, the optimistic read transition and the detail selection.
///
/// The epoch counter guards against stale responses: any async result carries
/// the epoch it was issued under and is discarded when the view has since
/// been reset or re-fetched.
#[derive(Debug, Default)]
pub struct MessagesViewModel {
    state: LoadState,
    messages: Vec<MessageData>,
    epoch: u64,
    selected: Option<MessageData>,
    update_notice: Option<String>,
    pub table: TableState<MessageColumn>,
}

impl MessagesViewModel {
    pub fn new(page_size: usize) -> Self {
        Self {
            table: TableState::new(page_size),
            ..Self::default()
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn messages(&self) -> &[MessageData] {
        &self.messages
    }

    pub fn selected(&self) -> Option<&MessageData> {
        self.selected.as_ref()
    }

    pub fn update_notice(&self) -> Option<&str> {
        self.update_notice.as_deref()
    }

    /// Enters `Loading` and returns the epoch the caller must hand back with
    /// the fetch result.
    pub fn begin_fetch(&mut self) -> u64 {
        self.epoch += 1;
        self.state = LoadState::Loading;
        self.messages.clear();
        self.selected = None;
        self.update_notice = None;
        self.table.reset();
        self.epoch
    }

    /// Invalidates any in-flight operation (view unmounted or superseded);
    /// late results are silently dropped.
    pub fn invalidate(&mut self) {
        self.epoch += 1;
    }

    pub fn apply_fetch(&mut self, epoch: u64, result: ApiResult<Vec<MessageData>>) {
        if epoch != self.epoch {
            log::debug!("[MESSAGES] discarding stale fetch result (epoch {epoch})");
            return;
        }
        match result {
            Ok(mut list) => {
                // newest first; stable, so ties keep the fetch order
                list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                self.messages = list;
                self.state = LoadState::Ready;
            }
            Err(ApiError::Expired) => {
                self.update_notice = None;
                self.state = LoadState::Expired;
            }
            Err(ApiError::Failed(reason)) => {
                self.state = LoadState::Errored(reason);
            }
        }
    }

    /// Row action. A USER recipient clicking an unread message flips it to
    /// READ locally before any network round-trip; the returned id (if any)
    /// must be confirmed server-side. The detail view opens either way.
    pub fn handle_read(&mut self, message: &MessageData, viewer: &UserData) -> Option<i64> {
        let confirm =
            if message.status == MessageStatus::Unread && viewer.role == Role::User {
                // whole-list replacement, identity by id
                self.messages = self
                    .messages
                    .iter()
                    .map(|m| {
                        if m.id == message.id {
                            MessageData {
                                status: MessageStatus::Read,
                                ..m.clone()
                            }
                        } else {
                            m.clone()
                        }
                    })
                    .collect();
                Some(message.id)
            } else {
                None
            };

        self.selected = Some(MessageData {
            status: if confirm.is_some() {
                MessageStatus::Read
            } else {
                message.status
            },
            ..message.clone()
        });
        confirm
    }

    /// Outcome of the read confirmation round-trip. The optimistic local
    /// READ is never rolled back; a generic failure only raises a notice.
    pub fn confirm_read(&mut self, result: ApiResult<()>) {
        match result {
            Ok(()) => {}
            Err(ApiError::Expired) => {
                self.update_notice = None;
                self.state = LoadState::Expired;
            }
            Err(ApiError::Failed(_)) => {
                self.update_notice = Some("Error al actualizar el estado del mensaje".to_string());
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn dismiss_notice(&mut self) {
        self.update_notice = None;
    }

    /// Empty fetched list: the table gives way to a placeholder, with no
    /// pagination controls.
    pub fn shows_placeholder(&self) -> bool {
        self.state == LoadState::Ready && self.messages.is_empty()
    }

    pub fn visible_rows(&self) -> Vec<&MessageData> {
        self.table.visible(&self.messages, compare)
    }

    pub fn page_count(&self) -> usize {
        self.table.page_count(self.messages.len())
    }
}

fn compare(a: &MessageData, b: &MessageData, column: MessageColumn) -> Ordering {
    match column {
        MessageColumn::Title => a.title.cmp(&b.title),
        MessageColumn::Date => a.created_at.cmp(&b.created_at),
        MessageColumn::Sender => a.sender.first_name.cmp(&b.sender.first_name),
        MessageColumn::Status => status_rank(a.status).cmp(&status_rank(b.status)),
    }
}

fn status_rank(status: MessageStatus) -> u8 {
    match status {
        MessageStatus::Unread => 0,
        MessageStatus::Read => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn user(id: i64, role: Role) -> UserData {
        UserData {
            id,
            first_name: format!("u{id}"),
            last_name: "x".into(),
            email: format!("u{id}@sinergia.com"),
            role,
        }
    }

    fn message(id: i64, month: u32, status: MessageStatus) -> MessageData {
        MessageData {
            id,
            title: format!("m{id}"),
            description: "d".into(),
            status,
            sender: user(1, Role::Admin),
            recipient: user(2, Role::User),
            created_at: Utc.with_ymd_and_hms(2024, month, 1, 0, 0, 0).unwrap(),
        }
    }

    fn ready(vm: &mut MessagesViewModel, list: Vec<MessageData>) {
        let epoch = vm.begin_fetch();
        vm.apply_fetch(epoch, Ok(list));
    }

    #[test]
    fn fetch_sorts_newest_first() {
        let mut vm = MessagesViewModel::new(10);
        ready(
            &mut vm,
            vec![
                message(1, 1, MessageStatus::Unread),
                message(2, 3, MessageStatus::Read),
            ],
        );
        assert_eq!(vm.state(), &LoadState::Ready);
        let ids: Vec<i64> = vm.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn equal_timestamps_keep_fetch_order() {
        let mut vm = MessagesViewModel::new(10);
        ready(
            &mut vm,
            vec![
                message(10, 5, MessageStatus::Read),
                message(11, 5, MessageStatus::Read),
                message(12, 5, MessageStatus::Read),
            ],
        );
        let ids: Vec<i64> = vm.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn user_read_is_applied_locally_before_any_confirmation() {
        let mut vm = MessagesViewModel::new(10);
        ready(&mut vm, vec![message(5, 2, MessageStatus::Unread)]);
        let viewer = user(2, Role::User);
        let target = vm.messages()[0].clone();

        let confirm = vm.handle_read(&target, &viewer);
        assert_eq!(confirm, Some(5));
        assert_eq!(vm.messages()[0].status, MessageStatus::Read);
        // detail opened with the mutated copy
        assert_eq!(vm.selected().unwrap().status, MessageStatus::Read);
    }

    #[test]
    fn admin_read_never_mutates_status() {
        let mut vm = MessagesViewModel::new(10);
        ready(&mut vm, vec![message(5, 2, MessageStatus::Unread)]);
        let viewer = user(1, Role::Admin);
        let target = vm.messages()[0].clone();

        let confirm = vm.handle_read(&target, &viewer);
        assert_eq!(confirm, None);
        assert_eq!(vm.messages()[0].status, MessageStatus::Unread);
        // selection still opens
        assert_eq!(vm.selected().unwrap().id, 5);
    }

    #[test]
    fn already_read_messages_only_open_the_detail() {
        let mut vm = MessagesViewModel::new(10);
        ready(&mut vm, vec![message(5, 2, MessageStatus::Read)]);
        let viewer = user(2, Role::User);
        let target = vm.messages()[0].clone();
        assert_eq!(vm.handle_read(&target, &viewer), None);
        assert!(vm.selected().is_some());
    }

    #[test]
    fn failed_confirmation_keeps_the_optimistic_read() {
        let mut vm = MessagesViewModel::new(10);
        ready(&mut vm, vec![message(5, 2, MessageStatus::Unread)]);
        let viewer = user(2, Role::User);
        let target = vm.messages()[0].clone();
        vm.handle_read(&target, &viewer);

        vm.confirm_read(Err(ApiError::Failed("sin conexión".into())));
        assert_eq!(vm.messages()[0].status, MessageStatus::Read);
        assert!(vm.update_notice().is_some());

        // dismissing the notice does not revert the local state either
        vm.dismiss_notice();
        assert_eq!(vm.messages()[0].status, MessageStatus::Read);
    }

    #[test]
    fn expired_confirmation_blocks_and_clears_other_notices() {
        let mut vm = MessagesViewModel::new(10);
        ready(&mut vm, vec![message(5, 2, MessageStatus::Unread)]);
        let viewer = user(2, Role::User);
        let target = vm.messages()[0].clone();
        vm.handle_read(&target, &viewer);
        vm.confirm_read(Err(ApiError::Failed("x".into())));
        assert!(vm.update_notice().is_some());

        vm.confirm_read(Err(ApiError::Expired));
        assert_eq!(vm.state(), &LoadState::Expired);
        assert!(vm.update_notice().is_none());
    }

    #[test]
    fn failed_fetch_surfaces_the_reason() {
        let mut vm = MessagesViewModel::new(10);
        let epoch = vm.begin_fetch();
        vm.apply_fetch(epoch, Err(ApiError::Failed("timeout".into())));
        assert_eq!(vm.state(), &LoadState::Errored("timeout".into()));
    }

    #[test]
    fn expired_fetch_blocks_the_view() {
        let mut vm = MessagesViewModel::new(10);
        let epoch = vm.begin_fetch();
        vm.apply_fetch(epoch, Err(ApiError::Expired));
        assert_eq!(vm.state(), &LoadState::Expired);
    }

    #[test]
    fn stale_fetch_results_are_discarded() {
        let mut vm = MessagesViewModel::new(10);
        let old_epoch = vm.begin_fetch();
        // the view re-fetched (or unmounted) before the first response landed
        let new_epoch = vm.begin_fetch();
        vm.apply_fetch(old_epoch, Ok(vec![message(1, 1, MessageStatus::Read)]));
        assert_eq!(vm.state(), &LoadState::Loading);
        assert!(vm.messages().is_empty());

        vm.apply_fetch(new_epoch, Ok(vec![message(2, 2, MessageStatus::Read)]));
        assert_eq!(vm.messages()[0].id, 2);
    }

    #[test]
    fn results_after_invalidate_are_discarded() {
        let mut vm = MessagesViewModel::new(10);
        let epoch = vm.begin_fetch();
        vm.invalidate();
        vm.apply_fetch(epoch, Ok(vec![message(1, 1, MessageStatus::Read)]));
        assert!(vm.messages().is_empty());
    }

    #[test]
    fn empty_result_shows_the_placeholder_without_pages() {
        let mut vm = MessagesViewModel::new(10);
        ready(&mut vm, vec![]);
        assert!(vm.shows_placeholder());
        assert_eq!(vm.page_count(), 0);
    }

    #[test]
    fn column_sort_overrides_the_default_order() {
        let mut vm = MessagesViewModel::new(10);
        ready(
            &mut vm,
            vec![
                message(1, 1, MessageStatus::Unread),
                message(2, 3, MessageStatus::Read),
                message(3, 2, MessageStatus::Read),
            ],
        );
        vm.table.toggle_sort(MessageColumn::Date);
        let ids: Vec<i64> = vm.visible_rows().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }
}
