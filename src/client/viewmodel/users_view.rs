use std::cmp::Ordering;
use std::collections::HashSet;

use crate::client::models::entities::{SendMessageData, UserData};
use crate::client::services::api_client::{ApiError, ApiResult};
use crate::client::viewmodel::messages_view::LoadState;
use crate::client::viewmodel::table::TableState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserColumn {
    FirstName,
    LastName,
    Email,
}

#[derive(Debug, Clone, Default)]
pub struct ComposeState {
    pub title: String,
    pub description: String,
}

/// State behind the admin's user table: the fetched directory, the
/// transient recipient selection and the compose form built from it.
#[derive(Debug, Default)]
pub struct UsersViewModel {
    state: LoadState,
    users: Vec<UserData>,
    epoch: u64,
    selection: HashSet<i64>,
    compose: Option<ComposeState>,
    pub table: TableState<UserColumn>,
}

impl UsersViewModel {
    pub fn new(page_size: usize) -> Self {
        Self {
            table: TableState::new(page_size),
            ..Self::default()
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn users(&self) -> &[UserData] {
        &self.users
    }

    pub fn begin_fetch(&mut self) -> u64 {
        self.epoch += 1;
        self.state = LoadState::Loading;
        self.users.clear();
        self.selection.clear();
        self.compose = None;
        self.table.reset();
        self.epoch
    }

    pub fn invalidate(&mut self) {
        self.epoch += 1;
    }

    pub fn apply_fetch(&mut self, epoch: u64, result: ApiResult<Vec<UserData>>) {
        if epoch != self.epoch {
            log::debug!("[USERS] discarding stale fetch result (epoch {epoch})");
            return;
        }
        match result {
            Ok(list) => {
                self.users = list;
                self.state = LoadState::Ready;
            }
            Err(ApiError::Expired) => self.state = LoadState::Expired,
            Err(ApiError::Failed(reason)) => self.state = LoadState::Errored(reason),
        }
    }

    /// Checkbox interaction: inserts the id if absent, removes it otherwise.
    pub fn toggle_recipient(&mut self, id: i64) {
        if self.selection.contains(&id) {
            self.selection.remove(&id);
        } else {
            self.selection.insert(id);
        }
    }

    /// Drops exactly the matching id from the compose recipients.
    pub fn remove_recipient(&mut self, id: i64) {
        self.selection.remove(&id);
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selection.contains(&id)
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Selected users in directory order, for the compose recipient list.
    pub fn selected_recipients(&self) -> Vec<&UserData> {
        self.users
            .iter()
            .filter(|u| self.selection.contains(&u.id))
            .collect()
    }

    pub fn compose(&self) -> Option<&ComposeState> {
        self.compose.as_ref()
    }

    /// Opens the compose form pre-populated with the selection. Disabled
    /// while nothing is selected.
    pub fn open_compose(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.compose = Some(ComposeState::default());
        true
    }

    /// Closing the form discards it and clears the selection.
    pub fn close_compose(&mut self) {
        self.compose = None;
        self.selection.clear();
    }

    pub fn set_compose_title(&mut self, title: String) {
        if let Some(compose) = self.compose.as_mut() {
            compose.title = title;
        }
    }

    pub fn set_compose_description(&mut self, description: String) {
        if let Some(compose) = self.compose.as_mut() {
            compose.description = description;
        }
    }

    pub fn can_submit(&self) -> bool {
        match &self.compose {
            Some(c) => {
                !self.selection.is_empty()
                    && !c.title.trim().is_empty()
                    && !c.description.trim().is_empty()
            }
            None => false,
        }
    }

    /// Builds the outgoing payload and clears the form and the selection.
    pub fn take_payload(&mut self) -> Option<SendMessageData> {
        if !self.can_submit() {
            return None;
        }
        let compose = self.compose.take()?;
        let recipients: Vec<i64> = self
            .users
            .iter()
            .filter(|u| self.selection.contains(&u.id))
            .map(|u| u.id)
            .collect();
        self.selection.clear();
        Some(SendMessageData {
            title: compose.title.trim().to_string(),
            description: compose.description.trim().to_string(),
            recipients,
        })
    }

    pub fn shows_placeholder(&self) -> bool {
        self.state == LoadState::Ready && self.users.is_empty()
    }

    pub fn visible_rows(&self) -> Vec<&UserData> {
        self.table.visible(&self.users, compare)
    }

    pub fn page_count(&self) -> usize {
        self.table.page_count(self.users.len())
    }
}

fn compare(a: &UserData, b: &UserData, column: UserColumn) -> Ordering {
    match column {
        UserColumn::FirstName => a.first_name.cmp(&b.first_name),
        UserColumn::LastName => a.last_name.cmp(&b.last_name),
        UserColumn::Email => a.email.cmp(&b.email),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::entities::Role;

    fn user(id: i64) -> UserData {
        UserData {
            id,
            first_name: format!("nombre{id}"),
            last_name: format!("apellido{id}"),
            email: format!("u{id}@sinergia.com"),
            role: Role::User,
        }
    }

    fn ready(vm: &mut UsersViewModel, users: Vec<UserData>) {
        let epoch = vm.begin_fetch();
        vm.apply_fetch(epoch, Ok(users));
    }

    #[test]
    fn toggling_twice_restores_the_selection() {
        let mut vm = UsersViewModel::new(10);
        ready(&mut vm, vec![user(1), user(2)]);
        vm.toggle_recipient(2);
        assert!(vm.is_selected(2));
        vm.toggle_recipient(1);
        vm.toggle_recipient(1);
        assert!(vm.is_selected(2));
        assert!(!vm.is_selected(1));
        assert_eq!(vm.selection_len(), 1);
    }

    #[test]
    fn removal_drops_exactly_the_matching_id() {
        let mut vm = UsersViewModel::new(10);
        ready(&mut vm, vec![user(1), user(11), user(111)]);
        vm.toggle_recipient(1);
        vm.toggle_recipient(11);
        vm.toggle_recipient(111);
        vm.remove_recipient(1);
        assert!(!vm.is_selected(1));
        assert!(vm.is_selected(11));
        assert!(vm.is_selected(111));
    }

    #[test]
    fn compose_requires_a_selection() {
        let mut vm = UsersViewModel::new(10);
        ready(&mut vm, vec![user(1)]);
        assert!(!vm.open_compose());
        vm.toggle_recipient(1);
        assert!(vm.open_compose());
        assert_eq!(vm.selected_recipients()[0].id, 1);
    }

    #[test]
    fn closing_compose_clears_the_selection() {
        let mut vm = UsersViewModel::new(10);
        ready(&mut vm, vec![user(1), user(2)]);
        vm.toggle_recipient(1);
        vm.toggle_recipient(2);
        vm.open_compose();
        vm.close_compose();
        assert!(!vm.has_selection());
        assert!(vm.compose().is_none());
    }

    #[test]
    fn payload_carries_recipients_in_directory_order() {
        let mut vm = UsersViewModel::new(10);
        ready(&mut vm, vec![user(3), user(1), user(2)]);
        vm.toggle_recipient(2);
        vm.toggle_recipient(3);
        vm.open_compose();
        vm.set_compose_title("Aviso".into());
        vm.set_compose_description("Detalle".into());

        let payload = vm.take_payload().unwrap();
        assert_eq!(payload.recipients, vec![3, 2]);
        // sending also clears form and selection
        assert!(vm.compose().is_none());
        assert!(!vm.has_selection());
    }

    #[test]
    fn blank_form_cannot_be_submitted() {
        let mut vm = UsersViewModel::new(10);
        ready(&mut vm, vec![user(1)]);
        vm.toggle_recipient(1);
        vm.open_compose();
        vm.set_compose_title("   ".into());
        assert!(!vm.can_submit());
        assert!(vm.take_payload().is_none());
    }

    #[test]
    fn expired_fetch_blocks_the_view() {
        let mut vm = UsersViewModel::new(10);
        let epoch = vm.begin_fetch();
        vm.apply_fetch(epoch, Err(ApiError::Expired));
        assert_eq!(vm.state(), &LoadState::Expired);
    }

    #[test]
    fn empty_directory_shows_the_placeholder() {
        let mut vm = UsersViewModel::new(10);
        ready(&mut vm, vec![]);
        assert!(vm.shows_placeholder());
        assert_eq!(vm.page_count(), 0);
    }
}
