use sinergia_portal::client::models::entities::{MessageData, MessageStatus, Role, UserData};
use sinergia_portal::client::services::api_client::ApiError;
use sinergia_portal::client::viewmodel::messages_view::{LoadState, MessagesViewModel};
use sinergia_portal::client::viewmodel::presenter::{self, Badge};
use sinergia_portal::client::viewmodel::users_view::UsersViewModel;

fn wire_messages() -> Vec<MessageData> {
    // backend-shaped payload, deliberately out of order
    let json = r#"[
        {"id":1,"title":"Plan de evacuación","description":"Revisar el plan actualizado.",
         "status":"UNREAD",
         "sender":{"id":3,"firstName":"Laura","lastName":"Paz","email":"laura@sinergia.com","role":"ADMIN"},
         "recipient":{"id":5,"firstName":"Marcos","lastName":"Gil","email":"marcos@sinergia.com","role":"USER"},
         "createdAt":"2024-01-01T09:00:00Z"},
        {"id":2,"title":"Capacitación","description":"Inscripción abierta.",
         "status":"READ",
         "sender":{"id":3,"firstName":"Laura","lastName":"Paz","email":"laura@sinergia.com","role":"ADMIN"},
         "recipient":{"id":5,"firstName":"Marcos","lastName":"Gil","email":"marcos@sinergia.com","role":"USER"},
         "createdAt":"2024-03-01T09:00:00Z"}
    ]"#;
    serde_json::from_str(json).expect("fixture decodes")
}

fn viewer_user() -> UserData {
    UserData {
        id: 5,
        first_name: "Marcos".into(),
        last_name: "Gil".into(),
        email: "marcos@sinergia.com".into(),
        role: Role::User,
    }
}

#[test]
fn fetched_messages_render_newest_first() {
    let mut vm = MessagesViewModel::new(10);
    let epoch = vm.begin_fetch();
    vm.apply_fetch(epoch, Ok(wire_messages()));

    let ids: Vec<i64> = vm.messages().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(vm.state(), &LoadState::Ready);
}

#[test]
fn offline_read_keeps_the_local_state_and_raises_a_notice() {
    let mut vm = MessagesViewModel::new(10);
    let epoch = vm.begin_fetch();
    vm.apply_fetch(epoch, Ok(wire_messages()));

    let viewer = viewer_user();
    let unread = vm
        .messages()
        .iter()
        .find(|m| m.status == MessageStatus::Unread)
        .cloned()
        .unwrap();

    // optimistic flip happens before any round-trip
    let confirm = vm.handle_read(&unread, &viewer);
    assert_eq!(confirm, Some(unread.id));
    assert!(vm.messages().iter().all(|m| m.status == MessageStatus::Read));

    // the confirmation fails (offline); the local READ survives
    vm.confirm_read(Err(ApiError::Failed("sin conexión".into())));
    assert!(vm.update_notice().is_some());
    assert!(vm.messages().iter().all(|m| m.status == MessageStatus::Read));

    vm.dismiss_notice();
    assert!(vm.messages().iter().all(|m| m.status == MessageStatus::Read));
}

#[test]
fn expiration_during_confirmation_blocks_without_other_notices() {
    let mut vm = MessagesViewModel::new(10);
    let epoch = vm.begin_fetch();
    vm.apply_fetch(epoch, Ok(wire_messages()));

    let viewer = viewer_user();
    let unread = vm
        .messages()
        .iter()
        .find(|m| m.status == MessageStatus::Unread)
        .cloned()
        .unwrap();
    vm.handle_read(&unread, &viewer);

    vm.confirm_read(Err(ApiError::Expired));
    assert_eq!(vm.state(), &LoadState::Expired);
    assert!(vm.update_notice().is_none());
}

#[test]
fn admin_observes_authorship_without_touching_read_state() {
    let mut vm = MessagesViewModel::new(10);
    let epoch = vm.begin_fetch();
    vm.apply_fetch(epoch, Ok(wire_messages()));

    let admin = UserData {
        id: 3,
        first_name: "Laura".into(),
        last_name: "Paz".into(),
        email: "laura@sinergia.com".into(),
        role: Role::Admin,
    };
    let unread = vm
        .messages()
        .iter()
        .find(|m| m.status == MessageStatus::Unread)
        .cloned()
        .unwrap();

    assert_eq!(vm.handle_read(&unread, &admin), None);
    assert!(vm.messages().iter().any(|m| m.status == MessageStatus::Unread));

    let presenter = presenter::for_viewer(&admin);
    assert_eq!(presenter.badge(&unread), Badge::Sent);
}

#[test]
fn recipient_selection_round_trip_is_idempotent() {
    let mut vm = UsersViewModel::new(10);
    let epoch = vm.begin_fetch();
    vm.apply_fetch(epoch, Ok(vec![viewer_user()]));

    assert!(!vm.has_selection());
    vm.toggle_recipient(5);
    vm.toggle_recipient(5);
    assert!(!vm.has_selection());
}
