mod support;

use common::api::ApiError;
use common::forms::{AddressField, Form, ReservationField, RoomField, UserDraft, UserField};
use common::model::collection::Collection;
use common::model::notification::Severity;
use common::model::id::EntityId;
use common::model::reservation::Reservation;
use common::resolver::reservation_rows;
use common::workflow::{Action, Command, ConsoleState, Dialog, execute};
use rstest::{fixture, rstest};
use serde_json::json;

use support::{Call, FakeBackend, drive};

#[fixture]
fn backend() -> FakeBackend {
    FakeBackend::default().with_user(1, "Ana", "11122233344")
}

fn severity(state: &ConsoleState) -> Option<Severity> {
    state.notification.as_ref().map(|n| n.severity)
}

fn message(state: &ConsoleState) -> String {
    state
        .notification
        .as_ref()
        .map(|n| n.message.clone())
        .unwrap_or_default()
}

#[rstest]
#[tokio::test]
async fn user_submission_posts_once_refreshes_and_resets(backend: FakeBackend) {
    let mut state = ConsoleState::new();
    drive(&mut state, &backend, Action::OpenDialog(Dialog::UserForm)).await;
    for (field, value) in [
        ("nome", "Bruno"),
        ("email", "bruno@example.com"),
        ("cidade", "Natal"),
        ("estado", "RN"),
        ("cep", "59000-000"),
        ("rua", "Rua das Flores"),
    ] {
        let field: UserField = field.parse().unwrap();
        drive(&mut state, &backend, Action::EditUser(field, value.to_string())).await;
    }

    drive(&mut state, &backend, Action::Submit(Form::User)).await;

    assert_eq!(
        backend.creates(),
        vec![(
            Collection::Users,
            json!({
                "nome": "Bruno",
                "email": "bruno@example.com",
                "cpf": "",
                "dataNascimento": "",
                "endereco": {
                    "cidade": "Natal",
                    "estado": "RN",
                    "cep": "59000-000",
                    "rua": "Rua das Flores"
                }
            })
        )]
    );
    assert_eq!(backend.calls().last(), Some(&Call::Fetch(Collection::Users)));
    assert_eq!(state.user_form, UserDraft::default());
    assert_eq!(state.store.users().len(), 2);
    assert_eq!(severity(&state), Some(Severity::Success));
    assert_eq!(message(&state), "Usuário cadastrado com sucesso!");
    assert!(!state.is_open(Dialog::UserForm));
    assert!(!state.is_busy());
}

#[rstest]
#[tokio::test]
async fn room_capacity_text_is_sent_as_integer(backend: FakeBackend) {
    let mut state = ConsoleState::new();
    drive(&mut state, &backend, Action::EditRoom(RoomField::Name, "Sala B".to_string())).await;
    drive(&mut state, &backend, Action::EditRoom(RoomField::Capacity, "5".to_string())).await;

    drive(&mut state, &backend, Action::Submit(Form::Room)).await;

    assert_eq!(
        backend.creates(),
        vec![(Collection::Rooms, json!({ "nome": "Sala B", "capacidade": 5 }))]
    );
    assert_eq!(state.room_form.capacity, "0");
}

#[rstest]
#[tokio::test]
async fn rejected_create_reports_backend_message_and_keeps_draft(backend: FakeBackend) {
    *backend.reject_creates_with.borrow_mut() = Some(ApiError::rejected(
        422,
        r#"{"message":"Sala indisponível"}"#,
    ));
    let mut state = ConsoleState::new();
    drive(&mut state, &backend, Action::OpenDialog(Dialog::ReservationForm)).await;
    drive(&mut state, &backend, Action::EditReservation(ReservationField::UserId, "1".to_string())).await;
    drive(&mut state, &backend, Action::EditReservation(ReservationField::RoomId, "3".to_string())).await;
    drive(
        &mut state,
        &backend,
        Action::EditReservation(ReservationField::DateTime, "2024-03-01T09:30".to_string()),
    )
    .await;

    drive(&mut state, &backend, Action::Submit(Form::Reservation)).await;

    assert_eq!(severity(&state), Some(Severity::Error));
    assert_eq!(message(&state), "Erro ao criar reserva: Sala indisponível");
    assert_eq!(state.reservation_form.room_id, "3");
    assert!(state.is_open(Dialog::ReservationForm));
    assert!(!backend.calls().contains(&Call::Fetch(Collection::Reservations)));
}

#[rstest]
#[tokio::test]
async fn dangling_user_reference_renders_raw_identifier(backend: FakeBackend) {
    backend.reservations.borrow_mut().push(Reservation {
        id: EntityId::from(7),
        user_id: EntityId::from(42),
        room_id: EntityId::from(1),
        date_time: "2024-01-01T10:00".to_string(),
    });
    let mut state = ConsoleState::new();

    drive(&mut state, &backend, Action::RefreshAll).await;

    let rows = reservation_rows(&state.store);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user, "42");
    assert_eq!(rows[0].room, "1");
}

#[rstest]
#[tokio::test]
async fn failed_refresh_keeps_previous_collection(backend: FakeBackend) {
    let mut state = ConsoleState::new();
    drive(&mut state, &backend, Action::RefreshAll).await;
    let before = state.store.users().to_vec();

    backend.offline.set(true);
    drive(&mut state, &backend, Action::Refresh(Collection::Users)).await;

    assert_eq!(state.store.users(), before.as_slice());
    assert_eq!(severity(&state), Some(Severity::Error));
    assert_eq!(message(&state), "Erro ao buscar usuários");
    assert!(!state.is_refreshing(Collection::Users));
}

#[rstest]
#[tokio::test]
async fn interrupted_listing_body_keeps_previous_collection(backend: FakeBackend) {
    let mut state = ConsoleState::new();
    drive(&mut state, &backend, Action::RefreshAll).await;
    let before = state.store.users().to_vec();
    assert_eq!(before.len(), 1);

    backend.unreadable_bodies.set(true);
    drive(&mut state, &backend, Action::Refresh(Collection::Users)).await;

    assert_eq!(state.store.users(), before.as_slice());
    assert_eq!(severity(&state), Some(Severity::Error));
    assert_eq!(message(&state), "Erro ao buscar usuários");
}

#[rstest]
#[tokio::test]
async fn interrupted_lookup_body_is_an_error_not_a_miss(backend: FakeBackend) {
    let mut state = ConsoleState::new();
    backend.unreadable_bodies.set(true);
    drive(&mut state, &backend, Action::OpenDialog(Dialog::Lookup)).await;
    drive(&mut state, &backend, Action::EditLookup("11122233344".to_string())).await;

    drive(&mut state, &backend, Action::Lookup).await;

    assert_eq!(severity(&state), Some(Severity::Error));
    assert!(message(&state).starts_with("Erro ao buscar usuário: "));
}

#[rstest]
#[tokio::test]
async fn lookup_without_match_warns_and_clears_field(backend: FakeBackend) {
    let mut state = ConsoleState::new();
    drive(&mut state, &backend, Action::OpenDialog(Dialog::Lookup)).await;
    drive(&mut state, &backend, Action::EditLookup("99988877766".to_string())).await;

    drive(&mut state, &backend, Action::Lookup).await;

    assert_eq!(backend.calls(), vec![Call::Lookup("99988877766".to_string())]);
    assert_eq!(severity(&state), Some(Severity::Warning));
    assert_eq!(
        message(&state),
        "Nenhum usuário encontrado com o CPF 99988877766"
    );
    assert!(state.lookup_cpf.is_empty());
    assert!(!state.is_open(Dialog::Lookup));
}

#[rstest]
#[tokio::test]
async fn lookup_outcomes(backend: FakeBackend) {
    let mut state = ConsoleState::new();
    drive(&mut state, &backend, Action::EditLookup("11122233344".to_string())).await;
    drive(&mut state, &backend, Action::Lookup).await;
    assert_eq!(severity(&state), Some(Severity::Success));
    assert_eq!(message(&state), "Usuário encontrado: Ana");

    backend.offline.set(true);
    drive(&mut state, &backend, Action::OpenDialog(Dialog::Lookup)).await;
    drive(&mut state, &backend, Action::EditLookup("11122233344".to_string())).await;
    drive(&mut state, &backend, Action::Lookup).await;
    assert_eq!(severity(&state), Some(Severity::Error));
    assert!(state.lookup_cpf.is_empty());
    assert!(!state.is_open(Dialog::Lookup));
}

#[rstest]
#[tokio::test]
async fn refreshing_one_collection_leaves_the_others_alone(backend: FakeBackend) {
    let mut state = ConsoleState::new();
    drive(&mut state, &backend, Action::RefreshAll).await;
    let users = state.store.users().to_vec();

    backend.users.borrow_mut().clear();
    drive(&mut state, &backend, Action::EditRoom(RoomField::Name, "Sala C".to_string())).await;
    drive(&mut state, &backend, Action::EditRoom(RoomField::Capacity, "2".to_string())).await;
    drive(&mut state, &backend, Action::Submit(Form::Room)).await;
    drive(&mut state, &backend, Action::Refresh(Collection::Rooms)).await;

    assert_eq!(state.store.users(), users.as_slice());
    assert_eq!(state.store.rooms().len(), 1);

    drive(&mut state, &backend, Action::Refresh(Collection::Users)).await;
    assert!(state.store.users().is_empty());
    assert_eq!(state.store.rooms().len(), 1);
}

#[rstest]
#[tokio::test]
async fn out_of_order_refreshes_keep_the_latest(backend: FakeBackend) {
    let mut state = ConsoleState::new();
    let first = state.update(Action::Refresh(Collection::Users)).remove(0);
    backend.users.borrow_mut().clear();
    let second = state.update(Action::Refresh(Collection::Users)).remove(0);

    let newer = execute(&backend, second).await;
    state.update(newer);
    backend.users.borrow_mut().push(Default::default());
    let older = execute(&backend, first).await;
    state.update(older);

    assert!(state.store.users().is_empty());
    assert!(!state.is_busy());
}

#[rstest]
#[tokio::test]
async fn created_room_resolves_in_reservation_table(backend: FakeBackend) {
    let mut state = ConsoleState::new();
    drive(&mut state, &backend, Action::RefreshAll).await;

    drive(&mut state, &backend, Action::EditRoom(RoomField::Name, "Sala A".to_string())).await;
    drive(&mut state, &backend, Action::EditRoom(RoomField::Capacity, "10".to_string())).await;
    drive(&mut state, &backend, Action::Submit(Form::Room)).await;

    let room = state.store.rooms()[0].clone();
    assert_eq!(room.id, EntityId::from(1));
    assert_eq!(room.name, "Sala A");

    let user_id = state.store.users()[0].id.to_string();
    drive(&mut state, &backend, Action::EditReservation(ReservationField::UserId, user_id)).await;
    drive(
        &mut state,
        &backend,
        Action::EditReservation(ReservationField::RoomId, room.id.to_string()),
    )
    .await;
    drive(
        &mut state,
        &backend,
        Action::EditReservation(ReservationField::DateTime, "2024-01-01T10:00".to_string()),
    )
    .await;
    drive(&mut state, &backend, Action::Submit(Form::Reservation)).await;

    assert_eq!(
        backend.creates().last(),
        Some(&(
            Collection::Reservations,
            json!({ "usuarioId": 1, "salaId": 1, "dataHora": "2024-01-01T10:00" })
        ))
    );
    let rows = reservation_rows(&state.store);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user, "Ana");
    assert_eq!(rows[0].room, "Sala A");
    assert_eq!(rows[0].date_time, "01/01/2024 10:00");
}

#[rstest]
#[tokio::test]
async fn address_edits_merge_through_the_workflow(backend: FakeBackend) {
    let mut state = ConsoleState::new();
    drive(&mut state, &backend, Action::EditUser(UserField::Address(AddressField::City), "Natal".to_string())).await;
    drive(&mut state, &backend, Action::EditUser(UserField::Address(AddressField::State), "RN".to_string())).await;

    assert_eq!(state.user_form.address.city, "Natal");
    assert_eq!(state.user_form.address.state, "RN");
    assert!(backend.calls().is_empty());
    assert!(matches!(
        state.update(Action::Submit(Form::User)).as_slice(),
        [Command::DismissLater { .. }]
    ));
}
