use planner_core::db::open_db_in_memory;
use planner_core::model::state::DEFAULT_AFFIRMATIONS;
use planner_core::repo::state_repo::SqliteStateRepository;
use planner_core::{PlannerService, ValidationError};
use rusqlite::Connection;

fn service(conn: &Connection) -> PlannerService<SqliteStateRepository<'_>> {
    let repo = SqliteStateRepository::try_new(conn).unwrap();
    PlannerService::open(repo).unwrap()
}

#[test]
fn journal_text_is_replaced_wholesale() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    service.set_gratitude("morning coffee");
    service.set_thoughts("long week");
    assert_eq!(service.state().journal.gratitude, "morning coffee");

    service.set_gratitude("");
    assert_eq!(service.state().journal.gratitude, "");
    assert_eq!(service.state().journal.thoughts, "long week");
}

#[test]
fn affirmations_start_from_seed_list_and_grow_by_position() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    assert_eq!(service.state().affirmations.len(), DEFAULT_AFFIRMATIONS.len());

    service.add_affirmation("I finish what I start.").unwrap();
    assert_eq!(service.state().affirmations.len(), 5);

    assert!(matches!(
        service.add_affirmation("   "),
        Err(ValidationError::EmptyField("affirmation"))
    ));
}

#[test]
fn affirmation_removal_is_positional_and_bounded() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let second = service.state().affirmations[1].clone();
    service.remove_affirmation(0);
    assert_eq!(service.state().affirmations[0], second);

    // Out-of-range index leaves the list untouched.
    let len = service.state().affirmations.len();
    service.remove_affirmation(99);
    assert_eq!(service.state().affirmations.len(), len);
}

#[test]
fn progress_accepts_bounds_and_rejects_overflow() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    service.set_progress(0).unwrap();
    assert_eq!(service.state().progress, 0);
    service.set_progress(100).unwrap();
    assert_eq!(service.state().progress, 100);

    assert_eq!(
        service.set_progress(101).unwrap_err(),
        ValidationError::ProgressOutOfRange(101)
    );
    assert_eq!(service.state().progress, 100);
}
