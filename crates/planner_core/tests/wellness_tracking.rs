use planner_core::db::open_db_in_memory;
use planner_core::model::tracker::{water_completion_percent, Weekday, GLASSES_PER_DAY};
use planner_core::model::workout::{WorkoutDraft, WorkoutKind};
use planner_core::repo::state_repo::SqliteStateRepository;
use planner_core::{PlannerService, ValidationError};
use rusqlite::Connection;

fn service(conn: &Connection) -> PlannerService<SqliteStateRepository<'_>> {
    let repo = SqliteStateRepository::try_new(conn).unwrap();
    PlannerService::open(repo).unwrap()
}

#[test]
fn water_toggle_fills_then_empties_a_cell() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    service.toggle_water(Weekday::Tue, 2).unwrap();
    assert!(service.state().water[&Weekday::Tue].contains(&2));

    service.toggle_water(Weekday::Tue, 2).unwrap();
    assert!(!service.state().water.contains_key(&Weekday::Tue));
}

#[test]
fn water_percent_runs_from_zero_to_hundred() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    assert_eq!(water_completion_percent(&service.state().water), 0);

    for day in Weekday::ALL {
        for glass in 0..GLASSES_PER_DAY {
            service.toggle_water(day, glass).unwrap();
        }
    }
    assert_eq!(water_completion_percent(&service.state().water), 100);
}

#[test]
fn water_rejects_out_of_range_glass() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    assert_eq!(
        service.toggle_water(Weekday::Fri, 8).unwrap_err(),
        ValidationError::GlassIndexOutOfRange(8)
    );
    assert!(service.state().water.is_empty());
}

#[test]
fn water_reset_clears_the_grid() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    service.toggle_water(Weekday::Mon, 0).unwrap();
    service.toggle_water(Weekday::Sun, 7).unwrap();
    service.reset_water();
    assert!(service.state().water.is_empty());
    assert_eq!(water_completion_percent(&service.state().water), 0);
}

#[test]
fn habit_marks_are_keyed_by_name_and_day() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    service.set_habit("meditation", Weekday::Mon, true).unwrap();
    service.set_habit("meditation", Weekday::Tue, false).unwrap();
    service.set_habit("stretching", Weekday::Mon, true).unwrap();

    let habits = &service.state().habits;
    assert_eq!(habits["meditation"][&Weekday::Mon], true);
    assert_eq!(habits["meditation"][&Weekday::Tue], false);
    assert_eq!(habits.len(), 2);

    assert!(matches!(
        service.set_habit("  ", Weekday::Wed, true),
        Err(ValidationError::EmptyField("habit"))
    ));
}

#[test]
fn workout_crud_and_focus_areas() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let id = service
        .add_workout(&WorkoutDraft {
            kind: WorkoutKind::Cardio,
            duration: 40,
            date: "2024-06-01".to_string(),
        })
        .unwrap();

    service.toggle_workout(id);
    assert!(service.workout(id).unwrap().completed);
    service.toggle_workout(id);
    assert!(!service.workout(id).unwrap().completed);

    service.set_workout_focus("core", true).unwrap();
    service.set_workout_focus("core", false).unwrap();
    assert_eq!(service.state().workout_focus["core"], false);

    service.remove_workout(id);
    assert!(service.workout(id).is_none());
}
