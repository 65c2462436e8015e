use planner_core::db::open_db_in_memory;
use planner_core::model::money::{ExpenseCategory, ExpenseDraft};
use planner_core::model::task::{TaskCategory, TaskDraft};
use planner_core::model::trip::TripDraft;
use planner_core::model::workout::{WorkoutDraft, WorkoutKind};
use planner_core::repo::state_repo::SqliteStateRepository;
use planner_core::view;
use planner_core::PlannerService;
use rusqlite::Connection;

fn service(conn: &Connection) -> PlannerService<SqliteStateRepository<'_>> {
    let repo = SqliteStateRepository::try_new(conn).unwrap();
    PlannerService::open(repo).unwrap()
}

fn task(name: &str, date: &str, time: Option<&str>) -> TaskDraft {
    TaskDraft {
        name: name.to_string(),
        date: date.to_string(),
        time: time.map(str::to_string),
        category: TaskCategory::Personal,
    }
}

#[test]
fn tasks_render_by_date_then_time_with_untimed_last_on_equal_dates() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    // Inserted untimed-first to prove ordering is not insertion order.
    service.add_task(&task("all-day errand", "2024-01-01", None)).unwrap();
    service.add_task(&task("morning call", "2024-01-01", Some("09:00"))).unwrap();
    service.add_task(&task("next-day item", "2024-01-02", None)).unwrap();

    let rendered = view::render_tasks(service.state());
    let morning = rendered.find("morning call").unwrap();
    let errand = rendered.find("all-day errand").unwrap();
    let next_day = rendered.find("next-day item").unwrap();
    assert!(morning < errand && errand < next_day);
}

#[test]
fn workouts_and_expenses_render_most_recent_first() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    for date in ["2024-05-01", "2024-05-03", "2024-05-02"] {
        service
            .add_workout(&WorkoutDraft {
                kind: WorkoutKind::Full,
                duration: 30,
                date: date.to_string(),
            })
            .unwrap();
        service
            .add_expense(&ExpenseDraft {
                date: date.to_string(),
                item: format!("purchase {date}"),
                amount: 10.0,
                category: ExpenseCategory::Other,
            })
            .unwrap();
    }

    let workouts = view::render_workouts(service.state());
    let first = workouts.find("2024-05-03").unwrap();
    let second = workouts.find("2024-05-02").unwrap();
    let third = workouts.find("2024-05-01").unwrap();
    assert!(first < second && second < third);

    let expenses = view::render_expenses(service.state());
    let first = expenses.find("purchase 2024-05-03").unwrap();
    let last = expenses.find("purchase 2024-05-01").unwrap();
    assert!(first < last);
    assert!(expenses.contains("Total: 30.00"));
}

#[test]
fn trips_render_ascending_by_start_date() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    for (city, start) in [("Late", "2024-09-20"), ("Early", "2024-09-01")] {
        service
            .add_trip(&TripDraft {
                city: city.to_string(),
                date_start: start.to_string(),
                date_end: None,
                notes: String::new(),
            })
            .unwrap();
    }

    let rendered = view::render_trips(service.state());
    assert!(rendered.find("Early").unwrap() < rendered.find("Late").unwrap());
}

#[test]
fn focus_view_reflects_the_supplied_today() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    service.add_task(&task("today item", "2024-01-05", None)).unwrap();
    service.add_task(&task("future item", "2024-01-06", None)).unwrap();

    let today_view = view::render_daily_focus(service.state(), "2024-01-05");
    assert!(today_view.contains("today item"));
    assert!(!today_view.contains("future item"));

    // Same state, rolled-over date: the selection follows the caller's today.
    let next_day_view = view::render_daily_focus(service.state(), "2024-01-06");
    assert!(next_day_view.contains("future item"));
    assert!(!next_day_view.contains("today item"));
}

#[test]
fn progress_and_water_views_show_percentages() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let progress = view::render_progress(service.state());
    assert!(progress.contains("50%"));

    let water = view::render_water(service.state());
    assert!(water.contains("Week: 0%"));
    assert!(water.contains("Monday"));
}

#[test]
fn empty_lists_render_placeholders() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    assert_eq!(view::render_tasks(service.state()), "No tasks yet.\n");
    assert_eq!(view::render_trips(service.state()), "No trips planned.\n");
    // Affirmations are never empty on a fresh aggregate; the seed list renders.
    assert!(view::render_affirmations(service.state()).contains("I am loved just as I am."));
}
