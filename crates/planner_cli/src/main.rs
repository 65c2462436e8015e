//! Command-line front-end for the planner core.
//!
//! # Responsibility
//! - Translate one command invocation into a core mutation or a rendered
//!   view, then exit.
//! - Resolve "today" for the focus view from the local clock; the core
//!   itself owns no clock.

use chrono::Local;
use planner_core::db::open_db;
use planner_core::model::money::{ExpenseCategory, ExpenseDraft, WishlistDraft};
use planner_core::model::priority::{PriorityDraft, PriorityLevel};
use planner_core::model::task::{TaskCategory, TaskDraft};
use planner_core::model::tracker::Weekday;
use planner_core::model::trip::TripDraft;
use planner_core::model::workout::{WorkoutDraft, WorkoutKind};
use planner_core::view;
use planner_core::{default_log_level, init_logging, PlannerService, SqliteStateRepository};
use std::process::ExitCode;

const USAGE: &str = "usage: planner <command>

  show <tasks|focus|priorities|habits|workouts|water|expenses|wishlist|trips|journal|affirmations|progress|all>
  task add <name> <YYYY-MM-DD> [HH:MM] [category]
  task done <id> | task rm <id>
  priority add <name> <high|medium|low> [YYYY-MM-DD] | priority rm <id>
  habit set <name> <mon..sun> <on|off>
  workout add <kind> <minutes> <YYYY-MM-DD> | workout done <id> | workout rm <id>
  focus set <area> <on|off>
  water toggle <mon..sun> <0-7> | water reset
  expense add <YYYY-MM-DD> <item> <amount> <category> | expense rm <id>
  wish add <item> <price> <high|medium|low> | wish buy <id> | wish rm <id>
  trip add <city> <YYYY-MM-DD> [end] [notes] | trip rm <id>
  journal gratitude <text> | journal thoughts <text>
  affirmation add <text> | affirmation rm <index>
  progress set <0-100>

environment: PLANNER_DB (database path, default planner.db),
             PLANNER_LOG_DIR (enables file logging when set)";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    }

    if let Ok(log_dir) = std::env::var("PLANNER_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<String, String> {
    let db_path = std::env::var("PLANNER_DB").unwrap_or_else(|_| "planner.db".to_string());
    let conn = open_db(&db_path).map_err(|err| err.to_string())?;
    let repo = SqliteStateRepository::try_new(&conn).map_err(|err| err.to_string())?;
    let mut service = PlannerService::open(repo).map_err(|err| err.to_string())?;

    let mut args = args.iter().map(String::as_str);
    let command = args.next().unwrap_or_default();
    let rest: Vec<&str> = args.collect();

    match (command, rest.as_slice()) {
        ("show", [view]) => render(&service, view),

        ("task", ["add", name, date, extra @ ..]) => {
            let (time, category) = match extra {
                [] => (None, "personal"),
                [time] => (Some(*time), "personal"),
                [time, category] => (Some(*time), *category),
                _ => return Err(USAGE.to_string()),
            };
            let draft = TaskDraft {
                name: name.to_string(),
                date: date.to_string(),
                time: time.map(str::to_string),
                category: TaskCategory::parse(category)
                    .ok_or_else(|| format!("unknown task category `{category}`"))?,
            };
            let id = service.add_task(&draft).map_err(|err| err.to_string())?;
            Ok(format!("added task {id}\n"))
        }
        ("task", ["done", id]) => {
            service.toggle_task(parse_id(id)?);
            Ok(String::new())
        }
        ("task", ["rm", id]) => {
            service.remove_task(parse_id(id)?);
            Ok(String::new())
        }

        ("priority", ["add", name, level, date @ ..]) => {
            let draft = PriorityDraft {
                name: name.to_string(),
                date: date.first().map(|d| d.to_string()),
                level: parse_level(level)?,
            };
            let id = service.add_priority(&draft).map_err(|err| err.to_string())?;
            Ok(format!("added priority {id}\n"))
        }
        ("priority", ["rm", id]) => {
            service.remove_priority(parse_id(id)?);
            Ok(String::new())
        }

        ("habit", ["set", name, day, flag]) => {
            service
                .set_habit(name, parse_day(day)?, parse_flag(flag)?)
                .map_err(|err| err.to_string())?;
            Ok(String::new())
        }

        ("workout", ["add", kind, minutes, date]) => {
            let draft = WorkoutDraft {
                kind: WorkoutKind::parse(kind)
                    .ok_or_else(|| format!("unknown workout kind `{kind}`"))?,
                duration: minutes
                    .parse()
                    .map_err(|_| format!("invalid duration `{minutes}`"))?,
                date: date.to_string(),
            };
            let id = service.add_workout(&draft).map_err(|err| err.to_string())?;
            Ok(format!("added workout {id}\n"))
        }
        ("workout", ["done", id]) => {
            service.toggle_workout(parse_id(id)?);
            Ok(String::new())
        }
        ("workout", ["rm", id]) => {
            service.remove_workout(parse_id(id)?);
            Ok(String::new())
        }
        ("focus", ["set", area, flag]) => {
            service
                .set_workout_focus(area, parse_flag(flag)?)
                .map_err(|err| err.to_string())?;
            Ok(String::new())
        }

        ("water", ["toggle", day, glass]) => {
            let glass: u8 = glass
                .parse()
                .map_err(|_| format!("invalid glass index `{glass}`"))?;
            service
                .toggle_water(parse_day(day)?, glass)
                .map_err(|err| err.to_string())?;
            Ok(view::render_water(service.state()))
        }
        ("water", ["reset"]) => {
            service.reset_water();
            Ok(String::new())
        }

        ("expense", ["add", date, item, amount, category]) => {
            let draft = ExpenseDraft {
                date: date.to_string(),
                item: item.to_string(),
                amount: amount
                    .parse()
                    .map_err(|_| format!("invalid amount `{amount}`"))?,
                category: ExpenseCategory::parse(category)
                    .ok_or_else(|| format!("unknown expense category `{category}`"))?,
            };
            let id = service.add_expense(&draft).map_err(|err| err.to_string())?;
            Ok(format!("added expense {id}\n"))
        }
        ("expense", ["rm", id]) => {
            service.remove_expense(parse_id(id)?);
            Ok(String::new())
        }

        ("wish", ["add", item, price, level]) => {
            let draft = WishlistDraft {
                item: item.to_string(),
                price: price
                    .parse()
                    .map_err(|_| format!("invalid price `{price}`"))?,
                priority: parse_level(level)?,
            };
            let id = service
                .add_wishlist_item(&draft)
                .map_err(|err| err.to_string())?;
            Ok(format!("added wishlist item {id}\n"))
        }
        ("wish", ["buy", id]) => {
            service.toggle_wishlist_item(parse_id(id)?);
            Ok(String::new())
        }
        ("wish", ["rm", id]) => {
            service.remove_wishlist_item(parse_id(id)?);
            Ok(String::new())
        }

        ("trip", ["add", city, start, extra @ ..]) => {
            let (end, notes) = match extra {
                [] => (None, ""),
                [end] => (Some(*end), ""),
                [end, notes] => (Some(*end), *notes),
                _ => return Err(USAGE.to_string()),
            };
            let draft = TripDraft {
                city: city.to_string(),
                date_start: start.to_string(),
                date_end: end.map(str::to_string),
                notes: notes.to_string(),
            };
            let id = service.add_trip(&draft).map_err(|err| err.to_string())?;
            Ok(format!("added trip {id}\n"))
        }
        ("trip", ["rm", id]) => {
            service.remove_trip(parse_id(id)?);
            Ok(String::new())
        }

        ("journal", ["gratitude", text]) => {
            service.set_gratitude(text);
            Ok(String::new())
        }
        ("journal", ["thoughts", text]) => {
            service.set_thoughts(text);
            Ok(String::new())
        }

        ("affirmation", ["add", text]) => {
            service.add_affirmation(text).map_err(|err| err.to_string())?;
            Ok(String::new())
        }
        ("affirmation", ["rm", index]) => {
            let index: usize = index
                .parse()
                .map_err(|_| format!("invalid index `{index}`"))?;
            service.remove_affirmation(index);
            Ok(String::new())
        }

        ("progress", ["set", percent]) => {
            let percent: u8 = percent
                .parse()
                .map_err(|_| format!("invalid percentage `{percent}`"))?;
            service.set_progress(percent).map_err(|err| err.to_string())?;
            Ok(view::render_progress(service.state()))
        }

        _ => Err(USAGE.to_string()),
    }
}

fn render<R: planner_core::StateRepository>(
    service: &PlannerService<R>,
    which: &str,
) -> Result<String, String> {
    let state = service.state();
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let rendered = match which {
        "tasks" => view::render_tasks(state),
        "focus" => view::render_daily_focus(state, &today),
        "priorities" => view::render_priorities(state),
        "habits" => view::render_habits(state),
        "workouts" => {
            let mut out = view::render_workouts(state);
            out.push_str(&view::render_workout_focus(state));
            out
        }
        "water" => view::render_water(state),
        "expenses" => view::render_expenses(state),
        "wishlist" => view::render_wishlist(state),
        "trips" => view::render_trips(state),
        "journal" => view::render_journal(state),
        "affirmations" => view::render_affirmations(state),
        "progress" => view::render_progress(state),
        "all" => [
            view::render_daily_focus(state, &today),
            view::render_tasks(state),
            view::render_priorities(state),
            view::render_habits(state),
            view::render_workouts(state),
            view::render_workout_focus(state),
            view::render_water(state),
            view::render_expenses(state),
            view::render_wishlist(state),
            view::render_trips(state),
            view::render_journal(state),
            view::render_affirmations(state),
            view::render_progress(state),
        ]
        .join("\n"),
        other => return Err(format!("unknown view `{other}`")),
    };
    Ok(rendered)
}

fn parse_id(value: &str) -> Result<i64, String> {
    value.parse().map_err(|_| format!("invalid id `{value}`"))
}

fn parse_day(value: &str) -> Result<Weekday, String> {
    Weekday::parse(value).ok_or_else(|| format!("unknown weekday `{value}`; expected mon..sun"))
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(format!("expected on|off, got `{other}`")),
    }
}

fn parse_level(value: &str) -> Result<PriorityLevel, String> {
    PriorityLevel::parse(value).ok_or_else(|| format!("unknown level `{value}`"))
}
