//! Testing utilities for Sitebook workspace
//!
//! Shared fixtures, builders and proptest strategies.

#![allow(missing_docs)]

use chrono::{DateTime, NaiveDate, Utc};
use proptest::prelude::*;
use serde_json::{json, Value};
use sitebook_model::{
    BudgetArea, LineItem, Priority, Project, Quote, QuoteStatus, Task, TaskId, TaskStatus,
};

pub fn ts(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Task on the default "Harbor House" project
pub fn task(id: &str, priority: Priority, status: TaskStatus) -> Task {
    task_in(id, "p1", "Harbor House", priority, status)
}

pub fn task_in(
    id: &str,
    project_id: &str,
    project_name: &str,
    priority: Priority,
    status: TaskStatus,
) -> Task {
    Task::new(
        id,
        project_id,
        project_name,
        format!("Task {id}"),
        priority,
        status,
        ts("2024-01-01T00:00:00Z"),
    )
}

/// A small War Room covering every flag combination the views care about
pub fn sample_tasks() -> Vec<Task> {
    vec![
        task_in("t1", "p1", "Harbor House", Priority::P2, TaskStatus::Open)
            .with_next_action(date(2024, 5, 10)),
        task_in("t2", "p2", "Alder Court", Priority::P3, TaskStatus::WaitingOnVendor)
            .blocking("Cabinet install waits on hardware"),
        task_in("t3", "p1", "Harbor House", Priority::P1, TaskStatus::WaitingOnMe).overdue(),
        task_in("t4", "p2", "Alder Court", Priority::P1, TaskStatus::Completed),
        task_in("t5", "p1", "Harbor House", Priority::P2, TaskStatus::WaitingOnClient)
            .overdue()
            .blocking("Tile selection holds flooring"),
        task_in("t6", "p2", "Alder Court", Priority::P3, TaskStatus::FollowUp),
    ]
}

/// Raw budget collections; tests wrap them in the rollup input type
#[derive(Debug, Clone, Default)]
pub struct BudgetFixture {
    pub projects: Vec<Project>,
    pub areas: Vec<BudgetArea>,
    pub line_items: Vec<LineItem>,
    pub quotes: Vec<Quote>,
}

/// Two projects: p1 with Kitchen/Bath/Site areas and quotes, p2 with one area
pub fn sample_budget() -> BudgetFixture {
    BudgetFixture {
        projects: vec![
            Project::new("p1", "Harbor House").with_client("Nguyen"),
            Project::new("p2", "Alder Court").with_client("Okafor"),
        ],
        areas: vec![
            BudgetArea::new("a2", "p1", "Bath", 2),
            BudgetArea::new("a1", "p1", "Kitchen", 1),
            BudgetArea::new("a3", "p1", "Site Work", 3),
            BudgetArea::new("b1", "p2", "Whole House", 1),
        ],
        line_items: vec![
            LineItem::new("li1", "a1", Some(1000.0), Some(200.0)),
            LineItem::new("li2", "a1", None, None),
            LineItem::new("li3", "a2", Some(500.0), Some(600.0)),
            LineItem::new("li4", "a3", Some(0.0), Some(0.0)),
            LineItem::new("li5", "b1", Some(2500.0), Some(1000.0)),
        ],
        quotes: vec![
            Quote::new("q1", "p1", Some("Electrical"), Some(5000.0), QuoteStatus::Draft)
                .with_budget(5000.0),
            Quote::new("q2", "p1", Some("Electrical"), Some(4500.0), QuoteStatus::Approved),
            Quote::new("q3", "p1", Some("Electrical"), Some(6000.0), QuoteStatus::Dead),
            Quote::new("q4", "p1", None, Some(800.0), QuoteStatus::Received),
            Quote::new("q5", "p2", Some("Plumbing"), Some(3200.0), QuoteStatus::Signed)
                .with_budget(3000.0),
        ],
    }
}

/// JSON snapshot document as read by the command line tool
pub fn snapshot_json(tasks: &[Task], budget: &BudgetFixture) -> Value {
    json!({
        "tasks": tasks,
        "projects": budget.projects,
        "budget_areas": budget.areas,
        "line_items": budget.line_items,
        "quotes": budget.quotes,
    })
}

const DESCRIPTIONS: [&str; 5] = [
    "Order windows",
    "order windows",
    "Confirm tile",
    "Schedule inspection",
    "Pour footings",
];

const PROJECTS: [(&str, &str); 3] = [
    ("p1", "Harbor House"),
    ("p2", "alder court"),
    ("p3", "Cedar Row"),
];

/// Arbitrary task with a placeholder id; small value pools force key ties
pub fn arb_task() -> impl Strategy<Value = Task> {
    (
        prop::sample::select(Priority::ALL.to_vec()),
        prop::sample::select(TaskStatus::ALL.to_vec()),
        any::<bool>(),
        any::<bool>(),
        prop::option::of(0u64..45),
        0i64..5,
        prop::sample::select(PROJECTS.to_vec()),
        prop::sample::select(DESCRIPTIONS.to_vec()),
    )
        .prop_map(
            |(priority, status, is_blocking, is_overdue, action_offset, age_days, project, description)| {
                let mut task = Task::new(
                    "t",
                    project.0,
                    project.1,
                    description,
                    priority,
                    status,
                    ts("2024-01-01T00:00:00Z") + chrono::Duration::days(age_days),
                );
                task.is_blocking = is_blocking;
                task.is_overdue = is_overdue;
                task.next_action_date =
                    action_offset.map(|days| date(2024, 3, 1) + chrono::Days::new(days));
                task
            },
        )
}

/// Arbitrary task list with unique ids `t0..tn` in input order
pub fn arb_tasks(max_len: usize) -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(arb_task(), 0..max_len).prop_map(|mut tasks| {
        for (i, task) in tasks.iter_mut().enumerate() {
            task.id = TaskId::new(format!("t{i}"));
        }
        tasks
    })
}
