//! Property tests for budget rollups

use proptest::prelude::*;
use sitebook_budget::{build_budget_view, BudgetInputs};
use sitebook_model::{BudgetArea, LineItem, Project, ProjectId};

const AREAS: [(&str, &str, i32); 5] = [
    ("a1", "p1", 2),
    ("a2", "p1", 1),
    ("a3", "p2", 1),
    ("a4", "p2", 3),
    ("a5", "p3", 1),
];

// Whole-dollar amounts keep the sums exact regardless of summation order
fn arb_amount() -> impl Strategy<Value = Option<f64>> {
    prop::option::of((0u32..5_000).prop_map(f64::from))
}

fn arb_inputs() -> impl Strategy<Value = BudgetInputs> {
    prop::collection::vec(
        (prop::sample::select(AREAS.to_vec()), arb_amount(), arb_amount()),
        0..30,
    )
    .prop_map(|rows| {
        let line_items = rows
            .into_iter()
            .enumerate()
            .map(|(i, ((area, _, _), budgeted, actual))| {
                LineItem::new(format!("li{i}"), area, budgeted, actual)
            })
            .collect();
        BudgetInputs::new(
            vec![
                Project::new("p1", "Harbor House"),
                Project::new("p2", "Alder Court"),
                Project::new("p3", "Cedar Row"),
            ],
            AREAS
                .iter()
                .map(|(id, project, order)| BudgetArea::new(*id, *project, format!("Area {id}"), *order))
                .collect(),
            line_items,
            Vec::new(),
        )
    })
}

proptest! {
    #[test]
    fn project_totals_equal_sum_of_area_totals(inputs in arb_inputs()) {
        let view = build_budget_view(&inputs, None).unwrap();

        for project in &view.budget_by_project {
            let (budgeted, actual) = view
                .budget_by_area
                .iter()
                .filter(|area| area.project_id == project.project_id)
                .fold((0.0, 0.0), |(b, a), area| (b + area.budgeted, a + area.actual));
            prop_assert_eq!(project.budgeted, budgeted);
            prop_assert_eq!(project.actual, actual);
        }
    }

    #[test]
    fn rollups_never_show_idle_groups(inputs in arb_inputs()) {
        let view = build_budget_view(&inputs, None).unwrap();

        for area in &view.budget_by_area {
            prop_assert!(area.budgeted != 0.0 || area.actual != 0.0);
            prop_assert!(area.remaining >= 0.0);
        }
        for project in &view.budget_by_project {
            prop_assert!(project.budgeted != 0.0 || project.actual != 0.0);
            prop_assert!(project.remaining >= 0.0);
        }
    }

    #[test]
    fn areas_follow_sort_order(inputs in arb_inputs()) {
        let view = build_budget_view(&inputs, None).unwrap();
        let orders: Vec<i32> = view
            .budget_by_area
            .iter()
            .map(|rollup| {
                inputs
                    .areas
                    .iter()
                    .find(|area| area.id == rollup.area_id)
                    .map_or(i32::MAX, |area| area.sort_order)
            })
            .collect();
        prop_assert!(orders.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn scoped_view_matches_portfolio_slice(inputs in arb_inputs()) {
        let all = build_budget_view(&inputs, None).unwrap();
        let scope = ProjectId::new("p2");
        let scoped = build_budget_view(&inputs, Some(&scope)).unwrap();

        let expected: Vec<_> = all
            .budget_by_area
            .iter()
            .filter(|area| area.project_id == scope)
            .cloned()
            .collect();
        prop_assert_eq!(scoped.budget_by_area, expected);
        prop_assert!(scoped.budget_by_project.iter().all(|p| p.project_id == scope));
    }

    #[test]
    fn total_variance_is_committed_minus_budgeted(inputs in arb_inputs()) {
        let view = build_budget_view(&inputs, None).unwrap();
        prop_assert_eq!(
            view.summary.total_variance,
            view.summary.total_committed - view.summary.total_budgeted
        );
    }
}
