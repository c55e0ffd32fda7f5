//! Plain-text rendering of the view models

use sitebook_budget::BudgetView;
use sitebook_core::TaskViewModel;
use sitebook_search::SearchResults;
use std::fmt::Write;

fn money(amount: Option<f64>) -> String {
    amount.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

pub(crate) fn task_view(view: &TaskViewModel) -> String {
    let mut out = String::new();
    let stats = view.stats;
    let _ = writeln!(
        out,
        "War Room: {} tasks, {} overdue, {} waiting on me, {} blocking",
        stats.total, stats.overdue, stats.waiting_on_me, stats.blocking
    );
    if view.tasks.len() < stats.total {
        let _ = writeln!(out, "Showing {} of {}", view.tasks.len(), stats.total);
    }
    out.push('\n');

    for task in &view.tasks {
        let mut flags = Vec::new();
        if task.is_blocking {
            flags.push("blocking");
        }
        if task.is_overdue {
            flags.push("overdue");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        let _ = writeln!(
            out,
            "  {:<4} {} {} - {} ({}){}",
            task.id,
            task.priority,
            task.description,
            task.project_name,
            task.status.label(),
            flags
        );
    }

    let stalled = view.breakdown.stall.total();
    if stalled > 0 {
        let _ = writeln!(out, "\nStalled: {stalled}");
    }
    out
}

pub(crate) fn budget_view(view: &BudgetView) -> String {
    let mut out = String::new();
    let summary = &view.summary;
    let _ = writeln!(
        out,
        "Budget: budgeted {:.2}, committed {:.2}, variance {:.2}",
        summary.total_budgeted, summary.total_committed, summary.total_variance
    );
    let _ = writeln!(
        out,
        "Quoted: {} of {} trades ({}%)",
        summary.trades_with_quotes, summary.total_trades, summary.percent_quoted
    );

    if !view.budget_by_project.is_empty() {
        out.push_str("\nBy project:\n");
        for p in &view.budget_by_project {
            let _ = writeln!(
                out,
                "  {:<24} {:>12.2} {:>12.2} {:>12.2}",
                p.name, p.budgeted, p.actual, p.remaining
            );
        }
    }

    if !view.budget_by_area.is_empty() {
        out.push_str("\nBy area:\n");
        for a in &view.budget_by_area {
            let _ = writeln!(
                out,
                "  {:<24} {:>12.2} {:>12.2} {:>12.2}",
                a.name, a.budgeted, a.actual, a.remaining
            );
        }
    }

    if !view.quotes_by_trade.is_empty() {
        out.push_str("\nBy trade:\n");
        for t in &view.quotes_by_trade {
            let mut notes = Vec::new();
            if t.is_approved_over_budget {
                notes.push("approved over budget");
            }
            if t.is_lowest_under_budget {
                notes.push("lowest under budget");
            }
            let notes = if notes.is_empty() {
                String::new()
            } else {
                format!(" [{}]", notes.join(", "))
            };
            let _ = writeln!(
                out,
                "  {:<24} allowance {} lowest {} approved {} quotes {}{}",
                t.trade,
                money(t.budget_allowance),
                money(t.lowest_quote),
                money(t.approved_quote),
                t.quote_count,
                notes
            );
        }
    }
    out
}

pub(crate) fn search_results(results: &SearchResults) -> String {
    if results.is_empty() {
        return "No matches\n".to_string();
    }

    let mut out = String::new();
    if !results.projects.is_empty() {
        out.push_str("Projects:\n");
        for p in &results.projects {
            let _ = writeln!(out, "  {:<6} {}", p.id, p.name);
        }
    }
    if !results.tasks.is_empty() {
        out.push_str("Tasks:\n");
        for t in &results.tasks {
            let _ = writeln!(out, "  {:<6} {} ({})", t.id, t.description, t.project_name);
        }
    }
    if !results.quotes.is_empty() {
        out.push_str("Quotes:\n");
        for q in &results.quotes {
            let _ = writeln!(out, "  {:<6} {} {}", q.id, q.trade, money(q.quoted_price));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitebook_budget::{build_budget_view, BudgetInputs};
    use sitebook_core::task_view_model;
    use sitebook_search::{search, SearchCorpus};
    use sitebook_test_utils::{sample_budget, sample_tasks};
    use sitebook_warroom::{TaskFilter, TaskViewConfig};

    #[test]
    fn task_view_lists_flags_and_counts() {
        let tasks = sample_tasks();
        let view = task_view_model(
            &tasks,
            &TaskViewConfig::new().with_filter(TaskFilter::new().with_status("blocking")),
        );
        let text = task_view(&view);

        assert!(text.starts_with("War Room: 6 tasks, 2 overdue, 1 waiting on me, 2 blocking"));
        assert!(text.contains("Showing 2 of 6"));
        assert!(text.contains("[blocking, overdue]"));
        assert!(text.contains("Waiting on Client"));
    }

    #[test]
    fn budget_view_sections() {
        let fixture = sample_budget();
        let inputs = BudgetInputs::new(
            fixture.projects,
            fixture.areas,
            fixture.line_items,
            fixture.quotes,
        );
        let text = budget_view(&build_budget_view(&inputs, None).unwrap());

        assert!(text.contains("variance -2200.00"));
        assert!(text.contains("Quoted: 3 of 3 trades (100%)"));
        assert!(text.contains("By area:"));
        assert!(text.contains("lowest under budget"));
    }

    #[test]
    fn empty_search_says_so() {
        assert_eq!(search_results(&SearchResults::default()), "No matches\n");
    }

    #[test]
    fn search_groups_have_headings() {
        let budget = sample_budget();
        let tasks = sample_tasks();
        let results = search(
            "harbor",
            &SearchCorpus::new(&budget.projects, &tasks, &budget.quotes),
            10,
        );
        let text = search_results(&results);
        assert!(text.starts_with("Projects:\n"));
        assert!(text.contains("Tasks:\n"));
        assert!(!text.contains("Quotes:"));
    }
}
