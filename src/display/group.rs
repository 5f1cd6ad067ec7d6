//! Group and expense display formatting
//!
//! Expense rows show participant names, so callers pass the participants
//! the group's ids resolve against.

use std::collections::HashMap;

use crate::models::{Currency, Expense, Group, Participant, ParticipantId};

/// Format a list of groups with member and expense counts
pub fn format_group_list(groups: &[Group]) -> String {
    if groups.is_empty() {
        return "No groups found.".to_string();
    }

    let name_width = groups
        .iter()
        .map(|g| g.name.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>7}  {:>8}\n",
        "Group",
        "Members",
        "Expenses",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->7}  {:->8}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));
    for group in groups {
        output.push_str(&format!(
            "{:<name_width$}  {:>7}  {:>8}\n",
            group.name,
            group.members.len(),
            group.expenses.len(),
            name_width = name_width,
        ));
    }
    output
}

/// Format a group's details: members in order, then its expenses
pub fn format_group_details(group: &Group, members: &[Participant], currency: &Currency) -> String {
    let mut output = String::new();
    output.push_str(&format!("Group: {}\n", group.name));
    output.push_str(&format!("  ID:      {}\n", group.id));
    output.push_str(&format!(
        "  Created: {}\n",
        group.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str("\n  Members:\n");
    for member in members {
        output.push_str(&format!("    {}\n", member.name));
    }
    output.push('\n');
    output.push_str(&format_expense_list(&group.expenses, members, currency));
    output
}

/// Format expenses as a table with one indented line per split
pub fn format_expense_list(
    expenses: &[Expense],
    participants: &[Participant],
    currency: &Currency,
) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let names: HashMap<ParticipantId, &str> = participants
        .iter()
        .map(|p| (p.id, p.name.as_str()))
        .collect();
    let name_of = |id: &ParticipantId| names.get(id).copied().unwrap_or("(unknown)");

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<16}  {:<7}  {:>12}  {}\n",
        "Date", "Paid by", "Split", "Total", "Description"
    ));
    output.push_str(&format!(
        "{:-<10}  {:-<16}  {:-<7}  {:->12}  {:-<12}\n",
        "", "", "", "", ""
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<10}  {:<16}  {:<7}  {:>12}  {}\n",
            expense.created_at.format("%Y-%m-%d"),
            name_of(&expense.payer),
            expense.policy,
            currency.format(expense.total),
            expense.description,
        ));
        for split in &expense.splits {
            output.push_str(&format!(
                "{:<10}  {:<16}  {:<7}  {:>12}\n",
                "",
                format!("  {}", name_of(&split.participant)),
                "",
                currency.format(split.amount),
            ));
        }
    }
    output
}
