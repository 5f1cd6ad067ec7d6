//! Participant display formatting

use crate::models::Participant;

/// Format a list of participants as a table
pub fn format_participant_list(participants: &[Participant]) -> String {
    if participants.is_empty() {
        return "No participants found.".to_string();
    }

    let name_width = participants
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<16}  {}\n",
        "Name",
        "Phone",
        "ID",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<16}  {:-<12}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for participant in participants {
        output.push_str(&format!(
            "{:<name_width$}  {:<16}  {}\n",
            participant.name,
            participant.phone.as_deref().unwrap_or("-"),
            participant.id,
            name_width = name_width,
        ));
    }

    output
}

/// Format a single participant's details
pub fn format_participant_details(participant: &Participant) -> String {
    let mut output = String::new();
    output.push_str(&format!("Participant: {}\n", participant.name));
    output.push_str(&format!("  ID:      {}\n", participant.id));
    if let Some(phone) = &participant.phone {
        output.push_str(&format!("  Phone:   {}\n", phone));
    }
    output.push_str(&format!(
        "  Created: {}\n",
        participant.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output
}
