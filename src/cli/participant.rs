//! Participant CLI commands

use clap::Subcommand;

use crate::display::{format_participant_details, format_participant_list};
use crate::error::{LedgerError, LedgerResult};
use crate::services::{GroupService, ParticipantService};
use crate::storage::Storage;

/// Participant subcommands
#[derive(Subcommand)]
pub enum ParticipantCommands {
    /// Register one or more participants
    Add {
        /// Participant names (unique, case-insensitive)
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,
        /// Optional phone number, only with a single name
        #[arg(short, long)]
        phone: Option<String>,
    },
    /// List all participants
    List,
    /// Show a participant and the groups they belong to
    Show {
        /// Participant name or ID
        participant: String,
    },
}

/// Handle a participant command
pub fn handle_participant_command(storage: &Storage, cmd: ParticipantCommands) -> LedgerResult<()> {
    let service = ParticipantService::new(storage);

    match cmd {
        ParticipantCommands::Add { names, phone } => {
            let created = match (names.as_slice(), phone) {
                ([name], phone) => vec![service.create(name, phone.as_deref())?],
                (_, Some(_)) => {
                    return Err(LedgerError::Validation(
                        "A phone number can only be given with a single name".into(),
                    ))
                }
                (_, None) => service.create_many(&names)?,
            };
            for participant in created {
                println!("Added participant: {}", participant.name);
                println!("  ID: {}", participant.id);
            }
        }

        ParticipantCommands::List => {
            print!("{}", format_participant_list(&service.list()?));
        }

        ParticipantCommands::Show { participant } => {
            let found = service.require(&participant)?;
            print!("{}", format_participant_details(&found));

            let groups = GroupService::new(storage).list_for_member(&found.name)?;
            if !groups.is_empty() {
                println!("  Groups:");
                for group in groups {
                    println!("    {}", group.name);
                }
            }
        }
    }

    Ok(())
}
