//! Group CLI commands

use clap::Subcommand;

use crate::display::{format_group_details, format_group_list};
use crate::error::LedgerResult;
use crate::ledger::LedgerConfig;
use crate::services::GroupService;
use crate::storage::Storage;

/// Group subcommands
#[derive(Subcommand)]
pub enum GroupCommands {
    /// Create a group from existing participants
    Create {
        /// Group name
        name: String,
        /// Members, in order (names or IDs)
        #[arg(required = true, num_args = 1..)]
        members: Vec<String>,
    },
    /// List groups
    List {
        /// Only groups this participant belongs to
        #[arg(short, long)]
        member: Option<String>,
    },
    /// Show a group's members and expenses
    Show {
        /// Group name or ID
        group: String,
    },
}

/// Handle a group command
pub fn handle_group_command(
    storage: &Storage,
    config: &LedgerConfig,
    cmd: GroupCommands,
) -> LedgerResult<()> {
    let service = GroupService::new(storage);

    match cmd {
        GroupCommands::Create { name, members } => {
            let group = service.create(&name, &members)?;
            println!("Created group: {}", group.name);
            println!("  Members: {}", group.members.len());
            println!("  ID: {}", group.id);
        }

        GroupCommands::List { member } => {
            let groups = match member {
                Some(member) => service.list_for_member(&member)?,
                None => service.list()?,
            };
            print!("{}", format_group_list(&groups));
        }

        GroupCommands::Show { group } => {
            let found = service.require(&group)?;
            let members = service.members(&found)?;
            print!("{}", format_group_details(&found, &members, &config.currency));
        }
    }

    Ok(())
}
