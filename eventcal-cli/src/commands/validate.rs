use anyhow::{Result, bail};
use eventcal_core::EventcalError;
use owo_colors::OwoColorize;

use crate::render::pluralize;
use crate::session::Session;

pub fn run(session: &Session) -> Result<()> {
    let store = session.store();
    let valid = store.events().len();
    let rejected = store.rejected();

    for file in rejected {
        println!("{} {}", "✗".red(), file.path.display());
        match &file.error {
            EventcalError::InvalidEvent { issues, .. } => {
                for issue in issues {
                    println!("    {}", issue);
                }
            }
            other => println!("    {}", other),
        }
    }

    if !rejected.is_empty() {
        println!();
        bail!(
            "{} invalid {} ({} valid)",
            rejected.len(),
            pluralize("file", rejected.len()),
            valid
        );
    }

    println!("{} {} {} valid", "✓".green(), valid, pluralize("event", valid));
    Ok(())
}
