//! `cardpost render` – print the card payload without sending it.

use anyhow::Result;

use super::build_card;
use crate::cli::CardArgs;

pub fn run_render(args: &CardArgs) -> Result<()> {
    let mut card = build_card(args)?;
    card.construct()?;
    card.validate()?;
    println!("{}", card.render());
    Ok(())
}
