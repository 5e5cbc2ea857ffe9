// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use budgetdesk::{cli, commands, config, session::Session, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    utils::init_tracing(matches.get_count("verbose"));
    let settings = config::load(matches.get_one::<String>("api-url").map(String::as_str))?;

    if let Some(("config", sub)) = matches.subcommand() {
        return commands::config::handle(&settings, sub);
    }

    let mut session = Session::connect(&settings)
        .with_context(|| format!("Create HTTP client for {}", settings.api_url))?;

    match matches.subcommand() {
        Some(("account", sub)) => commands::accounts::handle(&mut session, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut session, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut session, sub)?,
        Some(("summary", _)) => commands::summary::handle(&mut session)?,
        Some(("export", sub)) => commands::exporter::handle(&mut session, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
