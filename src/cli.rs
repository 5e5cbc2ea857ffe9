// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn id_arg(name: &'static str) -> Arg {
    Arg::new(name).value_parser(value_parser!(i64))
}

fn update_args(cmd: Command) -> Command {
    cmd.arg(id_arg("id").required(true))
        .arg(Arg::new("name").long("name"))
        .arg(Arg::new("amount").long("amount").allow_hyphen_values(true))
        .arg(id_arg("parent").long("parent"))
}

pub fn build_cli() -> Command {
    Command::new("budgetdesk")
        .version(clap::crate_version!())
        .about("Category-tree budgeting against a budget REST backend")
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .help("Backend base URL (overrides BUDGETDESK_API_URL and config file)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More logging on stderr (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(id_arg("parent").long("parent")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(update_args(Command::new("update"))),
        )
        .subcommand(
            Command::new("category")
                .about("Manage the category tree")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(id_arg("parent").long("parent")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(
                            Arg::new("stored")
                                .long("stored")
                                .action(ArgAction::SetTrue)
                                .help("Show parents' own stored amount instead of the rollup"),
                        )
                        .arg(
                            Arg::new("collapsed")
                                .long("collapsed")
                                .action(ArgAction::SetTrue)
                                .help("Only show root categories"),
                        ),
                ))
                .subcommand(update_args(Command::new("update")))
                .subcommand(Command::new("rm").arg(id_arg("id").required(true)))
                .subcommand(
                    Command::new("move")
                        .about("Drag a root category onto another root category's position")
                        .arg(id_arg("id").required(true))
                        .arg(id_arg("over").long("over").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("payee").long("payee"))
                        .arg(Arg::new("memo").long("memo"))
                        .arg(Arg::new("transfer").long("transfer"))
                        .arg(
                            Arg::new("dry-run")
                                .long("dry-run")
                                .action(ArgAction::SetTrue)
                                .help("Show the draft row without saving"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(id_arg("account").long("account"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("update")
                        .arg(id_arg("id").required(true))
                        .arg(id_arg("account").long("account"))
                        .arg(Arg::new("amount").long("amount").allow_hyphen_values(true))
                        .arg(Arg::new("date").long("date"))
                        .arg(id_arg("category").long("category"))
                        .arg(Arg::new("payee").long("payee"))
                        .arg(Arg::new("memo").long("memo"))
                        .arg(id_arg("transfer").long("transfer")),
                ),
        )
        .subcommand(Command::new("summary").about("Able to assign and account balances"))
        .subcommand(
            Command::new("export").subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .value_parser(["csv", "json"]),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(
            Command::new("config")
                .about("Show resolved settings")
                .subcommand(Command::new("show")),
        )
}
