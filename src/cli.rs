//! # CLI Module / 命令行模块
//!
//! Builds the command-line interface with clap's builder API so that help
//! texts can be localized before parsing, then dispatches to the commands.
//!
//! 使用 clap 的构建器 API 构建命令行接口，以便在解析前本地化帮助文本，然后分派到各个命令。

pub mod commands;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf, process::ExitCode};

use crate::infra::t;
use commands::{init::InitArgs, run::RunArgs};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(lang) = args.iter().find_map(|arg| arg.strip_prefix("--lang=")) {
        return Some(lang.to_string());
    }
    let pos = args.iter().position(|arg| arg == "--lang")?;
    args.get(pos + 1).cloned()
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("bench-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.arg.lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("run")
                .about(t!("cli.run.about", locale = locale).to_string())
                .arg(
                    Arg::new("category")
                        .short('c')
                        .long("category")
                        .help(t!("cli.arg.category", locale = locale).to_string())
                        .value_name("CATEGORY")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("verbose")
                        .short('v')
                        .long("verbose")
                        .help(t!("cli.arg.verbose", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .short('j')
                        .long("json")
                        .help(t!("cli.arg.json", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("binary")
                        .long("binary")
                        .visible_alias("goth")
                        .help(t!("cli.arg.binary", locale = locale).to_string())
                        .value_name("PATH")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("project-root")
                        .long("project-root")
                        .help(t!("cli.arg.project_root", locale = locale).to_string())
                        .value_name("DIR")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help(t!("cli.arg.config", locale = locale).to_string())
                        .value_name("FILE")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("tests-dir")
                        .long("tests-dir")
                        .help(t!("cli.arg.tests_dir", locale = locale).to_string())
                        .value_name("DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("jobs")
                        .long("jobs")
                        .help(t!("cli.arg.jobs", locale = locale).to_string())
                        .value_name("JOBS")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("timeout")
                        .long("timeout")
                        .help(t!("cli.arg.timeout", locale = locale).to_string())
                        .value_name("SECS")
                        .value_parser(clap::value_parser!(u64).range(1..))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("html")
                        .long("html")
                        .help(t!("cli.arg.html", locale = locale).to_string())
                        .value_name("FILE")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cli.init.about", locale = locale).to_string())
                .arg(
                    Arg::new("project-root")
                        .long("project-root")
                        .help(t!("cli.arg.project_root", locale = locale).to_string())
                        .value_name("DIR")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("cli.arg.non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("cli.arg.force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn run_args(matches: &ArgMatches, lang: Option<String>) -> RunArgs {
    RunArgs {
        category: matches.get_one::<String>("category").cloned(),
        verbose: matches.get_flag("verbose"),
        json: matches.get_flag("json"),
        binary: matches.get_one::<String>("binary").cloned(),
        project_root: matches
            .get_one::<PathBuf>("project-root")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(".")),
        config: matches.get_one::<PathBuf>("config").cloned(),
        tests_dir: matches.get_one::<PathBuf>("tests-dir").cloned(),
        jobs: matches.get_one::<usize>("jobs").copied(),
        timeout_secs: matches.get_one::<u64>("timeout").copied(),
        html: matches.get_one::<PathBuf>("html").cloned(),
        lang,
    }
}

fn init_args(matches: &ArgMatches, language: String) -> InitArgs {
    InitArgs {
        project_root: matches
            .get_one::<PathBuf>("project-root")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(".")),
        non_interactive: matches.get_flag("non-interactive"),
        force: matches.get_flag("force"),
        language,
    }
}

/// Parses the command line and runs the selected command.
///
/// Returns the process exit code: success only when the command completed
/// and, for `run`, every case passed.
///
/// 解析命令行并运行所选命令。返回进程退出码：仅当命令完成且（对于 `run`）所有用例都通过时才成功。
pub async fn run() -> Result<ExitCode> {
    // Pre-parse language and initialize i18n first.
    let explicit_lang = pre_parse_language();
    let language = crate::resolve_locale(explicit_lang.as_deref());
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();
    let lang = explicit_lang;

    let success = match matches.subcommand() {
        Some(("run", run_matches)) => commands::run::execute(run_args(run_matches, lang)).await?,
        Some(("init", init_matches)) => {
            commands::init::execute(init_args(init_matches, language))?;
            true
        }
        // `subcommand_required` makes clap exit before reaching here.
        _ => true,
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
