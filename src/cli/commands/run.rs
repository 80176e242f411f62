//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command, which executes the benchmark
//! categories against the interpreter and reports the results.
//!
//! 此模块实现了 `run` 命令，针对解释器执行基准测试类别并报告结果。

use anyhow::{Result, bail};
use colored::*;
use std::{path::PathBuf, time::Duration};

use crate::{
    core::{
        aggregator,
        config::HarnessConfig,
        execution::RunOptions,
        planner,
    },
    infra::{
        command::ProcessInvoker,
        fs::{absolute_path, locate_binary},
        t,
    },
    reporting::{
        console::{print_failure_details, print_summary},
        html::generate_html_report,
        json::render_json,
    },
};

/// Arguments of the `run` command.
/// `run` 命令的参数。
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    pub category: Option<String>,
    pub verbose: bool,
    pub json: bool,
    pub binary: Option<String>,
    pub project_root: PathBuf,
    pub config: Option<PathBuf>,
    pub tests_dir: Option<PathBuf>,
    pub jobs: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub html: Option<PathBuf>,
    pub lang: Option<String>,
}

/// Applies command-line overrides on top of the file configuration.
/// 在文件配置之上应用命令行覆盖。
fn merge_overrides(mut config: HarnessConfig, args: &RunArgs) -> HarnessConfig {
    if let Some(lang) = &args.lang {
        config.language = Some(lang.clone());
    }
    if let Some(tests_dir) = &args.tests_dir {
        config.tests_dir = tests_dir.clone();
    }
    if let Some(binary) = &args.binary {
        config.binary = Some(binary.clone());
    }
    if let Some(jobs) = args.jobs {
        config.jobs = jobs;
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config.timeout_secs = timeout_secs;
    }
    config
}

/// Executes the run command with the provided arguments.
///
/// # Returns
/// `Ok(true)` when every case passed, `Ok(false)` when at least one failed.
///
/// # Errors
/// Configuration, discovery and document errors abort the run.
///
/// 使用提供的参数执行 run 命令。所有用例通过时返回 `Ok(true)`，至少一个失败时返回 `Ok(false)`。
/// 配置、发现和文档错误会中止运行。
pub async fn execute(args: RunArgs) -> Result<bool> {
    let project_root = absolute_path(&args.project_root)?;
    let config = merge_overrides(
        HarnessConfig::load(&project_root, args.config.as_deref())?,
        &args,
    );

    let locale = crate::resolve_locale(config.language.as_deref());
    rust_i18n::set_locale(&locale);

    if config.timeout_secs == 0 {
        bail!("{}", t!("run.invalid_timeout"));
    }

    let binary = locate_binary(&project_root, config.binary.as_deref(), &config.binary_name)?;
    let tests_dir = config.tests_dir_in(&project_root);
    let plan = planner::plan_run(&tests_dir, args.category.as_deref())?;

    if !args.json {
        println!(
            "{}",
            t!("run.using_binary", path = binary.display()).cyan()
        );
        println!(
            "{}",
            t!(
                "run.categories_found",
                count = plan.spec_files.len(),
                path = tests_dir.display()
            )
            .cyan()
        );
    }

    let invoker = ProcessInvoker::new(binary, &project_root)
        .with_timeout(Duration::from_secs(config.timeout_secs));
    let options = RunOptions {
        verbose: args.verbose && !args.json,
        jobs: config.jobs,
    };

    let summary = aggregator::run(&invoker, &plan.spec_files, &options).await?;

    if args.json {
        println!("{}", render_json(&summary)?);
    } else {
        print_summary(&summary);
        print_failure_details(&summary);
    }

    if let Some(html_path) = &args.html {
        generate_html_report(&summary, html_path, &locale)?;
        if !args.json {
            println!(
                "{}",
                t!("run.html_written", path = html_path.display()).green()
            );
        }
    }

    Ok(summary.is_success())
}
