//! # Init Command Module / 初始化命令模块
//!
//! Scaffolds a benchmark project: a `Harness.toml` configuration and a sample
//! category document in the tests directory. The interactive wizard asks for
//! the interpreter name, the tests directory and the timeout; the
//! non-interactive mode writes the defaults.
//!
//! 搭建基准测试项目：`Harness.toml` 配置以及测试目录中的示例类别文档。
//! 交互式向导会询问解释器名称、测试目录和超时时间；非交互模式直接写入默认值。

use anyhow::{Context, Result, bail};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::{CONFIG_FILE_NAME, HarnessConfig};
use crate::infra::{fs::absolute_path, t};

/// File name of the sample category written next to the configuration.
pub const SAMPLE_CATEGORY_FILE: &str = "example.json";

const SAMPLE_CATEGORY: &str = r#"{
  "category": "example",
  "tests": [
    {
      "name": "identity",
      "file": "examples/identity.goth",
      "cases": [
        { "input": [5], "expected": 5 },
        { "input": [0], "expected": 0 }
      ]
    },
    {
      "name": "sqrt",
      "file": "examples/sqrt.goth",
      "cases": [
        { "input": [2.0], "expected": 1.4142135623730951, "reltol": 1e-9 }
      ]
    }
  ]
}
"#;

/// Arguments of the `init` command.
/// `init` 命令的参数。
#[derive(Debug, Clone)]
pub struct InitArgs {
    pub project_root: PathBuf,
    pub non_interactive: bool,
    pub force: bool,
    pub language: String,
}

/// Executes the init command.
///
/// # Errors
/// Fails when the configuration already exists and overwriting was not
/// allowed, or when a file cannot be written.
///
/// 执行 init 命令。当配置已存在且不允许覆盖，或文件无法写入时失败。
pub fn execute(args: InitArgs) -> Result<()> {
    let project_root = absolute_path(&args.project_root)?;
    let config_path = project_root.join(CONFIG_FILE_NAME);
    let theme = ColorfulTheme::default();

    if !args.non_interactive {
        println!("\n{}", t!("init.welcome").cyan().bold());
        println!("{}", t!("init.description"));
    }

    if config_path.exists() && !args.force {
        if args.non_interactive {
            bail!("{}", t!("init.file_exists", path = config_path.display()));
        }
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init.overwrite_prompt", path = config_path.display()))
            .default(false)
            .interact()
            .with_context(|| t!("init.confirmation_failed").to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted").yellow());
            return Ok(());
        }
    }

    let mut config = HarnessConfig {
        language: Some(args.language.clone()),
        ..HarnessConfig::default()
    };

    if !args.non_interactive {
        config.binary_name = Input::with_theme(&theme)
            .with_prompt(t!("init.binary_name_prompt"))
            .default(config.binary_name)
            .interact_text()
            .with_context(|| t!("init.confirmation_failed").to_string())?;
        let tests_dir: String = Input::with_theme(&theme)
            .with_prompt(t!("init.tests_dir_prompt"))
            .default(config.tests_dir.display().to_string())
            .interact_text()
            .with_context(|| t!("init.confirmation_failed").to_string())?;
        config.tests_dir = PathBuf::from(tests_dir);
        config.timeout_secs = Input::with_theme(&theme)
            .with_prompt(t!("init.timeout_prompt"))
            .default(config.timeout_secs)
            .validate_with(|secs: &u64| {
                if *secs > 0 {
                    Ok(())
                } else {
                    Err(t!("run.invalid_timeout").to_string())
                }
            })
            .interact_text()
            .with_context(|| t!("init.confirmation_failed").to_string())?;
    }

    write_config(&config_path, &config)?;
    write_sample_category(&config.tests_dir_in(&project_root), args.force)?;

    println!("{}", t!("init.usage_hint"));
    Ok(())
}

fn write_config(path: &Path, config: &HarnessConfig) -> Result<()> {
    let toml_string = config
        .to_toml_string()
        .with_context(|| t!("init.serialize_failed").to_string())?;

    fs::write(path, toml_string)
        .with_context(|| t!("init.write_failed", path = path.display()).to_string())?;

    println!(
        "{} {}",
        "✔".green(),
        t!("init.created", path = path.display()).bold()
    );
    Ok(())
}

/// Writes the sample category unless one is already there.
fn write_sample_category(tests_dir: &Path, force: bool) -> Result<()> {
    let path = tests_dir.join(SAMPLE_CATEGORY_FILE);
    if path.exists() && !force {
        println!("{}", t!("init.sample_kept", path = path.display()).yellow());
        return Ok(());
    }

    fs::create_dir_all(tests_dir).with_context(|| {
        t!("init.create_dir_failed", path = tests_dir.display()).to_string()
    })?;
    fs::write(&path, SAMPLE_CATEGORY)
        .with_context(|| t!("init.write_failed", path = path.display()).to_string())?;

    println!(
        "{} {}",
        "✔".green(),
        t!("init.created", path = path.display()).bold()
    );
    Ok(())
}
