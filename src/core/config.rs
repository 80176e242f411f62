//! # Harness Configuration Module / 测试框架配置模块
//!
//! Optional `Harness.toml` settings at the project root. Every key has a
//! default, and command-line flags override whatever the file says.
//!
//! 项目根目录下可选的 `Harness.toml` 设置。每个键都有默认值，命令行参数会覆盖文件中的值。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Default configuration file name, looked up in the project root.
/// 默认配置文件名，在项目根目录中查找。
pub const CONFIG_FILE_NAME: &str = "Harness.toml";

/// Harness settings loaded from a TOML file.
/// 从 TOML 文件加载的测试框架设置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HarnessConfig {
    /// The language for the harness's messages (e.g., "en", "zh-CN").
    /// The system locale is used if not specified.
    ///
    /// 测试框架消息的语言（例如 "en", "zh-CN"）。如果未指定，则使用系统语言。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Directory of category documents, relative to the project root.
    /// 类别文档所在目录，相对于项目根目录。
    #[serde(default = "default_tests_dir")]
    pub tests_dir: PathBuf,

    /// Executable name used when searching for the interpreter.
    /// 搜索解释器时使用的可执行文件名。
    #[serde(default = "default_binary_name")]
    pub binary_name: String,

    /// Explicit interpreter path. `~` and environment variables are expanded.
    /// 显式指定的解释器路径，会展开 `~` 和环境变量。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<String>,

    /// Wall-clock limit for one invocation, in seconds.
    /// 单次调用的挂钟时间限制（秒）。
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Cases of a category run concurrently; 1 is sequential, 0 is one per CPU.
    /// 一个类别中并发运行的用例数；1 为顺序执行，0 为每个 CPU 一个。
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

fn default_tests_dir() -> PathBuf {
    PathBuf::from("benchmark/tests")
}

fn default_binary_name() -> String {
    "goth".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_jobs() -> usize {
    1
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            language: None,
            tests_dir: default_tests_dir(),
            binary_name: default_binary_name(),
            binary: None,
            timeout_secs: default_timeout_secs(),
            jobs: default_jobs(),
        }
    }
}

impl HarnessConfig {
    /// Loads the configuration for a project.
    ///
    /// With `explicit` set, that file must exist. Otherwise `Harness.toml` in
    /// the project root is used when present, and defaults when absent.
    ///
    /// 加载项目配置。如果指定了 `explicit`，该文件必须存在；
    /// 否则在项目根目录存在 `Harness.toml` 时使用它，不存在时使用默认值。
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => project_root.join(path),
            None => {
                let path = project_root.join(CONFIG_FILE_NAME);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path).with_context(|| {
            t!("config.read_failed", path = path.display()).to_string()
        })?;
        Self::from_toml_str(&content)
            .with_context(|| t!("config.parse_failed", path = path.display()).to_string())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// The tests directory anchored at the project root.
    pub fn tests_dir_in(&self, project_root: &Path) -> PathBuf {
        if self.tests_dir.is_absolute() {
            self.tests_dir.clone()
        } else {
            project_root.join(&self.tests_dir)
        }
    }
}
