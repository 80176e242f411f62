//! # Config and Planner Unit Tests / 配置与计划单元测试
//!
//! Tests loading `Harness.toml` with defaults and overrides, and planning which
//! category documents a run covers.
//!
//! 测试加载带默认值和覆盖的 `Harness.toml`，以及规划一次运行覆盖哪些类别文档。

mod common;

use bench_runner::core::config::{CONFIG_FILE_NAME, HarnessConfig};
use bench_runner::core::planner::plan_run;
use common::Sandbox;
use std::path::{Path, PathBuf};

#[cfg(test)]
mod harness_config_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::default();
        assert_eq!(config.language, None);
        assert_eq!(config.tests_dir, PathBuf::from("benchmark/tests"));
        assert_eq!(config.binary_name, "goth");
        assert_eq!(config.binary, None);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.jobs, 1);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = HarnessConfig::from_toml_str("timeout_secs = 3\njobs = 4\n").unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.jobs, 4);
        assert_eq!(config.binary_name, "goth");
        assert_eq!(config.tests_dir, PathBuf::from("benchmark/tests"));
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = HarnessConfig {
            binary: Some("~/bin/goth".to_string()),
            language: Some("zh-CN".to_string()),
            ..HarnessConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("binary = \"~/bin/goth\""));
        assert_eq!(HarnessConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_unset_binary_is_not_written() {
        let text = HarnessConfig::default().to_toml_string().unwrap();
        assert!(!text.contains("binary ="));
        assert!(text.contains("binary_name = \"goth\""));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let sandbox = Sandbox::new();
        let config = HarnessConfig::load(sandbox.root(), None).unwrap();
        assert_eq!(config, HarnessConfig::default());
    }

    #[test]
    fn test_load_default_file() {
        let sandbox = Sandbox::new();
        sandbox.write_file(CONFIG_FILE_NAME, "binary_name = \"interp\"\ntests_dir = \"suites\"\n");

        let config = HarnessConfig::load(sandbox.root(), None).unwrap();
        assert_eq!(config.binary_name, "interp");
        assert_eq!(config.tests_dir_in(sandbox.root()), sandbox.root().join("suites"));
    }

    #[test]
    fn test_load_explicit_file_relative_to_root() {
        let sandbox = Sandbox::new();
        sandbox.write_file("conf/ci.toml", "timeout_secs = 30\n");

        let config = HarnessConfig::load(sandbox.root(), Some(Path::new("conf/ci.toml"))).unwrap();
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let sandbox = Sandbox::new();
        let err = HarnessConfig::load(sandbox.root(), Some(Path::new("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let sandbox = Sandbox::new();
        sandbox.write_file(CONFIG_FILE_NAME, "timeout_secs = \"soon\"\n");
        assert!(HarnessConfig::load(sandbox.root(), None).is_err());
    }

    #[test]
    fn test_absolute_tests_dir() {
        let config = HarnessConfig {
            tests_dir: PathBuf::from("/srv/suites"),
            ..HarnessConfig::default()
        };
        assert_eq!(config.tests_dir_in(Path::new("/work")), PathBuf::from("/srv/suites"));
    }
}

#[cfg(test)]
mod planner_tests {
    use super::*;

    const EMPTY: &str = r#"{"category": "x", "tests": []}"#;

    #[test]
    fn test_all_categories_sorted_by_file_name() {
        let sandbox = Sandbox::new();
        sandbox.write_category("strings", EMPTY);
        sandbox.write_category("basic", EMPTY);
        sandbox.write_category("numeric", EMPTY);
        sandbox.write_file("benchmark/tests/README.md", "not a category");
        std::fs::create_dir_all(sandbox.tests_dir().join("nested.json")).unwrap();

        let plan = plan_run(&sandbox.tests_dir(), None).unwrap();
        assert!(!plan.single_category);
        let names: Vec<String> = plan
            .spec_files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["basic.json", "numeric.json", "strings.json"]);
    }

    #[test]
    fn test_single_category() {
        let sandbox = Sandbox::new();
        sandbox.write_category("basic", EMPTY);
        sandbox.write_category("numeric", EMPTY);

        let plan = plan_run(&sandbox.tests_dir(), Some("numeric")).unwrap();
        assert!(plan.single_category);
        assert_eq!(plan.spec_files, [sandbox.tests_dir().join("numeric.json")]);
    }

    #[test]
    fn test_unknown_category() {
        let sandbox = Sandbox::new();
        sandbox.write_category("basic", EMPTY);

        let err = plan_run(&sandbox.tests_dir(), Some("missing")).unwrap_err();
        assert_eq!(err.to_string(), "Category 'missing' not found");
    }

    #[test]
    fn test_empty_directory() {
        let sandbox = Sandbox::new();
        let plan = plan_run(&sandbox.tests_dir(), None).unwrap();
        assert!(plan.spec_files.is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let sandbox = Sandbox::new();
        assert!(plan_run(&sandbox.root().join("absent"), None).is_err());
    }
}
