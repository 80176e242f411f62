//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the harness,
//! including process invocation, binary discovery, and i18n support.
//!
//! 此模块为测试框架提供基础设施服务，
//! 包括进程调用、二进制文件发现和国际化支持。

pub mod command;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
