//! 工具函数模块
//!
//! 此模块包含了项目中使用的各种工具函数：
//! - 对象键处理工具（取最后一段、百分号编码）

pub mod path;
