use std::env;

pub const DEBUG_ENV: &str = "CDNRULE_DEBUG";
pub const LOG_LEVEL_ENV: &str = "CDNRULE_LOG";
const DEFAULT_LOG_LEVEL: &str = "info";

/// 环境变量配置管理
pub struct EnvConfig;

impl EnvConfig {
    /// 获取可选的环境变量，空白值视为未设置
    pub fn get_env_optional(key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.trim().is_empty())
    }

    /// 检查是否启用调试模式
    pub fn is_debug_mode() -> bool {
        env::var(DEBUG_ENV).is_ok()
    }

    /// 获取本 crate 的日志级别，未设置 CDNRULE_LOG 时为 info
    pub fn get_log_level() -> String {
        Self::get_env_optional(LOG_LEVEL_ENV).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }
}
