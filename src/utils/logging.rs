use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::EnvConfig;

/// 日志配置
pub struct LoggingConfig;

impl LoggingConfig {
    /// 初始化日志系统
    ///
    /// 支持通过环境变量配置：
    /// - RUST_LOG: 完整的过滤规则，优先使用
    /// - CDNRULE_LOG: 未设置 RUST_LOG 时 cdnrule 的日志级别（默认 info）
    /// - CDNRULE_DEBUG: 启用详细调试输出
    ///
    /// 使用示例：
    /// ```no_run
    /// use cdnrule::utils::LoggingConfig;
    ///
    /// fn main() {
    ///     LoggingConfig::init();
    ///     // 现在可以使用 tracing 宏
    /// }
    /// ```
    pub fn init() {
        let is_debug = EnvConfig::is_debug_mode();

        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => {
                EnvFilter::new(Self::fallback_directives(is_debug, &EnvConfig::get_log_level()))
            }
        };

        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(is_debug)
            .with_file(is_debug)
            .with_line_number(is_debug)
            .with_thread_ids(is_debug);

        if tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .is_err()
        {
            return;
        }

        if is_debug {
            tracing::debug!("debug logging enabled");
        }
    }

    /// 未设置 RUST_LOG 时使用的过滤规则
    pub fn fallback_directives(is_debug: bool, level: &str) -> String {
        let level = if is_debug { "debug" } else { level };
        format!("cdnrule={level},warn")
    }
}
