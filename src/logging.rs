// ==========================================
// 光纤入户排程系统 - 引擎日志
// ==========================================
// 引擎本身只发事件, 不装 subscriber:
//   debug: 户数回退估算、楼栋编号降级
//   warn:  配置值无效时退回默认值
// init:      宿主应用未自带 subscriber 时调用
// init_test: 测试内查看引擎 debug 事件
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 安装引擎日志 subscriber
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=fiber_planning_engine=trace
///
/// 已安装全局 subscriber 时静默跳过, 宿主应用可自行初始化
///
/// # 示例
/// ```no_run
/// use fiber_planning_engine::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .try_init();
}

/// 测试用 subscriber: debug 级别, 输出交给测试框架捕获
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
