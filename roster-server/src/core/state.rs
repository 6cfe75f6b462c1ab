use std::sync::Arc;

use anyhow::Context;

use crate::core::Config;
use crate::store::EmployeeStore;

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是服务的核心数据结构，使用 Arc 实现浅拷贝，
/// 每个请求处理器拿到的都是同一份存储。
///
/// # 字段
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<EmployeeStore> | 员工记录存储 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 员工记录存储 (Arc 共享所有权)
    pub store: Arc<EmployeeStore>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 打开员工数据文件；文件不存在时创建空集合
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let data_file = config.data_file();
        let store = EmployeeStore::open(&data_file).await.with_context(|| {
            format!("failed to open employee store at {}", data_file.display())
        })?;

        tracing::info!(
            "Employee store ready: {} ({} records)",
            data_file.display(),
            store.len().await
        );

        Ok(Self {
            config: config.clone(),
            store: Arc::new(store),
        })
    }
}
