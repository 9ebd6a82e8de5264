use crate::auth::JwtConfig;

/// 菜品名称唯一性范围
///
/// 历史行为是全局唯一 (两个不同门店不能使用相同菜名)，
/// 这里显式化为配置项而不是悄悄改掉。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameScope {
    /// 全库唯一 (历史默认)
    Global,
    /// 每个门店内唯一
    Store,
}

impl NameScope {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "store" => NameScope::Store,
            _ => NameScope::Global,
        }
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DATABASE_PATH | orderonus.db | SQLite 数据库路径 |
/// | ENVIRONMENT | development | 运行环境 |
/// | DISH_NAME_SCOPE | global | 菜名唯一性范围 (global \| store) |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=/data/orderonus.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SQLite 数据库文件路径
    pub database_path: String,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 菜名唯一性范围
    pub dish_name_scope: NameScope,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "orderonus.db".into()),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            dish_name_scope: NameScope::parse(
                &std::env::var("DISH_NAME_SCOPE").unwrap_or_default(),
            ),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
