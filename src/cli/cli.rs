use clap::Parser;

/// Health Probe - 进程健康检查服务
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// 监听端口
    #[arg(short, long, env = "PORT", default_value_t = 9999)]
    pub port: u16,

    /// 监听地址
    #[arg(short = 'a', long, env = "ADDRESS", default_value = "0.0.0.0")]
    pub address: String,

    /// 健康检查路由
    #[arg(long, env = "HEALTH_PATH", default_value = "/health")]
    pub health_path: String,

    /// 部署环境 (production / staging / ...)
    #[arg(short, long, env = "APP_ENV")]
    pub environment: Option<String>,
}

impl CommandArgs {
    /// 路由总是以 `/` 开头
    pub fn route_path(&self) -> String {
        if self.health_path.starts_with('/') {
            self.health_path.clone()
        } else {
            format!("/{}", self.health_path)
        }
    }
}
