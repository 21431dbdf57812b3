//! 로그 구독자 설정. 설정 파일을 읽기 전에 설치하고, 읽은 뒤 필터를 바꾼다.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// 설정 로드 전에 쓰는 필터.
pub const BOOTSTRAP_LEVEL: &str = "warn";

/// 설치된 필터를 바꾸는 핸들.
pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogHandle {
    /// 설정의 로그 수준을 적용한다. `RUST_LOG`가 있으면 그대로 둔다.
    pub fn apply_level(&self, level: &str) {
        if self.from_env {
            return;
        }
        match EnvFilter::try_new(level) {
            Ok(filter) => {
                if let Err(err) = self.handle.reload(filter) {
                    tracing::warn!(%err, "failed to apply log level");
                }
            }
            Err(err) => tracing::warn!(level, %err, "invalid log level in config"),
        }
    }
}

/// 필터 레이어와 핸들을 만든다. `RUST_LOG`가 없거나 잘못되면 `warn`으로 시작한다.
pub fn filter_layer() -> (reload::Layer<EnvFilter, Registry>, LogHandle) {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(BOOTSTRAP_LEVEL), false),
    };
    let (layer, handle) = reload::Layer::new(filter);
    (layer, LogHandle { handle, from_env })
}

/// 전역 구독자를 stderr로 설치한다.
pub fn init() -> LogHandle {
    let (filter, handle) = filter_layer();
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}
