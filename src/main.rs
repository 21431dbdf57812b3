use clap::Parser;
use convertly::app::{self, Cli};
use convertly::{config, logging};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    // 설정 로드 중의 이벤트도 남도록 구독자를 먼저 설치한다.
    let log = logging::init();
    let cfg = match &cli.config {
        Some(path) => config::load_or_create(path)?,
        None => config::load_or_default()?,
    };
    log.apply_level(&cfg.log_level);
    app::run(cli.command, &cfg)?;
    Ok(())
}
