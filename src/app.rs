use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::Config;
use crate::conversion;
use crate::format;
use crate::ui_cli;

// 명령행 인자
#[derive(Debug, Parser)]
#[command(name = "convertly", version, about = "Unit conversion across common categories")]
pub struct Cli {
    /// Config file path (default: ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available categories
    Categories,
    /// List the units of a category
    Units { category: String },
    /// Convert a value between two units of a category
    Convert {
        category: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Source unit, as an abbreviation or "Name (abbr)" (default: first unit)
        #[arg(long)]
        from: Option<String>,
        /// Target unit, as an abbreviation or "Name (abbr)" (default: last unit)
        #[arg(long)]
        to: Option<String>,
        /// Decimal places (default: from config)
        #[arg(long)]
        decimals: Option<usize>,
        /// Fail on unknown categories or units instead of echoing the input
        #[arg(long)]
        strict: bool,
    },
    /// Menu-driven conversion (default)
    Interactive,
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// 단위 변환 오류
    #[error("conversion error: {0}")]
    Conversion(#[from] conversion::ConversionError),
    /// 입력값 오류
    #[error("{0}")]
    Input(#[from] format::InputError),
}

/// 명령을 실행한다. 하위 명령이 없으면 대화형 모드로 들어간다.
pub fn run(command: Option<Command>, config: &Config) -> Result<(), AppError> {
    match command.unwrap_or(Command::Interactive) {
        Command::Categories => ui_cli::print_categories(),
        Command::Units { category } => ui_cli::print_units(&category),
        Command::Convert {
            category,
            value,
            from,
            to,
            decimals,
            strict,
        } => {
            let request = ui_cli::ConvertRequest {
                category,
                value,
                from,
                to,
                decimals: decimals.unwrap_or(config.decimal_places),
                strict,
            };
            println!("{}", ui_cli::run_convert(&request)?);
        }
        Command::Interactive => ui_cli::interactive(config)?,
    }
    Ok(())
}
