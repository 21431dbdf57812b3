use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion::{self, extract_abbreviation, list_display_units};
use crate::format;
use crate::quantity::CategoryKind;

/// `convert` 하위 명령 입력.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub category: String,
    pub value: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub decimals: usize,
    pub strict: bool,
}

/// 범주 목록을 출력한다.
pub fn print_categories() {
    for kind in CategoryKind::ALL {
        println!("{kind}");
    }
}

/// 범주의 단위 표시 목록을 출력한다.
pub fn print_units(category: &str) {
    for unit in list_display_units(category) {
        println!("{unit}");
    }
}

/// 요청을 변환해 결과 한 줄을 만든다.
pub fn run_convert(req: &ConvertRequest) -> Result<String, AppError> {
    let value = format::parse_input(&req.value)?;
    let (default_from, default_to) = format::default_selection(&req.category);
    let from = req.from.clone().unwrap_or(default_from);
    let to = req.to.clone().unwrap_or(default_to);
    let result = if req.strict {
        conversion::try_convert(&req.category, value, &from, &to)?
    } else {
        conversion::convert(&req.category, value, &from, &to)
    };
    Ok(format::format_conversion(value, &from, result, &to, req.decimals))
}

/// 표준 입출력으로 대화형 메뉴를 실행한다.
pub fn interactive(cfg: &Config) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    session.run(cfg)
}

/// 메뉴 입출력 세션. 입력이 끝나면(EOF) 종료한다.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 메인 루프를 실행한다.
    pub fn run(&mut self, cfg: &Config) -> Result<(), AppError> {
        let preset = cfg
            .default_category
            .as_deref()
            .and_then(CategoryKind::from_name);
        while let Some(kind) = self.main_menu(preset)? {
            if !self.convert_once(kind, cfg.decimal_places)? {
                break;
            }
        }
        writeln!(self.output, "Bye.")?;
        Ok(())
    }

    fn main_menu(
        &mut self,
        preset: Option<CategoryKind>,
    ) -> Result<Option<CategoryKind>, AppError> {
        writeln!(self.output, "\n=== What would you like to convert? ===")?;
        for (i, kind) in CategoryKind::ALL.iter().enumerate() {
            writeln!(self.output, "{:>2}) {kind}", i + 1)?;
        }
        writeln!(self.output, " 0) Exit")?;
        let prompt = match preset {
            Some(kind) => format!("Select category [Enter = {kind}]: "),
            None => "Select category: ".to_string(),
        };
        loop {
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            let sel = line.trim();
            if sel.is_empty() {
                if let Some(kind) = preset {
                    return Ok(Some(kind));
                }
            } else if sel == "0" {
                return Ok(None);
            } else if let Some(kind) = parse_choice(sel, CategoryKind::ALL.len())
                .map(|i| CategoryKind::ALL[i])
                .or_else(|| CategoryKind::from_name(sel))
            {
                return Ok(Some(kind));
            }
            writeln!(self.output, "Invalid selection, try again.")?;
        }
    }

    /// 한 번의 변환을 처리한다. EOF이면 `false`.
    fn convert_once(&mut self, kind: CategoryKind, decimals: usize) -> Result<bool, AppError> {
        let category = kind.name();
        let units = list_display_units(category);
        writeln!(self.output, "\n-- {category} --")?;
        for (i, unit) in units.iter().enumerate() {
            writeln!(self.output, "{:>2}) {unit}", i + 1)?;
        }
        let last = units.len().saturating_sub(1);
        let Some(from) = self.pick_unit("From", &units, 0)? else {
            return Ok(false);
        };
        let Some(to) = self.pick_unit("To", &units, last)? else {
            return Ok(false);
        };
        let value = loop {
            let prompt = format!("Value in {}: ", extract_abbreviation(&from));
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(false);
            };
            match format::parse_input(&line) {
                Ok(v) => break v,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        };
        let result = conversion::convert(category, value, &from, &to);
        writeln!(
            self.output,
            "{}",
            format::format_conversion(value, &from, result, &to, decimals)
        )?;
        Ok(true)
    }

    fn pick_unit(
        &mut self,
        label: &str,
        units: &[String],
        default: usize,
    ) -> Result<Option<String>, AppError> {
        let prompt = format!("{label} unit [Enter = {}]: ", default + 1);
        loop {
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            let sel = line.trim();
            let idx = if sel.is_empty() {
                Some(default)
            } else {
                parse_choice(sel, units.len())
            };
            match idx.and_then(|i| units.get(i)) {
                Some(unit) => return Ok(Some(unit.clone())),
                None => writeln!(self.output, "Invalid selection, try again.")?,
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }
}

/// 1부터 시작하는 메뉴 번호를 인덱스로 바꾼다.
fn parse_choice(sel: &str, len: usize) -> Option<usize> {
    match sel.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str, cfg: &Config) -> String {
        let mut session = Session::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        session.run(cfg).expect("session");
        String::from_utf8(session.into_output()).expect("utf8")
    }

    #[test]
    fn converts_with_default_units() {
        // Length: Meters -> Miles by default
        let out = run_session("7\n\n\n1609.34\n0\n", &Config::default());
        assert!(out.contains("1609.34 m = 1.00 mi"), "{out}");
        assert!(out.ends_with("Bye.\n"));
    }

    #[test]
    fn invalid_number_reprompts() {
        let out = run_session("7\n5\n4\nabc\n5\n", &Config::default());
        assert!(out.contains("Please enter a valid number"), "{out}");
        assert!(out.contains("5.0 mi = 8.05 km"), "{out}");
    }

    #[test]
    fn preset_category_and_decimals_from_config() {
        let cfg = Config {
            decimal_places: 1,
            default_category: Some("Temperature".into()),
            ..Config::default()
        };
        let out = run_session("\n1\n2\n100\n0\n", &cfg);
        assert!(out.contains("100.0 °C = 212.0 °F"), "{out}");
    }

    #[test]
    fn category_by_name_and_bad_selection() {
        let out = run_session("99\nData\n4\n3\n1\n", &Config::default());
        assert!(out.contains("Invalid selection"), "{out}");
        assert!(out.contains("1.0 GB = 1024.00 MB"), "{out}");
    }

    #[test]
    fn convert_request_defaults_and_strict() {
        let req = ConvertRequest {
            category: "Length".into(),
            value: "5".into(),
            from: Some("mi".into()),
            to: Some("km".into()),
            decimals: 4,
            strict: true,
        };
        assert_eq!(run_convert(&req).expect("convert"), "5.0 mi = 8.0467 km");

        let lenient = ConvertRequest {
            from: Some("xx".into()),
            strict: false,
            ..req.clone()
        };
        assert_eq!(run_convert(&lenient).expect("convert"), "5.0 xx = 5.0000 km");

        let strict = ConvertRequest {
            from: Some("xx".into()),
            ..req
        };
        assert!(matches!(run_convert(&strict), Err(AppError::Conversion(_))));
    }
}
