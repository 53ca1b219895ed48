use clap::Parser;

use quantity_converter_toolbox::{app, config, i18n};

/// 물리량/단위 변환 CLI.
#[derive(Parser)]
#[command(name = "quantity-converter", version, about)]
struct Cli {
    /// UI 언어 (ko, en, auto)
    #[arg(short = 'L', long = "lang", default_value = "auto")]
    lang: String,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    app::run(&mut cfg, &tr)?;
    Ok(())
}
