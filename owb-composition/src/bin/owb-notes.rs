//! owb-notes - 军表编制说明命令行工具
//!
//! 运行命令：
//! cargo run -p owb-composition --features cli -- --rules rules-map.json summary my-list.json

use clap::{ArgAction, Parser, Subcommand};
use env_logger::{Builder, Env, Target};
use owb_composition::{ArmyList, CustomConfigBuilder, NoteCollector, NoteFormat};
use serde_json::Value;
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "owb-notes", version, about = "Collect composition notes from army lists")]
struct Cli {
    /// 规则索引文件（rules-map 导出的 JSON）
    #[arg(long)]
    rules: PathBuf,
    /// 补充规则表
    #[arg(long)]
    supplemental: Option<PathBuf>,
    /// 同义词表
    #[arg(long)]
    synonyms: Option<PathBuf>,
    /// 合并结果缓存目录
    #[arg(long)]
    cache_dir: Option<PathBuf>,
    /// 禁用缓存
    #[arg(long)]
    no_cache: bool,
    /// 输出格式
    #[arg(long, value_enum, default_value_t = NoteFormat::Text)]
    format: NoteFormat,
    /// 日志详细程度（-v info，-vv debug）
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 单个单位记录的说明
    Unit { file: PathBuf },
    /// 军表内每个单位的说明
    Army { file: PathBuf },
    /// 一份或多份军表的汇总（字典序）
    Summary {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // ========== 1. 日志系统初始化 ==========
    Builder::from_env(Env::default().default_filter_or(log_filter(cli.verbose)))
        .target(Target::Stderr)
        .init();

    // ========== 2. 规则配置 + 收集器 ==========
    let mut builder = CustomConfigBuilder::new()
        .rules_index(&cli.rules)
        .use_cache(!cli.no_cache);
    if let Some(path) = &cli.supplemental {
        builder = builder.supplemental(path);
    }
    if let Some(path) = &cli.synonyms {
        builder = builder.synonyms(path);
    }
    if let Some(dir) = &cli.cache_dir {
        builder = builder.cache_dir(dir);
    }
    let collector = NoteCollector::from_config(&builder.build())?;

    // ========== 3. 执行命令 ==========
    match &cli.command {
        Command::Unit { file } => {
            let unit: Value = serde_json::from_slice(&std::fs::read(file)?)?;
            println!("{}", cli.format.render(&collector.unit_notes(&unit))?);
        }
        Command::Army { file } => {
            let list = read_list(file)?;
            let army = collector.army_notes(&list);
            if cli.format == NoteFormat::Json {
                println!("{}", serde_json::to_string_pretty(&army)?);
            } else {
                for (key, unit) in army.iter() {
                    println!("{}\t{}", key, cli.format.render(&unit.notes)?);
                }
            }
        }
        Command::Summary { files } => {
            let lists = files
                .iter()
                .map(|file| read_list(file))
                .collect::<Result<Vec<_>, _>>()?;
            println!("{}", cli.format.render(&collector.lists_summary(&lists))?);
        }
    }

    Ok(())
}

/// -v 次数 → 默认日志过滤级别
fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn read_list(path: &Path) -> Result<ArmyList, Box<dyn Error>> {
    let list = ArmyList::from_json_slice(&std::fs::read(path)?)?;
    log::info!("Loaded army list [{}] | units: {}", list.label(), list.unit_count());
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(log_filter(0), "warn");
        assert_eq!(log_filter(1), "info");
        assert_eq!(log_filter(2), "debug");
        assert_eq!(log_filter(5), "debug");
    }

    #[test]
    fn test_parse_summary_args() {
        let cli = Cli::try_parse_from(["owb-notes", "--rules", "rules-map.json", "-vv", "summary", "a.json", "b.json"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, NoteFormat::Text);
        assert!(matches!(cli.command, Command::Summary { ref files } if files.len() == 2));
    }
}
