use std::path::Path;

use owb_composition_engine::RulesDictionary;

use crate::config::{RuleOrigin, RulesConfig};
use crate::error::{CompResult, CompositionError};
use crate::rule::cache::RuleCacheManager;
use crate::rule::loader::rule_processor::{RawRuleSources, RuleProcessor};

/// 规则加载器
/// 加载顺序：新鲜缓存 → 源文件解析合并 → 写回缓存（失败仅告警）
#[derive(Debug, Default)]
pub struct RuleLoader {
    rule_processor: RuleProcessor,
}

impl RuleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&self, config: &RulesConfig) -> CompResult<RulesDictionary> {
        if let Some(dict) = self.try_load_cache(config) {
            return Ok(dict);
        }

        let sources = RawRuleSources {
            index: match &config.origin {
                RuleOrigin::LocalFile(path) => read_source(path)?,
                RuleOrigin::Inline(json) => json.as_bytes().to_vec(),
            },
            supplemental: config.supplemental.as_deref().map(read_source).transpose()?,
            synonyms: config.synonyms.as_deref().map(read_source).transpose()?,
        };
        self.finish(config, &sources)
    }

    #[cfg(feature = "async-io")]
    pub async fn load_async(&self, config: &RulesConfig) -> CompResult<RulesDictionary> {
        if let Some(dict) = self.try_load_cache(config) {
            return Ok(dict);
        }

        let index = match &config.origin {
            RuleOrigin::LocalFile(path) => read_source_async(path).await?,
            RuleOrigin::Inline(json) => json.as_bytes().to_vec(),
        };
        let supplemental = match config.supplemental.as_deref() {
            Some(path) => Some(read_source_async(path).await?),
            None => None,
        };
        let synonyms = match config.synonyms.as_deref() {
            Some(path) => Some(read_source_async(path).await?),
            None => None,
        };
        let sources = RawRuleSources {
            index,
            supplemental,
            synonyms,
        };
        self.finish(config, &sources)
    }

    fn try_load_cache(&self, config: &RulesConfig) -> Option<RulesDictionary> {
        if !config.options.use_cache || !RuleCacheManager::is_fresh(config) {
            return None;
        }
        match RuleCacheManager::load_from_cache(config) {
            Ok(dict) => {
                log::info!(
                    "命中规则缓存 [{}] | 条目数: {}",
                    config.get_cache_file_path().display(),
                    dict.len()
                );
                Some(dict)
            }
            Err(e) => {
                log::warn!("规则缓存不可用，重新解析源文件: {}", e);
                None
            }
        }
    }

    fn finish(&self, config: &RulesConfig, sources: &RawRuleSources) -> CompResult<RulesDictionary> {
        let dict = self.rule_processor.build_dictionary(sources)?;
        if config.options.use_cache {
            if let Err(e) = RuleCacheManager::save_to_cache(config, &dict) {
                log::warn!("规则缓存写入失败: {}", e);
            }
        }
        Ok(dict)
    }
}

fn read_source(path: &Path) -> CompResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        CompositionError::RuleLoadError(format!("本地路径[{}]读取失败: {}", path.display(), e))
    })
}

#[cfg(feature = "async-io")]
async fn read_source_async(path: &Path) -> CompResult<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|e| {
        CompositionError::RuleLoadError(format!("本地路径[{}]读取失败: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CustomConfigBuilder;
    use std::fs;

    fn write_sources(dir: &Path) {
        fs::write(
            dir.join("rules-map.json"),
            r#"{ "High Elf Prince": { "compositionNote": "Max 1 per 1000 points" }, "Gromril Armour": {} }"#,
        )
        .unwrap();
        fs::write(
            dir.join("additional.json"),
            r#"{ "Gromril Armour": { "compositionNote": "Dwarfs only" } }"#,
        )
        .unwrap();
        fs::write(dir.join("synonyms.json"), r#"{ "Gromril Armor": "Gromril Armour" }"#).unwrap();
    }

    #[test]
    fn test_load_merges_all_sources_and_writes_cache() {
        let dir = tempfile::tempdir().unwrap();
        write_sources(dir.path());
        let config = CustomConfigBuilder::new()
            .rules_index(dir.path().join("rules-map.json"))
            .supplemental(dir.path().join("additional.json"))
            .synonyms(dir.path().join("synonyms.json"))
            .cache_dir(dir.path().join("cache"))
            .build();

        let dict = RuleLoader::new().load(&config).unwrap();
        assert_eq!(dict.note_for("gromril armor"), Some("Dwarfs only"));
        assert_eq!(dict.note_for("high elf prince"), Some("Max 1 per 1000 points"));
        assert!(config.get_cache_file_path().exists());

        // 第二次加载命中缓存，结果一致
        let cached = RuleLoader::new().load(&config).unwrap();
        assert_eq!(cached, dict);
    }

    #[test]
    fn test_load_without_cache() {
        let dir = tempfile::tempdir().unwrap();
        write_sources(dir.path());
        let config = CustomConfigBuilder::new()
            .rules_index(dir.path().join("rules-map.json"))
            .cache_dir(dir.path().join("cache"))
            .use_cache(false)
            .build();

        let dict = RuleLoader::new().load(&config).unwrap();
        assert_eq!(dict.note_for("gromril armour"), None);
        assert!(!config.get_cache_file_path().exists());
    }

    #[test]
    fn test_missing_index_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = RulesConfig::local_file(dir.path().join("nope.json"));
        assert!(matches!(
            RuleLoader::new().load(&config),
            Err(CompositionError::RuleLoadError(_))
        ));
    }

    #[test]
    fn test_inline_origin() {
        let config = RulesConfig::inline(r#"{ "Griffon": { "compositionNote": "Counts as Rare choice" } }"#);
        let dict = RuleLoader::new().load(&config).unwrap();
        assert_eq!(dict.note_for("griffon"), Some("Counts as Rare choice"));
    }

    #[cfg(feature = "async-io")]
    #[tokio::test]
    async fn test_load_async() {
        let dir = tempfile::tempdir().unwrap();
        write_sources(dir.path());
        let config = CustomConfigBuilder::new()
            .rules_index(dir.path().join("rules-map.json"))
            .supplemental(dir.path().join("additional.json"))
            .use_cache(false)
            .build();

        let dict = RuleLoader::new().load_async(&config).await.unwrap();
        assert_eq!(dict.note_for("gromril armour"), Some("Dwarfs only"));
    }
}
