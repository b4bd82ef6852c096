//! 规则数据配置管理

use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::{Path, PathBuf};

/// 规则索引来源
#[derive(Debug, Clone, Hash)]
pub enum RuleOrigin {
    LocalFile(PathBuf), // 导出的规则索引文件（JSON）
    Inline(String),     // 内存中的规则索引 JSON 文本（测试/嵌入场景）
}

/// 核心规则选项
#[derive(Debug, Clone)]
pub struct RuleOptions {
    /// 是否启用合并结果缓存
    pub use_cache: bool,
    /// 缓存目录
    pub cache_dir: PathBuf,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            cache_dir: PathBuf::from(".cache/owb-composition"),
        }
    }
}

/// 完整规则配置
/// 规则字典 = 规则索引 + 补充表（覆盖/扩展） + 同义词表（别名）
#[derive(Debug, Clone)]
pub struct RulesConfig {
    pub origin: RuleOrigin,
    pub supplemental: Option<PathBuf>,
    pub synonyms: Option<PathBuf>,
    pub options: RuleOptions,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            origin: RuleOrigin::LocalFile(PathBuf::from("rules-map.json")),
            supplemental: None,
            synonyms: None,
            options: RuleOptions::default(),
        }
    }
}

impl RulesConfig {
    /// 本地规则索引文件
    pub fn local_file(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: RuleOrigin::LocalFile(path.into()),
            ..Self::default()
        }
    }

    /// 内存规则索引（不走缓存）
    pub fn inline(json: impl Into<String>) -> Self {
        Self {
            origin: RuleOrigin::Inline(json.into()),
            options: RuleOptions {
                use_cache: false,
                ..RuleOptions::default()
            },
            ..Self::default()
        }
    }

    /// 参与合并的全部本地源文件（用于缓存新鲜度判断）
    pub fn source_files(&self) -> Vec<&Path> {
        let mut files = Vec::with_capacity(3);
        if let RuleOrigin::LocalFile(path) = &self.origin {
            files.push(path.as_path());
        }
        files.extend(self.supplemental.as_deref());
        files.extend(self.synonyms.as_deref());
        files
    }

    /// 根据规则源生成缓存文件的完整路径（目录 + 文件名）
    /// 相同源组合 → 相同哈希 → 相同文件名
    pub fn get_cache_file_path(&self) -> PathBuf {
        let mut hasher = DefaultHasher::new();
        self.origin.hash(&mut hasher);
        self.supplemental.hash(&mut hasher);
        self.synonyms.hash(&mut hasher);
        let file_name = format!("rules_{:x}.json", hasher.finish());
        self.options.cache_dir.join(file_name)
    }
}

/// 自定义构建器（链式 API）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: RulesConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: RuleOrigin) -> Self {
        self.config.origin = origin;
        self
    }

    pub fn rules_index(self, path: impl Into<PathBuf>) -> Self {
        self.origin(RuleOrigin::LocalFile(path.into()))
    }

    pub fn supplemental(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.supplemental = Some(path.into());
        self
    }

    pub fn synonyms(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.synonyms = Some(path.into());
        self
    }

    pub fn use_cache(mut self, enabled: bool) -> Self {
        self.config.options.use_cache = enabled;
        self
    }

    pub fn cache_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.options.cache_dir = path.into();
        self
    }

    pub fn build(mut self) -> RulesConfig {
        // 内存源没有可比较的修改时间，不缓存
        if matches!(self.config.origin, RuleOrigin::Inline(_)) {
            self.config.options.use_cache = false;
        }
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_sources() {
        let config = CustomConfigBuilder::new()
            .rules_index("data/rules-map.json")
            .supplemental("data/additional.json")
            .synonyms("data/synonyms.json")
            .cache_dir("/tmp/owb")
            .build();

        assert_eq!(config.source_files().len(), 3);
        assert!(config.options.use_cache);
        assert!(config.get_cache_file_path().starts_with("/tmp/owb"));
    }

    #[test]
    fn test_inline_disables_cache() {
        let config = CustomConfigBuilder::new()
            .origin(RuleOrigin::Inline("{}".into()))
            .use_cache(true)
            .build();
        assert!(!config.options.use_cache);
        assert!(!RulesConfig::inline("{}").options.use_cache);
        assert!(config.source_files().is_empty());
    }

    #[test]
    fn test_cache_path_stable_per_sources() {
        let a = RulesConfig::local_file("rules-map.json");
        let b = RulesConfig::local_file("rules-map.json");
        let mut c = RulesConfig::local_file("rules-map.json");
        c.synonyms = Some(PathBuf::from("synonyms.json"));

        assert_eq!(a.get_cache_file_path(), b.get_cache_file_path());
        assert_ne!(a.get_cache_file_path(), c.get_cache_file_path());
    }
}
