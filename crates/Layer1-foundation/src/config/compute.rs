//! Compute Config - 계산 설정
//!
//! 글로벌(`<config_dir>/fibcalc/fibcalc.toml`)과 프로젝트(`.fibcalc/fibcalc.toml`)
//! 설정을 병합해 사용합니다.
//!
//! ```toml
//! negative = "reject"
//! overflow = "error"
//! max_index = 10000
//!
//! [trace]
//! enabled = true
//! priority = "high"
//! ```

use crate::storage::ConfigStore;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

use super::{NegativePolicy, OverflowPolicy, TraceConfig, TracePriority};

/// 설정 파일명
pub const COMPUTE_CONFIG_FILE: &str = "fibcalc.toml";

/// 계산 설정
///
/// 파일에 적힌 필드만 덮어쓸 수 있도록 병합 전 단계에서는 [`ComputeConfigFile`]을 씁니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ComputeConfig {
    /// 음수 인덱스 정책
    #[serde(default)]
    pub negative: NegativePolicy,

    /// 오버플로 정책
    #[serde(default)]
    pub overflow: OverflowPolicy,

    /// 허용하는 최대 인덱스 (None = 무제한)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_index: Option<u64>,

    /// 반복 단위 추적
    #[serde(default)]
    pub trace: TraceConfig,
}

/// 설정 파일 표현 (모든 필드 Optional)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ComputeConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative: Option<NegativePolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<OverflowPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_index: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<TraceConfig>,
}

impl ComputeConfigFile {
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

impl ComputeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load / Save
    // ========================================================================

    /// 글로벌 + 프로젝트 병합 로드 (현재 디렉토리 기준)
    pub fn load() -> Result<Self> {
        // 글로벌 디렉토리가 없는 플랫폼이면 프로젝트 설정만 사용
        let global = ConfigStore::global().ok();
        let project = ConfigStore::current_project()?;
        Self::load_layered(global.as_ref(), &project)
    }

    /// 기본값 위에 글로벌, 그 위에 프로젝트 파일을 차례로 병합
    ///
    /// 두 파일 모두에 있는 필드는 프로젝트 값이 이깁니다.
    pub fn load_layered(global: Option<&ConfigStore>, project: &ConfigStore) -> Result<Self> {
        let mut config = Self::new();
        for store in global.into_iter().chain(std::iter::once(project)) {
            if let Some(file) = store.read()? {
                tracing::trace!(path = %store.path().display(), "merging compute config");
                config.merge(file);
            }
        }

        tracing::debug!(
            negative = ?config.negative,
            overflow = %config.overflow,
            max_index = ?config.max_index,
            trace = config.trace.enabled,
            "loaded compute config"
        );

        Ok(config)
    }

    /// 저장소 하나에서만 로드 (파일이 없으면 기본값)
    pub fn load_from(store: &ConfigStore) -> Result<Self> {
        Self::load_layered(None, store)
    }

    pub fn save_to(&self, store: &ConfigStore) -> Result<()> {
        store.write(self)
    }

    /// TOML 문자열 파싱
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file = ComputeConfigFile::parse(content)
            .map_err(|e| Error::Config(format!("invalid compute config: {}", e)))?;
        let mut config = Self::new();
        config.merge(file);
        Ok(config)
    }

    /// TOML 문자열 직렬화
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    // ========================================================================
    // Merge
    // ========================================================================

    /// 파일에 적힌 값으로 덮어쓰기 (other가 우선)
    pub fn merge(&mut self, other: ComputeConfigFile) {
        if let Some(negative) = other.negative {
            self.negative = negative;
        }
        if let Some(overflow) = other.overflow {
            self.overflow = overflow;
        }
        if other.max_index.is_some() {
            self.max_index = other.max_index;
        }
        if let Some(trace) = other.trace {
            self.trace = trace;
        }
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn negative_policy(mut self, policy: NegativePolicy) -> Self {
        self.negative = policy;
        self
    }

    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }

    pub fn max_index(mut self, max: u64) -> Self {
        self.max_index = Some(max);
        self
    }

    pub fn with_trace(mut self, priority: TracePriority) -> Self {
        self.trace = TraceConfig::active(priority);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_config_default() {
        let config = ComputeConfig::new();
        assert_eq!(config.negative, NegativePolicy::Reject);
        assert_eq!(config.overflow, OverflowPolicy::Error);
        assert!(config.max_index.is_none());
        assert!(!config.trace.enabled);
    }

    #[test]
    fn test_compute_config_builder() {
        let config = ComputeConfig::new()
            .negative_policy(NegativePolicy::PassThrough)
            .overflow_policy(OverflowPolicy::Saturating)
            .max_index(500)
            .with_trace(TracePriority::High);

        assert_eq!(config.negative, NegativePolicy::PassThrough);
        assert_eq!(config.overflow, OverflowPolicy::Saturating);
        assert_eq!(config.max_index, Some(500));
        assert_eq!(config.trace, TraceConfig::active(TracePriority::High));
    }

    #[test]
    fn test_from_toml_str() {
        let config = ComputeConfig::from_toml_str(
            r#"
            overflow = "wrapping"
            max_index = 1000

            [trace]
            enabled = true
            priority = "high"
            "#,
        )
        .unwrap();

        assert_eq!(config.negative, NegativePolicy::Reject);
        assert_eq!(config.overflow, OverflowPolicy::Wrapping);
        assert_eq!(config.max_index, Some(1000));
        assert!(config.trace.enabled);
        assert_eq!(config.trace.priority, TracePriority::High);
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_policy() {
        let result = ComputeConfig::from_toml_str(r#"overflow = "bigint""#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_config_merge() {
        let mut base = ComputeConfig::new().max_index(100);

        let overlay = ComputeConfigFile {
            overflow: Some(OverflowPolicy::Wrapping),
            ..Default::default()
        };
        base.merge(overlay);

        assert_eq!(base.overflow, OverflowPolicy::Wrapping);
        // 파일에 없는 값은 유지
        assert_eq!(base.max_index, Some(100));
    }

    #[test]
    fn test_save_and_load_from_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::project(dir.path());

        let config = ComputeConfig::new()
            .negative_policy(NegativePolicy::PassThrough)
            .with_trace(TracePriority::Low);
        config.save_to(&store).unwrap();

        let loaded = ComputeConfig::load_from(&store).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_layered_project_wins() {
        let global_dir = tempfile::tempdir().unwrap();
        let project_dir = tempfile::tempdir().unwrap();
        let global = ConfigStore::in_dir(global_dir.path());
        let project = ConfigStore::project(project_dir.path());

        std::fs::write(global.path(), "overflow = \"wrapping\"\nmax_index = 500\n").unwrap();
        std::fs::create_dir_all(project.path().parent().unwrap()).unwrap();
        std::fs::write(project.path(), "overflow = \"saturating\"\n").unwrap();

        let config = ComputeConfig::load_layered(Some(&global), &project).unwrap();

        // 둘 다 있으면 프로젝트, 글로벌에만 있으면 글로벌 값 유지
        assert_eq!(config.overflow, OverflowPolicy::Saturating);
        assert_eq!(config.max_index, Some(500));
        assert_eq!(config.negative, NegativePolicy::Reject);
    }

    #[test]
    fn test_load_layered_without_global() {
        let project_dir = tempfile::tempdir().unwrap();
        let project = ConfigStore::project(project_dir.path());
        ComputeConfig::new().max_index(7).save_to(&project).unwrap();

        let config = ComputeConfig::load_layered(None, &project).unwrap();
        assert_eq!(config.max_index, Some(7));
        assert_eq!(config.overflow, OverflowPolicy::Error);
    }

    #[test]
    fn test_load_layered_propagates_broken_global() {
        let global_dir = tempfile::tempdir().unwrap();
        let project_dir = tempfile::tempdir().unwrap();
        let global = ConfigStore::in_dir(global_dir.path());
        std::fs::write(global.path(), "overflow = 3").unwrap();

        let result =
            ComputeConfig::load_layered(Some(&global), &ConfigStore::project(project_dir.path()));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_toml_round_trip_text() {
        let config = ComputeConfig::new().overflow_policy(OverflowPolicy::Saturating);
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("overflow = \"saturating\""));
        assert!(!text.contains("max_index"));
    }
}
