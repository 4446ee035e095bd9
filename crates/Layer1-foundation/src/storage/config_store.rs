//! 계산 설정 파일 (`fibcalc.toml`) 위치와 읽기/쓰기
//!
//! 한 저장소는 파일 하나를 가리킵니다. 글로벌과 프로젝트 위치는 생성자로 고릅니다.

use crate::config::{ComputeConfig, ComputeConfigFile, COMPUTE_CONFIG_FILE};
use crate::{Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 글로벌 설정 디렉토리 이름 (`<config_dir>/fibcalc/`)
pub const CONFIG_DIR_NAME: &str = "fibcalc";

/// 프로젝트 설정 디렉토리 이름 (`<root>/.fibcalc/`)
pub const PROJECT_DIR_NAME: &str = ".fibcalc";

/// `fibcalc.toml` 하나에 대한 저장소
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// `dir/fibcalc.toml`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(COMPUTE_CONFIG_FILE),
        }
    }

    /// 사용자 설정 디렉토리 아래 (`dirs::config_dir`)
    pub fn global() -> Result<Self> {
        dirs::config_dir()
            .map(|dir| Self::in_dir(dir.join(CONFIG_DIR_NAME)))
            .ok_or_else(|| Error::Config("no user config directory on this platform".to_string()))
    }

    /// `root/.fibcalc/fibcalc.toml`
    pub fn project(root: impl AsRef<Path>) -> Self {
        Self::in_dir(root.as_ref().join(PROJECT_DIR_NAME))
    }

    pub fn current_project() -> Result<Self> {
        Ok(Self::project(std::env::current_dir()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 파일에 적힌 필드만 읽음. 파일이 없으면 `None`
    pub fn read(&self) -> Result<Option<ComputeConfigFile>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        ComputeConfigFile::parse(&content)
            .map(Some)
            .map_err(|e| Error::Config(format!("{}: {}", self.path.display(), e)))
    }

    /// 전체 설정을 기록 (상위 디렉토리는 필요하면 생성)
    pub fn write(&self, config: &ComputeConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, config.to_toml_string()?)?;
        tracing::debug!(path = %self.path.display(), "wrote compute config");
        Ok(())
    }
}
