use crate::domain::{Session, SiteSettings};
use crate::ports::ContentRepo;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use directories::ProjectDirs;
use outpost_core::{CompanyDirectory, ProjectCatalog};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const QUALIFIER: &str = "com";
const ORG: &str = "outpost";
const APP: &str = "site";

const SETTINGS_FILE: &str = "settings.json";
const SESSION_FILE: &str = "session.json";

/// Settings and session storage under the platform config dir, or under an
/// explicit root.
#[derive(Debug, Clone, Default)]
pub struct FilePersistence {
    root: Option<PathBuf>,
}

impl FilePersistence {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn config_dir(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => Ok(ProjectDirs::from(QUALIFIER, ORG, APP)
                .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
                .config_dir()
                .to_path_buf()),
        }
    }

    /// Like `config_dir`, creating the directory for writes.
    fn writable_config_dir(&self) -> Result<PathBuf> {
        let dir = self.config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        Ok(dir)
    }

    pub fn load_settings(&self) -> Result<SiteSettings> {
        let path = self.config_dir()?.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(SiteSettings::default());
        }
        let content = fs::read_to_string(&path).context("Failed to read settings")?;
        let settings: SiteSettings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save_settings(&self, settings: &SiteSettings) -> Result<()> {
        let path = self.writable_config_dir()?.join(SETTINGS_FILE);
        let json = serde_json::to_string_pretty(settings)?;
        atomic_write(&path, json.as_bytes()).context("Failed to write settings")?;
        Ok(())
    }

    pub fn load_session(&self) -> Result<Session> {
        let path = self.config_dir()?.join(SESSION_FILE);
        if !path.exists() {
            return Ok(Session::default());
        }
        let content = fs::read_to_string(&path).context("Failed to read session")?;
        let session: Session = serde_json::from_str(&content)?;
        Ok(session)
    }

    pub fn save_session(&self, session: &Session) -> Result<()> {
        let path = self.writable_config_dir()?.join(SESSION_FILE);
        let json = serde_json::to_string_pretty(session)?;
        atomic_write(&path, json.as_bytes()).context("Failed to write session")?;
        Ok(())
    }

    pub fn clear_session(&self) -> Result<()> {
        let path = self.config_dir()?.join(SESSION_FILE);
        if path.exists() {
            fs::remove_file(&path).context("Failed to remove session")?;
        }
        Ok(())
    }
}

/// Writes through a temp file in the destination directory, then renames it
/// into place so readers never see a partial file.
fn atomic_write(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("{} has no parent directory", path.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    #[cfg(unix)]
    {
        if let Ok(d) = fs::File::open(dir) {
            let _ = d.sync_all();
        }
    }
    Ok(())
}

const COMPANY_FILE: &str = "company.json";
const PROJECTS_FILE: &str = "projects.json";

/// Company and project content read from `company.json` / `projects.json`.
#[derive(Debug, Clone)]
pub struct JsonContentRepo {
    root: Utf8PathBuf,
}

impl JsonContentRepo {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn read(&self, file: &str) -> Result<String> {
        let path = self.root.join(file);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))
    }
}

impl ContentRepo for JsonContentRepo {
    fn company(&self) -> Result<CompanyDirectory> {
        let content = self.read(COMPANY_FILE)?;
        serde_json::from_str(&content).with_context(|| format!("Invalid {COMPANY_FILE}"))
    }

    fn projects(&self) -> Result<ProjectCatalog> {
        let content = self.read(PROJECTS_FILE)?;
        serde_json::from_str(&content).with_context(|| format!("Invalid {PROJECTS_FILE}"))
    }
}
