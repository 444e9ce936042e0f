use crate::adapters::content::TalksSource;
use crate::core::auto_advance::{AutoAdvanceConfig, DEFAULT_INTERVAL, DEFAULT_TRANSITION_DELAY};
use crate::core::navbar::DEFAULT_SCROLL_THRESHOLD;
use crate::domain::model::StartPolicy;
use crate::domain::period::Period;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_PHOTO_DIR: &str = "photos";
pub const HERO_IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub gallery: GalleryConfig,
    pub auto_advance: Option<AutoAdvanceSection>,
    pub hero: Option<HeroConfig>,
    pub navbar: Option<NavbarConfig>,
    pub talks: Option<TalksConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Directory holding photos.json and the talks files.
    pub data_dir: String,
    pub photo_dir: Option<String>,
    /// Defaults to the earliest month with a photo.
    pub start: Option<Period>,
    /// Defaults to the current month.
    pub end: Option<Period>,
    pub start_policy: Option<StartPolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoAdvanceSection {
    pub enabled: Option<bool>,
    pub interval_ms: Option<u64>,
    pub transition_delay_ms: Option<u64>,
    pub reset_on_manual: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroConfig {
    pub images: Vec<String>,
    pub interval_ms: Option<u64>,
    pub transition_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavbarConfig {
    pub scroll_threshold: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalksConfig {
    pub source: Option<TalksSource>,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            SiteError::ConfigValidationError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("site.name", &self.site.name)?;
        validate_path("gallery.data_dir", &self.gallery.data_dir)?;
        if let Some(photo_dir) = &self.gallery.photo_dir {
            validate_path("gallery.photo_dir", photo_dir)?;
        }

        if let (Some(start), Some(end)) = (self.gallery.start, self.gallery.end) {
            if start > end {
                return Err(SiteError::ConfigValidationError {
                    field: "gallery.start".to_string(),
                    message: format!("{} is after gallery.end {}", start, end),
                });
            }
        }

        self.auto_advance_config().validate()?;

        if let Some(hero) = &self.hero {
            if hero.images.is_empty() {
                return Err(SiteError::InvalidConfigValueError {
                    field: "hero.images".to_string(),
                    value: "[]".to_string(),
                    reason: "Hero section needs at least one image".to_string(),
                });
            }
            validate_file_extensions("hero.images", &hero.images, &HERO_IMAGE_EXTENSIONS)?;
            self.hero_auto_advance_config().validate()?;
        }

        validate_range(
            "navbar.scroll_threshold",
            self.navbar_threshold(),
            0.0,
            100_000.0,
        )?;

        Ok(())
    }

    pub fn photo_dir(&self) -> &str {
        self.gallery
            .photo_dir
            .as_deref()
            .unwrap_or(DEFAULT_PHOTO_DIR)
    }

    pub fn start_policy(&self) -> StartPolicy {
        self.gallery.start_policy.unwrap_or_default()
    }

    pub fn gallery_end(&self) -> Period {
        self.gallery.end.unwrap_or_else(Period::current)
    }

    pub fn auto_advance_enabled(&self) -> bool {
        self.auto_advance
            .as_ref()
            .and_then(|a| a.enabled)
            .unwrap_or(true)
    }

    pub fn auto_advance_config(&self) -> AutoAdvanceConfig {
        let section = self.auto_advance.as_ref();
        AutoAdvanceConfig {
            interval: section
                .and_then(|a| a.interval_ms)
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_INTERVAL),
            transition_delay: section
                .and_then(|a| a.transition_delay_ms)
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_TRANSITION_DELAY),
            reset_on_manual: section.and_then(|a| a.reset_on_manual).unwrap_or(false),
        }
    }

    pub fn hero_images(&self) -> &[String] {
        self.hero.as_ref().map(|h| h.images.as_slice()).unwrap_or(&[])
    }

    /// Hero rotation falls back to the gallery timing for anything unset.
    pub fn hero_auto_advance_config(&self) -> AutoAdvanceConfig {
        let base = self.auto_advance_config();
        let Some(hero) = &self.hero else {
            return base;
        };
        AutoAdvanceConfig {
            interval: hero
                .interval_ms
                .map(Duration::from_millis)
                .unwrap_or(base.interval),
            transition_delay: hero
                .transition_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(base.transition_delay),
            reset_on_manual: base.reset_on_manual,
        }
    }

    pub fn navbar_threshold(&self) -> f64 {
        self.navbar
            .as_ref()
            .and_then(|n| n.scroll_threshold)
            .unwrap_or(DEFAULT_SCROLL_THRESHOLD)
    }

    pub fn talks_source(&self) -> TalksSource {
        self.talks
            .as_ref()
            .and_then(|t| t.source)
            .unwrap_or_default()
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
