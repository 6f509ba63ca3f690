use crate::layout::MediaStore;
use crate::locale::Locale;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_TEMPLATE_DIR: &str = "templates";
const DEFAULT_SLOW_THRESHOLD_MS: u64 = 2_000;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub template_dir: PathBuf,
    /// Per-locale template overrides; relative paths resolve under `template_dir`.
    pub templates: HashMap<Locale, PathBuf>,
    pub media_root: Option<PathBuf>,
    /// Where temporary output files are created. System temp dir when unset.
    pub output_dir: Option<PathBuf>,
    /// Worksheet to fill. First sheet when unset.
    pub sheet_name: Option<String>,
    pub slow_threshold_ms: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            templates: HashMap::new(),
            media_root: None,
            output_dir: None,
            sheet_name: None,
            slow_threshold_ms: DEFAULT_SLOW_THRESHOLD_MS,
        }
    }
}

impl GeneratorConfig {
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_media_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.media_root = Some(root.into());
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            config,
            template_dir: cli_template_dir,
            media_root: cli_media_root,
            output_dir: cli_output_dir,
            sheet: cli_sheet,
            slow_threshold_ms: cli_slow_threshold_ms,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            template_dir: file_template_dir,
            templates: file_templates,
            media_root: file_media_root,
            output_dir: file_output_dir,
            sheet: file_sheet,
            slow_threshold_ms: file_slow_threshold_ms,
        } = file_config;

        let template_dir = cli_template_dir
            .or(file_template_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR));

        let sheet_name = cli_sheet
            .or(file_sheet)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(Self {
            template_dir,
            templates: file_templates.unwrap_or_default(),
            media_root: cli_media_root.or(file_media_root),
            output_dir: cli_output_dir.or(file_output_dir),
            sheet_name,
            slow_threshold_ms: cli_slow_threshold_ms
                .or(file_slow_threshold_ms)
                .unwrap_or(DEFAULT_SLOW_THRESHOLD_MS),
        })
    }

    /// Fails fast on directories that are missing or not directories.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.template_dir.is_dir(),
            "template directory {:?} does not exist or is not a directory",
            self.template_dir
        );
        if let Some(root) = self.media_root.as_ref() {
            anyhow::ensure!(root.is_dir(), "media root {:?} is not a directory", root);
        }
        if let Some(dir) = self.output_dir.as_ref() {
            anyhow::ensure!(dir.is_dir(), "output directory {:?} is not a directory", dir);
        }
        Ok(())
    }

    pub fn template_path(&self, locale: Locale) -> PathBuf {
        match self.templates.get(&locale) {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.template_dir.join(path),
            None => self.template_dir.join(locale.profile().template_file),
        }
    }

    pub fn media_store(&self) -> MediaStore {
        match self.media_root.as_ref() {
            Some(root) => MediaStore::new(root),
            None => MediaStore::unrooted(),
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "questionnaire-xlsx",
    about = "Fill candidate questionnaires into spreadsheet templates",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: CliArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a questionnaire for one candidate
    Generate {
        #[arg(long, value_name = "FILE", help = "Candidate JSON or YAML document")]
        candidate: PathBuf,

        #[arg(
            long,
            value_enum,
            help = "Template language; defaults to the candidate's communication language"
        )]
        locale: Option<Locale>,

        #[arg(long, value_name = "FILE", help = "Copy the result to this path")]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)",
        global = true
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "QUESTIONNAIRE_TEMPLATE_DIR",
        value_name = "DIR",
        help = "Directory holding the per-locale templates",
        global = true
    )]
    pub template_dir: Option<PathBuf>,

    #[arg(
        long,
        env = "QUESTIONNAIRE_MEDIA_ROOT",
        value_name = "DIR",
        help = "Root for relative photo and signature paths",
        global = true
    )]
    pub media_root: Option<PathBuf>,

    #[arg(
        long,
        env = "QUESTIONNAIRE_OUTPUT_DIR",
        value_name = "DIR",
        help = "Directory for generated temporary files",
        global = true
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(
        long,
        env = "QUESTIONNAIRE_SHEET",
        value_name = "NAME",
        help = "Worksheet to fill (first sheet by default)",
        global = true
    )]
    pub sheet: Option<String>,

    #[arg(
        long,
        env = "QUESTIONNAIRE_SLOW_MS",
        value_name = "MS",
        help = "Warn when a generation takes longer than this",
        value_parser = clap::value_parser!(u64),
        global = true
    )]
    pub slow_threshold_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    template_dir: Option<PathBuf>,
    templates: Option<HashMap<Locale, PathBuf>>,
    media_root: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    sheet: Option<String>,
    slow_threshold_ms: Option<u64>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
        other => anyhow::bail!("unsupported config extension: {other}"),
    };
    Ok(parsed)
}
