//! Interactive collection of publish and upload parameters.
//!
//! Prompts are answered on stderr; the answers become a `PublishPlan` or an
//! `UploadPlan`. Defaults come from the remembered preferences.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use dialoguer::{Input, Select};

use lambda_layer_maker::domain::plans::default_object_key;
use lambda_layer_maker::{
    LayerRuntime, LayerSource, PersistedPreferences, PublishError, PublishPlan, UploadPlan,
};

use crate::ui::context::UiContext;
use crate::ui::theme::PromptTheme;

pub const DEFAULT_REGION: &str = "us-west-2";

const SOURCE_CHOICES: [&str; 2] = ["Local file", "S3 bucket"];

/// Fail early when prompts cannot be answered.
pub fn ensure_interactive(ui: &UiContext) -> Result<()> {
    if !ui.can_prompt() {
        bail!("this command is interactive and needs a terminal on stdin");
    }
    Ok(())
}

pub fn collect_publish_plan(
    prefs: &PersistedPreferences,
    archives: &[PathBuf],
    archive_dir: &Path,
    theme: &PromptTheme,
) -> Result<PublishPlan> {
    let source_index = Select::with_theme(theme)
        .with_prompt("Layer source")
        .items(&SOURCE_CHOICES)
        .default(0)
        .interact()?;
    let from_local = source_index == 0;

    if from_local && archives.is_empty() {
        return Err(PublishError::NoArchives {
            dir: archive_dir.to_path_buf(),
        }
        .into());
    }

    let region = text(theme, "AWS region", Some(default_region(prefs)), true)?;
    let layer_name = text(theme, "Layer name", prefs.layer_name.clone(), true)?;
    let description = text(theme, "Description", prefs.description.clone(), false)?;

    let runtimes = LayerRuntime::compatible_runtimes();
    let runtime_index = Select::with_theme(theme)
        .with_prompt("Compatible runtime")
        .items(&runtimes)
        .default(default_runtime_index(&runtimes, prefs.runtime.as_deref()))
        .interact()?;
    let compatible_runtime = runtimes[runtime_index].to_string();

    let source = if from_local {
        LayerSource::LocalFile(select_archive(
            theme,
            archives,
            prefs.layer_file_path.as_deref(),
        )?)
    } else {
        LayerSource::S3Object {
            bucket: text(theme, "S3 bucket", prefs.bucket.clone(), true)?,
            key: text(theme, "S3 key", prefs.key.clone(), true)?,
        }
    };

    Ok(PublishPlan {
        region,
        layer_name,
        description,
        compatible_runtime,
        source,
    })
}

pub fn collect_upload_plan(
    prefs: &PersistedPreferences,
    archives: &[PathBuf],
    theme: &PromptTheme,
) -> Result<UploadPlan> {
    let region = text(theme, "AWS region", Some(default_region(prefs)), true)?;
    let bucket = text(theme, "S3 bucket", prefs.bucket.clone(), true)?;
    let archive = select_archive(theme, archives, None)?;
    let key = text(theme, "S3 key", Some(default_object_key(&archive)), true)?;

    Ok(UploadPlan {
        region,
        bucket,
        key,
        archive,
    })
}

fn select_archive(
    theme: &PromptTheme,
    archives: &[PathBuf],
    remembered: Option<&str>,
) -> Result<PathBuf> {
    let labels = archive_labels(archives);
    let index = Select::with_theme(theme)
        .with_prompt("Layer archive")
        .items(&labels)
        .default(default_archive_index(archives, remembered))
        .interact()?;
    Ok(archives[index].clone())
}

fn text(
    theme: &PromptTheme,
    prompt: &str,
    default: Option<String>,
    required: bool,
) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(!required);
    if let Some(default) = default.filter(|d| !d.is_empty()) {
        input = input.default(default);
    }
    if required {
        input = input.validate_with(|value: &String| require_non_empty(value));
    }
    Ok(input.interact_text()?.trim().to_string())
}

pub fn default_region(prefs: &PersistedPreferences) -> String {
    prefs
        .region
        .clone()
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_REGION.to_string())
}

/// Remembered archive if it is still listed, otherwise the newest.
pub fn default_archive_index(archives: &[PathBuf], remembered: Option<&str>) -> usize {
    remembered
        .and_then(|path| archives.iter().position(|a| a == Path::new(path)))
        .unwrap_or_else(|| archives.len().saturating_sub(1))
}

pub fn default_runtime_index(runtimes: &[&str], remembered: Option<&str>) -> usize {
    remembered
        .and_then(|r| runtimes.iter().position(|candidate| *candidate == r))
        .unwrap_or(0)
}

pub fn archive_labels(archives: &[PathBuf]) -> Vec<String> {
    archives.iter().map(|a| default_object_key(a)).collect()
}

pub fn require_non_empty(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err("a value is required")
    } else {
        Ok(())
    }
}
