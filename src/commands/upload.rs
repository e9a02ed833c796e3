//! Upload command handler
//!
//! Stages a built archive in S3, typically because it is too large to
//! publish directly.

use std::path::Path;

use anyhow::Result;

use lambda_layer_maker::domain::ports::PreferencesStore;
use lambda_layer_maker::infrastructure::{AwsCredentials, JsonPreferencesStore};
use lambda_layer_maker::presentation::create_upload_use_case;
use lambda_layer_maker::{ArtifactInventory, PublishError};

use super::prompts::{collect_upload_plan, ensure_interactive};
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::UploadEvent;
use crate::ui::theme::PromptTheme;
use crate::ui::views::upload::{render_upload_header, render_upload_result};

pub fn cmd_upload(output_dir: &Path, ui: &UiContext) -> Result<()> {
    let credentials = AwsCredentials::from_env()?;

    let inventory = ArtifactInventory::in_output_dir(output_dir)?;
    let archives = inventory.list();
    if archives.is_empty() {
        return Err(PublishError::NoArchives {
            dir: inventory.dir().to_path_buf(),
        }
        .into());
    }

    ensure_interactive(ui)?;

    let store = JsonPreferencesStore::at_default_location();
    let prefs = store.load();
    let theme = PromptTheme::new(ui.unicode);
    let plan = collect_upload_plan(&prefs, &archives, &theme)?;

    if !ui.json {
        print!("{}", render_upload_header(&plan, ui.color, ui.unicode));
    }

    let use_case = create_upload_use_case(&plan.region, &credentials, store)?;
    let outcome = use_case.execute(&plan)?;

    if ui.json {
        emit_event(&UploadEvent::from(&outcome))?;
    } else {
        print!("{}", render_upload_result(&outcome, ui.color, ui.unicode));
    }
    Ok(())
}
