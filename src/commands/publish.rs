//! Publish command handler

use std::path::Path;

use anyhow::Result;

use lambda_layer_maker::domain::ports::PreferencesStore;
use lambda_layer_maker::infrastructure::{AwsCredentials, JsonPreferencesStore};
use lambda_layer_maker::presentation::create_publish_use_case;
use lambda_layer_maker::ArtifactInventory;

use super::prompts::{collect_publish_plan, ensure_interactive};
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::PublishEvent;
use crate::ui::theme::PromptTheme;
use crate::ui::views::publish::{render_publish_header, render_publish_result};

pub fn cmd_publish(output_dir: &Path, ui: &UiContext) -> Result<()> {
    let credentials = AwsCredentials::from_env()?;
    ensure_interactive(ui)?;

    let store = JsonPreferencesStore::at_default_location();
    let prefs = store.load();
    let inventory = ArtifactInventory::in_output_dir(output_dir)?;
    let archives = inventory.list();

    let theme = PromptTheme::new(ui.unicode);
    let plan = collect_publish_plan(&prefs, &archives, inventory.dir(), &theme)?;

    if !ui.json {
        print!("{}", render_publish_header(&plan, ui.color, ui.unicode));
    }

    let use_case = create_publish_use_case(&plan.region, &credentials, store)?;
    let outcome = use_case.execute(&plan)?;

    if ui.json {
        emit_event(&PublishEvent::from(&outcome))?;
    } else {
        print!("{}", render_publish_result(&outcome, ui.color, ui.unicode));
    }
    Ok(())
}
