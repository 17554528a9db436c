use std::sync::Arc;

use anyhow::{Context, anyhow};
use aula_config::LoginConfig;
use aula_models::Role;
use dialoguer::{Input, Password, Select};

use crate::cli::console::ConsoleSurface;
use crate::modules::login::LoginModal;
use crate::modules::login::modal::{HEADING, SUBTITLE, SUPPORT_BODY, SUPPORT_TITLE};

/// Walk one login card in the terminal and wait for its navigation.
pub async fn run_login(role: Option<Role>, config: LoginConfig) -> anyhow::Result<()> {
    let surface = Arc::new(ConsoleSurface);
    let mut modal = LoginModal::new(config, surface.clone(), surface);
    modal.open();

    println!("{}", HEADING);
    println!("{}\n", SUBTITLE);

    let role = match role {
        Some(role) => role,
        None => prompt_role(&modal)?,
    };

    let form = modal.form_mut(role);
    let profile = form.profile();
    println!("{}: {}", profile.title, profile.description);

    for spec in profile.fields {
        let value = if spec.secret {
            Password::new()
                .with_prompt(spec.label)
                .allow_empty_password(true)
                .interact()?
        } else {
            Input::<String>::new()
                .with_prompt(format!("{} ({})", spec.label, spec.placeholder))
                .allow_empty(true)
                .interact_text()?
        };
        form.update_field(spec.field, value);
    }

    let result = form.submit();
    match result {
        Ok(pending) => {
            pending
                .dispatched()
                .await
                .context("Navigation task failed")?;
            modal.close();
            Ok(())
        }
        Err(err) => {
            println!("\n{}\n{}", SUPPORT_TITLE, SUPPORT_BODY);
            Err(anyhow!(err).context(format!("Login as {} rejected", role)))
        }
    }
}

fn prompt_role(modal: &LoginModal) -> anyhow::Result<Role> {
    let cards = modal.cards();
    let labels: Vec<String> = cards
        .iter()
        .map(|card| format!("{} - {}", card.profile().title, card.profile().description))
        .collect();

    let index = Select::new()
        .with_prompt("Tipo de usuario")
        .items(&labels)
        .default(0)
        .interact()?;

    cards
        .get(index)
        .map(|card| card.role())
        .ok_or_else(|| anyhow!("No login card at position {}", index))
}
