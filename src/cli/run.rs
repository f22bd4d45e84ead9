//! Action dispatcher.
//!
//! Resolves the run context once, then executes the requested actions in
//! command-line order. The first error aborts the remaining actions.

use std::{fs, io::Write, path::Path};

use anyhow::Result;

use super::{
    args::{Action, Arguments},
    context::RunContext,
    prompt::Prompt,
    report,
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};
use crate::core::{add_item, change_key, decode_characters, remove_item, upgrade};

pub fn run<P: Prompt, W: Write>(
    args: &Arguments,
    working_dir: &Path,
    prompt: &mut P,
    out: &mut W,
) -> Result<()> {
    let ctx = RunContext::new(args, working_dir)?;

    for action in args.actions() {
        run_action(action, &ctx, prompt, out)?;
    }

    Ok(())
}

fn run_action<P: Prompt, W: Write>(
    action: Action,
    ctx: &RunContext,
    prompt: &mut P,
    out: &mut W,
) -> Result<()> {
    match action {
        Action::Add => {
            let message = prompt.ask("Enter your message: ")?;
            let added = add_item(&ctx.files, &message)?;
            report::print_added(&added, ctx.verbose, out)?;
        }
        Action::Remove => {
            let key = prompt.ask("Enter your key (lowerCamelCase): ")?;
            let result = remove_item(&ctx.files, &key)?;
            report::print_removed(&key, &result, ctx.verbose, out)?;
        }
        Action::ChangeKey => {
            let old_key = prompt.ask("Enter key: ")?;
            let new_key = prompt.ask("Enter new key: ")?;
            let result = change_key(&ctx.files, &old_key, &new_key)?;
            report::print_renamed(&old_key, &new_key, &result, ctx.verbose, out)?;
        }
        Action::Decode => {
            let result = decode_characters(&ctx.files)?;
            report::print_decoded(&result, ctx.verbose, out)?;
        }
        Action::Upgrade => {
            let result = upgrade(&ctx.layout)?;
            report::print_upgraded(&result, ctx.verbose, out)?;
        }
        Action::Init => init(ctx, out)?,
    }
    Ok(())
}

fn init<W: Write>(ctx: &RunContext, out: &mut W) -> Result<()> {
    let config_path = ctx.working_dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        report::print_config_exists(&config_path, out)?;
        return Ok(());
    }

    fs::write(&config_path, default_config_json()?)?;
    report::print_config_created(&config_path, out)?;
    Ok(())
}
