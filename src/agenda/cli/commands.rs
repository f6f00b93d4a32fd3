//! # CLI Layer
//!
//! This module is **one possible UI client** for agenda. It is the only place
//! that parses arguments, prints to the terminal and turns errors into exit
//! codes; everything else goes through [`AgendaApi`].
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::print::{print_appointment_detail, print_appointments, print_messages};
use super::setup::{Cli, Commands};
use agenda::api::{AgendaApi, AppointmentPatch, ConfigAction};
use agenda::config::ClockFormat;
use agenda::error::Result;
use agenda::init::initialize;
use agenda::logging::init_logging;
use agenda::ordering::SortKey;
use agenda::store::fs::FileStore;
use agenda::time::Period;
use chrono::NaiveDate;
use clap::Parser;

struct AppContext {
    api: AgendaApi<FileStore>,
    clock: ClockFormat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _logger = match init_logging(cli.verbose) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    let context = initialize(cli.dir.as_deref())?;
    let mut ctx = AppContext {
        api: context.api,
        clock: context.config.clock,
    };

    match cli.command {
        Some(Commands::Add {
            name,
            date,
            hour,
            minute,
            period,
        }) => handle_add(&mut ctx, &name, date, hour, minute, period),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Sort { by }) => handle_sort(&mut ctx, by),
        Some(Commands::Update {
            selector,
            name,
            date,
            hour,
            minute,
            period,
        }) => {
            let patch = AppointmentPatch {
                name,
                date,
                hour,
                minute,
                period,
            };
            handle_update(&mut ctx, &selector, patch)
        }
        Some(Commands::Delete { selector }) => handle_delete(&mut ctx, &selector),
        Some(Commands::Search { term }) => handle_search(&mut ctx, &term.join(" ")),
        Some(Commands::View { selector }) => handle_view(&ctx, &selector),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn handle_add(
    ctx: &mut AppContext,
    name: &str,
    date: NaiveDate,
    hour: u32,
    minute: u32,
    period: Period,
) -> Result<()> {
    let result = ctx
        .api
        .create_appointment(name, date, hour, minute, period)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_appointments()?;
    print_appointments(&result.listed_appointments, ctx.clock);
    print_messages(&result.messages);
    Ok(())
}

fn handle_sort(ctx: &mut AppContext, by: SortKey) -> Result<()> {
    let result = ctx.api.sort_appointments(by)?;
    print_messages(&result.messages);
    print_appointments(&result.listed_appointments, ctx.clock);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, selector: &str, patch: AppointmentPatch) -> Result<()> {
    let result = ctx.api.update_appointment_partial(selector, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let result = ctx.api.delete_appointment(selector)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, term: &str) -> Result<()> {
    let result = ctx.api.search_appointments(term)?;
    for dp in &result.listed_appointments {
        print_appointment_detail(dp, ctx.clock);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, selector: &str) -> Result<()> {
    let result = ctx.api.get_appointment(selector)?;
    for dp in &result.listed_appointments {
        print_appointment_detail(dp, ctx.clock);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    Ok(())
}
