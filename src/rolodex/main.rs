use clap::Parser;
use colored::*;
use rolodex::api::{CmdMessage, MessageLevel, RolodexApi};
use rolodex::config::RolodexConfig;
use rolodex::error::Result;
use rolodex::logging;
use rolodex::record::Record;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod args;
use args::{Cli, Commands, PhoneAction};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RolodexApi,
    config: RolodexConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut ctx = init_context(&cli)?;
    print_messages(&ctx.api.open_messages());

    match cli.command {
        Some(Commands::Search { query }) => handle_search(&ctx, &query.join(" ")),
        Some(Commands::List { page_size }) => handle_list(&ctx, page_size),
        Some(Commands::Show { name }) => handle_show(&ctx, &name),
        Some(Commands::Add {
            name,
            phones,
            birthday,
        }) => handle_add(&mut ctx, &name, &phones, birthday.as_deref()),
        Some(Commands::Delete { name }) => handle_delete(&mut ctx, &name),
        Some(Commands::Phone { action }) => handle_phone(&mut ctx, action),
        Some(Commands::Birthday { name, date }) => {
            handle_birthday(&mut ctx, &name, date.as_deref())
        }
        None => handle_prompt(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = RolodexConfig::load(&cwd)?;
    let data_path = match &cli.file {
        Some(file) => file.clone(),
        None => config.data_path(&cwd),
    };
    tracing::debug!(path = %data_path.display(), "opening address book");

    let api = RolodexApi::open(data_path)?;
    Ok(AppContext { api, config })
}

fn handle_prompt(ctx: &AppContext) -> Result<()> {
    print!("Enter search query: ");
    io::stdout().flush()?;

    let mut query = String::new();
    io::stdin().lock().read_line(&mut query)?;
    handle_search(ctx, query.trim_end_matches(['\r', '\n']))
}

fn handle_search(ctx: &AppContext, query: &str) -> Result<()> {
    let result = ctx.api.search(query)?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, page_size: Option<usize>) -> Result<()> {
    let page_size = page_size.unwrap_or_else(|| ctx.config.page_size());
    let result = ctx.api.list(page_size)?;
    for (i, page) in result.pages.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format!("--- Page {} ---", i + 1).yellow());
        println!("{}", page);
    }
    if result.pages.is_empty() && ctx.api.book().is_empty() {
        println!("No contacts found.");
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.show(name)?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    name: &str,
    phones: &[String],
    birthday: Option<&str>,
) -> Result<()> {
    let result = ctx.api.add_contact(name, phones, birthday)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.delete_contact(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_phone(ctx: &mut AppContext, action: PhoneAction) -> Result<()> {
    let result = match action {
        PhoneAction::Add { name, number } => ctx.api.add_phone(&name, &number)?,
        PhoneAction::Remove { name, number } => ctx.api.remove_phone(&name, &number)?,
        PhoneAction::Edit { name, old, new } => ctx.api.edit_phone(&name, &old, &new)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_birthday(ctx: &mut AppContext, name: &str, date: Option<&str>) -> Result<()> {
    let result = ctx.api.set_birthday(name, date)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("No contacts found.");
        return;
    }

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", record);
    }
}
