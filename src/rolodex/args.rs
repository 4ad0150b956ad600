use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", version)]
#[command(about = "Personal address book", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Address book file (defaults to the configured data file)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search contacts by name or phone number
    #[command(alias = "s")]
    Search {
        /// Text to look for
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// List contacts page by page
    #[command(alias = "ls")]
    List {
        /// Contacts per page
        #[arg(short, long)]
        page_size: Option<usize>,
    },

    /// Show one contact
    #[command(alias = "v")]
    Show { name: String },

    /// Add a contact, or add phones to an existing one
    #[command(alias = "n")]
    Add {
        name: String,

        /// Phone number (10 digits), repeatable
        #[arg(short, long = "phone")]
        phones: Vec<String>,

        /// Birthday as YYYY-MM-DD
        #[arg(short, long)]
        birthday: Option<String>,
    },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete { name: String },

    /// Manage a contact's phone numbers
    Phone {
        #[command(subcommand)]
        action: PhoneAction,
    },

    /// Set or clear a contact's birthday
    Birthday {
        name: String,

        /// YYYY-MM-DD; omit to clear
        date: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PhoneAction {
    /// Add a phone number
    Add { name: String, number: String },

    /// Remove a phone number
    #[command(alias = "rm")]
    Remove { name: String, number: String },

    /// Replace a phone number
    Edit {
        name: String,
        old: String,
        new: String,
    },
}
