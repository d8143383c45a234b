// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pizzeria")]
#[command(about = "Pizzeria - browse the pizza catalogue", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web front-end
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// List all pizzas
    List {
        /// Print normalized JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one pizza
    Show {
        /// Pizza ID
        id: String,

        /// Print normalized JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
