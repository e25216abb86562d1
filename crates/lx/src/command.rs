use clap::{Parser, Subcommand};
use lexis_cli::Color;
use lexis_core::ClientSettings;

use crate::{auth::LoginArgs, render::Output};

pub const SERVER_ENV: &str = "LEXIS_SERVER_URL";

#[derive(Parser, Clone)]
#[command(name = "lx", version, about = "Lexis CLI", long_about = None)]
pub struct Cli {
    // Optional as a workaround for https://github.com/clap-rs/clap/issues/3572
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short = 'o', long, global = true, value_enum, default_value_t = Output::JSON)]
    pub output: Output,

    #[arg(short = 'c', long, global = true, value_enum, default_value_t = Color::Auto)]
    pub color: Color,

    #[arg(
        short = 's',
        long,
        global = true,
        env = SERVER_ENV,
        help = "Base URL of the Lexis server, e.g. https://lexis.example.com"
    )]
    pub server: Option<String>,

    #[arg(
        short = 'q',
        long,
        global = true,
        help = "Don't return anything to stdout."
    )]
    pub quiet: bool,
}

impl Cli {
    pub fn client_settings(&self) -> ClientSettings {
        match &self.server {
            Some(server) => ClientSettings::with_base_url(server.clone()),
            None => ClientSettings::default(),
        }
    }
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    #[command(long_about = "Log into a user account.")]
    Login(LoginArgs),

    #[command(long_about = "Generate shell completions.")]
    Completion {
        #[arg(long, help = "The shell to generate completions for.")]
        shell: Option<clap_complete::Shell>,
    },
}
