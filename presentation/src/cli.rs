use crate::render;
use anyhow::{anyhow, Context};
use application::admin_service::AdminService;
use application::chat_service::ChatService;
use clap::{Parser, Subcommand};
use colored::Colorize;
use domain::admin::Tab;
use infrastructure::config::Config;
use infrastructure::ecomet_client::EcometClient;
use shared::prompt::{ask_choice, ask_confirmation, ask_line, ask_secret, edit_text};
use shared::types::Result;
use shared::utils::preview;

const FOOTER: &str = "Powered by Gemini & eCOMET Documentation";
const LOADING: &str = "Generating answer...";

#[derive(Parser, Debug)]
#[command(name = "ecomet")]
#[command(about = "Terminal client for the eCOMET documentation assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive conversation (default)
    Chat,
    /// Ask a single question and print the answer
    Ask {
        #[arg(trailing_var_arg = true, required = true)]
        question: Vec<String>,
    },
    /// Operator console: chat logs and system prompt
    Admin,
    /// Check that the backend is up
    Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Copy,
    History,
    Say,
}

fn parse_repl_command(line: &str) -> ReplCommand {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
        ReplCommand::Exit
    } else if trimmed == "/copy" {
        ReplCommand::Copy
    } else if trimmed == "/history" {
        ReplCommand::History
    } else {
        ReplCommand::Say
    }
}

const ADMIN_MENU: [&str; 7] = [
    "Chat logs",
    "System prompt",
    "Edit prompt",
    "Update prompt",
    "Refresh logs",
    "Logout",
    "Quit",
];

pub struct CliApp {
    config: Config,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&mut self, cli: Cli) -> Result<()> {
        let client = EcometClient::new(&self.config)?;
        tracing::debug!(base_url = client.base_url(), profile = ?self.config.profile, "backend resolved");

        match cli.command.unwrap_or(Command::Chat) {
            Command::Chat => self.handle_chat(client).await,
            Command::Ask { question } => self.handle_ask(client, &question.join(" ")).await,
            Command::Admin => self.handle_admin(client).await,
            Command::Health => self.handle_health(client).await,
        }
    }

    async fn handle_chat(&self, client: EcometClient) -> Result<()> {
        let mut chat = ChatService::new(client);
        println!("{}", "eCOMET chatbot".bold());
        println!("{}", render::rule());
        println!("{}", render::transcript(chat.session().messages()));
        println!(
            "{}",
            "Type 'exit' to quit, '/copy' to copy the last answer, '/history' to reprint.".dimmed()
        );

        loop {
            let line = ask_line("Ask a question about eCOMET")?;
            match parse_repl_command(&line) {
                ReplCommand::Exit => break,
                ReplCommand::Copy => {
                    match chat.session().last_bot_reply() {
                        Some(reply) => match copy_to_clipboard(&reply.content) {
                            Ok(()) => println!("{}", "Copied last answer.".green()),
                            Err(err) => println!("{}", format!("Clipboard unavailable: {err}").red()),
                        },
                        None => println!("{}", "Nothing to copy yet.".yellow()),
                    }
                    continue;
                }
                ReplCommand::History => {
                    println!("{}", render::transcript(chat.session().messages()));
                    continue;
                }
                ReplCommand::Say => {}
            }

            let Some(pending) = chat.submit(&line) else {
                continue;
            };
            eprintln!("{}", LOADING.dimmed());
            if let Some(reply) = chat.resolve(pending).await {
                println!("\n{}\n", render::message(reply));
            }
        }

        println!("{}", FOOTER.dimmed());
        Ok(())
    }

    async fn handle_ask(&self, client: EcometClient, question: &str) -> Result<()> {
        let mut chat = ChatService::new(client);
        let reply = chat
            .send_message(question)
            .await
            .ok_or_else(|| anyhow!("nothing to ask: the question is empty"))?;
        println!("{}", reply.content);
        Ok(())
    }

    async fn handle_health(&self, client: EcometClient) -> Result<()> {
        let base_url = client.base_url().to_string();
        let chat = ChatService::new(client);
        match chat.check_health().await {
            Ok(()) => {
                println!("{}", format!("Backend at {base_url} is healthy.").green());
                Ok(())
            }
            Err(err) => Err(anyhow!(err)).with_context(|| format!("backend at {base_url} is not healthy")),
        }
    }

    async fn handle_admin(&self, client: EcometClient) -> Result<()> {
        let mut admin = AdminService::new(client);
        println!("{}", "eCOMET Admin".bold());

        loop {
            if !admin.console().is_authenticated() {
                let password = ask_secret("Enter Admin Password")?;
                admin.set_password(&password);
                for notice in admin.login().await {
                    println!("{}", notice.red().bold());
                }
                if !admin.console().is_authenticated() {
                    if ask_confirmation("Try again?", true)? {
                        continue;
                    }
                    return Ok(());
                }
                println!("{}", render::active_tab(admin.console()));
            }

            let choice = ask_choice("Admin", &ADMIN_MENU)?;
            match ADMIN_MENU[choice] {
                "Chat logs" => {
                    admin.select_tab(Tab::Logs);
                    println!("{}", render::active_tab(admin.console()));
                }
                "System prompt" => {
                    admin.select_tab(Tab::Prompt);
                    println!("{}", render::active_tab(admin.console()));
                }
                "Edit prompt" => {
                    admin.select_tab(Tab::Prompt);
                    let current = admin.console().prompt().to_string();
                    match edit_text(&current)? {
                        Some(edited) => {
                            admin.edit_prompt(&edited);
                            println!(
                                "{} {}",
                                "Edited (not saved):".yellow(),
                                preview(&edited, 60)
                            );
                        }
                        None => println!("{}", "Edit discarded.".yellow()),
                    }
                }
                "Update prompt" => {
                    admin.select_tab(Tab::Prompt);
                    admin.update_prompt().await;
                    println!("{}", render::active_tab(admin.console()));
                }
                "Refresh logs" => {
                    admin.select_tab(Tab::Logs);
                    admin.refresh_logs().await;
                    println!("{}", render::active_tab(admin.console()));
                }
                "Logout" => {
                    if ask_confirmation("Log out?", false)? {
                        admin.logout().await;
                    }
                }
                _ => return Ok(()),
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
