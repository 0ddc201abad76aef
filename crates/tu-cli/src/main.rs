mod bootstrap_helpers;
mod cli;
mod render;
mod session_shell;

use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tokio::io::BufReader;
use tu_advisor::{
    search_modules, CartAddOutcome, ModuleDraft, RecommendationClient, RecommendationLog,
    SessionContext, View,
};

use crate::bootstrap_helpers::{init_tracing, load_dotenv_files};
use crate::cli::{Cli, CliCommand, RecommendArgs};
use crate::render::{
    render_cart, render_design_saved, render_footer, render_header, render_modules,
    render_recommendation_error, render_recommendation_view, render_record,
};
use crate::session_shell::{render_view, run_session_shell};

fn build_session(cli: &Cli) -> SessionContext {
    let config = cli.advisor_config();
    let recommender = RecommendationClient::new(
        config.build_generator(),
        config.model.clone(),
        Arc::new(RecommendationLog::new()),
    );
    SessionContext::new(recommender)
}

async fn run_recommend(session: &mut SessionContext, args: &RecommendArgs) -> Result<ExitCode> {
    session.navigate(View::AiRecommendation);
    let configured = session.recommender().is_configured();
    if configured && !args.json {
        println!("{}", render_recommendation_view(configured));
    }

    match session
        .submit_recommendation(&args.major, &args.interests, &args.aptitude)
        .await
    {
        Ok(record) => {
            if args.json {
                let rendered = serde_json::to_string_pretty(&record)
                    .context("failed to serialize recommendation record")?;
                println!("{rendered}");
            } else {
                println!("{}", render_record(&record));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("{}", render_recommendation_error(&error));
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run_command(cli: &Cli, session: &mut SessionContext) -> Result<ExitCode> {
    let Some(command) = cli.command.as_ref() else {
        println!("{}\n", render_header());
        println!("{}", render_view(session));
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        CliCommand::Dashboard => {
            session.navigate(View::Dashboard);
            println!("{}", render_view(session));
        }
        CliCommand::History => {
            session.navigate(View::LearningHistory);
            println!("{}", render_view(session));
        }
        CliCommand::Modules { search } => {
            session.navigate(View::ModuleExplorer);
            let modules = search_modules(search.as_deref().unwrap_or_default());
            println!("{}", render_modules(&modules));
        }
        CliCommand::Cart { add } => {
            session.navigate(View::ModuleCart);
            let mut failed = false;
            for name in add {
                match session.cart_mut().add(name) {
                    Ok(CartAddOutcome::Added) => println!("added '{name}' to the cart"),
                    Ok(CartAddOutcome::AlreadyPresent) => {
                        println!("'{name}' is already in the cart")
                    }
                    Err(error) => {
                        eprintln!("error: {error}");
                        failed = true;
                    }
                }
            }
            println!("{}", render_cart(session.cart()));
            if failed {
                return Ok(ExitCode::FAILURE);
            }
        }
        CliCommand::Design {
            name,
            description,
            subjects,
        } => {
            session.navigate(View::ModuleDesigner);
            match ModuleDraft::new(name.as_str(), description.as_str(), subjects) {
                Ok(draft) => println!("{}", render_design_saved(session.save_design(draft))),
                Err(error) => {
                    eprintln!("warning: {error}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        CliCommand::Recommend(args) => return run_recommend(session, args).await,
        CliCommand::Session => {
            println!("{}", render_header());
            let mut stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            run_session_shell(session, &mut stdin, &mut stdout)
                .await
                .context("interactive session failed")?;
            println!("{}", render_footer(&Local::now().format("%Y-%m-%d").to_string()));
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();
    load_dotenv_files();
    let cli = Cli::parse();
    let mut session = build_session(&cli);
    run_command(&cli, &mut session).await
}
