use std::io::Write;

use anyhow::{bail, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tu_advisor::{
    designer_subjects, search_modules, validate_request_input, CartAddOutcome, ModuleDraft,
    SessionContext, UserProfile, View,
};

use crate::render::{
    render_cart, render_dashboard, render_design_saved, render_history, render_modules,
    render_profile, render_recommendation_error, render_recommendation_log,
    render_recommendation_view, render_record,
};

pub(crate) const SHELL_HELP: &str = "commands:
  view <dashboard|history|modules|cart|design|recommend>  switch view
  modules [query]          search the module catalog
  cart                     show the module cart
  cart add <module>        add a catalog module to the cart
  cart remove <module>     remove a module from the cart
  design                   design a custom module
  profile                  show the current profile
  recommend                request AI recommendations
  log                      list recommendations archived in this session
  help                     show this help
  quit                     leave the session";
const CART_USAGE: &str = "usage: cart [add|remove] <module name>";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Enumerates supported `ShellCommand` values.
pub(crate) enum ShellCommand {
    View(View),
    Modules(String),
    CartShow,
    CartAdd(String),
    CartRemove(String),
    Design,
    Profile,
    Recommend,
    Log,
    Help,
    Quit,
}

pub(crate) fn parse_shell_command(line: &str) -> Result<ShellCommand> {
    let trimmed = line.trim();
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "view" => Ok(ShellCommand::View(rest.parse()?)),
        "modules" => Ok(ShellCommand::Modules(rest.to_string())),
        "cart" => {
            if rest.is_empty() {
                return Ok(ShellCommand::CartShow);
            }
            let (action, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let name = name.trim();
            if name.is_empty() {
                bail!("{CART_USAGE}");
            }
            match action {
                "add" => Ok(ShellCommand::CartAdd(name.to_string())),
                "remove" => Ok(ShellCommand::CartRemove(name.to_string())),
                _ => bail!("{CART_USAGE}"),
            }
        }
        "design" => Ok(ShellCommand::Design),
        "profile" => Ok(ShellCommand::Profile),
        "recommend" => Ok(ShellCommand::Recommend),
        "log" => Ok(ShellCommand::Log),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        other => bail!("unknown command '{other}'; type 'help' for the command list"),
    }
}

async fn read_line<R>(reader: &mut R) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buffer = String::new();
    if reader.read_line(&mut buffer).await? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompts for one field; a blank answer keeps `current`.
async fn read_field<R, W>(
    reader: &mut R,
    out: &mut W,
    label: &str,
    current: &str,
) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if current.is_empty() {
        write!(out, "{label}: ")?;
    } else {
        write!(out, "{label} [{current}]: ")?;
    }
    out.flush()?;
    let Some(answer) = read_line(reader).await? else {
        return Ok(None);
    };
    if answer.trim().is_empty() {
        return Ok(Some(current.to_string()));
    }
    Ok(Some(answer))
}

pub(crate) fn render_view(session: &SessionContext) -> String {
    match session.view() {
        View::Dashboard => render_dashboard(),
        View::LearningHistory => render_history(),
        View::ModuleExplorer => render_modules(&search_modules("")),
        View::ModuleCart => render_cart(session.cart()),
        View::ModuleDesigner => format!(
            "== {} ==\navailable subjects: {}",
            View::ModuleDesigner.title(),
            designer_subjects().join(", ")
        ),
        View::AiRecommendation => {
            render_recommendation_view(session.recommender().is_configured())
        }
    }
}

async fn run_design<R, W>(
    session: &mut SessionContext,
    reader: &mut R,
    out: &mut W,
) -> Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "available subjects: {}", designer_subjects().join(", "))?;
    let Some(name) = read_field(reader, out, "module name", "").await? else {
        return Ok(false);
    };
    let Some(description) = read_field(reader, out, "module description", "").await? else {
        return Ok(false);
    };
    let Some(subjects) = read_field(reader, out, "subjects (comma separated)", "").await? else {
        return Ok(false);
    };

    match ModuleDraft::new(name, description, subjects.split(',')) {
        Ok(draft) => {
            let saved = session.save_design(draft);
            writeln!(out, "{}", render_design_saved(saved))?;
        }
        Err(error) => writeln!(out, "warning: {error}")?,
    }
    Ok(true)
}

async fn run_recommend<R, W>(
    session: &mut SessionContext,
    reader: &mut R,
    out: &mut W,
) -> Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    session.navigate(View::AiRecommendation);
    writeln!(out, "{}", render_view(session))?;
    if !session.recommender().is_configured() {
        writeln!(out, "recommendations are unavailable until an API key is configured")?;
        return Ok(true);
    }

    let current = session.profile();
    let Some(major) = read_field(reader, out, "major", &current.major).await? else {
        return Ok(false);
    };
    let Some(interests) = read_field(reader, out, "interests", &current.interests).await? else {
        return Ok(false);
    };
    let Some(aptitude) =
        read_field(reader, out, "aptitude / career goals", &current.aptitude).await?
    else {
        return Ok(false);
    };

    if validate_request_input(&UserProfile::new(&major, &interests, &aptitude)).is_ok() {
        writeln!(out, "generating personalized recommendations...")?;
        out.flush()?;
    }
    match session
        .submit_recommendation(&major, &interests, &aptitude)
        .await
    {
        Ok(record) => writeln!(out, "{}", render_record(&record))?,
        Err(error) => writeln!(out, "{}", render_recommendation_error(&error))?,
    }
    Ok(true)
}

/// Runs the interactive loop until `quit` or end of input.
pub(crate) async fn run_session_shell<R, W>(
    session: &mut SessionContext,
    reader: &mut R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", render_view(session))?;
    writeln!(out, "type 'help' for commands")?;

    loop {
        write!(out, "tu> ")?;
        out.flush()?;
        let Some(line) = read_line(reader).await? else {
            writeln!(out)?;
            return Ok(());
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_shell_command(&line) {
            Ok(command) => command,
            Err(error) => {
                writeln!(out, "error: {error}")?;
                continue;
            }
        };

        let keep_going = match command {
            ShellCommand::View(view) => {
                session.navigate(view);
                writeln!(out, "{}", render_view(session))?;
                true
            }
            ShellCommand::Modules(query) => {
                session.navigate(View::ModuleExplorer);
                writeln!(out, "{}", render_modules(&search_modules(&query)))?;
                true
            }
            ShellCommand::CartShow => {
                session.navigate(View::ModuleCart);
                writeln!(out, "{}", render_cart(session.cart()))?;
                true
            }
            ShellCommand::CartAdd(name) => {
                match session.cart_mut().add(&name) {
                    Ok(CartAddOutcome::Added) => writeln!(out, "added '{name}' to the cart")?,
                    Ok(CartAddOutcome::AlreadyPresent) => {
                        writeln!(out, "'{name}' is already in the cart")?
                    }
                    Err(error) => writeln!(out, "error: {error}")?,
                }
                true
            }
            ShellCommand::CartRemove(name) => {
                if session.cart_mut().remove(&name) {
                    writeln!(out, "removed '{name}' from the cart")?;
                } else {
                    writeln!(out, "'{name}' is not in the cart")?;
                }
                true
            }
            ShellCommand::Design => {
                session.navigate(View::ModuleDesigner);
                run_design(session, reader, out).await?
            }
            ShellCommand::Profile => {
                writeln!(out, "{}", render_profile(&session.profile()))?;
                true
            }
            ShellCommand::Recommend => run_recommend(session, reader, out).await?,
            ShellCommand::Log => {
                writeln!(
                    out,
                    "{}",
                    render_recommendation_log(&session.recommendations())
                )?;
                true
            }
            ShellCommand::Help => {
                writeln!(out, "{SHELL_HELP}")?;
                true
            }
            ShellCommand::Quit => false,
        };
        if !keep_going {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use httpmock::prelude::*;
    use serde_json::json;
    use tu_advisor::{
        AdvisorConfig, RecommendationClient, RecommendationLog, SessionContext, View,
        DEFAULT_MAJOR,
    };

    use super::{parse_shell_command, run_session_shell, ShellCommand};

    fn unconfigured_session() -> SessionContext {
        SessionContext::new(RecommendationClient::new(
            None,
            "gemini-test",
            Arc::new(RecommendationLog::new()),
        ))
    }

    async fn run_script(session: &mut SessionContext, script: &str) -> String {
        let mut reader = script.as_bytes();
        let mut out = Vec::new();
        run_session_shell(session, &mut reader, &mut out)
            .await
            .expect("shell should run");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_shell_command("view history").expect("view"),
            ShellCommand::View(View::LearningHistory)
        );
        assert_eq!(
            parse_shell_command("modules data").expect("modules"),
            ShellCommand::Modules("data".to_string())
        );
        assert_eq!(
            parse_shell_command("cart add UX/UI Design MD").expect("cart add"),
            ShellCommand::CartAdd("UX/UI Design MD".to_string())
        );
        assert_eq!(parse_shell_command("cart").expect("cart"), ShellCommand::CartShow);
        assert_eq!(parse_shell_command("EXIT").expect("exit"), ShellCommand::Quit);
    }

    #[test]
    fn rejects_malformed_commands() {
        let error = parse_shell_command("cart add").expect_err("missing module name");
        assert!(error.to_string().contains("usage: cart"));
        let error = parse_shell_command("view settings").expect_err("unknown view");
        assert!(error.to_string().contains("unknown view 'settings'"));
        let error = parse_shell_command("dance").expect_err("unknown command");
        assert!(error.to_string().contains("unknown command 'dance'"));
    }

    #[tokio::test]
    async fn functional_shell_browses_and_fills_cart() {
        let mut session = unconfigured_session();
        let output = run_script(
            &mut session,
            "modules marketing\ncart add digital marketing md\ncart add Digital Marketing MD\ncart\nquit\n",
        )
        .await;

        assert!(output.contains("Dashboard"));
        assert!(output.contains("- Digital Marketing MD | Business Administration | 15 credits"));
        assert!(output.contains("added 'digital marketing md' to the cart"));
        assert!(output.contains("already in the cart"));
        assert!(output.contains("total: 15 credits"));
        assert_eq!(session.view(), View::ModuleCart);
    }

    #[tokio::test]
    async fn functional_shell_refuses_recommendation_when_unconfigured() {
        let mut session = unconfigured_session();
        let output = run_script(&mut session, "recommend\nprofile\n").await;

        assert!(output.contains("GEMINI_API_KEY="));
        assert!(output.contains("recommendations are unavailable"));
        assert!(output.contains(&format!("major: {DEFAULT_MAJOR}")));
        assert!(session.recommendations().is_empty());
    }

    #[tokio::test]
    async fn functional_shell_design_flow_saves_module() {
        let mut session = unconfigured_session();
        let output = run_script(
            &mut session,
            "design\nEdTech Lab\nclassroom tools\nprogramming, ai fundamentals\ndesign\n\n\n\n",
        )
        .await;

        assert!(output
            .contains("module 'EdTech Lab' saved with subjects: Programming, AI Fundamentals"));
        assert!(output.contains("warning: enter a module name"));
        assert_eq!(session.designs().len(), 1);
    }

    #[tokio::test]
    async fn integration_shell_recommendation_is_archived_and_logged() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemini-2.0-flash-exp:generateContent")
                .body_includes("- Interests: AI, edtech");
            then.status(200).json_body(json!({
                "candidates": [{"content": {"parts": [{"text": "SAMPLE"}]}}]
            }));
        });
        let config = AdvisorConfig {
            api_key: Some("test-gemini-key".to_string()),
            api_base: format!("{}/v1beta", server.base_url()),
            ..AdvisorConfig::default()
        };
        let mut session = SessionContext::new(RecommendationClient::new(
            config.build_generator(),
            config.model.clone(),
            Arc::new(RecommendationLog::new()),
        ));

        let output = run_script(
            &mut session,
            "recommend\n\nAI, edtech\nconsultant\nlog\nquit\n",
        )
        .await;

        mock.assert_calls(1);
        assert!(output.contains(&format!("major [{DEFAULT_MAJOR}]: ")));
        assert!(output.contains("--- Personalized learning path ---\nSAMPLE"));
        assert!(output.contains("#1 ["));
        assert_eq!(session.profile().interests, "AI, edtech");
        assert_eq!(session.recommendations().len(), 1);
    }

    #[tokio::test]
    async fn regression_shell_reports_parse_errors_and_continues() {
        let mut session = unconfigured_session();
        let output = run_script(&mut session, "bogus\nview history\n").await;
        assert!(output.contains("error: unknown command 'bogus'"));
        assert!(output.contains("2024 Spring:"));
    }
}
