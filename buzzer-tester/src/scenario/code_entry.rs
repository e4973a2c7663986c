use anyhow::{Context, Result, ensure};

use buzzer_web::i18n;
use buzzer_web::pages::code_entry::{CodeEntryError, CodeEntryForm};
use buzzer_web::router::{Route, Screen};

use super::{Scenario, ScenarioCtx};

fn advisory() -> String {
    i18n::t(CodeEntryError::MissingCode.message_key())
}

/// Check that `code` survives the trip from the form into a game route.
fn expect_game_route(code: &str) -> Result<()> {
    let mut form = CodeEntryForm::default();
    form.set_input(code);
    let path = form
        .submit()
        .with_context(|| format!("submitting {code:?}"))?;
    ensure!(path == format!("/{code}"), "expected /{code}, got {path}");
    ensure!(form.form_message().is_none(), "advisory shown for {code:?}");

    let route = Route::resolve(&path);
    ensure!(
        matches!(&route, Route::Game { code: c } if c == code),
        "code {code:?} resolves to {route:?} instead of the game screen"
    );
    Ok(())
}

async fn expect_game_screen(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let game = ctx.page.expect_screen(Screen::Game).await?;
    let shown = game.attr("data-code").await?.unwrap_or_default();
    ensure!(shown == ctx.code, "game screen shows {shown:?}, expected {:?}", ctx.code);
    ensure!(
        ctx.page.form_message().await?.is_none(),
        "advisory still visible after navigation"
    );

    let url_safe = ctx
        .code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if url_safe {
        let path = ctx.page.pathname().await?;
        ensure!(
            path.ends_with(&format!("/{}", ctx.code)),
            "location {path} does not end with the code"
        );
    }
    Ok(())
}

pub struct SmokeScenario;

#[async_trait::async_trait]
impl Scenario for SmokeScenario {
    fn key(&self) -> &'static str {
        "smoke"
    }

    fn description(&self) -> &'static str {
        "Root path shows the code entry screen with an empty input"
    }

    fn run_logic(&self, _code: &str) -> Result<()> {
        ensure!(
            Route::resolve("/").screen() == Screen::CodeEntry,
            "/ should resolve to the code entry screen"
        );
        let form = CodeEntryForm::default();
        ensure!(form.input().is_none(), "fresh form should have no input");
        ensure!(form.form_message().is_none(), "fresh form should be idle");
        Ok(())
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.open("/").await?;
        ctx.page.expect_screen(Screen::CodeEntry).await?;
        let value = ctx.page.code_input_value().await?;
        ensure!(value.is_empty(), "code input should start empty, got {value:?}");
        ensure!(
            ctx.page.form_message().await?.is_none(),
            "no advisory before the first submit"
        );
        if ctx.verbose {
            println!("  🌐 Code entry screen mounted");
        }
        Ok(())
    }
}

pub struct EmptyCodeScenario;

#[async_trait::async_trait]
impl Scenario for EmptyCodeScenario {
    fn key(&self) -> &'static str {
        "empty-code"
    }

    fn description(&self) -> &'static str {
        "Submitting without a code shows the advisory and stays put"
    }

    fn run_logic(&self, _code: &str) -> Result<()> {
        let mut form = CodeEntryForm::default();
        ensure!(
            form.submit() == Err(CodeEntryError::MissingCode),
            "absent input must be refused"
        );
        ensure!(form.form_message() == Some(advisory()), "advisory missing");

        form.set_input("");
        ensure!(form.submit().is_err(), "empty input must be refused");
        Ok(())
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.open("/").await?;
        ctx.page.expect_screen(Screen::CodeEntry).await?;
        ctx.page.click_play().await?;

        let message = ctx
            .page
            .form_message()
            .await?
            .context("advisory not rendered")?;
        ensure!(message == advisory(), "unexpected advisory {message:?}");
        ensure!(
            ctx.page.has_screen(Screen::CodeEntry).await?,
            "empty submit should not navigate"
        );
        Ok(())
    }
}

pub struct JoinGameScenario;

#[async_trait::async_trait]
impl Scenario for JoinGameScenario {
    fn key(&self) -> &'static str {
        "join-game"
    }

    fn description(&self) -> &'static str {
        "Typing a code and pressing Play opens /<code>"
    }

    fn uses_code(&self) -> bool {
        true
    }

    fn run_logic(&self, code: &str) -> Result<()> {
        expect_game_route(code)
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.open("/").await?;
        ctx.page.expect_screen(Screen::CodeEntry).await?;
        ctx.page.type_code(&ctx.code).await?;
        ctx.page.click_play().await?;
        expect_game_screen(ctx).await
    }
}

pub struct RetryScenario;

#[async_trait::async_trait]
impl Scenario for RetryScenario {
    fn key(&self) -> &'static str {
        "retry-clears-message"
    }

    fn description(&self) -> &'static str {
        "A failed submit followed by a valid one clears the advisory"
    }

    fn uses_code(&self) -> bool {
        true
    }

    fn run_logic(&self, code: &str) -> Result<()> {
        let mut form = CodeEntryForm::default();
        ensure!(form.submit().is_err(), "first submit should fail");
        ensure!(form.form_message().is_some(), "advisory should be shown");

        form.set_input(code);
        form.submit()
            .with_context(|| format!("retrying with {code:?}"))?;
        ensure!(form.form_message().is_none(), "advisory should be cleared");
        Ok(())
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.open("/").await?;
        ctx.page.expect_screen(Screen::CodeEntry).await?;
        ctx.page.click_play().await?;
        ensure!(
            ctx.page.form_message().await?.is_some(),
            "advisory not rendered after empty submit"
        );

        ctx.page.type_code(&ctx.code).await?;
        ctx.page.click_play().await?;
        expect_game_screen(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_logic_accepts_opaque_codes() {
        for code in ["abc123", "ROOM-7", "héllo", " spaced "] {
            expect_game_route(code).unwrap_or_else(|e| panic!("{code:?}: {e:#}"));
        }
    }

    #[test]
    fn join_logic_flags_reserved_and_nested_codes() {
        let err = JoinGameScenario.run_logic("create").expect_err("create is reserved");
        assert!(err.to_string().contains("instead of the game screen"));
        assert!(JoinGameScenario.run_logic("a/b").is_err());
    }

    #[test]
    fn retry_logic_passes_for_any_non_empty_code() {
        RetryScenario.run_logic("x").expect("retry ok");
        assert!(RetryScenario.run_logic("").is_err());
    }

    #[test]
    fn empty_code_logic_matches_localized_advisory() {
        i18n::set_lang("en");
        assert_eq!(advisory(), "Please input code to play");
        EmptyCodeScenario.run_logic("").expect("empty-code ok");
    }
}
