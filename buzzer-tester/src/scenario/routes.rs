use anyhow::{Result, ensure};

use buzzer_web::router::{Route, Screen};

use super::{Scenario, ScenarioCtx};

const NESTED_PATH: &str = "/create/x";

pub struct DirectLinkScenario;

#[async_trait::async_trait]
impl Scenario for DirectLinkScenario {
    fn key(&self) -> &'static str {
        "direct-link"
    }

    fn description(&self) -> &'static str {
        "Opening /<code> directly mounts the game screen with that code"
    }

    fn uses_code(&self) -> bool {
        true
    }

    fn run_logic(&self, code: &str) -> Result<()> {
        let route = Route::Game {
            code: code.to_string(),
        };
        let resolved = Route::resolve(&route.to_path());
        ensure!(resolved == route, "/{code} resolves to {resolved:?}");
        Ok(())
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let path = Route::Game {
            code: ctx.code.clone(),
        }
        .to_path();
        ctx.page.open(&path).await?;
        let game = ctx.page.expect_screen(Screen::Game).await?;
        let shown = game.attr("data-code").await?.unwrap_or_default();
        ensure!(shown == ctx.code, "game screen shows {shown:?}, expected {:?}", ctx.code);
        Ok(())
    }
}

pub struct AdminRouteScenario;

#[async_trait::async_trait]
impl Scenario for AdminRouteScenario {
    fn key(&self) -> &'static str {
        "admin-route"
    }

    fn description(&self) -> &'static str {
        "/create mounts the admin screen and nothing else"
    }

    fn run_logic(&self, _code: &str) -> Result<()> {
        let route = Route::resolve("/create");
        ensure!(route == Route::Admin, "/create resolves to {route:?}");
        Ok(())
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.open("/create").await?;
        ctx.page.expect_screen(Screen::Admin).await?;
        for other in [Screen::CodeEntry, Screen::Game] {
            ensure!(
                !ctx.page.has_screen(other).await?,
                "{} screen mounted on /create",
                other.marker()
            );
        }
        Ok(())
    }
}

pub struct NotFoundScenario;

#[async_trait::async_trait]
impl Scenario for NotFoundScenario {
    fn key(&self) -> &'static str {
        "not-found"
    }

    fn description(&self) -> &'static str {
        "Paths outside the route table show the not-found screen"
    }

    fn run_logic(&self, _code: &str) -> Result<()> {
        let route = Route::resolve(NESTED_PATH);
        ensure!(route == Route::NotFound, "{NESTED_PATH} resolves to {route:?}");
        Ok(())
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.open(NESTED_PATH).await?;
        ctx.page.expect_screen(Screen::NotFound).await?;
        Ok(())
    }
}
