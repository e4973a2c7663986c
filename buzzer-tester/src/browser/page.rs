use anyhow::{Context, Result};
use thirtyfour::prelude::*;

use buzzer_web::router::Screen;

/// Thin page object over the client's DOM hooks (`data-screen`, `#game-code`, `#play-btn`).
#[derive(Debug, Clone)]
pub struct ClientPage<'a> {
    driver: &'a WebDriver,
    base_url: String,
}

impl<'a> ClientPage<'a> {
    pub fn new(driver: &'a WebDriver, base_url: &str) -> Self {
        Self {
            driver,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn open(&self, path: &str) -> Result<()> {
        let url = self.url_for(path);
        self.driver
            .goto(url.as_str())
            .await
            .with_context(|| format!("navigating to {url}"))
    }

    /// Wait for `screen` to be mounted and return its root element.
    pub async fn expect_screen(&self, screen: Screen) -> Result<WebElement> {
        let selector = format!("[data-screen='{}']", screen.marker());
        self.driver
            .find(By::Css(selector.as_str()))
            .await
            .with_context(|| format!("waiting for {} screen", screen.marker()))
    }

    pub async fn has_screen(&self, screen: Screen) -> Result<bool> {
        let selector = format!("[data-screen='{}']", screen.marker());
        let found = self.driver.find_all(By::Css(selector.as_str())).await?;
        Ok(!found.is_empty())
    }

    pub async fn code_input_value(&self) -> Result<String> {
        let input = self.driver.find(By::Id("game-code")).await?;
        Ok(input.value().await?.unwrap_or_default())
    }

    pub async fn type_code(&self, code: &str) -> Result<()> {
        let input = self.driver.find(By::Id("game-code")).await?;
        input.clear().await?;
        input.send_keys(code).await.context("typing game code")?;
        Ok(())
    }

    pub async fn click_play(&self) -> Result<()> {
        self.driver
            .find(By::Id("play-btn"))
            .await?
            .click()
            .await
            .context("clicking play")?;
        Ok(())
    }

    pub async fn form_message(&self) -> Result<Option<String>> {
        let found = self.driver.find_all(By::ClassName("form-message")).await?;
        match found.first() {
            Some(el) => Ok(Some(el.text().await?)),
            None => Ok(None),
        }
    }

    pub async fn pathname(&self) -> Result<String> {
        let url = self.driver.current_url().await?;
        Ok(url.path().to_string())
    }
}
