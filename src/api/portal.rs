use crate::libs::attendance::AttendanceRecord;
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{header, multipart, Client};
use serde::{Deserialize, Serialize};

const ATTENDANCE_URL: &str = "attendance/date-range-report";

/// Error envelope the portal uses for non-2xx responses.
///
/// The portal is not consistent about this shape, so parsing it is
/// best-effort; when the body does not match, the HTTP status line is shown
/// instead.
#[derive(Debug, Deserialize)]
struct PortalErrorBody {
    message: String,
}

/// Client for the HR portal's attendance feed.
pub struct Portal {
    client: Client,
    config: PortalConfig,
}

impl Portal {
    pub fn new(config: &PortalConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Fetches all attendance records between `start` and `end` inclusive.
    ///
    /// The endpoint takes the range as a multipart form, the same contract
    /// the portal's own dashboard submits. One record per employee per day;
    /// days without a punch may be missing entirely.
    ///
    /// There is deliberately no retry or timeout here: the export is a
    /// one-shot, user-triggered operation and a failure aborts it with a
    /// single message.
    pub async fn attendance_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<AttendanceRecord>> {
        let url = format!("{}/{}", self.config.api_url, ATTENDANCE_URL);
        let form = multipart::Form::new()
            .text("date_from", start.format("%Y-%m-%d").to_string())
            .text("date_to", end.format("%Y-%m-%d").to_string());

        let res = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.config.token))
            .multipart(form)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<PortalErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| status.to_string());
            msg_bail_anyhow!(Message::PortalRequestFailed(reason));
        }

        Ok(res.json::<Vec<AttendanceRecord>>().await?)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PortalConfig {
    /// Base URL of the portal REST API, e.g. `https://hr.example.com/api`.
    pub api_url: String,
    /// Access token sent as a bearer credential on every request.
    pub token: String,
}

impl PortalConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "portal".to_string(),
            name: "HR Portal".to_string(),
        }
    }

    pub fn init(config: &Option<PortalConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: "".to_string(),
            token: "".to_string(),
        });
        println!("{}", Message::ConfigModulePortal);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPortalApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPortalToken.to_string())
                .default(config.token)
                .interact_text()?,
        })
    }
}
