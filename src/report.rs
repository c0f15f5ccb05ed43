use crate::{RunnerEntry, ScrapeError};
use std::env;
use std::fmt::Write as _;
use tracing::info;

pub struct MailgunConfig {
    pub domain: String,
    pub api_key: String,
    pub recipient: String,
}

impl MailgunConfig {
    pub fn from_env() -> Result<MailgunConfig, ScrapeError> {
        Ok(MailgunConfig {
            domain: env::var("MAILGUN_DOMAIN").map_err(|_| ScrapeError::MissingEnv("MAILGUN_DOMAIN"))?,
            api_key: env::var("MAILGUN_API_KEY")
                .map_err(|_| ScrapeError::MissingEnv("MAILGUN_API_KEY"))?,
            recipient: env::var("MAIL_TO").map_err(|_| ScrapeError::MissingEnv("MAIL_TO"))?,
        })
    }
}

/// Render the duplicates as the HTML table body of the report email.
pub fn report_html(duplicates: &[RunnerEntry]) -> String {
    let mut table_rows = String::new();
    for entry in duplicates {
        let _ = write!(
            table_rows,
            "<tr><td><a href='{}'>Link</a></td><td>{}</td><td>{}</td></tr>",
            entry.club_entries_link, entry.club_code, entry.runner_name
        );
    }

    format!(
        r#"
    <h2>Duplicated Entries Report</h2>
    <table border="1" style="border-collapse: collapse; width: 100%;">
        <thead>
            <tr style="background-color: #f2f2f2;">
                <th>Entries Link</th>
                <th>Club Code</th>
                <th>Runner Name</th>
            </tr>
        </thead>
        <tbody>
            {}
        </tbody>
    </table>
    "#,
        table_rows
    )
}

pub async fn send_duplicates_email(
    client: &reqwest::Client,
    config: &MailgunConfig,
    duplicates: &[RunnerEntry],
) -> Result<(), ScrapeError> {
    let subject = format!(
        "Daily duplicated entries report {}",
        chrono::Local::now().format("%Y-%m-%d")
    );
    let params = [
        (
            "from",
            format!("Mailgun Sandbox <postmaster@{}>", config.domain),
        ),
        ("to", config.recipient.clone()),
        ("subject", subject),
        ("html", report_html(duplicates)),
    ];

    let response = client
        .post(format!(
            "https://api.mailgun.net/v3/{}/messages",
            config.domain
        ))
        .basic_auth("api", Some(&config.api_key))
        .form(&params)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    info!("Mailgun responded with {}", status);

    if status != reqwest::StatusCode::OK {
        return Err(ScrapeError::EmailDelivery { status, body });
    }
    Ok(())
}
