use std::env;

use chrono::Weekday;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub admin_token: String,
    pub llm_provider: String,
    pub groq_api_key: String,
    pub groq_model: String,
    pub ollama_url: String,
    pub schedule: ScheduleConfig,
    pub service_area: ServiceAreaConfig,
    pub contact_phone: String,
    pub contact_email: String,
}

/// Business-hours rules driving slot generation and booking validation.
#[derive(Clone, Debug)]
pub struct ScheduleConfig {
    pub start_hour: u32,
    pub end_hour: u32,
    pub business_days: Vec<Weekday>,
    pub horizon_days: i64,
}

#[derive(Clone, Debug)]
pub struct ServiceAreaConfig {
    pub keywords: Vec<String>,
    pub label: String,
}

const DEFAULT_AREA_KEYWORDS: &str =
    "minglanilla,cebu,talisay,naga,mandaue,lapu-lapu,lapulapu,sugbo";
const DEFAULT_AREA_LABEL: &str = "Minglanilla and nearby Cebu areas";

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "techbook.db".to_string()),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| "changeme".to_string()),
            llm_provider: env::var("LLM_PROVIDER").unwrap_or_else(|_| "ollama".to_string()),
            groq_api_key: env::var("GROQ_API_KEY").unwrap_or_default(),
            groq_model: env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.1-8b-instant".to_string()),
            ollama_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            schedule: ScheduleConfig {
                start_hour: env::var("BUSINESS_START_HOUR")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(8),
                end_hour: env::var("BUSINESS_END_HOUR")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(18),
                business_days: parse_weekdays(
                    &env::var("BUSINESS_DAYS")
                        .unwrap_or_else(|_| "mon,tue,wed,thu,fri".to_string()),
                ),
                horizon_days: env::var("BOOKING_HORIZON_DAYS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(90),
            },
            service_area: ServiceAreaConfig {
                keywords: env::var("SERVICE_AREA_KEYWORDS")
                    .unwrap_or_else(|_| DEFAULT_AREA_KEYWORDS.to_string())
                    .split(',')
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect(),
                label: env::var("SERVICE_AREA_LABEL")
                    .unwrap_or_else(|_| DEFAULT_AREA_LABEL.to_string()),
            },
            contact_phone: env::var("CONTACT_PHONE")
                .unwrap_or_else(|_| "+63 917 555 0123".to_string()),
            contact_email: env::var("CONTACT_EMAIL")
                .unwrap_or_else(|_| "hello@techbook.ph".to_string()),
        }
    }
}

fn parse_weekdays(s: &str) -> Vec<Weekday> {
    s.split(',')
        .filter_map(|d| match d.trim().to_lowercase().as_str() {
            "mon" => Some(Weekday::Mon),
            "tue" => Some(Weekday::Tue),
            "wed" => Some(Weekday::Wed),
            "thu" => Some(Weekday::Thu),
            "fri" => Some(Weekday::Fri),
            "sat" => Some(Weekday::Sat),
            "sun" => Some(Weekday::Sun),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weekdays() {
        let days = parse_weekdays("mon, tue,WED,xyz,fri");
        assert_eq!(
            days,
            vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Fri]
        );
    }
}
