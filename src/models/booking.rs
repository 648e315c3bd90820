use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: ServiceKind,
    pub date: NaiveDate,
    pub time: String,
    pub location: LocationKind,
    pub address: String,
    pub message: Option<String>,
    pub tip: Option<f64>,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "completed" => Some(BookingStatus::Completed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    /// Statuses that hold a time slot against new bookings.
    pub fn occupying() -> &'static [BookingStatus] {
        &[BookingStatus::Pending, BookingStatus::Confirmed]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    CctvInstallation,
    StructuredCabling,
    NetworkSetup,
    ServerInstallation,
    ItSupport,
    Cybersecurity,
    Other,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::CctvInstallation => "cctv-installation",
            ServiceKind::StructuredCabling => "structured-cabling",
            ServiceKind::NetworkSetup => "network-setup",
            ServiceKind::ServerInstallation => "server-installation",
            ServiceKind::ItSupport => "it-support",
            ServiceKind::Cybersecurity => "cybersecurity",
            ServiceKind::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cctv-installation" => Some(ServiceKind::CctvInstallation),
            "structured-cabling" => Some(ServiceKind::StructuredCabling),
            "network-setup" => Some(ServiceKind::NetworkSetup),
            "server-installation" => Some(ServiceKind::ServerInstallation),
            "it-support" => Some(ServiceKind::ItSupport),
            "cybersecurity" => Some(ServiceKind::Cybersecurity),
            "other" => Some(ServiceKind::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Home,
    Office,
    Building,
    Other,
}

impl LocationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::Home => "home",
            LocationKind::Office => "office",
            LocationKind::Building => "building",
            LocationKind::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "home" => Some(LocationKind::Home),
            "office" => Some(LocationKind::Office),
            "building" => Some(LocationKind::Building),
            "other" => Some(LocationKind::Other),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        assert_eq!(BookingStatus::parse("completed"), Some(BookingStatus::Completed));
        assert_eq!(BookingStatus::Cancelled.as_str(), "cancelled");
        assert_eq!(BookingStatus::parse("unknown"), None);
    }

    #[test]
    fn test_occupying_statuses() {
        let occupying = BookingStatus::occupying();
        assert!(occupying.contains(&BookingStatus::Pending));
        assert!(occupying.contains(&BookingStatus::Confirmed));
        assert!(!occupying.contains(&BookingStatus::Cancelled));
    }

    #[test]
    fn test_service_kind_serde_identifier() {
        let json = serde_json::to_string(&ServiceKind::CctvInstallation).unwrap();
        assert_eq!(json, "\"cctv-installation\"");
        assert_eq!(ServiceKind::parse("it-support"), Some(ServiceKind::ItSupport));
    }
}
