use crate::config::AppConfig;

/// Company facts grounding both the intent-extraction prompt and the
/// general chat prompt.
pub fn company_context(config: &AppConfig) -> String {
    format!(
        "Company: Techbook ICT Services, an IT services provider serving {area}.\n\
         Services offered: CCTV installation, structured cabling, network setup, \
         server installation, IT support, cybersecurity assessments.\n\
         Business hours: weekdays (Monday-Friday), {start}:00 to {end}:00. \
         On-site visits can be booked up to {horizon} days ahead.\n\
         Contact: {phone}, {email}.",
        area = config.service_area.label,
        start = config.schedule.start_hour,
        end = config.schedule.end_hour,
        horizon = config.schedule.horizon_days,
        phone = config.contact_phone,
        email = config.contact_email,
    )
}
