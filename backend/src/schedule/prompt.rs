//! Schedule prompt construction

use crate::decoder::VehicleAttributes;

/// Service types every generated schedule must cover
pub const REQUIRED_SERVICES: [&str; 12] = [
    "oil change",
    "tire rotation",
    "air filter",
    "cabin filter",
    "spark plugs",
    "brake fluid",
    "coolant flush",
    "transmission fluid",
    "serpentine belt",
    "timing belt check",
    "battery",
    "brake inspection",
];

const EXAMPLE_RESPONSE: &str = r#"{
  "schedule": [
    {
      "id": "oil_change",
      "name": "Oil & Filter Change",
      "description": "Replaces engine oil and filter to keep engine lubricated and clean.",
      "intervalMiles": 5000,
      "intervalMonths": 6,
      "priority": "critical"
    }
  ]
}"#;

/// Build the single user message asking for a vehicle's OEM schedule
pub fn build_schedule_prompt(vehicle: &VehicleAttributes) -> String {
    format!(
        "You are an expert automotive technician. Generate the complete OEM maintenance schedule for a {vehicle}.\n\
         \n\
         Return ONLY valid JSON in this exact format, no markdown, no explanation:\n\
         {example}\n\
         \n\
         Include all standard services: {services}. Use realistic OEM intervals for this exact vehicle.",
        vehicle = vehicle.describe(),
        example = EXAMPLE_RESPONSE,
        services = REQUIRED_SERVICES.join(", "),
    )
}
