use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Serialize, Serializer};

#[cfg(test)]
mod tests;

/// Monitored zones. Serialized as the display names clients expect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Zone {
    #[serde(rename = "Nairobi CBD")]
    NairobiCbd,
    Westlands,
    Karen,
    Eastlands,
}

impl Zone {
    pub const ALL: [Zone; 4] = [
        Zone::NairobiCbd,
        Zone::Westlands,
        Zone::Karen,
        Zone::Eastlands,
    ];
}

/// Severity labels. Drawn independently of the numeric fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Severity {
    Good,
    Moderate,
    Unhealthy,
    Hazardous,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Good,
        Severity::Moderate,
        Severity::Unhealthy,
        Severity::Hazardous,
    ];
}

/// Indoor particulate and NO2 levels
#[derive(Clone, Copy, Debug, Serialize)]
pub struct IndoorReading {
    pub pm25: u16,
    pub no2: u16,
}

/// Outdoor particulate and NO2 levels (higher ranges than indoor)
#[derive(Clone, Copy, Debug, Serialize)]
pub struct OutdoorReading {
    pub pm25: u16,
    pub no2: u16,
}

/// One synthetic air-quality data point.
///
/// Constructed fresh each tick, transmitted, then discarded — never stored
/// or reused. Every field is an independent uniform sample; in particular
/// `aqi` is NOT derived from `pm25`/`no2`, and `status` is not derived from
/// `aqi`. The generator is a source of bounded noise, not a simulation.
#[derive(Clone, Debug, Serialize)]
pub struct Reading {
    #[serde(serialize_with = "serialize_second_precision")]
    pub timestamp: DateTime<Utc>,
    pub location: Zone,
    pub pm25: u16,
    pub no2: u16,
    pub co: u16,
    pub aqi: u16,
    pub status: Severity,
    pub indoor: IndoorReading,
    pub outdoor: OutdoorReading,
}

impl Reading {
    /// Draw one reading. All bounds inclusive; cannot fail.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();

        Self {
            timestamp: Utc::now(),
            location: Zone::ALL[rng.gen_range(0..Zone::ALL.len())],
            pm25: rng.gen_range(20..=220),
            no2: rng.gen_range(10..=110),
            co: rng.gen_range(20..=70),
            aqi: rng.gen_range(50..=250),
            status: Severity::ALL[rng.gen_range(0..Severity::ALL.len())],
            indoor: IndoorReading {
                pm25: rng.gen_range(50..=200),
                no2: rng.gen_range(20..=100),
            },
            outdoor: OutdoorReading {
                pm25: rng.gen_range(100..=400),
                no2: rng.gen_range(30..=150),
            },
        }
    }
}

/// ISO-8601 UTC with second precision, e.g. `2025-03-14T09:26:53Z`
fn serialize_second_precision<S>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format("%Y-%m-%dT%H:%M:%SZ"))
}
