// 🚨 Alert Categories - public weather alert event types
//
// Alphabetical by label, except that "911 Telephone Outage Emergency" sorts
// first because it starts with a digit. Its variant puts the digits at the
// end since an identifier cannot start with one; the label is untouched.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::domain::Domain;
use crate::error::CategoryError;
use crate::registry::HazardCategory;

/// One alert event type, e.g. `"Tornado Warning"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(into = "&'static str", try_from = "String")]
pub enum AlertCategory {
    #[strum(to_string = "911 Telephone Outage Emergency")]
    TelephoneOutageEmergency911,
    #[strum(to_string = "Administrative Message")]
    AdministrativeMessage,
    #[strum(to_string = "Air Quality Alert")]
    AirQualityAlert,
    #[strum(to_string = "Air Stagnation Advisory")]
    AirStagnationAdvisory,
    #[strum(to_string = "Arroyo And Small Stream Flood Advisory")]
    ArroyoAndSmallStreamFloodAdvisory,
    #[strum(to_string = "Ashfall Advisory")]
    AshfallAdvisory,
    #[strum(to_string = "Ashfall Warning")]
    AshfallWarning,
    #[strum(to_string = "Avalanche Advisory")]
    AvalancheAdvisory,
    #[strum(to_string = "Avalanche Warning")]
    AvalancheWarning,
    #[strum(to_string = "Avalanche Watch")]
    AvalancheWatch,
    #[strum(to_string = "Beach Hazards Statement")]
    BeachHazardsStatement,
    #[strum(to_string = "Blizzard Warning")]
    BlizzardWarning,
    #[strum(to_string = "Blizzard Watch")]
    BlizzardWatch,
    #[strum(to_string = "Blowing Dust Advisory")]
    BlowingDustAdvisory,
    #[strum(to_string = "Blowing Dust Warning")]
    BlowingDustWarning,
    #[strum(to_string = "Brisk Wind Advisory")]
    BriskWindAdvisory,
    #[strum(to_string = "Child Abduction Emergency")]
    ChildAbductionEmergency,
    #[strum(to_string = "Civil Danger Warning")]
    CivilDangerWarning,
    #[strum(to_string = "Civil Emergency Message")]
    CivilEmergencyMessage,
    #[strum(to_string = "Coastal Flood Advisory")]
    CoastalFloodAdvisory,
    #[strum(to_string = "Coastal Flood Statement")]
    CoastalFloodStatement,
    #[strum(to_string = "Coastal Flood Warning")]
    CoastalFloodWarning,
    #[strum(to_string = "Coastal Flood Watch")]
    CoastalFloodWatch,
    #[strum(to_string = "Dense Fog Advisory")]
    DenseFogAdvisory,
    #[strum(to_string = "Dense Smoke Advisory")]
    DenseSmokeAdvisory,
    #[strum(to_string = "Dust Advisory")]
    DustAdvisory,
    #[strum(to_string = "Dust Storm Warning")]
    DustStormWarning,
    #[strum(to_string = "Earthquake Warning")]
    EarthquakeWarning,
    #[strum(to_string = "Evacuation - Immediate")]
    EvacuationImmediate,
    #[strum(to_string = "Excessive Heat Warning")]
    ExcessiveHeatWarning,
    #[strum(to_string = "Excessive Heat Watch")]
    ExcessiveHeatWatch,
    #[strum(to_string = "Extreme Cold Warning")]
    ExtremeColdWarning,
    #[strum(to_string = "Extreme Cold Watch")]
    ExtremeColdWatch,
    #[strum(to_string = "Extreme Fire Danger")]
    ExtremeFireDanger,
    #[strum(to_string = "Extreme Wind Warning")]
    ExtremeWindWarning,
    #[strum(to_string = "Fire Warning")]
    FireWarning,
    #[strum(to_string = "Fire Weather Watch")]
    FireWeatherWatch,
    #[strum(to_string = "Flash Flood Statement")]
    FlashFloodStatement,
    #[strum(to_string = "Flash Flood Warning")]
    FlashFloodWarning,
    #[strum(to_string = "Flash Flood Watch")]
    FlashFloodWatch,
    #[strum(to_string = "Flood Advisory")]
    FloodAdvisory,
    #[strum(to_string = "Flood Statement")]
    FloodStatement,
    #[strum(to_string = "Flood Warning")]
    FloodWarning,
    #[strum(to_string = "Flood Watch")]
    FloodWatch,
    #[strum(to_string = "Freeze Warning")]
    FreezeWarning,
    #[strum(to_string = "Freeze Watch")]
    FreezeWatch,
    #[strum(to_string = "Freezing Fog Advisory")]
    FreezingFogAdvisory,
    #[strum(to_string = "Freezing Rain Advisory")]
    FreezingRainAdvisory,
    #[strum(to_string = "Freezing Spray Advisory")]
    FreezingSprayAdvisory,
    #[strum(to_string = "Frost Advisory")]
    FrostAdvisory,
    #[strum(to_string = "Gale Warning")]
    GaleWarning,
    #[strum(to_string = "Gale Watch")]
    GaleWatch,
    #[strum(to_string = "Hard Freeze Warning")]
    HardFreezeWarning,
    #[strum(to_string = "Hard Freeze Watch")]
    HardFreezeWatch,
    #[strum(to_string = "Hazardous Materials Warning")]
    HazardousMaterialsWarning,
    #[strum(to_string = "Hazardous Seas Warning")]
    HazardousSeasWarning,
    #[strum(to_string = "Hazardous Seas Watch")]
    HazardousSeasWatch,
    #[strum(to_string = "Hazardous Weather Outlook")]
    HazardousWeatherOutlook,
    #[strum(to_string = "Heat Advisory")]
    HeatAdvisory,
    #[strum(to_string = "Heavy Freezing Spray Warning")]
    HeavyFreezingSprayWarning,
    #[strum(to_string = "Heavy Freezing Spray Watch")]
    HeavyFreezingSprayWatch,
    #[strum(to_string = "High Surf Advisory")]
    HighSurfAdvisory,
    #[strum(to_string = "High Surf Warning")]
    HighSurfWarning,
    #[strum(to_string = "High Wind Warning")]
    HighWindWarning,
    #[strum(to_string = "High Wind Watch")]
    HighWindWatch,
    #[strum(to_string = "Hurricane Force Wind Warning")]
    HurricaneForceWindWarning,
    #[strum(to_string = "Hurricane Force Wind Watch")]
    HurricaneForceWindWatch,
    #[strum(to_string = "Hurricane Local Statement")]
    HurricaneLocalStatement,
    #[strum(to_string = "Hurricane Warning")]
    HurricaneWarning,
    #[strum(to_string = "Hurricane Watch")]
    HurricaneWatch,
    #[strum(to_string = "Hydrologic Advisory")]
    HydrologicAdvisory,
    #[strum(to_string = "Hydrologic Outlook")]
    HydrologicOutlook,
    #[strum(to_string = "Ice Storm Warning")]
    IceStormWarning,
    #[strum(to_string = "Lake Effect Snow Advisory")]
    LakeEffectSnowAdvisory,
    #[strum(to_string = "Lake Effect Snow Warning")]
    LakeEffectSnowWarning,
    #[strum(to_string = "Lake Effect Snow Watch")]
    LakeEffectSnowWatch,
    #[strum(to_string = "Lake Wind Advisory")]
    LakeWindAdvisory,
    #[strum(to_string = "Lakeshore Flood Advisory")]
    LakeshoreFloodAdvisory,
    #[strum(to_string = "Lakeshore Flood Statement")]
    LakeshoreFloodStatement,
    #[strum(to_string = "Lakeshore Flood Warning")]
    LakeshoreFloodWarning,
    #[strum(to_string = "Lakeshore Flood Watch")]
    LakeshoreFloodWatch,
    #[strum(to_string = "Law Enforcement Warning")]
    LawEnforcementWarning,
    #[strum(to_string = "Local Area Emergency")]
    LocalAreaEmergency,
    #[strum(to_string = "Low Water Advisory")]
    LowWaterAdvisory,
    #[strum(to_string = "Marine Weather Statement")]
    MarineWeatherStatement,
    #[strum(to_string = "Nuclear Power Plant Warning")]
    NuclearPowerPlantWarning,
    #[strum(to_string = "Radiological Hazard Warning")]
    RadiologicalHazardWarning,
    #[strum(to_string = "Red Flag Warning")]
    RedFlagWarning,
    #[strum(to_string = "Rip Current Statement")]
    RipCurrentStatement,
    #[strum(to_string = "Severe Thunderstorm Warning")]
    SevereThunderstormWarning,
    #[strum(to_string = "Severe Thunderstorm Watch")]
    SevereThunderstormWatch,
    #[strum(to_string = "Severe Weather Statement")]
    SevereWeatherStatement,
    #[strum(to_string = "Shelter In Place Warning")]
    ShelterInPlaceWarning,
    #[strum(to_string = "Short Term Forecast")]
    ShortTermForecast,
    #[strum(to_string = "Small Craft Advisory")]
    SmallCraftAdvisory,
    #[strum(to_string = "Small Craft Advisory For Hazardous Seas")]
    SmallCraftAdvisoryForHazardousSeas,
    #[strum(to_string = "Small Craft Advisory For Rough Bar")]
    SmallCraftAdvisoryForRoughBar,
    #[strum(to_string = "Small Craft Advisory For Winds")]
    SmallCraftAdvisoryForWinds,
    #[strum(to_string = "Small Stream Flood Advisory")]
    SmallStreamFloodAdvisory,
    #[strum(to_string = "Snow Squall Warning")]
    SnowSquallWarning,
    #[strum(to_string = "Special Marine Warning")]
    SpecialMarineWarning,
    #[strum(to_string = "Special Weather Statement")]
    SpecialWeatherStatement,
    #[strum(to_string = "Storm Surge Warning")]
    StormSurgeWarning,
    #[strum(to_string = "Storm Surge Watch")]
    StormSurgeWatch,
    #[strum(to_string = "Storm Warning")]
    StormWarning,
    #[strum(to_string = "Storm Watch")]
    StormWatch,
    #[strum(to_string = "Test")]
    Test,
    #[strum(to_string = "Tornado Warning")]
    TornadoWarning,
    #[strum(to_string = "Tornado Watch")]
    TornadoWatch,
    #[strum(to_string = "Tropical Depression Local Statement")]
    TropicalDepressionLocalStatement,
    #[strum(to_string = "Tropical Storm Local Statement")]
    TropicalStormLocalStatement,
    #[strum(to_string = "Tropical Storm Warning")]
    TropicalStormWarning,
    #[strum(to_string = "Tropical Storm Watch")]
    TropicalStormWatch,
    #[strum(to_string = "Tsunami Advisory")]
    TsunamiAdvisory,
    #[strum(to_string = "Tsunami Warning")]
    TsunamiWarning,
    #[strum(to_string = "Tsunami Watch")]
    TsunamiWatch,
    #[strum(to_string = "Typhoon Local Statement")]
    TyphoonLocalStatement,
    #[strum(to_string = "Typhoon Warning")]
    TyphoonWarning,
    #[strum(to_string = "Typhoon Watch")]
    TyphoonWatch,
    #[strum(to_string = "Urban And Small Stream Flood Advisory")]
    UrbanAndSmallStreamFloodAdvisory,
    #[strum(to_string = "Volcano Warning")]
    VolcanoWarning,
    #[strum(to_string = "Wind Advisory")]
    WindAdvisory,
    #[strum(to_string = "Wind Chill Advisory")]
    WindChillAdvisory,
    #[strum(to_string = "Wind Chill Warning")]
    WindChillWarning,
    #[strum(to_string = "Wind Chill Watch")]
    WindChillWatch,
    #[strum(to_string = "Winter Storm Warning")]
    WinterStormWarning,
    #[strum(to_string = "Winter Storm Watch")]
    WinterStormWatch,
    #[strum(to_string = "Winter Weather Advisory")]
    WinterWeatherAdvisory,
}

impl HazardCategory for AlertCategory {
    const DOMAIN: Domain = Domain::Alerts;
}

impl TryFrom<String> for AlertCategory {
    type Error = CategoryError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::from_label(&label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_registry_size() {
        assert_eq!(AlertCategory::all_categories().len(), 128);
        assert_eq!(AlertCategory::COUNT, 128);
    }

    #[test]
    fn test_alert_first_and_last() {
        let all = AlertCategory::all_categories();
        assert_eq!(all.first(), Some(&AlertCategory::TelephoneOutageEmergency911));
        assert_eq!(all.last().map(|c| c.label()), Some("Winter Weather Advisory"));
    }

    #[test]
    fn test_alert_leading_digit_label() {
        assert_eq!(
            AlertCategory::TelephoneOutageEmergency911.label(),
            "911 Telephone Outage Emergency"
        );
        assert_eq!(
            AlertCategory::from_label("911 Telephone Outage Emergency"),
            Ok(AlertCategory::TelephoneOutageEmergency911)
        );
    }

    #[test]
    fn test_alert_hyphenated_label() {
        assert_eq!(AlertCategory::EvacuationImmediate.label(), "Evacuation - Immediate");
        assert!(AlertCategory::from_label("Evacuation-Immediate").is_err());
    }

    #[test]
    fn test_alert_test_entry_sits_before_tornado() {
        let all = AlertCategory::all_categories();
        let test = all.iter().position(|c| *c == AlertCategory::Test);
        let tornado = all.iter().position(|c| *c == AlertCategory::TornadoWarning);
        let storm_watch = all.iter().position(|c| *c == AlertCategory::StormWatch);

        assert_eq!(test.zip(tornado).map(|(a, b)| b - a), Some(1));
        assert_eq!(storm_watch.zip(test).map(|(a, b)| b - a), Some(1));
    }

    #[test]
    fn test_alert_serde_uses_label() {
        let json = serde_json::to_string(&vec![
            AlertCategory::SmallCraftAdvisoryForRoughBar,
            AlertCategory::TelephoneOutageEmergency911,
        ])
        .unwrap();
        assert_eq!(
            json,
            r#"["Small Craft Advisory For Rough Bar","911 Telephone Outage Emergency"]"#
        );

        let back: Vec<AlertCategory> = serde_json::from_str(&json).unwrap();
        assert_eq!(
            back,
            vec![
                AlertCategory::SmallCraftAdvisoryForRoughBar,
                AlertCategory::TelephoneOutageEmergency911,
            ]
        );
    }

    #[test]
    fn test_alert_symbol_does_not_deserialize() {
        let parsed = serde_json::from_str::<AlertCategory>(r#""TelephoneOutageEmergency911""#);
        assert!(parsed.is_err());
    }
}
